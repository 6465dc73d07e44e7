// Fri Oct 16 2026 - Alex

use super::error::{StoreError, StoreResult};
use crate::model::{profile_url, FollowerEntry, FollowerSet};
use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, SecondsFormat, TimeZone};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// On-disk shape of one follower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowerRecord {
    pub name: String,
    pub username: String,
    pub profile_url: String,
}

impl FollowerRecord {
    pub fn to_entry(&self) -> FollowerEntry {
        FollowerEntry::new(&self.name, &self.username)
    }
}

/// On-disk shape of a snapshot file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub username: String,
    pub timestamp: String,
    pub total_followers: usize,
    pub followers: Vec<FollowerRecord>,
}

/// Follower set of one completed collection, ordered by `(name, username)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub owner_handle: String,
    pub timestamp: DateTime<FixedOffset>,
    followers: Vec<FollowerRecord>,
}

impl Snapshot {
    pub fn from_set(owner_handle: &str, followers: &FollowerSet, url_template: &str) -> Self {
        Self::at(owner_handle, Local::now().fixed_offset(), followers, url_template)
    }

    pub fn at(
        owner_handle: &str,
        timestamp: DateTime<FixedOffset>,
        followers: &FollowerSet,
        url_template: &str,
    ) -> Self {
        let followers = followers
            .sorted()
            .into_iter()
            .map(|entry| FollowerRecord {
                profile_url: profile_url(url_template, &entry.handle),
                name: entry.display_name,
                username: entry.handle,
            })
            .collect();

        Self {
            owner_handle: owner_handle.to_string(),
            timestamp,
            followers,
        }
    }

    pub fn followers(&self) -> &[FollowerRecord] {
        &self.followers
    }

    pub fn len(&self) -> usize {
        self.followers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.followers.is_empty()
    }

    pub fn handles(&self) -> HashSet<&str> {
        self.followers.iter().map(|f| f.username.as_str()).collect()
    }

    pub fn entries(&self) -> impl Iterator<Item = FollowerEntry> + '_ {
        self.followers.iter().map(FollowerRecord::to_entry)
    }

    pub fn to_record(&self) -> SnapshotRecord {
        SnapshotRecord {
            username: self.owner_handle.clone(),
            timestamp: self.timestamp.to_rfc3339_opts(SecondsFormat::Micros, false),
            total_followers: self.followers.len(),
            followers: self.followers.clone(),
        }
    }

    /// Rebuilds a snapshot from its file form. Duplicate handles keep their
    /// first occurrence and the order is re-established.
    pub fn from_record(record: SnapshotRecord) -> StoreResult<Self> {
        let timestamp = parse_timestamp(&record.timestamp)?;

        let mut seen = HashSet::new();
        let mut followers: Vec<FollowerRecord> = record
            .followers
            .into_iter()
            .filter(|f| seen.insert(f.username.clone()))
            .collect();
        if followers.len() != record.total_followers {
            warn!(
                "Snapshot for {} declares {} followers but holds {} unique handles",
                record.username,
                record.total_followers,
                followers.len()
            );
        }
        followers.sort_by(|a, b| (&a.name, &a.username).cmp(&(&b.name, &b.username)));

        Ok(Self {
            owner_handle: record.username,
            timestamp,
            followers,
        })
    }
}

/// Accepts RFC 3339 and offset-less ISO-8601 stamps, the latter read as
/// local time.
pub fn parse_timestamp(raw: &str) -> StoreResult<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(ts);
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| StoreError::InvalidTimestamp(raw.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|ts| ts.fixed_offset())
        .ok_or_else(|| StoreError::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::handle::PROFILE_URL_TEMPLATE;

    #[test]
    fn test_record_is_sorted_with_urls() {
        let set: FollowerSet = vec![FollowerEntry::new("Bob", "bob"), FollowerEntry::new("Alice", "alice")]
            .into_iter()
            .collect();
        let record = Snapshot::from_set("me", &set, PROFILE_URL_TEMPLATE).to_record();

        assert_eq!(record.username, "me");
        assert_eq!(record.total_followers, 2);
        assert_eq!(record.followers[0].username, "alice");
        assert_eq!(record.followers[0].profile_url, "https://x.com/alice");
    }

    #[test]
    fn test_from_record_dedups_and_sorts() {
        let record = SnapshotRecord {
            username: "me".to_string(),
            timestamp: "2024-05-01T10:20:30.123456".to_string(),
            total_followers: 3,
            followers: vec![
                FollowerRecord { name: "Zed".into(), username: "z".into(), profile_url: "u1".into() },
                FollowerRecord { name: "Amy".into(), username: "a".into(), profile_url: "u2".into() },
                FollowerRecord { name: "Amy 2".into(), username: "a".into(), profile_url: "u3".into() },
            ],
        };

        let snapshot = Snapshot::from_record(record).unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.followers()[0].username, "a");
        assert_eq!(snapshot.followers()[0].profile_url, "u2");
    }

    #[test]
    fn test_parse_timestamp_forms() {
        assert!(parse_timestamp("2024-05-01T10:20:30+02:00").is_ok());
        assert!(parse_timestamp("2024-05-01T10:20:30.5").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }
}
