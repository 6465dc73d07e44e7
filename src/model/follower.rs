// Fri Oct 16 2026 - Alex

use super::handle::normalize_handle;
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single follower as seen in the rendered list.
///
/// Identity is the handle alone. Two entries with the same handle compare
/// equal even when their display names differ.
#[derive(Debug, Clone)]
pub struct FollowerEntry {
    pub display_name: String,
    pub handle: String,
}

impl FollowerEntry {
    pub fn new(display_name: &str, handle: &str) -> Self {
        Self {
            display_name: display_name.trim().to_string(),
            handle: normalize_handle(handle),
        }
    }

    /// Builds an entry from raw extracted text, rejecting rows that are
    /// missing either field or whose name cell actually holds a handle.
    pub fn parse(display_name: &str, handle: &str) -> Option<Self> {
        let entry = Self::new(display_name, handle);
        if entry.display_name.is_empty() || entry.handle.is_empty() {
            return None;
        }
        if entry.display_name.contains('@') {
            return None;
        }
        Some(entry)
    }

    pub fn sort_key(&self) -> (&str, &str) {
        (&self.display_name, &self.handle)
    }
}

impl PartialEq for FollowerEntry {
    fn eq(&self, other: &Self) -> bool {
        self.handle == other.handle
    }
}

impl Eq for FollowerEntry {}

impl Hash for FollowerEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.handle.hash(state);
    }
}

impl fmt::Display for FollowerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (@{})", self.display_name, self.handle)
    }
}

/// Accumulated followers keyed by handle, in discovery order.
///
/// The set only ever grows: once a handle is recorded it stays, and the
/// display name from the first observation is kept.
#[derive(Debug, Clone, Default)]
pub struct FollowerSet {
    entries: IndexMap<String, FollowerEntry>,
}

impl FollowerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the handle was not seen before.
    pub fn insert(&mut self, entry: FollowerEntry) -> bool {
        if self.entries.contains_key(&entry.handle) {
            return false;
        }
        self.entries.insert(entry.handle.clone(), entry);
        true
    }

    /// Merges a batch and returns how many handles were new.
    pub fn merge<I>(&mut self, batch: I) -> usize
    where
        I: IntoIterator<Item = FollowerEntry>,
    {
        batch.into_iter().map(|entry| self.insert(entry)).filter(|&new| new).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, handle: &str) -> Option<&FollowerEntry> {
        self.entries.get(handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FollowerEntry> {
        self.entries.values()
    }

    pub fn handles(&self) -> HashSet<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Entries ordered by `(display_name, handle)` ascending.
    pub fn sorted(&self) -> Vec<FollowerEntry> {
        self.entries
            .values()
            .sorted_by(|a, b| a.sort_key().cmp(&b.sort_key()))
            .cloned()
            .collect()
    }
}

impl FromIterator<FollowerEntry> for FollowerSet {
    fn from_iter<I: IntoIterator<Item = FollowerEntry>>(iter: I) -> Self {
        let mut set = Self::new();
        set.merge(iter);
        set
    }
}
