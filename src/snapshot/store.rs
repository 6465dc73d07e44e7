// Fri Oct 16 2026 - Alex

use super::atomic::write_atomic;
use super::error::{StoreError, StoreResult};
use super::record::{Snapshot, SnapshotRecord};
use crate::config::Config;
use crate::model::FollowerSet;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

const LATEST_FILE: &str = "latest.json";
const HISTORY_PREFIX: &str = "followers_";

/// Durable home of snapshots: an overwritten current file, an overwritten
/// `latest.json` read by the next run, and one history file per save.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    current_file: PathBuf,
    history_dir: PathBuf,
    url_template: String,
}

impl SnapshotStore {
    pub fn new(current_file: PathBuf, history_dir: PathBuf, url_template: &str) -> Self {
        Self {
            current_file,
            history_dir,
            url_template: url_template.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.output_file.clone(),
            config.history_dir.clone(),
            &config.profile_url_template,
        )
    }

    pub fn current_path(&self) -> &Path {
        &self.current_file
    }

    pub fn latest_path(&self) -> PathBuf {
        self.history_dir.join(LATEST_FILE)
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Persists `followers` as the current, latest and a new history record.
    pub fn save(&self, followers: &FollowerSet, owner_handle: &str) -> StoreResult<Snapshot> {
        let snapshot = Snapshot::from_set(owner_handle, followers, &self.url_template);
        self.write(&snapshot)?;
        Ok(snapshot)
    }

    pub fn write(&self, snapshot: &Snapshot) -> StoreResult<PathBuf> {
        info!("Saving progress for {} followers", snapshot.len());

        fs::create_dir_all(&self.history_dir).map_err(|e| StoreError::io(&self.history_dir, e))?;

        let json = serde_json::to_string_pretty(&snapshot.to_record())?;
        let bytes = json.as_bytes();

        write_atomic(&self.current_file, bytes).map_err(|e| StoreError::io(&self.current_file, e))?;

        let latest = self.latest_path();
        write_atomic(&latest, bytes).map_err(|e| StoreError::io(&latest, e))?;

        let history = self.next_history_path(snapshot);
        write_atomic(&history, bytes).map_err(|e| StoreError::io(&history, e))?;

        info!(
            "Data saved to {} and {}",
            self.current_file.display(),
            history.display()
        );
        Ok(history)
    }

    pub fn load_latest(&self) -> StoreResult<Option<Snapshot>> {
        let latest = self.latest_path();
        if !latest.exists() {
            debug!("No latest snapshot at {}", latest.display());
            return Ok(None);
        }
        Self::load(&latest).map(Some)
    }

    pub fn load(path: &Path) -> StoreResult<Snapshot> {
        let contents = fs::read_to_string(path).map_err(|e| StoreError::io(path, e))?;
        let record: SnapshotRecord =
            serde_json::from_str(&contents).map_err(|e| StoreError::Malformed {
                path: path.to_path_buf(),
                source: e,
            })?;
        Snapshot::from_record(record)
    }

    /// History files, oldest first.
    pub fn history(&self) -> StoreResult<Vec<PathBuf>> {
        if !self.history_dir.exists() {
            return Ok(Vec::new());
        }

        let mut files: Vec<PathBuf> = fs::read_dir(&self.history_dir)
            .map_err(|e| StoreError::io(&self.history_dir, e))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| is_history_file(path))
            .collect();
        files.sort_by_cached_key(|path| history_order(path));
        Ok(files)
    }

    fn next_history_path(&self, snapshot: &Snapshot) -> PathBuf {
        let stamp = snapshot.timestamp.format("%Y%m%d_%H%M%S").to_string();
        let base = self.history_dir.join(format!("{}{}.json", HISTORY_PREFIX, stamp));
        if !base.exists() {
            return base;
        }

        (1..)
            .map(|n| self.history_dir.join(format!("{}{}_{}.json", HISTORY_PREFIX, stamp, n)))
            .find(|path| !path.exists())
            .unwrap_or(base)
    }
}

fn is_history_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.starts_with(HISTORY_PREFIX) && n.ends_with(".json"))
        .unwrap_or(false)
}

/// Sort key of a history file: its second-resolution stamp, then the
/// collision suffix (`0` when absent).
fn history_order(path: &Path) -> (String, u64) {
    let stem = path
        .file_stem()
        .and_then(|n| n.to_str())
        .and_then(|n| n.strip_prefix(HISTORY_PREFIX))
        .unwrap_or_default();

    match stem.rsplit_once('_') {
        Some((stamp, suffix)) if stamp.contains('_') => match suffix.parse() {
            Ok(n) => (stamp.to_string(), n),
            Err(_) => (stem.to_string(), 0),
        },
        _ => (stem.to_string(), 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::handle::PROFILE_URL_TEMPLATE;
    use crate::model::FollowerEntry;

    fn store_in(dir: &Path) -> SnapshotStore {
        SnapshotStore::new(
            dir.join("followers_data.json"),
            dir.join("followers_history"),
            PROFILE_URL_TEMPLATE,
        )
    }

    fn sample() -> FollowerSet {
        vec![
            FollowerEntry::new("Carol", "carol"),
            FollowerEntry::new("Alice", "alice"),
            FollowerEntry::new("Bob", "bob"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_first_run_has_no_latest() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert!(store.load_latest().unwrap().is_none());
        assert!(store.history().unwrap().is_empty());
    }

    #[test]
    fn test_save_then_load_latest_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        let saved = store.save(&sample(), "me").unwrap();
        let loaded = store.load_latest().unwrap().unwrap();

        assert_eq!(loaded.owner_handle, "me");
        assert_eq!(loaded.followers(), saved.followers());
        let triples: Vec<_> = loaded
            .followers()
            .iter()
            .map(|f| (f.name.as_str(), f.username.as_str(), f.profile_url.as_str()))
            .collect();
        assert_eq!(
            triples,
            vec![
                ("Alice", "alice", "https://x.com/alice"),
                ("Bob", "bob", "https://x.com/bob"),
                ("Carol", "carol", "https://x.com/carol"),
            ]
        );
    }

    #[test]
    fn test_writes_all_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        store.save(&sample(), "me").unwrap();

        let current: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.current_path()).unwrap()).unwrap();
        assert_eq!(current["username"], "me");
        assert_eq!(current["total_followers"], 3);
        assert_eq!(current["followers"][0]["name"], "Alice");
        assert!(store.latest_path().exists());
        assert_eq!(store.history().unwrap().len(), 1);
    }

    #[test]
    fn test_history_is_never_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());

        store.save(&sample(), "me").unwrap();
        store.save(&sample(), "me").unwrap();
        store.save(&FollowerSet::new(), "me").unwrap();

        let history = store.history().unwrap();
        assert_eq!(history.len(), 3);
        let first = SnapshotStore::load(&history[0]).unwrap();
        assert_eq!(first.len(), 3);
        assert!(store.load_latest().unwrap().unwrap().is_empty());
    }

    #[test]
    fn test_history_orders_same_second_saves_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        let timestamp = chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00+00:00").unwrap();

        let written: Vec<PathBuf> = (0..12)
            .map(|_| {
                let snapshot = Snapshot::at("me", timestamp, &sample(), PROFILE_URL_TEMPLATE);
                store.write(&snapshot).unwrap()
            })
            .collect();

        let history = store.history().unwrap();
        assert_eq!(history, written);
        assert!(history[0].ends_with("followers_20240501_120000.json"));
        assert!(history[11].ends_with("followers_20240501_120000_11.json"));
    }

    #[test]
    fn test_history_order_key() {
        assert_eq!(
            history_order(Path::new("followers_20240501_120000.json")),
            ("20240501_120000".to_string(), 0)
        );
        assert_eq!(
            history_order(Path::new("followers_20240501_120000_10.json")),
            ("20240501_120000".to_string(), 10)
        );
        assert!(
            history_order(Path::new("followers_20240501_120000_2.json"))
                < history_order(Path::new("followers_20240501_120000_10.json"))
        );
    }

    #[test]
    fn test_malformed_latest_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        fs::create_dir_all(dir.path().join("followers_history")).unwrap();
        fs::write(store.latest_path(), "{ half written").unwrap();

        assert!(matches!(store.load_latest(), Err(StoreError::Malformed { .. })));
    }
}
