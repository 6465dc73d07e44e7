// Fri Oct 16 2026 - Alex

use crate::model::FollowerEntry;
use crate::snapshot::Snapshot;
use std::collections::HashSet;
use std::fmt;

/// Direction of the net change between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetChange {
    Gain,
    Loss,
    None,
}

impl fmt::Display for NetChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetChange::Gain => write!(f, "gain"),
            NetChange::Loss => write!(f, "loss"),
            NetChange::None => write!(f, "none"),
        }
    }
}

/// Membership delta between two snapshots, by handle.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffResult {
    pub added: Vec<FollowerEntry>,
    pub removed: Vec<FollowerEntry>,
    pub added_count: usize,
    pub removed_count: usize,
}

impl DiffResult {
    pub fn net_change(&self) -> i64 {
        self.added_count as i64 - self.removed_count as i64
    }

    pub fn classification(&self) -> NetChange {
        match self.added_count.cmp(&self.removed_count) {
            std::cmp::Ordering::Greater => NetChange::Gain,
            std::cmp::Ordering::Less => NetChange::Loss,
            std::cmp::Ordering::Equal => NetChange::None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.added_count == 0 && self.removed_count == 0
    }
}

/// Compares `current` against `previous`.
///
/// Returns `None` when there is no previous snapshot, which is not the same
/// as an empty diff. Display names play no part: a follower who renamed
/// themselves is neither added nor removed.
pub fn diff(previous: Option<&Snapshot>, current: &Snapshot) -> Option<DiffResult> {
    let previous = previous?;

    let before = previous.handles();
    let after = current.handles();

    let removed = materialize(previous, &before, &after);
    let added = materialize(current, &after, &before);

    Some(DiffResult {
        added_count: added.len(),
        removed_count: removed.len(),
        added,
        removed,
    })
}

/// Entries of `source` whose handle is in `keep` but not in `exclude`,
/// in the snapshot's own `(name, handle)` order.
fn materialize(source: &Snapshot, keep: &HashSet<&str>, exclude: &HashSet<&str>) -> Vec<FollowerEntry> {
    source
        .entries()
        .filter(|entry| keep.contains(entry.handle.as_str()) && !exclude.contains(entry.handle.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::handle::PROFILE_URL_TEMPLATE;
    use crate::model::FollowerSet;

    fn snapshot(entries: &[(&str, &str)]) -> Snapshot {
        let set: FollowerSet = entries
            .iter()
            .map(|(name, handle)| FollowerEntry::new(name, handle))
            .collect();
        Snapshot::from_set("me", &set, PROFILE_URL_TEMPLATE)
    }

    #[test]
    fn test_diff_exactness() {
        let previous = snapshot(&[("A", "a"), ("B", "b"), ("C", "c")]);
        let current = snapshot(&[("B", "b"), ("C", "c"), ("D", "d")]);

        let result = diff(Some(&previous), &current).unwrap();
        assert_eq!(result.added_count, 1);
        assert_eq!(result.removed_count, 1);
        assert_eq!(result.added[0].handle, "d");
        assert_eq!(result.removed[0].handle, "a");
        assert_eq!(result.classification(), NetChange::None);
        assert_eq!(result.net_change(), 0);
    }

    #[test]
    fn test_absent_previous_is_not_empty_diff() {
        let current = snapshot(&[("A", "a")]);
        assert!(diff(None, &current).is_none());

        let same = diff(Some(&current), &current).unwrap();
        assert!(same.is_empty());
        assert_eq!(same.classification(), NetChange::None);
    }

    #[test]
    fn test_rename_is_invisible() {
        let previous = snapshot(&[("Alice", "alice")]);
        let current = snapshot(&[("Alice Cooper", "alice")]);
        assert!(diff(Some(&previous), &current).unwrap().is_empty());
    }

    #[test]
    fn test_classification_and_materialized_records() {
        let previous = snapshot(&[("A", "a")]);
        let current = snapshot(&[("A", "a"), ("Zoe", "zoe"), ("Bea", "bea")]);

        let result = diff(Some(&previous), &current).unwrap();
        assert_eq!(result.classification(), NetChange::Gain);
        assert_eq!(result.net_change(), 2);
        let names: Vec<_> = result.added.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(names, vec!["Bea", "Zoe"]);

        let reverse = diff(Some(&current), &previous).unwrap();
        assert_eq!(reverse.classification(), NetChange::Loss);
        assert_eq!(reverse.removed_count, 2);
    }

    #[test]
    fn test_diff_is_idempotent() {
        let previous = snapshot(&[("A", "a"), ("B", "b")]);
        let current = snapshot(&[("B", "b"), ("C", "c")]);
        assert_eq!(diff(Some(&previous), &current), diff(Some(&previous), &current));
    }
}
