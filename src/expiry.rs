//! Purchase Expiry Policy
//!
//! Checked-off items stay in the list for a fixed retention window, then
//! get deleted from the collection. Expiry is computed from `checkedAt`
//! at read time: the sweep runs over every incoming snapshot, and a
//! single timer wakes up for the earliest pending deadline so quiet
//! subscriptions still converge.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};

use crate::models::GroceryItem;

/// How long a checked-off item stays in the list
pub const RETENTION_WINDOW_MS: i64 = 120_000;

pub fn retention_window() -> Duration {
    Duration::milliseconds(RETENTION_WINDOW_MS)
}

/// True when `item` was checked off longer than the retention window ago
pub fn is_expired(item: &GroceryItem, now: DateTime<Utc>) -> bool {
    match (item.purchased, item.checked_at) {
        (true, Some(checked_at)) => now - checked_at > retention_window(),
        _ => false,
    }
}

/// Earliest future instant at which some item in `items` expires
pub fn next_deadline(items: &[GroceryItem], now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    items
        .iter()
        .filter(|item| item.purchased)
        .filter_map(|item| item.checked_at)
        .map(|checked_at| checked_at + retention_window())
        .filter(|deadline| *deadline > now)
        .min()
}

/// Side table of ids with a delete request already in flight.
///
/// Overlapping sweep passes (consecutive snapshots, timer firings) must
/// not reissue a delete for the same item; the backend's delete is not
/// assumed idempotent. An entry is forgotten once its item leaves the
/// list or is unchecked, so a later re-check expires normally.
#[derive(Debug, Default)]
pub struct ExpirySweep {
    pending: HashSet<String>,
}

impl ExpirySweep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect ids due for deletion in this pass.
    ///
    /// Each id is returned at most once per pending-expiry episode, even
    /// when the item keeps showing up expired in later snapshots.
    pub fn collect_expired(&mut self, items: &[GroceryItem], now: DateTime<Utc>) -> Vec<String> {
        self.pending.retain(|id| {
            items
                .iter()
                .any(|item| item.id == *id && item.purchased && item.checked_at.is_some())
        });

        let mut due = Vec::new();
        for item in items {
            if is_expired(item, now) && self.pending.insert(item.id.clone()) {
                due.push(item.id.clone());
            }
        }
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn item(id: &str, purchased: bool, checked_at: Option<DateTime<Utc>>) -> GroceryItem {
        GroceryItem {
            id: id.to_string(),
            name: id.to_string(),
            quantity: 1,
            purchased,
            checked_at,
            created_at: at(0),
        }
    }

    #[test]
    fn test_expires_only_past_the_window() {
        let checked = item("a", true, Some(at(0)));
        // Exactly 120s elapsed is not yet past the window
        assert!(!is_expired(&checked, at(120)));
        assert!(is_expired(
            &checked,
            at(120) + Duration::milliseconds(1)
        ));
    }

    #[test]
    fn test_unchecked_item_never_expires() {
        let unchecked = item("a", false, None);
        assert!(!is_expired(&unchecked, at(10_000)));

        // Stale checkedAt without the purchased flag does not count
        let stale = item("b", false, Some(at(0)));
        assert!(!is_expired(&stale, at(10_000)));
    }

    #[test]
    fn test_sweep_issues_each_delete_once() {
        let mut sweep = ExpirySweep::new();
        let items = vec![item("a", true, Some(at(0))), item("b", false, None)];

        let due = sweep.collect_expired(&items, at(121));
        assert_eq!(due, vec!["a".to_string()]);

        // Same expired item in the next snapshot: no duplicate delete
        let due = sweep.collect_expired(&items, at(122));
        assert!(due.is_empty());
    }

    #[test]
    fn test_sweep_forgets_an_id_once_the_item_is_gone() {
        let mut sweep = ExpirySweep::new();
        let items = vec![item("a", true, Some(at(0)))];

        assert_eq!(sweep.collect_expired(&items, at(121)).len(), 1);

        // Backend removed it; the snapshot no longer carries the id
        assert!(sweep.collect_expired(&[], at(122)).is_empty());

        // A new episode for the same id expires again
        let again = vec![item("a", true, Some(at(200)))];
        assert_eq!(sweep.collect_expired(&again, at(321)).len(), 1);
    }

    #[test]
    fn test_unchecking_clears_the_pending_entry() {
        let mut sweep = ExpirySweep::new();
        let checked = vec![item("a", true, Some(at(0)))];
        assert_eq!(sweep.collect_expired(&checked, at(121)).len(), 1);

        // User unchecked before the backend removed it
        let unchecked = vec![item("a", false, None)];
        assert!(sweep.collect_expired(&unchecked, at(122)).is_empty());

        // Re-checked later: a fresh delete is allowed after the new deadline
        let rechecked = vec![item("a", true, Some(at(130)))];
        assert!(sweep.collect_expired(&rechecked, at(140)).is_empty());
        assert_eq!(sweep.collect_expired(&rechecked, at(251)).len(), 1);
    }

    #[test]
    fn test_next_deadline_picks_the_earliest_pending_item() {
        let items = vec![
            item("a", true, Some(at(50))),
            item("b", true, Some(at(10))),
            item("c", false, None),
        ];

        assert_eq!(next_deadline(&items, at(60)), Some(at(130)));

        // Deadlines already in the past are the sweep's job, not the timer's
        assert_eq!(next_deadline(&items, at(135)), Some(at(170)));
        assert_eq!(next_deadline(&items, at(200)), None);
    }

    #[test]
    fn test_next_deadline_is_none_without_checked_items() {
        assert_eq!(next_deadline(&[], at(0)), None);

        let items = vec![item("a", false, None)];
        assert_eq!(next_deadline(&items, at(0)), None);
    }
}
