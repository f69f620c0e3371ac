//! Due-set calculation.
//!
//! Review mode is a derived boolean, recomputed from the record set on
//! every query; nothing here is cached.

use chrono::{DateTime, Utc};

use crate::domain::{ItemId, ProgressRecord};
use std::collections::HashMap;

/// Records due at `now`, earliest first.
///
/// Ordered ascending by `next_review`, ties broken by item id so the
/// ordering is deterministic regardless of map iteration order.
pub fn due_records(
  records: &HashMap<ItemId, ProgressRecord>,
  now: DateTime<Utc>,
) -> Vec<&ProgressRecord> {
  let mut due: Vec<&ProgressRecord> = records.values().filter(|r| r.is_due(now)).collect();
  due.sort_by(|a, b| {
    a.next_review
      .cmp(&b.next_review)
      .then_with(|| a.item_id.cmp(&b.item_id))
  });
  due
}

pub fn due_count(records: &HashMap<ItemId, ProgressRecord>, now: DateTime<Utc>) -> usize {
  records.values().filter(|r| r.is_due(now)).count()
}

/// Review mode is active precisely when something is due.
pub fn review_mode_active(records: &HashMap<ItemId, ProgressRecord>, now: DateTime<Utc>) -> bool {
  records.values().any(|r| r.is_due(now))
}
