use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::domain::ItemId;

/// Default ease factor for a freshly created record
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;

/// Per-item learning state for one practice profile.
///
/// Created lazily on the first recorded attempt, mutated on every attempt
/// after that, and deleted only by an explicit reset. Invariants held after
/// every update: `ease_factor >= 1.3`, `repetitions >= 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressRecord {
  pub item_id: ItemId,
  /// Copied from the item at creation time, not re-synced afterwards
  pub category: String,
  /// Inverse difficulty: higher = easier for this learner
  pub ease_factor: f64,
  /// Consecutive successful recalls since the last failure
  pub repetitions: i64,
  pub interval_days: i64,
  pub next_review: DateTime<Utc>,
}

impl ProgressRecord {
  pub fn new(item_id: ItemId, category: &str, now: DateTime<Utc>) -> Self {
    Self {
      item_id,
      category: category.to_string(),
      ease_factor: DEFAULT_EASE_FACTOR,
      repetitions: 0,
      interval_days: 0,
      next_review: now,
    }
  }

  /// True once the streak has reached the mastery threshold.
  pub fn is_learned(&self) -> bool {
    self.repetitions >= config::MASTERY_THRESHOLD
  }

  pub fn is_due(&self, now: DateTime<Utc>) -> bool {
    self.next_review <= now
  }

  /// Recall strength on a 0-100 scale, normalized from the ease factor.
  ///
  /// The raw formula maps ease 1.3..2.5 onto 0..100 and can exceed 100 once
  /// ease grows past 2.5; the display range is clamped.
  pub fn strength(&self) -> i64 {
    let raw = ((self.ease_factor - config::STRENGTH_EASE_FLOOR) / config::STRENGTH_EASE_RANGE
      * 100.0)
      .round() as i64;
    raw.clamp(0, 100)
  }
}
