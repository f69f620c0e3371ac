//! Learning statistics derived from the progress record set.
//!
//! All views are recomputed on demand; nothing is cached or stored.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

use crate::config;
use crate::domain::progress::DEFAULT_EASE_FACTOR;
use crate::domain::{ItemId, ProgressRecord};
use crate::srs::due_count;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LearningStats {
  pub total: usize,
  /// Items at or past the mastery threshold (repetitions >= 3)
  pub learned: usize,
  /// Items started but not yet mastered (0 < repetitions < 3)
  pub learning: usize,
  /// Items never successfully recalled (repetitions == 0)
  pub new_items: usize,
  /// round(100 * learned / total), 0 for an empty record set
  pub mastery_percentage: i64,
  pub avg_ease_factor: f64,
  /// Records due for review at the query instant
  pub due_now: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
  pub category: String,
  pub stats: LearningStats,
  /// Average recall strength on a 0-100 scale, clamped
  pub avg_strength: i64,
}

fn stats_over<'a, I>(records: I, due_now: usize) -> LearningStats
where
  I: Iterator<Item = &'a ProgressRecord>,
{
  let mut total = 0usize;
  let mut learned = 0usize;
  let mut learning = 0usize;
  let mut new_items = 0usize;
  let mut ease_sum = 0.0f64;

  for record in records {
    total += 1;
    ease_sum += record.ease_factor;
    if record.repetitions >= config::MASTERY_THRESHOLD {
      learned += 1;
    } else if record.repetitions > 0 {
      learning += 1;
    } else {
      new_items += 1;
    }
  }

  let mastery_percentage = if total == 0 {
    0
  } else {
    (learned as f64 * 100.0 / total as f64).round() as i64
  };
  let avg_ease_factor = if total == 0 {
    DEFAULT_EASE_FACTOR
  } else {
    ease_sum / total as f64
  };

  LearningStats {
    total,
    learned,
    learning,
    new_items,
    mastery_percentage,
    avg_ease_factor,
    due_now,
  }
}

/// Summary counts over the whole record set.
pub fn learning_stats(
  records: &HashMap<ItemId, ProgressRecord>,
  now: DateTime<Utc>,
) -> LearningStats {
  stats_over(records.values(), due_count(records, now))
}

/// Summary counts restricted to one category, plus normalized strength.
pub fn category_stats(
  records: &HashMap<ItemId, ProgressRecord>,
  category: &str,
  now: DateTime<Utc>,
) -> CategoryStats {
  let filtered: Vec<&ProgressRecord> = records
    .values()
    .filter(|r| r.category == category)
    .collect();
  let due_now = filtered.iter().filter(|r| r.is_due(now)).count();
  let stats = stats_over(filtered.into_iter(), due_now);

  let avg_strength = if stats.total == 0 {
    0
  } else {
    // Same normalization as ProgressRecord::strength; the raw formula can
    // exceed 100 when ease grows past 2.5, so the display range is clamped
    let raw = ((stats.avg_ease_factor - config::STRENGTH_EASE_FLOOR)
      / config::STRENGTH_EASE_RANGE
      * 100.0)
      .round() as i64;
    raw.clamp(0, 100)
  };

  CategoryStats {
    category: category.to_string(),
    stats,
    avg_strength,
  }
}
