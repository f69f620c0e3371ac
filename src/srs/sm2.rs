//! SM-2 style recall model.
//!
//! Pure functions over explicit inputs; "now" is injected so scheduling
//! math stays deterministic under test.

use chrono::{DateTime, Duration, Utc};

use crate::domain::ProgressRecord;

const MIN_EASE_FACTOR: f64 = 1.3;

/// Fixed ease penalty applied on a failed recall
const FAILURE_EASE_PENALTY: f64 = 0.2;

/// Quality at or above this counts as a successful recall
const PASS_QUALITY: u8 = 3;

pub struct ReviewOutcome {
  pub ease_factor: f64,
  pub interval_days: i64,
  pub repetitions: i64,
  pub next_review: DateTime<Utc>,
}

/// Apply one review at the given quality.
///
/// `quality` is expected in 0..=5; out-of-range values are a caller error
/// and are not validated here.
pub fn calculate_review(
  quality: u8,
  current_ease_factor: f64,
  current_interval: i64,
  current_repetitions: i64,
  now: DateTime<Utc>,
) -> ReviewOutcome {
  if quality < PASS_QUALITY {
    // Failed recall: streak resets, fixed ease penalty
    let ease_factor = (current_ease_factor - FAILURE_EASE_PENALTY).max(MIN_EASE_FACTOR);
    return ReviewOutcome {
      ease_factor,
      interval_days: 1,
      repetitions: 0,
      next_review: now + Duration::days(1),
    };
  }

  // Successful recall
  // EF' = EF + (0.1 - (5 - q) * (0.08 + (5 - q) * 0.02))
  let q = quality as f64;
  let ease_delta = 0.1 - (5.0 - q) * (0.08 + (5.0 - q) * 0.02);
  let ease_factor = (current_ease_factor + ease_delta).max(MIN_EASE_FACTOR);

  let repetitions = current_repetitions + 1;
  let interval_days = match repetitions {
    1 => 1,
    2 => 6,
    _ => ((current_interval as f64) * ease_factor).round() as i64,
  }
  .max(1);

  ReviewOutcome {
    ease_factor,
    interval_days,
    repetitions,
    next_review: now + Duration::days(interval_days),
  }
}

/// Pure record transform: existing record + quality -> updated record.
pub fn apply_review(record: &ProgressRecord, quality: u8, now: DateTime<Utc>) -> ProgressRecord {
  let outcome = calculate_review(
    quality,
    record.ease_factor,
    record.interval_days,
    record.repetitions,
    now,
  );
  ProgressRecord {
    ease_factor: outcome.ease_factor,
    interval_days: outcome.interval_days,
    repetitions: outcome.repetitions,
    next_review: outcome.next_review,
    ..record.clone()
  }
}
