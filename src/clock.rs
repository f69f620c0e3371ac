//! Injectable clock for deterministic scheduling math.
//!
//! The recall model and due-set calculator take "now" from a `Clock`
//! rather than calling `Utc::now()` inline, so tests can pin time.

use chrono::{DateTime, Utc};

pub trait Clock {
  fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}

/// Test clock that returns a fixed instant until advanced.
#[derive(Debug, Clone)]
pub struct FixedClock {
  now: std::cell::Cell<DateTime<Utc>>,
}

impl FixedClock {
  pub fn new(now: DateTime<Utc>) -> Self {
    Self {
      now: std::cell::Cell::new(now),
    }
  }

  pub fn set(&self, now: DateTime<Utc>) {
    self.now.set(now);
  }

  pub fn advance(&self, delta: chrono::Duration) {
    self.now.set(self.now.get() + delta);
  }
}

impl Clock for FixedClock {
  fn now(&self) -> DateTime<Utc> {
    self.now.get()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};

  #[test]
  fn test_fixed_clock_holds_instant() {
    let t0 = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let clock = FixedClock::new(t0);
    assert_eq!(clock.now(), t0);
    assert_eq!(clock.now(), t0);
  }

  #[test]
  fn test_fixed_clock_advance() {
    let t0 = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    let clock = FixedClock::new(t0);
    clock.advance(Duration::days(2));
    assert_eq!(clock.now(), t0 + Duration::days(2));
  }

  #[test]
  fn test_system_clock_is_monotonic_enough() {
    let clock = SystemClock;
    let a = clock.now();
    let b = clock.now();
    assert!(b >= a);
  }
}
