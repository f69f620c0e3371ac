//! Progress persistence.
//!
//! One snapshot per practice profile, keyed by the structured
//! `(content type, from language, to language)` tuple. Stored snapshots are
//! version-stamped and validated on load; a mismatched or malformed
//! snapshot reinitializes the profile instead of crashing.

pub mod sqlite;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config;
use crate::domain::{ContentType, ItemId, ProgressRecord};

pub use sqlite::SqliteStore;

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
  /// Log the error at warn level and return None
  fn log_warn(self, context: &str) -> Option<T>;
  /// Log the error at warn level and return the default
  fn log_warn_default(self, context: &str) -> T
  where
    T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for Result<T, E> {
  fn log_warn(self, context: &str) -> Option<T> {
    match self {
      Ok(v) => Some(v),
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        None
      }
    }
  }

  fn log_warn_default(self, context: &str) -> T
  where
    T: Default,
  {
    match self {
      Ok(v) => v,
      Err(e) => {
        tracing::warn!("{}: {}", context, e);
        T::default()
      }
    }
  }
}

#[derive(Debug)]
pub enum StoreError {
  Sqlite(rusqlite::Error),
  Serialize(serde_json::Error),
}

impl std::fmt::Display for StoreError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Sqlite(e) => write!(f, "progress store unavailable: {}", e),
      Self::Serialize(e) => write!(f, "progress snapshot encoding failed: {}", e),
    }
  }
}

impl std::error::Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
  fn from(e: rusqlite::Error) -> Self {
    Self::Sqlite(e)
  }
}

impl From<serde_json::Error> for StoreError {
  fn from(e: serde_json::Error) -> Self {
    Self::Serialize(e)
  }
}

/// Identity of one practice profile.
///
/// Replaces string-concatenated storage keys with a structured tuple; each
/// profile owns an independent record set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProfileKey {
  pub content_type: ContentType,
  pub from_lang: String,
  pub to_lang: String,
}

impl ProfileKey {
  pub fn new(content_type: ContentType, from_lang: &str, to_lang: &str) -> Self {
    Self {
      content_type,
      from_lang: from_lang.to_string(),
      to_lang: to_lang.to_string(),
    }
  }
}

/// Version-stamped persisted shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressSnapshot {
  pub format_version: u32,
  pub records: Vec<ProgressRecord>,
}

impl ProgressSnapshot {
  pub fn new(records: Vec<ProgressRecord>) -> Self {
    Self {
      format_version: config::SNAPSHOT_FORMAT_VERSION,
      records,
    }
  }

  /// Decode a stored snapshot, reinitializing on version mismatch or parse
  /// failure and repairing records that violate invariants.
  pub fn decode(data: &str) -> Vec<ProgressRecord> {
    let snapshot: ProgressSnapshot = match serde_json::from_str(data) {
      Ok(s) => s,
      Err(e) => {
        tracing::warn!("Discarding malformed progress snapshot: {}", e);
        return Vec::new();
      }
    };
    if snapshot.format_version != config::SNAPSHOT_FORMAT_VERSION {
      tracing::warn!(
        "Discarding progress snapshot with unsupported format version {}",
        snapshot.format_version
      );
      return Vec::new();
    }
    repair_records(snapshot.records)
  }
}

/// Clamp out-of-range values and enforce one record per item id.
fn repair_records(records: Vec<ProgressRecord>) -> Vec<ProgressRecord> {
  let mut by_id: HashMap<ItemId, ProgressRecord> = HashMap::new();
  let mut repaired = 0usize;

  for mut record in records {
    if record.ease_factor < 1.3 {
      record.ease_factor = 1.3;
      repaired += 1;
    }
    if record.repetitions < 0 {
      record.repetitions = 0;
      repaired += 1;
    }
    if by_id.insert(record.item_id.clone(), record).is_some() {
      repaired += 1;
    }
  }

  if repaired > 0 {
    tracing::warn!("Repaired {} invalid progress entries on load", repaired);
  }
  by_id.into_values().collect()
}

/// External persistence boundary for progress records.
///
/// `load` for an unknown profile yields an empty set, not an error; every
/// `save` replaces the profile's snapshot wholesale.
pub trait ProgressStore {
  fn load(&self, profile: &ProfileKey) -> Result<Vec<ProgressRecord>, StoreError>;
  fn save(&mut self, profile: &ProfileKey, records: &[ProgressRecord]) -> Result<(), StoreError>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  profiles: HashMap<ProfileKey, Vec<ProgressRecord>>,
}

impl MemoryStore {
  pub fn new() -> Self {
    Self::default()
  }
}

impl ProgressStore for MemoryStore {
  fn load(&self, profile: &ProfileKey) -> Result<Vec<ProgressRecord>, StoreError> {
    Ok(self.profiles.get(profile).cloned().unwrap_or_default())
  }

  fn save(&mut self, profile: &ProfileKey, records: &[ProgressRecord]) -> Result<(), StoreError> {
    self.profiles.insert(profile.clone(), records.to_vec());
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Item;
  use chrono::{TimeZone, Utc};

  fn record(english: &str) -> ProgressRecord {
    let item = Item::new(ContentType::Vocabulary, "Food", &[("english", english)]);
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    ProgressRecord::new(item.id, "Food", now)
  }

  #[test]
  fn test_memory_store_roundtrip() {
    let mut store = MemoryStore::new();
    let profile = ProfileKey::new(ContentType::Vocabulary, "english", "italian");
    let records = vec![record("Water"), record("Bread")];

    store.save(&profile, &records).unwrap();
    let loaded = store.load(&profile).unwrap();
    assert_eq!(loaded.len(), 2);
  }

  #[test]
  fn test_memory_store_unknown_profile_is_empty() {
    let store = MemoryStore::new();
    let profile = ProfileKey::new(ContentType::Phrases, "english", "czech");
    assert!(store.load(&profile).unwrap().is_empty());
  }

  #[test]
  fn test_memory_store_profiles_are_isolated() {
    let mut store = MemoryStore::new();
    let italian = ProfileKey::new(ContentType::Vocabulary, "english", "italian");
    let spanish = ProfileKey::new(ContentType::Vocabulary, "english", "spanish");

    store.save(&italian, &[record("Water")]).unwrap();
    assert!(store.load(&spanish).unwrap().is_empty());
    assert_eq!(store.load(&italian).unwrap().len(), 1);
  }

  #[test]
  fn test_snapshot_decode_roundtrip() {
    let snapshot = ProgressSnapshot::new(vec![record("Water")]);
    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded = ProgressSnapshot::decode(&json);
    assert_eq!(decoded.len(), 1);
  }

  #[test]
  fn test_snapshot_decode_malformed_is_empty() {
    assert!(ProgressSnapshot::decode("not json").is_empty());
    assert!(ProgressSnapshot::decode("{\"records\": 3}").is_empty());
  }

  #[test]
  fn test_snapshot_decode_wrong_version_is_empty() {
    let mut snapshot = ProgressSnapshot::new(vec![record("Water")]);
    snapshot.format_version = 99;
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(ProgressSnapshot::decode(&json).is_empty());
  }

  #[test]
  fn test_decode_repairs_invariant_violations() {
    let mut bad = record("Water");
    bad.ease_factor = 0.4;
    bad.repetitions = -2;
    let json = serde_json::to_string(&ProgressSnapshot::new(vec![bad])).unwrap();

    let decoded = ProgressSnapshot::decode(&json);
    assert_eq!(decoded.len(), 1);
    assert!((decoded[0].ease_factor - 1.3).abs() < f64::EPSILON);
    assert_eq!(decoded[0].repetitions, 0);
  }

  #[test]
  fn test_decode_deduplicates_item_ids() {
    let a = record("Water");
    let b = a.clone();
    let json = serde_json::to_string(&ProgressSnapshot::new(vec![a, b])).unwrap();
    assert_eq!(ProgressSnapshot::decode(&json).len(), 1);
  }
}
