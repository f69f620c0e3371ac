//! Engine configuration constants and store-path resolution.
//!
//! This module centralizes all tunable values that would otherwise be
//! hardcoded throughout the engine.

use serde::Deserialize;
use std::path::PathBuf;

// ==================== Store Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
  store: Option<StoreConfig>,
}

#[derive(Debug, Deserialize)]
struct StoreConfig {
  path: Option<String>,
}

/// Load progress store path with priority: config.toml > .env > default
pub fn load_store_path() -> PathBuf {
  // Load .env file if present
  let _ = dotenvy::dotenv();

  // Priority 1: config.toml
  if let Ok(contents) = std::fs::read_to_string("config.toml") {
    if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
      if let Some(store) = config.store {
        if let Some(path) = store.path {
          tracing::info!("Using progress store from config.toml: {}", path);
          return PathBuf::from(path);
        }
      }
    }
  }

  // Priority 2: .env STORE_PATH
  if let Ok(path) = std::env::var("STORE_PATH") {
    tracing::info!("Using progress store from STORE_PATH env: {}", path);
    return PathBuf::from(path);
  }

  // Default
  let default = PathBuf::from("data/progress.db");
  tracing::info!("Using default progress store path: {}", default.display());
  default
}

// ==================== Persistence ====================

/// Version stamp written into every persisted snapshot. Snapshots with a
/// different version are discarded on load and the profile reinitialized.
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

// ==================== Mastery ====================

/// Consecutive successful recalls required before an item counts as learned
pub const MASTERY_THRESHOLD: i64 = 3;

// ==================== Quality Mapping ====================

/// Quality recorded for a correct typed or multiple-choice answer
pub const QUALITY_CORRECT: u8 = 4;

/// Quality recorded for an incorrect typed or multiple-choice answer
pub const QUALITY_INCORRECT: u8 = 1;

/// Quality recorded when an item is viewed in learn mode (no answer checked)
pub const QUALITY_SEEN: u8 = 3;

// ==================== Selection Weights ====================

/// Weight for an item with no progress record yet
pub const NEW_ITEM_WEIGHT: f64 = 1.0;

/// Ceiling the ease factor is subtracted from: weight = ceiling - ease,
/// mapping ease 1.3..2.5 onto weight 2.5..1.3 (harder items drawn more)
pub const WEIGHT_CEILING: f64 = 3.8;

/// Floor so no item ever becomes unreachable
pub const MIN_SELECTION_WEIGHT: f64 = 0.5;

// ==================== Study Configuration ====================

/// Number of distractor choices in multiple choice mode
pub const DISTRACTOR_COUNT: usize = 3;

// ==================== Strength Normalization ====================

/// Lower bound of the ease range mapped onto the 0-100 strength scale
pub const STRENGTH_EASE_FLOOR: f64 = 1.3;

/// Width of the ease range mapped onto the 0-100 strength scale
pub const STRENGTH_EASE_RANGE: f64 = 1.2;
