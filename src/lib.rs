//! Adaptive vocabulary practice engine.
//!
//! An embedded library for language-learning UIs: tracks per-item recall
//! strength with an SM-2 style model, schedules due reviews, and selects
//! the next item to present with a bias toward weaker items.

pub mod clock;
pub mod config;
pub mod content;
pub mod domain;
pub mod engine;
pub mod srs;
pub mod stats;
pub mod store;
pub mod validation;

pub use clock::{Clock, SystemClock};
pub use content::{Catalog, ContentProvider};
pub use domain::{ContentType, Item, ItemId, ProgressRecord};
pub use engine::{Feedback, PracticeEngine, PracticeMode, Turn};
pub use stats::{CategoryStats, LearningStats};
pub use store::{MemoryStore, ProfileKey, ProgressStore, SqliteStore};
