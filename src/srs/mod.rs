pub mod distractors;
pub mod due;
pub mod selector;
pub mod sm2;

pub use distractors::generate_choices;
pub use due::{due_count, due_records, review_mode_active};
pub use selector::PoolTracker;
pub use sm2::{apply_review, calculate_review, ReviewOutcome};
