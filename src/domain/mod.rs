pub mod item;
pub mod progress;

pub use item::{ContentType, Item, ItemId};
pub use progress::ProgressRecord;
