//! Content boundary: read-only item catalogs.
//!
//! Synthetic item ids are assigned here, at the provider boundary, so the
//! engine never keys progress on surface text.

pub mod seed;

use crate::domain::{ContentType, Item};

/// Read-only source of practice items.
pub trait ContentProvider {
  fn items(&self, content_type: ContentType) -> &[Item];
}

/// In-memory catalog of vocabulary and phrases.
pub struct Catalog {
  vocabulary: Vec<Item>,
  phrases: Vec<Item>,
}

impl Catalog {
  pub fn new(vocabulary: Vec<Item>, phrases: Vec<Item>) -> Self {
    Self {
      vocabulary,
      phrases,
    }
  }

  /// Catalog seeded with the built-in vocabulary and phrase tables.
  pub fn builtin() -> Self {
    Self::new(seed::vocabulary_items(), seed::phrase_items())
  }

  /// Distinct categories for a content type, in first-seen order.
  pub fn categories(&self, content_type: ContentType) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in self.items(content_type) {
      if !categories.contains(&item.category) {
        categories.push(item.category.clone());
      }
    }
    categories
  }
}

impl ContentProvider for Catalog {
  fn items(&self, content_type: ContentType) -> &[Item] {
    match content_type {
      ContentType::Vocabulary => &self.vocabulary,
      ContentType::Phrases => &self.phrases,
    }
  }
}
