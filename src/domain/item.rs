use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
  Vocabulary,
  Phrases,
}

impl ContentType {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "vocabulary" => Some(Self::Vocabulary),
      "phrases" => Some(Self::Phrases),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Vocabulary => "vocabulary",
      Self::Phrases => "phrases",
    }
  }
}

/// Stable synthetic item identity, assigned at the content-provider boundary.
///
/// Progress records key on this id rather than on surface text, so two items
/// that share source-language text and category remain distinguishable as
/// long as any translation differs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(String);

impl ItemId {
  /// Compute the id as a content hash over the item's full identity.
  ///
  /// SHA256 of `content_type:category:lang=text:...` with translations in
  /// key order; first 16 bytes (32 hex chars) for practical uniqueness.
  pub fn from_content(
    content_type: ContentType,
    category: &str,
    translations: &BTreeMap<String, String>,
  ) -> Self {
    let mut hasher = Sha256::new();
    hasher.update(content_type.as_str().as_bytes());
    hasher.update(b":");
    hasher.update(category.as_bytes());
    for (lang, text) in translations {
      hasher.update(b":");
      hasher.update(lang.as_bytes());
      hasher.update(b"=");
      hasher.update(text.as_bytes());
    }
    let hash = hasher.finalize();
    Self(hex::encode(&hash[..16]))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl std::fmt::Display for ItemId {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(&self.0)
  }
}

/// A vocabulary word or phrase, read-only to the engine.
///
/// Translations are keyed by language code (`"english"`, `"italian"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
  pub id: ItemId,
  pub category: String,
  pub translations: BTreeMap<String, String>,
}

impl Item {
  pub fn new(content_type: ContentType, category: &str, entries: &[(&str, &str)]) -> Self {
    let translations: BTreeMap<String, String> = entries
      .iter()
      .map(|(lang, text)| (lang.to_string(), text.to_string()))
      .collect();
    let id = ItemId::from_content(content_type, category, &translations);
    Self {
      id,
      category: category.to_string(),
      translations,
    }
  }

  /// Text of this item in the given language, if present.
  pub fn text(&self, language: &str) -> Option<&str> {
    self.translations.get(language).map(String::as_str)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn item(category: &str, english: &str, italian: &str) -> Item {
    Item::new(
      ContentType::Vocabulary,
      category,
      &[("english", english), ("italian", italian)],
    )
  }

  #[test]
  fn test_content_type_roundtrip() {
    for ct in [ContentType::Vocabulary, ContentType::Phrases] {
      assert_eq!(ContentType::from_str(ct.as_str()), Some(ct));
    }
  }

  #[test]
  fn test_content_type_from_str_invalid() {
    assert_eq!(ContentType::from_str("grammar"), None);
    assert_eq!(ContentType::from_str(""), None);
  }

  #[test]
  fn test_item_id_is_stable() {
    let a = item("Food", "Water", "Acqua");
    let b = item("Food", "Water", "Acqua");
    assert_eq!(a.id, b.id);
  }

  #[test]
  fn test_item_id_distinguishes_homographs() {
    // Same source text and category, different translation
    let a = item("Common", "Light", "Luce");
    let b = item("Common", "Light", "Leggero");
    assert_ne!(a.id, b.id);
  }

  #[test]
  fn test_item_id_depends_on_category() {
    let a = item("Food", "Water", "Acqua");
    let b = item("Nature", "Water", "Acqua");
    assert_ne!(a.id, b.id);
  }

  #[test]
  fn test_item_id_depends_on_content_type() {
    let translations: BTreeMap<String, String> =
      [("english".to_string(), "Hello".to_string())].into();
    let a = ItemId::from_content(ContentType::Vocabulary, "Greetings", &translations);
    let b = ItemId::from_content(ContentType::Phrases, "Greetings", &translations);
    assert_ne!(a, b);
  }

  #[test]
  fn test_item_id_is_32_hex_chars() {
    let a = item("Food", "Bread", "Pane");
    assert_eq!(a.id.as_str().len(), 32);
    assert!(a.id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
  }

  #[test]
  fn test_item_text_lookup() {
    let a = item("Food", "Wine", "Vino");
    assert_eq!(a.text("english"), Some("Wine"));
    assert_eq!(a.text("italian"), Some("Vino"));
    assert_eq!(a.text("japanese"), None);
  }
}
