//! Typed-answer validation.
//!
//! Comparison is relaxed for typed input: Unicode NFC normalization, case
//! folding, whitespace collapsing, and bracketed reading annotations on the
//! expected side (e.g. `猫 [neko]`) are ignored. Multiple-choice answers
//! are compared strictly by the caller and never pass through here.

use unicode_normalization::UnicodeNormalization;

/// Remove bracketed annotation segments (`[...]`) from a text.
pub fn strip_annotations(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  let mut depth = 0usize;
  for c in text.chars() {
    match c {
      '[' => depth += 1,
      ']' => depth = depth.saturating_sub(1),
      _ if depth == 0 => out.push(c),
      _ => {}
    }
  }
  out
}

/// Canonical comparison form: NFC, lowercase, collapsed whitespace.
pub fn normalize_answer(text: &str) -> String {
  let composed: String = text.nfc().collect();
  composed
    .to_lowercase()
    .split_whitespace()
    .collect::<Vec<_>>()
    .join(" ")
}

/// Whether a typed answer matches the expected translation.
pub fn answers_match(input: &str, expected: &str) -> bool {
  let input = normalize_answer(input);
  if input.is_empty() {
    return false;
  }
  input == normalize_answer(expected) || input == normalize_answer(&strip_annotations(expected))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_exact_match() {
    assert!(answers_match("gatto", "gatto"));
  }

  #[test]
  fn test_case_insensitive() {
    assert!(answers_match("Gatto", "gatto"));
    assert!(answers_match("GATTO", "Gatto"));
  }

  #[test]
  fn test_whitespace_trimmed_and_collapsed() {
    assert!(answers_match("  per favore ", "Per favore"));
    assert!(answers_match("per   favore", "per favore"));
  }

  #[test]
  fn test_wrong_answer_rejected() {
    assert!(!answers_match("cane", "gatto"));
  }

  #[test]
  fn test_empty_input_rejected() {
    assert!(!answers_match("", "gatto"));
    assert!(!answers_match("   ", "gatto"));
  }

  #[test]
  fn test_nfc_normalization() {
    // "Caffè" with combining grave accent vs precomposed è
    let decomposed = "Caffe\u{0300}";
    assert!(answers_match(decomposed, "caffè"));
  }

  #[test]
  fn test_reading_annotation_ignored() {
    assert!(answers_match("猫", "猫 [neko]"));
    assert!(answers_match("猫 [neko]", "猫 [neko]"));
  }

  #[test]
  fn test_strip_annotations() {
    assert_eq!(strip_annotations("猫 [neko]").trim(), "猫");
    assert_eq!(strip_annotations("no brackets"), "no brackets");
    assert_eq!(strip_annotations("a [x] b [y]"), "a  b ");
  }

  #[test]
  fn test_strip_annotations_unbalanced() {
    assert_eq!(strip_annotations("oops ] fine"), "oops  fine");
    assert_eq!(strip_annotations("open [ never closed"), "open ");
  }

  #[test]
  fn test_normalize_answer() {
    assert_eq!(normalize_answer("  Buon  Giorno "), "buon giorno");
  }
}
