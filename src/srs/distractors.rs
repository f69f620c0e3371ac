//! Multiple-choice distractor generation.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;

use crate::config;
use crate::domain::Item;

/// Build the shuffled option list for a multiple-choice turn.
///
/// Draws up to `DISTRACTOR_COUNT` distinct wrong answers from `pool` by
/// rejection sampling, skipping any draw whose target-language text equals
/// the correct answer (duplicate translations across items) or was already
/// chosen. Fewer distractors than requested is fine; the correct answer is
/// always present exactly once. `pool` must not contain the correct item.
pub fn generate_choices<R: Rng + ?Sized>(
  correct_answer: &str,
  pool: &[Item],
  to_language: &str,
  rng: &mut R,
) -> Vec<String> {
  let mut distractors: Vec<String> = Vec::new();
  let mut used_indices: HashSet<usize> = HashSet::new();

  while distractors.len() < config::DISTRACTOR_COUNT && used_indices.len() < pool.len() {
    let index = rng.random_range(0..pool.len());
    if !used_indices.insert(index) {
      continue;
    }
    let Some(text) = pool[index].text(to_language) else {
      continue;
    };
    if text != correct_answer && !distractors.iter().any(|d| d == text) {
      distractors.push(text.to_string());
    }
  }

  let mut options = Vec::with_capacity(distractors.len() + 1);
  options.push(correct_answer.to_string());
  options.extend(distractors);
  options.shuffle(rng);
  options
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ContentType;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  fn pool(pairs: &[(&str, &str)]) -> Vec<Item> {
    pairs
      .iter()
      .copied()
      .map(|(en, it)| {
        Item::new(
          ContentType::Vocabulary,
          "Animals",
          &[("english", en), ("italian", it)],
        )
      })
      .collect()
  }

  #[test]
  fn test_four_options_with_large_pool() {
    let items = pool(&[
      ("Dog", "cane"),
      ("Bird", "uccello"),
      ("Fish", "pesce"),
      ("Horse", "cavallo"),
      ("Cow", "mucca"),
      ("Pig", "maiale"),
      ("Sheep", "pecora"),
      ("Mouse", "topo"),
      ("Bear", "orso"),
      ("Wolf", "lupo"),
    ]);
    let mut rng = StdRng::seed_from_u64(11);
    let options = generate_choices("gatto", &items, "italian", &mut rng);

    assert_eq!(options.len(), 4);
    assert_eq!(options.iter().filter(|o| *o == "gatto").count(), 1);

    let unique: HashSet<&String> = options.iter().collect();
    assert_eq!(unique.len(), 4);
  }

  #[test]
  fn test_small_pool_returns_fewer_options() {
    let items = pool(&[("Dog", "cane"), ("Bird", "uccello")]);
    let mut rng = StdRng::seed_from_u64(5);
    let options = generate_choices("gatto", &items, "italian", &mut rng);

    // Correct answer + 2 available distractors
    assert_eq!(options.len(), 3);
    assert!(options.contains(&"gatto".to_string()));
  }

  #[test]
  fn test_empty_pool_returns_only_correct_answer() {
    let mut rng = StdRng::seed_from_u64(5);
    let options = generate_choices("gatto", &[], "italian", &mut rng);
    assert_eq!(options, vec!["gatto".to_string()]);
  }

  #[test]
  fn test_duplicate_translations_are_rejected() {
    // Several items translate to the same word as the correct answer
    let items = pool(&[
      ("Cat", "gatto"),
      ("Kitty", "gatto"),
      ("Dog", "cane"),
      ("Bird", "uccello"),
    ]);
    let mut rng = StdRng::seed_from_u64(17);
    let options = generate_choices("gatto", &items, "italian", &mut rng);

    assert_eq!(options.iter().filter(|o| *o == "gatto").count(), 1);
    assert!(options.len() <= 3);
  }

  #[test]
  fn test_duplicate_distractors_are_rejected() {
    let items = pool(&[("Dog", "cane"), ("Hound", "cane"), ("Bird", "uccello")]);
    for seed in 0..20 {
      let mut rng = StdRng::seed_from_u64(seed);
      let options = generate_choices("gatto", &items, "italian", &mut rng);
      assert_eq!(options.iter().filter(|o| *o == "cane").count(), 1);
    }
  }

  #[test]
  fn test_missing_translation_is_skipped() {
    let mut items = pool(&[("Dog", "cane"), ("Bird", "uccello")]);
    items.push(Item::new(
      ContentType::Vocabulary,
      "Animals",
      &[("english", "Fox")],
    ));
    let mut rng = StdRng::seed_from_u64(23);
    let options = generate_choices("gatto", &items, "italian", &mut rng);

    assert!(!options.iter().any(|o| o == "Fox"));
    assert_eq!(options.len(), 3);
  }

  #[test]
  fn test_correct_answer_always_present() {
    let items = pool(&[
      ("Dog", "cane"),
      ("Bird", "uccello"),
      ("Fish", "pesce"),
      ("Horse", "cavallo"),
    ]);
    for seed in 0..50 {
      let mut rng = StdRng::seed_from_u64(seed);
      let options = generate_choices("gatto", &items, "italian", &mut rng);
      assert!(options.contains(&"gatto".to_string()));
    }
  }
}
