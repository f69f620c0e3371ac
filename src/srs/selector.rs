//! Difficulty-biased item selection.
//!
//! Tracks which pool indices were already shown and draws the next item by
//! weighted random selection, weighting harder items (lower ease factor)
//! more heavily. Every item is shown once before any repeats.

use rand::Rng;
use std::collections::{HashMap, HashSet};

use crate::config;
use crate::domain::{Item, ItemId, ProgressRecord};

/// Selection weight for one candidate.
///
/// Ease 1.3..2.5 maps onto weight 2.5..1.3 (inverted), floored so no item
/// becomes unreachable; unseen items get a neutral weight.
pub fn selection_weight(record: Option<&ProgressRecord>) -> f64 {
  match record {
    Some(r) => (config::WEIGHT_CEILING - r.ease_factor).max(config::MIN_SELECTION_WEIGHT),
    None => config::NEW_ITEM_WEIGHT,
  }
}

/// Used-index tracking for one filtered pool.
///
/// Cleared automatically once every index has been shown, and explicitly
/// whenever the pool itself changes (filter or language switch).
#[derive(Debug, Clone, Default)]
pub struct PoolTracker {
  used: HashSet<usize>,
}

impl PoolTracker {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn reset(&mut self) {
    self.used.clear();
  }

  pub fn used_count(&self) -> usize {
    self.used.len()
  }

  /// Pick the next item from `pool`, biased toward weaker items.
  ///
  /// Returns `None` only for an empty pool. The chosen index is marked used
  /// before returning.
  pub fn select<'a, R: Rng + ?Sized>(
    &mut self,
    pool: &'a [Item],
    records: &HashMap<ItemId, ProgressRecord>,
    rng: &mut R,
  ) -> Option<&'a Item> {
    if pool.is_empty() {
      return None;
    }

    // Cold-pool reset: everything has been shown, start a new cycle
    if self.used.len() >= pool.len() {
      self.used.clear();
    }

    let candidates: Vec<usize> = (0..pool.len()).filter(|i| !self.used.contains(i)).collect();

    if candidates.is_empty() {
      // Degenerate fallback: uniform draw over the whole pool
      let index = rng.random_range(0..pool.len());
      self.used.insert(index);
      return Some(&pool[index]);
    }

    let weights: Vec<f64> = candidates
      .iter()
      .map(|&i| selection_weight(records.get(&pool[i].id)))
      .collect();
    let total_weight: f64 = weights.iter().sum();

    let chosen = if total_weight <= 0.0 {
      candidates[rng.random_range(0..candidates.len())]
    } else {
      // Cumulative-sum walk; first candidate whose cumulative weight
      // reaches the draw wins
      let draw = rng.random_range(0.0..total_weight);
      let mut cumulative = 0.0;
      let mut selected = candidates[candidates.len() - 1];
      for (pos, &index) in candidates.iter().enumerate() {
        cumulative += weights[pos];
        if draw <= cumulative {
          selected = index;
          break;
        }
      }
      selected
    };

    self.used.insert(chosen);
    Some(&pool[chosen])
  }
}
