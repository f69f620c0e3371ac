//! Practice session controller.
//!
//! Orchestrates item selection, answer checking, recall-model updates, and
//! persistence across an unbounded sequence of practice turns. The engine
//! is single-writer: every mutation happens synchronously inside one call
//! and is followed by a fire-and-forget snapshot write.

use rand::Rng;
use std::collections::HashMap;

use crate::clock::Clock;
use crate::config;
use crate::content::ContentProvider;
use crate::domain::{Item, ItemId, ProgressRecord};
use crate::srs::{self, PoolTracker};
use crate::stats::{self, CategoryStats, LearningStats};
use crate::store::{LogOnError, ProfileKey, ProgressStore};
use crate::validation::answers_match;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeMode {
  /// Show item and translation together; viewing records a fixed quality
  Learn,
  /// Multiple choice
  Guess,
  /// Typed translation
  Answer,
}

impl PracticeMode {
  pub fn from_str(s: &str) -> Option<Self> {
    match s {
      "learn" => Some(Self::Learn),
      "guess" => Some(Self::Guess),
      "answer" => Some(Self::Answer),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Learn => "learn",
      Self::Guess => "guess",
      Self::Answer => "answer",
    }
  }
}

/// What this engine build supports, for callers that need to feature-detect
/// rather than assume a scheduling variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineCapabilities {
  pub due_scheduling: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
  pub correct: u32,
  pub total: u32,
}

/// One presented item.
#[derive(Debug, Clone)]
pub struct Turn {
  pub item: Item,
  /// Shuffled answer options; populated in guess mode only
  pub choices: Vec<String>,
  /// True when the item came from the due queue rather than the pool draw
  pub from_review: bool,
}

/// Outcome of one answered turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
  pub correct: bool,
  pub expected: String,
  pub quality: u8,
}

pub struct PracticeEngine<S: ProgressStore, C: Clock> {
  profile: ProfileKey,
  mode: PracticeMode,
  /// All items for the profile's content type
  items: Vec<Item>,
  category: Option<String>,
  /// Items matching the current category filter
  pool: Vec<Item>,
  tracker: PoolTracker,
  records: HashMap<ItemId, ProgressRecord>,
  store: S,
  clock: C,
  score: Score,
  current: Option<Turn>,
  feedback: Option<Feedback>,
}

impl<S: ProgressStore, C: Clock> PracticeEngine<S, C> {
  pub fn new(
    provider: &impl ContentProvider,
    store: S,
    clock: C,
    profile: ProfileKey,
    mode: PracticeMode,
  ) -> Self {
    let items = provider.items(profile.content_type).to_vec();
    let records: HashMap<ItemId, ProgressRecord> = store
      .load(&profile)
      .log_warn_default("Failed to load progress snapshot")
      .into_iter()
      .map(|r| (r.item_id.clone(), r))
      .collect();
    tracing::info!(
      "Practice session: {} {} -> {}, {} items, {} records",
      profile.content_type.as_str(),
      profile.from_lang,
      profile.to_lang,
      items.len(),
      records.len()
    );

    let mut engine = Self {
      profile,
      mode,
      items,
      category: None,
      pool: Vec::new(),
      tracker: PoolTracker::new(),
      records,
      store,
      clock,
      score: Score::default(),
      current: None,
      feedback: None,
    };
    engine.rebuild_pool();
    engine
  }

  pub const fn capabilities() -> EngineCapabilities {
    EngineCapabilities {
      due_scheduling: true,
    }
  }

  fn rebuild_pool(&mut self) {
    self.pool = match &self.category {
      Some(category) => self
        .items
        .iter()
        .filter(|i| &i.category == category)
        .cloned()
        .collect(),
      None => self.items.clone(),
    };
    self.tracker.reset();
    self.current = None;
    self.feedback = None;
  }

  /// Restrict the pool to one category, or `None` for all.
  pub fn set_category(&mut self, category: Option<&str>) {
    self.category = category.map(str::to_string);
    self.rebuild_pool();
  }

  pub fn set_mode(&mut self, mode: PracticeMode) {
    self.mode = mode;
    self.current = None;
    self.feedback = None;
  }

  pub fn mode(&self) -> PracticeMode {
    self.mode
  }

  /// Distinct categories of the loaded content, in first-seen order.
  pub fn categories(&self) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for item in &self.items {
      if !categories.contains(&item.category) {
        categories.push(item.category.clone());
      }
    }
    categories
  }

  /// Advance to the next item.
  ///
  /// Prefers the earliest due item resolvable in the current pool; falls
  /// back to a difficulty-weighted pool draw. `None` means the pool is
  /// empty and there is nothing to show.
  pub fn next_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Turn> {
    self.feedback = None;

    let now = self.clock.now();
    let mut from_review = false;
    let mut item: Option<Item> = None;

    for due in srs::due_records(&self.records, now) {
      if let Some(found) = self.pool.iter().find(|i| i.id == due.item_id) {
        item = Some(found.clone());
        from_review = true;
        break;
      }
    }

    if item.is_none() {
      item = self
        .tracker
        .select(&self.pool, &self.records, &mut *rng)
        .cloned();
    }

    let item = match item {
      Some(item) => item,
      None => {
        self.current = None;
        return None;
      }
    };

    let choices = if self.mode == PracticeMode::Guess {
      let correct = item.text(&self.profile.to_lang).unwrap_or_default().to_string();
      let rest: Vec<Item> = self
        .pool
        .iter()
        .filter(|i| i.id != item.id)
        .cloned()
        .collect();
      srs::generate_choices(&correct, &rest, &self.profile.to_lang, rng)
    } else {
      Vec::new()
    };

    self.current = Some(Turn {
      item,
      choices,
      from_review,
    });
    self.current.as_ref()
  }

  pub fn current_turn(&self) -> Option<&Turn> {
    self.current.as_ref()
  }

  pub fn feedback(&self) -> Option<&Feedback> {
    self.feedback.as_ref()
  }

  /// Check a typed answer (answer mode). Returns `None` when there is no
  /// presented item, the turn was already answered, or the mode is wrong.
  pub fn check_answer(&mut self, input: &str) -> Option<Feedback> {
    if self.mode != PracticeMode::Answer || self.feedback.is_some() {
      return None;
    }
    let turn = self.current.as_ref()?;
    let expected = turn.item.text(&self.profile.to_lang)?.to_string();
    let item_id = turn.item.id.clone();
    let category = turn.item.category.clone();
    let correct = answers_match(input, &expected);
    Some(self.finish_attempt(correct, expected, item_id, &category))
  }

  /// Check a selected option (guess mode). Strict comparison; repeated
  /// selections after feedback are ignored.
  pub fn choose_option(&mut self, option: &str) -> Option<Feedback> {
    if self.mode != PracticeMode::Guess || self.feedback.is_some() {
      return None;
    }
    let turn = self.current.as_ref()?;
    let expected = turn.item.text(&self.profile.to_lang)?.to_string();
    let item_id = turn.item.id.clone();
    let category = turn.item.category.clone();
    let correct = option == expected;
    Some(self.finish_attempt(correct, expected, item_id, &category))
  }

  fn finish_attempt(
    &mut self,
    correct: bool,
    expected: String,
    item_id: ItemId,
    category: &str,
  ) -> Feedback {
    let quality = if correct {
      config::QUALITY_CORRECT
    } else {
      config::QUALITY_INCORRECT
    };
    self.score.total += 1;
    if correct {
      self.score.correct += 1;
    }

    self.record_attempt(&item_id, quality, category);

    let feedback = Feedback {
      correct,
      expected,
      quality,
    };
    self.feedback = Some(feedback.clone());
    feedback
  }

  /// Learn mode: record the current item as seen and advance.
  pub fn mark_seen<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Turn> {
    if self.mode == PracticeMode::Learn {
      if let Some(turn) = self.current.as_ref() {
        let item_id = turn.item.id.clone();
        let category = turn.item.category.clone();
        self.record_attempt(&item_id, config::QUALITY_SEEN, &category);
      }
    }
    self.next_turn(rng)
  }

  /// Discard the current item without recording progress and advance.
  pub fn skip<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Turn> {
    self.current = None;
    self.next_turn(rng)
  }

  /// Record one attempt at the given quality, creating the progress record
  /// on first contact. The updated snapshot is persisted immediately.
  pub fn record_attempt(&mut self, item_id: &ItemId, quality: u8, category: &str) {
    let now = self.clock.now();
    let record = self
      .records
      .get(item_id)
      .cloned()
      .unwrap_or_else(|| ProgressRecord::new(item_id.clone(), category, now));
    let updated = srs::apply_review(&record, quality, now);
    tracing::debug!(
      "Attempt on {}: quality {}, repetitions {} -> {}",
      item_id,
      quality,
      record.repetitions,
      updated.repetitions
    );
    self.records.insert(item_id.clone(), updated);
    self.persist();
  }

  fn persist(&mut self) {
    let mut snapshot: Vec<ProgressRecord> = self.records.values().cloned().collect();
    snapshot.sort_by(|a, b| a.item_id.cmp(&b.item_id));
    self
      .store
      .save(&self.profile, &snapshot)
      .log_warn("Failed to persist progress snapshot");
  }

  /// Progress for one item; `None` means the item was never attempted.
  pub fn progress(&self, item_id: &ItemId) -> Option<&ProgressRecord> {
    self.records.get(item_id)
  }

  pub fn stats(&self) -> LearningStats {
    stats::learning_stats(&self.records, self.clock.now())
  }

  pub fn category_stats(&self, category: &str) -> CategoryStats {
    stats::category_stats(&self.records, category, self.clock.now())
  }

  pub fn due_count(&self) -> usize {
    srs::due_count(&self.records, self.clock.now())
  }

  /// Derived, never stored: review mode is active while anything is due.
  pub fn in_review_mode(&self) -> bool {
    srs::review_mode_active(&self.records, self.clock.now())
  }

  /// Delete progress records, either for one category or all of them.
  pub fn reset_progress(&mut self, category: Option<&str>) {
    match category {
      Some(category) => {
        let before = self.records.len();
        self.records.retain(|_, r| r.category != category);
        tracing::info!(
          "Reset {} progress records in category {}",
          before - self.records.len(),
          category
        );
      }
      None => {
        tracing::info!("Reset all {} progress records", self.records.len());
        self.records.clear();
      }
    }
    self.persist();
  }

  pub fn score(&self) -> Score {
    self.score
  }
}
