//! The owning coordinator for scheduling state
//!
//! A [`Scheduler`] is the single component that holds the flashcard
//! collection, the settings, and the persistence store; everything under
//! it (transition function, queue builder, classifier, reconciliation)
//! is a pure function over snapshots. Every mutating operation writes
//! its blob through the store before returning, so an abrupt process
//! exit right after a rating or reset cannot lose that mutation. The
//! write itself is fire-and-forget: a failure is logged and the
//! in-memory mutation stands.
//!
//! Resets here are unconditional; confirmation dialogs are a
//! presentation concern and happen before these calls.

use std::collections::HashSet;

use thiserror::Error;

use crate::catalog::Question;
use crate::storage::{KeyValueStore, CARDS_KEY, SETTINGS_KEY};

use super::algorithm::advance;
use super::classify::{partition, CategoryPartition};
use super::models::{
    default_daily_new_limit, Flashcard, MemoryState, Rating, Settings, Theme, TimestampMs,
};
use super::queue::build_queue;
use super::reconcile;

#[derive(Error, Debug)]
pub enum SrsError {
    #[error("Card not found: {0}")]
    CardNotFound(u32),
}

pub struct Scheduler<S: KeyValueStore> {
    catalog: Vec<Question>,
    cards: Vec<Flashcard>,
    settings: Settings,
    store: S,
}

impl<S: KeyValueStore> Scheduler<S> {
    /// Reconcile the catalog against whatever the store holds
    ///
    /// Never fails: an absent or corrupt blob falls back to fresh state.
    pub fn new(catalog: Vec<Question>, store: S, now: TimestampMs) -> Self {
        let cards = reconcile::load(&catalog, store.get(CARDS_KEY).as_deref(), now);
        let settings = load_settings(store.get(SETTINGS_KEY).as_deref());

        Self {
            catalog,
            cards,
            settings,
            store,
        }
    }

    pub fn catalog(&self) -> &[Question] {
        &self.catalog
    }

    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Hand the store back, e.g. to rebuild the scheduler
    pub fn into_store(self) -> S {
        self.store
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.catalog.iter().find(|q| q.id == id)
    }

    pub fn card(&self, id: u32) -> Option<&Flashcard> {
        self.cards.iter().find(|c| c.id == id)
    }

    /// Build a session queue snapshot from the current collection
    ///
    /// An empty queue means nothing is due and no new cards are left to
    /// introduce today; the caller should not enter session mode.
    pub fn start_session(&self, now: TimestampMs) -> Vec<u32> {
        build_queue(&self.cards, self.settings.daily_new_limit, now)
    }

    /// Apply a rating to a card and persist the collection
    pub fn rate(&mut self, id: u32, rating: Rating, now: TimestampMs) -> Result<&MemoryState, SrsError> {
        let pos = self
            .cards
            .iter()
            .position(|c| c.id == id)
            .ok_or(SrsError::CardNotFound(id))?;

        self.cards[pos].srs = advance(&self.cards[pos].srs, rating, now);
        self.cards[pos].is_new = false;

        self.persist_cards();
        Ok(&self.cards[pos].srs)
    }

    /// Reset a single card to the never-reviewed state
    pub fn reset_card(&mut self, id: u32, now: TimestampMs) {
        self.cards = reconcile::reset_one(&self.cards, id, now);
        self.persist_cards();
    }

    /// Reset a batch of cards to the never-reviewed state
    pub fn reset_cards(&mut self, ids: &HashSet<u32>, now: TimestampMs) {
        self.cards = reconcile::reset_many(&self.cards, ids, now);
        self.persist_cards();
    }

    /// Wipe all scheduling progress and restore the default daily limit
    pub fn reset_all(&mut self, now: TimestampMs) {
        self.cards = reconcile::reset_all(&self.catalog, now);
        self.settings.daily_new_limit = default_daily_new_limit();
        self.persist_cards();
        self.persist_settings();
        log::info!("Reset all scheduling state ({} cards)", self.cards.len());
    }

    /// Callers clamp to the UI range before calling; the engine itself
    /// places no upper bound.
    pub fn set_daily_new_limit(&mut self, limit: u32) {
        self.settings.daily_new_limit = limit;
        self.persist_settings();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.settings.theme = theme;
        self.persist_settings();
    }

    /// Category view over the current collection
    pub fn partition(&self) -> CategoryPartition {
        partition(&self.cards)
    }

    fn persist_cards(&mut self) {
        match reconcile::serialize(&self.cards) {
            Ok(blob) => {
                if let Err(e) = self.store.set(CARDS_KEY, &blob) {
                    log::warn!("Failed to persist card state: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize card state: {}", e),
        }
    }

    fn persist_settings(&mut self) {
        match serde_json::to_string(&self.settings) {
            Ok(blob) => {
                if let Err(e) = self.store.set(SETTINGS_KEY, &blob) {
                    log::warn!("Failed to persist settings: {}", e);
                }
            }
            Err(e) => log::warn!("Failed to serialize settings: {}", e),
        }
    }
}

/// Parse the settings blob, falling back to defaults on any damage
fn load_settings(blob: Option<&str>) -> Settings {
    let Some(blob) = blob else {
        return Settings::default();
    };

    match serde_json::from_str(blob) {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Discarding unreadable settings blob: {}", e);
            Settings::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Difficulty;
    use crate::srs::algorithm::ONE_DAY_MS;
    use crate::storage::MemoryStore;

    const T0: TimestampMs = 1_700_000_000_000;

    fn question(id: u32) -> Question {
        Question {
            id,
            title: format!("Problem {}", id),
            title_cn: format!("题目 {}", id),
            slug: format!("problem-{}", id),
            difficulty: Difficulty::Medium,
            tags: Vec::new(),
            description: String::new(),
            description_cn: String::new(),
            solution_idea: String::new(),
            solution_idea_cn: String::new(),
            time_complexity: String::new(),
            space_complexity: String::new(),
            example_input: String::new(),
            example_output: String::new(),
        }
    }

    fn catalog3() -> Vec<Question> {
        vec![question(1), question(2), question(3)]
    }

    fn scheduler() -> Scheduler<MemoryStore> {
        Scheduler::new(catalog3(), MemoryStore::new(), T0)
    }

    #[test]
    fn rating_persists_before_returning() {
        let mut sched = scheduler();
        sched.rate(1, Rating::Mastered, T0).unwrap();

        // the store already holds the mutation
        let blob = sched.store().get(CARDS_KEY).unwrap();
        let persisted: Vec<Flashcard> = serde_json::from_str(&blob).unwrap();
        assert!(!persisted[0].is_new);
        assert_eq!(persisted[0].srs.interval, 1);
        assert!(persisted[1].is_new);
    }

    #[test]
    fn rating_unknown_card_is_an_error() {
        let mut sched = scheduler();
        assert!(matches!(
            sched.rate(99, Rating::Hazy, T0),
            Err(SrsError::CardNotFound(99))
        ));
    }

    #[test]
    fn state_survives_a_restart() {
        let mut sched = scheduler();
        sched.rate(2, Rating::Mastered, T0).unwrap();
        sched.rate(2, Rating::Mastered, T0 + ONE_DAY_MS).unwrap();

        let revived = Scheduler::new(catalog3(), sched.into_store(), T0 + 2 * ONE_DAY_MS);

        let card = revived.card(2).unwrap();
        assert!(!card.is_new);
        assert_eq!(card.srs.interval, 3);
        assert_eq!(card.srs.repetition, 2);
    }

    #[test]
    fn session_queue_respects_daily_limit() {
        let mut sched = scheduler();
        sched.set_daily_new_limit(2);

        let queue = sched.start_session(T0);
        assert_eq!(queue.len(), 2);
        assert!(queue.contains(&1));
        assert!(queue.contains(&2));
    }

    #[test]
    fn empty_queue_when_nothing_is_eligible() {
        let mut sched = scheduler();
        sched.set_daily_new_limit(0);
        assert!(sched.start_session(T0).is_empty());
    }

    #[test]
    fn rated_card_comes_back_when_due() {
        let mut sched = scheduler();
        sched.set_daily_new_limit(0);
        // rate outside a session to seed a due card
        sched.rate(3, Rating::Forgot, T0).unwrap();

        assert!(sched.start_session(T0).is_empty());
        let queue = sched.start_session(T0 + ONE_DAY_MS);
        assert_eq!(queue, vec![3]);
    }

    #[test]
    fn reset_all_restores_cards_and_daily_limit() {
        let mut sched = scheduler();
        sched.set_daily_new_limit(3);
        sched.rate(1, Rating::Mastered, T0).unwrap();

        sched.reset_all(T0);

        assert!(sched.cards().iter().all(|c| c.is_new));
        assert_eq!(sched.settings().daily_new_limit, 10);

        let blob = sched.store().get(SETTINGS_KEY).unwrap();
        let persisted: Settings = serde_json::from_str(&blob).unwrap();
        assert_eq!(persisted.daily_new_limit, 10);
    }

    #[test]
    fn batch_reset_only_touches_targets() {
        let mut sched = scheduler();
        sched.rate(1, Rating::Mastered, T0).unwrap();
        sched.rate(2, Rating::Mastered, T0).unwrap();
        let before = sched.card(1).unwrap().clone();

        sched.reset_cards(&[2, 3].into_iter().collect(), T0);

        assert_eq!(sched.card(1).unwrap(), &before);
        assert!(sched.card(2).unwrap().is_new);
        assert!(sched.card(3).unwrap().is_new);
    }

    #[test]
    fn corrupt_store_falls_back_to_fresh_state() {
        let mut store = MemoryStore::new();
        store.set(CARDS_KEY, "###").unwrap();
        store.set(SETTINGS_KEY, "not json").unwrap();

        let sched = Scheduler::new(catalog3(), store, T0);

        assert!(sched.cards().iter().all(|c| c.is_new));
        assert_eq!(sched.settings(), &Settings::default());
    }

    #[test]
    fn partition_tracks_ratings() {
        let mut sched = scheduler();
        sched.rate(1, Rating::Mastered, T0).unwrap();

        let counts = sched.partition().counts();
        assert_eq!(counts.new, 2);
        assert_eq!(counts.learning, 1);
        assert_eq!(counts.mastered, 0);
    }
}
