//! Session queue construction
//!
//! Eligibility decides what enters a session, never its order: the due
//! pool (previously rated, past due) and the capped new pool are
//! collected deterministically, then the union is shuffled. The returned
//! queue is a snapshot — the caller walks it front to back and never
//! re-filters it mid-session, even when a rating changes an item's due
//! status.

use rand::seq::SliceRandom;
use rand::Rng;

use super::models::{Flashcard, TimestampMs};

/// Build a shuffled session queue of card ids
///
/// New cards are admitted in catalog order up to `daily_new_limit`, so
/// which items get introduced on a given day is deterministic for a
/// fixed catalog. An empty result means there is nothing to review —
/// not an error.
pub fn build_queue(cards: &[Flashcard], daily_new_limit: u32, now: TimestampMs) -> Vec<u32> {
    build_queue_with(cards, daily_new_limit, now, &mut rand::thread_rng())
}

/// [`build_queue`] with a caller-supplied RNG, for deterministic tests
pub fn build_queue_with(
    cards: &[Flashcard],
    daily_new_limit: u32,
    now: TimestampMs,
    rng: &mut impl Rng,
) -> Vec<u32> {
    let mut pool: Vec<u32> = cards
        .iter()
        .filter(|c| !c.is_new && c.srs.due_date <= now)
        .map(|c| c.id)
        .collect();

    pool.extend(
        cards
            .iter()
            .filter(|c| c.is_new)
            .take(daily_new_limit as usize)
            .map(|c| c.id),
    );

    pool.shuffle(rng);
    pool
}
