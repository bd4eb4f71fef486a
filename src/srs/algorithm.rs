//! SM-2 derived review transition function
//!
//! A variation of the SuperMemo 2 algorithm tuned for a smoother
//! Ebbinghaus curve:
//! - the second interval is 3 days instead of SM-2's 6, so hazy recalls
//!   resurface sooner;
//! - forgetting resets repetition and interval but leaves the ease
//!   factor where it was.
//!
//! Quality scores carried by [`Rating`]: Forgot = 0, Hazy = 3,
//! Mastered = 5.

use super::models::{MemoryState, Rating, TimestampMs};

/// Minimum ease factor allowed
const MIN_EFACTOR: f32 = 1.3;

/// One day in milliseconds
pub const ONE_DAY_MS: i64 = 86_400_000;

/// Calculate the state a card moves to after a rating
///
/// Pure and total: the input state is never mutated, every rating at
/// every state produces a valid successor.
///
/// Intervals are whole days; the growth step uses `f32::round`, which
/// rounds half away from zero.
pub fn advance(state: &MemoryState, rating: Rating, now: TimestampMs) -> MemoryState {
    let mut efactor = state.efactor;
    let mut repetition = state.repetition;
    let interval;

    if rating == Rating::Forgot {
        // Start the item over tomorrow. The ease factor is left
        // untouched: a full interval reset is penalty enough.
        repetition = 0;
        interval = 1;
    } else {
        // EF' = EF + (0.1 - (5-q) * (0.08 + (5-q) * 0.02))
        // Hazy (q=3) lowers it by 0.14, Mastered (q=5) raises it by 0.1.
        let q = rating.quality();
        efactor += 0.1 - (5 - q) as f32 * (0.08 + (5 - q) as f32 * 0.02);
        efactor = efactor.max(MIN_EFACTOR);

        repetition += 1;

        interval = match repetition {
            1 => 1,
            2 => 3,
            _ => (state.interval as f32 * efactor).round() as u32,
        };
    }

    MemoryState {
        interval,
        repetition,
        efactor,
        due_date: now + interval as i64 * ONE_DAY_MS,
    }
}
