//! Data models for the review-scheduling engine

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Epoch timestamp in milliseconds, matching the persisted wire format
pub type TimestampMs = i64;

/// Current wall-clock time in epoch milliseconds
pub fn now_millis() -> TimestampMs {
    Utc::now().timestamp_millis()
}

/// Scheduling state of a single catalog item
///
/// Serialized as part of the card blob; `interval`, `repetition` and
/// `efactor` fall back to their sentinel values when missing from an
/// older blob, `dueDate` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemoryState {
    /// Current review interval in days
    #[serde(default)]
    pub interval: u32,
    /// Consecutive successful recalls
    #[serde(default)]
    pub repetition: u32,
    /// SM-2 ease factor, never below 1.3
    #[serde(default = "default_efactor")]
    pub efactor: f32,
    /// When the item comes due, epoch milliseconds
    pub due_date: TimestampMs,
}

fn default_efactor() -> f32 {
    2.5
}

impl MemoryState {
    /// The sentinel "never reviewed" state
    pub fn initial(now: TimestampMs) -> Self {
        Self {
            interval: 0,
            repetition: 0,
            efactor: default_efactor(),
            due_date: now,
        }
    }
}

/// A catalog item paired with its scheduling annotations
///
/// `is_new` alone governs eligibility for the new pool; the sentinel
/// `srs` state a new card carries is never consulted for that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: u32,
    pub srs: MemoryState,
    #[serde(rename = "isNew")]
    pub is_new: bool,
}

impl Flashcard {
    /// A fresh card for a catalog entry that has never been rated
    pub fn fresh(id: u32, now: TimestampMs) -> Self {
        Self {
            id,
            srs: MemoryState::initial(now),
            is_new: true,
        }
    }
}

/// User's recall rating for one card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// No recall, start the item over
    Forgot,
    /// Recalled with serious difficulty
    Hazy,
    /// Recalled cleanly
    Mastered,
}

impl Rating {
    /// SM-2 quality score consumed by the transition formula
    pub fn quality(self) -> u32 {
        match self {
            Rating::Forgot => 0,
            Rating::Hazy => 3,
            Rating::Mastered => 5,
        }
    }
}

/// Derived learning stage of a card, see [`crate::srs::classify`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    New,
    Learning,
    Mastered,
}

/// Theme preference, stored for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

/// User-tunable session settings
///
/// Every field is serde-defaulted so a partial or older settings blob
/// degrades to defaults instead of erroring. The UI clamps
/// `daily_new_limit` to [0, 50]; the engine itself applies no upper bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default = "default_daily_new_limit")]
    pub daily_new_limit: u32,
    #[serde(default)]
    pub theme: Theme,
}

pub(crate) fn default_daily_new_limit() -> u32 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_new_limit: default_daily_new_limit(),
            theme: Theme::default(),
        }
    }
}
