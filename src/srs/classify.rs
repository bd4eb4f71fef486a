//! Category classification for dashboard and library views

use serde::Serialize;

use super::models::{Category, Flashcard};

/// Interval (days) beyond which a card counts as mastered
pub const MASTERED_THRESHOLD_DAYS: u32 = 21;

/// Classify a card into its learning stage
///
/// Checked in order, first match wins: never rated → New; interval over
/// [`MASTERED_THRESHOLD_DAYS`] → Mastered; anything else is Learning.
pub fn classify(card: &Flashcard) -> Category {
    if card.is_new {
        Category::New
    } else if card.srs.interval > MASTERED_THRESHOLD_DAYS {
        Category::Mastered
    } else {
        Category::Learning
    }
}

/// Per-category card counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCounts {
    pub new: usize,
    pub learning: usize,
    pub mastered: usize,
}

/// The collection split by category, catalog order preserved within each
#[derive(Debug, Clone)]
pub struct CategoryPartition {
    pub new: Vec<Flashcard>,
    pub learning: Vec<Flashcard>,
    pub mastered: Vec<Flashcard>,
}

impl CategoryPartition {
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            new: self.new.len(),
            learning: self.learning.len(),
            mastered: self.mastered.len(),
        }
    }
}

/// Split a collection into the three category lists
pub fn partition(cards: &[Flashcard]) -> CategoryPartition {
    let mut result = CategoryPartition {
        new: Vec::new(),
        learning: Vec::new(),
        mastered: Vec::new(),
    };

    for card in cards {
        match classify(card) {
            Category::New => result.new.push(card.clone()),
            Category::Learning => result.learning.push(card.clone()),
            Category::Mastered => result.mastered.push(card.clone()),
        }
    }

    result
}
