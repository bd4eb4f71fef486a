//! Catalog / persisted-state reconciliation
//!
//! The catalog is authoritative for membership and order; the persisted
//! blob only annotates it. Loading is a left-join: every catalog entry
//! produces exactly one card, taking the persisted scheduling state when
//! a well-formed record with the same id exists and the fresh sentinel
//! otherwise. A blob that fails to parse at all is treated the same as
//! no blob; reconciliation never blocks startup.

use std::collections::{HashMap, HashSet};

use crate::catalog::Question;

use super::models::{Flashcard, TimestampMs};

/// Build the flashcard collection from the catalog and the persisted blob
pub fn load(catalog: &[Question], blob: Option<&str>, now: TimestampMs) -> Vec<Flashcard> {
    let persisted = blob.and_then(parse_persisted).unwrap_or_default();

    catalog
        .iter()
        .map(|q| {
            persisted
                .get(&q.id)
                .cloned()
                .unwrap_or_else(|| Flashcard::fresh(q.id, now))
        })
        .collect()
}

/// Serialize the collection into the persisted card blob
pub fn serialize(cards: &[Flashcard]) -> serde_json::Result<String> {
    serde_json::to_string(cards)
}

/// Parse the blob into an id lookup, dropping malformed entries
///
/// Returns `None` when the blob is not a JSON array at all; individual
/// records that fail to decode are skipped, so only the affected catalog
/// entries fall back to fresh.
fn parse_persisted(blob: &str) -> Option<HashMap<u32, Flashcard>> {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(blob) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Discarding unreadable card blob, starting fresh: {}", e);
            return None;
        }
    };

    let mut lookup = HashMap::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<Flashcard>(entry) {
            Ok(card) => {
                lookup.insert(card.id, card);
            }
            Err(e) => {
                log::warn!("Skipping malformed card record: {}", e);
            }
        }
    }
    Some(lookup)
}

/// Reset a single card to the sentinel state, leaving the rest untouched
pub fn reset_one(cards: &[Flashcard], id: u32, now: TimestampMs) -> Vec<Flashcard> {
    cards
        .iter()
        .map(|c| {
            if c.id == id {
                Flashcard::fresh(c.id, now)
            } else {
                c.clone()
            }
        })
        .collect()
}

/// Reset every card in `ids` to the sentinel state
pub fn reset_many(cards: &[Flashcard], ids: &HashSet<u32>, now: TimestampMs) -> Vec<Flashcard> {
    cards
        .iter()
        .map(|c| {
            if ids.contains(&c.id) {
                Flashcard::fresh(c.id, now)
            } else {
                c.clone()
            }
        })
        .collect()
}

/// Reinitialize the whole collection as if no blob had been persisted
pub fn reset_all(catalog: &[Question], now: TimestampMs) -> Vec<Flashcard> {
    load(catalog, None, now)
}
