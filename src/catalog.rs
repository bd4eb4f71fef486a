//! Catalog records supplied by the host application
//!
//! The catalog is an immutable ordered list of problems, fixed for the
//! process lifetime. Identifiers are unique and stable across catalog
//! versions; the scheduling engine keys everything on them and never
//! mutates a [`Question`].

use serde::{Deserialize, Serialize};

/// Difficulty tier of a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Medium
    }
}

/// A single problem record, bilingual (English / Chinese)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Stable identifier, unique within the catalog
    pub id: u32,
    pub title: String,
    pub title_cn: String,
    /// URL slug on the problem site
    pub slug: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    pub description: String,
    pub description_cn: String,
    pub solution_idea: String,
    pub solution_idea_cn: String,
    pub time_complexity: String,
    pub space_complexity: String,
    pub example_input: String,
    pub example_output: String,
}
