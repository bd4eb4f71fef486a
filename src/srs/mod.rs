//! Spaced-repetition review scheduling
//!
//! This module provides:
//! - The SM-2 derived memory-state transition ([`algorithm::advance`])
//! - Catalog / persisted-state reconciliation and resets ([`reconcile`])
//! - Session queue construction with a daily new-card cap ([`queue`])
//! - The New / Learning / Mastered classifier ([`classify`])
//! - The owning [`Scheduler`] that ties them to a persistence store

pub mod algorithm;
pub mod classify;
pub mod models;
pub mod queue;
pub mod reconcile;
pub mod scheduler;

pub use models::*;
pub use scheduler::{Scheduler, SrsError};
