//! LeetFlash — spaced-repetition scheduling for a fixed problem catalog
//!
//! The crate is the scheduling core of a flashcard trainer: it decides
//! when each catalog item comes back, which items make up a review
//! session, and how progress is persisted and recovered. Rendering,
//! rating input and the catalog itself belong to the host application.
//!
//! ```
//! use leetflash::srs::{now_millis, Rating, Scheduler};
//! use leetflash::storage::MemoryStore;
//!
//! let catalog = Vec::new(); // supplied by the host
//! let mut scheduler = Scheduler::new(catalog, MemoryStore::new(), now_millis());
//! let queue = scheduler.start_session(now_millis());
//! for id in queue {
//!     // show the card, collect a rating...
//!     let _ = scheduler.rate(id, Rating::Mastered, now_millis());
//! }
//! ```

pub mod catalog;
pub mod srs;
pub mod storage;

pub use catalog::{Difficulty, Question};
pub use srs::{Category, Flashcard, MemoryState, Rating, Scheduler, Settings, SrsError, Theme};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
