//! Saved-deck storage.
//!
//! The editor owns a single interactive session and every core operation
//! completes inside one user-input callback, so saving is a plain
//! synchronous call: stores take `&mut self` and return immediately. The
//! suggestion capability is the only async seam in the system.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::deck::Deck;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("deck not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A saved deck as shown in a picker: its name and how many slides it has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckSummary {
    pub name: String,
    pub slides: usize,
}

/// Where saved decks live.
///
/// `load` surfaces data that fails deck validation as
/// [`StorageError::Serialization`], never as a panic.
pub trait DeckStore {
    /// Save a deck under a name, replacing any previous save.
    fn save(&mut self, name: &str, deck: &Deck) -> StorageResult<()>;

    /// Load a saved deck by name.
    fn load(&self, name: &str) -> StorageResult<Deck>;

    /// Remove a saved deck. Unknown names are reported as `NotFound`.
    fn delete(&mut self, name: &str) -> StorageResult<()>;

    /// Summaries of every saved deck, sorted by name.
    fn list(&self) -> StorageResult<Vec<DeckSummary>>;
}
