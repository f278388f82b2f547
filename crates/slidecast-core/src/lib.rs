//! Slidecast Core Library
//!
//! Platform-agnostic deck/slide/element model and editing operations for the
//! Slidecast presentation editor. The UI layer is a thin renderer over this
//! state; everything here is synchronous and owned by a single session.

pub mod assets;
pub mod deck;
pub mod element;
pub mod slide;
pub mod storage;
pub mod suggest;
pub mod surface;
pub mod template;

pub use assets::{AssetError, AssetProvider, LocalAssets};
pub use deck::{Deck, DeckError, ElementUpdate};
pub use element::{Element, ElementId, ElementKind, Position, Size};
pub use slide::{Background, Slide, SlideId};
pub use storage::{DeckStore, DeckSummary, FileStore, MemoryStore, StorageError, StorageResult};
pub use suggest::{parse_suggestions, SuggestError, SuggestionProvider};
pub use template::Template;

use std::future::Future;
use std::pin::Pin;

/// Boxed future for the async suggestion capability.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
