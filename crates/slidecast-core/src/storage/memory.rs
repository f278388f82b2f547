//! In-memory deck store for tests and not-yet-saved sessions.

use super::{DeckStore, DeckSummary, StorageError, StorageResult};
use crate::deck::Deck;
use std::collections::BTreeMap;

/// Keeps decks in a map; contents vanish with the session.
///
/// The map is ordered so `list` comes back sorted without an extra pass.
#[derive(Debug, Default)]
pub struct MemoryStore {
    decks: BTreeMap<String, Deck>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DeckStore for MemoryStore {
    fn save(&mut self, name: &str, deck: &Deck) -> StorageResult<()> {
        self.decks.insert(name.to_string(), deck.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> StorageResult<Deck> {
        self.decks
            .get(name)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn delete(&mut self, name: &str) -> StorageResult<()> {
        self.decks
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StorageError::NotFound(name.to_string()))
    }

    fn list(&self) -> StorageResult<Vec<DeckSummary>> {
        Ok(self
            .decks
            .iter()
            .map(|(name, deck)| DeckSummary {
                name: name.clone(),
                slides: deck.len(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn test_round_trip_preserves_slides() {
        let mut store = MemoryStore::new();
        let mut deck = Deck::new();
        deck.add_element(ElementKind::Text, Some("Welcome"));

        store.save("onboarding", &deck).unwrap();
        let loaded = store.load("onboarding").unwrap();

        assert_eq!(loaded.len(), deck.len());
        assert_eq!(
            loaded.current_slide().elements,
            deck.current_slide().elements
        );
    }

    #[test]
    fn test_save_overwrites() {
        let mut store = MemoryStore::new();
        let mut deck = Deck::new();
        store.save("pitch", &deck).unwrap();

        deck.add_slide();
        store.save("pitch", &deck).unwrap();

        assert_eq!(store.load("pitch").unwrap().len(), 2);
    }

    #[test]
    fn test_unknown_names_are_not_found() {
        let mut store = MemoryStore::new();
        assert!(matches!(
            store.load("missing"),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("missing"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_then_load() {
        let mut store = MemoryStore::new();
        store.save("pitch", &Deck::new()).unwrap();

        store.delete("pitch").unwrap();
        assert!(matches!(
            store.load("pitch"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_is_sorted_with_slide_counts() {
        let mut store = MemoryStore::new();
        let mut two_slides = Deck::new();
        two_slides.add_slide();

        store.save("zebra", &Deck::new()).unwrap();
        store.save("alpha", &two_slides).unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(
            summaries,
            vec![
                DeckSummary {
                    name: "alpha".into(),
                    slides: 2
                },
                DeckSummary {
                    name: "zebra".into(),
                    slides: 1
                },
            ]
        );
    }
}
