//! Deck store backed by a directory of JSON files.

use super::{DeckStore, DeckSummary, StorageError, StorageResult};
use crate::deck::Deck;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One `<slug>.json` per deck under a base directory.
///
/// Deck names are slugged for the filename, so `list` reports slugs; loading
/// and deleting by the original name still works because lookups slug the
/// name the same way.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store over the given directory, creating it if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StorageError::Io(format!("create {}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    /// Open the per-user default location.
    ///
    /// On Unix: `~/.local/share/slidecast/decks/`
    /// On Windows: `%LOCALAPPDATA%\slidecast\decks\`
    pub fn open_default() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("no data directory available".to_string()))?;
        Self::open(base.join("slidecast").join("decks"))
    }

    /// The backing directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slug(name)))
    }
}

/// Collapse a deck name into a filename-safe slug.
///
/// Runs of characters that are unsafe in filenames become a single `_`.
fn slug(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_alphanumeric() || c == '-' || c == '_' {
            out.push(c);
        } else if !out.ends_with('_') {
            out.push('_');
        }
    }
    out
}

impl DeckStore for FileStore {
    fn save(&mut self, name: &str, deck: &Deck) -> StorageResult<()> {
        let json = serde_json::to_string_pretty(deck)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        let path = self.path_for(name);
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("write {}: {}", path.display(), e)))
    }

    fn load(&self, name: &str) -> StorageResult<Deck> {
        let path = self.path_for(name);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(name.to_string()));
            }
            Err(e) => {
                return Err(StorageError::Io(format!("read {}: {}", path.display(), e)));
            }
        };
        serde_json::from_str(&json)
            .map_err(|e| StorageError::Serialization(format!("{}: {}", path.display(), e)))
    }

    fn delete(&mut self, name: &str) -> StorageResult<()> {
        let path = self.path_for(name);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(StorageError::NotFound(name.to_string()))
            }
            Err(e) => Err(StorageError::Io(format!("delete {}: {}", path.display(), e))),
        }
    }

    fn list(&self) -> StorageResult<Vec<DeckSummary>> {
        let entries = fs::read_dir(&self.dir)
            .map_err(|e| StorageError::Io(format!("read {}: {}", self.dir.display(), e)))?;

        let mut summaries = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            let Some(name) = path.file_stem().and_then(|n| n.to_str()) else {
                continue;
            };
            let parsed = fs::read_to_string(&path)
                .map_err(|e| e.to_string())
                .and_then(|json| serde_json::from_str::<Deck>(&json).map_err(|e| e.to_string()));
            match parsed {
                Ok(deck) => summaries.push(DeckSummary {
                    name: name.to_string(),
                    slides: deck.len(),
                }),
                // A junk file should not hide every other saved deck.
                Err(e) => log::warn!("skipping unreadable deck {}: {}", path.display(), e),
            }
        }
        summaries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;
    use tempfile::tempdir;

    #[test]
    fn test_round_trip_preserves_elements() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let mut deck = Deck::new();
        deck.add_element(ElementKind::Text, Some("Quarterly Review"));
        store.save("review", &deck).unwrap();

        let loaded = store.load("review").unwrap();
        assert_eq!(
            loaded.current_slide().elements[0].content,
            "Quarterly Review"
        );
    }

    #[test]
    fn test_missing_deck_is_not_found() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        assert!(matches!(
            store.load("nonexistent"),
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            store.delete("nonexistent"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_file() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.save("pitch", &Deck::new()).unwrap();
        store.delete("pitch").unwrap();

        assert!(matches!(
            store.load("pitch"),
            Err(StorageError::NotFound(_))
        ));
    }

    #[test]
    fn test_invalid_deck_data_is_serialization_error() {
        let dir = tempdir().unwrap();
        let store = FileStore::open(dir.path()).unwrap();

        // Well-formed JSON, but an empty deck fails validation on load
        // instead of panicking later in current_slide().
        fs::write(
            dir.path().join("broken.json"),
            r#"{"slides":[],"current":0}"#,
        )
        .unwrap();

        assert!(matches!(
            store.load("broken"),
            Err(StorageError::Serialization(_))
        ));
    }

    #[test]
    fn test_list_reports_counts_and_skips_junk() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        let mut two_slides = Deck::new();
        two_slides.add_slide();
        store.save("beta", &Deck::new()).unwrap();
        store.save("alpha", &two_slides).unwrap();

        fs::write(dir.path().join("junk.json"), "not json").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let summaries = store.list().unwrap();
        assert_eq!(
            summaries,
            vec![
                DeckSummary {
                    name: "alpha".into(),
                    slides: 2
                },
                DeckSummary {
                    name: "beta".into(),
                    slides: 1
                },
            ]
        );
    }

    #[test]
    fn test_names_are_slugged() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::open(dir.path()).unwrap();

        store.save("Sales Pitch: v2", &Deck::new()).unwrap();
        assert!(dir.path().join("Sales_Pitch_v2.json").exists());

        // Lookups by the original name keep working.
        assert!(store.load("Sales Pitch: v2").is_ok());
    }
}
