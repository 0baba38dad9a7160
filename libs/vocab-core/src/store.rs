//! The persisted word store.
//!
//! The entire collection lives in one slot and is fully rewritten on every
//! mutation. Both the import pipeline and the study session go through the
//! [`WordStore`] trait, so they can be exercised against an in-memory store.

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::types::WordRecord;

type Result<T> = std::result::Result<T, StoreError>;

/// Load/save access to the persisted word collection.
pub trait WordStore {
    fn load(&self) -> Result<Vec<WordRecord>>;
    fn save(&self, words: &[WordRecord]) -> Result<()>;
}

impl<S: WordStore + ?Sized> WordStore for &S {
    fn load(&self) -> Result<Vec<WordRecord>> {
        (**self).load()
    }

    fn save(&self, words: &[WordRecord]) -> Result<()> {
        (**self).save(words)
    }
}

/// Word store backed by a single JSON file.
///
/// A missing or unreadable slot loads as an empty collection rather than an
/// error; the application never clears the slot itself.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordStore for JsonFileStore {
    fn load(&self) -> Result<Vec<WordRecord>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_str(&raw) {
            Ok(words) => Ok(words),
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "word store is not a valid word collection, treating as empty"
                );
                Ok(Vec::new())
            }
        }
    }

    fn save(&self, words: &[WordRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(words)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-process word store. Single-threaded use only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    words: RefCell<Vec<WordRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_words(words: Vec<WordRecord>) -> Self {
        Self {
            words: RefCell::new(words),
        }
    }
}

impl WordStore for MemoryStore {
    fn load(&self) -> Result<Vec<WordRecord>> {
        Ok(self.words.borrow().clone())
    }

    fn save(&self, words: &[WordRecord]) -> Result<()> {
        *self.words.borrow_mut() = words.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn record(id: &str, word: &str, definition: &str) -> WordRecord {
        WordRecord::new(id.into(), word.into(), definition.into())
    }

    #[test]
    fn missing_slot_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("words.json"));
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("words.json"));
        let words = vec![record("1", "cat", "a feline"), record("2", "dog", "a canine")];

        store.save(&words).unwrap();
        assert_eq!(store.load().unwrap(), words);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/words.json"));

        store.save(&[record("1", "cat", "a feline")]).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_slot_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, "{not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn incompatible_shape_loads_as_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("words.json");
        fs::write(&path, r#"[{"something": "else"}]"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert_eq!(store.load().unwrap(), vec![]);
    }

    #[test]
    fn save_overwrites_whole_slot() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("words.json"));

        store
            .save(&[record("1", "cat", "a feline"), record("2", "dog", "a canine")])
            .unwrap();
        store.save(&[record("3", "owl", "a bird")]).unwrap();

        let words = store.load().unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].word, "owl");
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());

        store.save(&[record("1", "cat", "a feline")]).unwrap();
        assert_eq!(store.load().unwrap()[0].word, "cat");
    }
}
