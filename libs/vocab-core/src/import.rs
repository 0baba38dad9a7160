//! Import pipeline: raw delimited text in, validated word records out.
//!
//! # Format
//! ```text
//! word,definition
//! cat,a small domesticated feline
//! dog,"a domesticated canine"
//! ```
//!
//! The header row is optional and detected by keyword. Malformed lines
//! (missing comma, empty field) are dropped without an error.

use chrono::Utc;

use crate::error::StoreError;
use crate::store::WordStore;
use crate::types::WordRecord;

/// Parse delimited text into fresh word records, preserving line order.
///
/// The first non-blank line is treated as a header and discarded when it
/// mentions `word` or `definition` in any casing. Every other line must
/// split on its first comma into two non-empty fields; lines that do not
/// are silently dropped.
pub fn parse_delimited_text(content: &str) -> Vec<WordRecord> {
    let mut records = Vec::new();

    for (idx, line) in content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
    {
        if idx == 0 && is_header(line) {
            continue;
        }

        let Some((word, definition)) = line.split_once(',') else {
            continue;
        };
        let word = clean_field(word);
        let definition = clean_field(definition);
        if word.is_empty() || definition.is_empty() {
            continue;
        }

        records.push(WordRecord::new(fresh_id(idx), word, definition));
    }

    records
}

fn is_header(line: &str) -> bool {
    let lower = line.to_lowercase();
    lower.contains("word") || lower.contains("definition")
}

/// Strip surrounding whitespace and quote characters from one field.
fn clean_field(field: &str) -> String {
    field.trim().trim_matches('"').trim().to_string()
}

/// Time-based id. Unique only within one preview batch; rapid bulk inserts
/// across batches may collide.
fn fresh_id(seq: usize) -> String {
    format!("{}{}", Utc::now().timestamp_millis(), seq)
}

/// The not-yet-saved set of records assembled on the import screen.
///
/// Records can be parsed in bulk, added one at a time, and removed before
/// [`ImportPreview::commit`] appends them to the persisted collection.
#[derive(Debug, Default)]
pub struct ImportPreview {
    records: Vec<WordRecord>,
}

impl ImportPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the preview with the parse result for `content`.
    pub fn parse(&mut self, content: &str) {
        self.records = parse_delimited_text(content);
    }

    /// Add a single manual entry. Returns `false` (and leaves the preview
    /// untouched) when either side is empty after trimming.
    pub fn add_entry(&mut self, word: &str, definition: &str) -> bool {
        let word = word.trim();
        let definition = definition.trim();
        if word.is_empty() || definition.is_empty() {
            return false;
        }

        let id = fresh_id(self.records.len());
        self.records
            .push(WordRecord::new(id, word.to_string(), definition.to_string()));
        true
    }

    /// Remove one record from the preview by id.
    pub fn remove(&mut self, id: &str) {
        self.records.retain(|record| record.id != id);
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn records(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append the preview to the persisted collection and clear it.
    ///
    /// Append-only: existing records are never merged or deduplicated, so
    /// re-importing a word creates a duplicate with independent statistics.
    /// Returns the number of records saved.
    pub fn commit<S: WordStore>(&mut self, store: &S) -> Result<usize, StoreError> {
        if self.records.is_empty() {
            return Ok(0);
        }

        let mut all = store.load()?;
        let added = self.records.len();
        all.append(&mut self.records);
        store.save(&all)?;

        tracing::debug!(added, total = all.len(), "committed import preview");
        Ok(added)
    }
}
