//! The `vocab-master add` command.

use anyhow::{bail, Result};
use vocab_core::{ImportPreview, JsonFileStore};

pub fn execute(store: &JsonFileStore, word: &str, definition: &str) -> Result<()> {
    let mut preview = ImportPreview::new();
    if !preview.add_entry(word, definition) {
        bail!("word and definition must both be non-empty");
    }

    preview.commit(store)?;
    println!("Added \"{}\" to your collection.", word.trim());
    Ok(())
}
