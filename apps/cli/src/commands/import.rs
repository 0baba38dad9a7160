//! The `vocab-master import` command.
//!
//! Parses a CSV file or pasted content into a preview, lets the user drop
//! entries, and appends the rest to the collection.

use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use vocab_core::{ImportPreview, JsonFileStore};

pub fn execute(store: &JsonFileStore, file: Option<PathBuf>, paste: bool, yes: bool) -> Result<()> {
    let content = match file {
        Some(path) => {
            if !is_csv(&path) {
                tracing::warn!(path = %path.display(), "not a .csv file, nothing imported");
                println!("{} is not a CSV file; nothing imported.", path.display());
                return Ok(());
            }
            std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        None if paste => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            content
        }
        None => unreachable!("clap requires a file unless --paste is set"),
    };

    let mut preview = ImportPreview::new();
    preview.parse(&content);

    if preview.is_empty() {
        println!("No words parsed.");
        return Ok(());
    }

    print_preview(&preview);

    if yes {
        let added = preview.commit(store)?;
        println!("Saved {added} word(s).");
        return Ok(());
    }

    review_loop(store, preview)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn print_preview(preview: &ImportPreview) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Word", "Definition"]);
    for (idx, record) in preview.records().iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            record.word.clone(),
            record.definition.clone(),
        ]);
    }
    println!("Preview ({} words):", preview.len());
    println!("{table}");
}

/// Let the user trim the preview before saving.
///
/// Commands: `save`, `drop <n>`, `clear`, `cancel`. End of input cancels.
fn review_loop(store: &JsonFileStore, mut preview: ImportPreview) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("Save {} word(s)? [save / drop <n> / clear / cancel] ", preview.len());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            println!("\nImport cancelled.");
            return Ok(());
        };
        let line = line?;
        let input = line.trim();

        match input {
            "save" | "s" => {
                let added = preview.commit(store)?;
                println!("Saved {added} word(s).");
                return Ok(());
            }
            "clear" => {
                preview.clear();
                println!("Preview cleared; nothing imported.");
                return Ok(());
            }
            "cancel" | "q" => {
                println!("Import cancelled.");
                return Ok(());
            }
            _ => {
                if let Some(n) = input.strip_prefix("drop ").and_then(|n| n.parse::<usize>().ok()) {
                    if let Some(record) = preview.records().get(n.wrapping_sub(1)) {
                        let id = record.id.clone();
                        let word = record.word.clone();
                        preview.remove(&id);
                        println!("Dropped \"{word}\".");
                        if preview.is_empty() {
                            println!("Preview is empty; nothing imported.");
                            return Ok(());
                        }
                        print_preview(&preview);
                    } else {
                        println!("No entry #{n}.");
                    }
                } else {
                    println!("Commands: save, drop <n>, clear, cancel");
                }
            }
        }
    }
}
