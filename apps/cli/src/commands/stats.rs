//! The `vocab-master stats` command: the dashboard screen.

use anyhow::Result;
use comfy_table::Table;
use vocab_core::{DashboardStats, JsonFileStore, WordStore};

pub fn execute(store: &JsonFileStore) -> Result<()> {
    let words = store.load()?;
    let stats = DashboardStats::from_records(&words);

    let mut table = Table::new();
    table.set_header(vec!["Total Words", "Learned", "In Progress", "Accuracy"]);
    table.add_row(vec![
        stats.total.to_string(),
        stats.learned.to_string(),
        stats.in_progress.to_string(),
        format!("{}%", stats.accuracy),
    ]);
    println!("{table}");

    if stats.total == 0 {
        println!("\nNo words yet. Run `vocab-master import` or `vocab-master add` to get started.");
        return Ok(());
    }

    println!(
        "\nLearning progress: {} of {} words learned ({}%)",
        stats.learned,
        stats.total,
        stats.progress_percent()
    );

    println!("\nRecent words:");
    for word in words.iter().rev().take(5) {
        let tag = if word.learned { "Learned" } else { "Learning" };
        println!("  {} - {}  [{}]", word.word, word.definition, tag);
    }

    Ok(())
}
