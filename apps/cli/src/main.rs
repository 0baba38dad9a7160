//! vocab-master CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use vocab_core::types::StudyMode;
use vocab_core::JsonFileStore;

mod commands;

#[derive(Parser)]
#[command(name = "vocab-master", version, about = "Vocabulary flashcard trainer")]
struct Cli {
    /// Directory holding the word collection (defaults to the local data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard: collection totals and recent words
    Stats,

    /// Import words from a CSV file or pasted content, with a preview
    Import {
        /// CSV file with one word,definition pair per line
        #[arg(required_unless_present = "paste")]
        file: Option<PathBuf>,

        /// Read pasted content from stdin instead of a file
        #[arg(long)]
        paste: bool,

        /// Save the preview without the interactive prompt
        #[arg(long)]
        yes: bool,
    },

    /// Add a single word and definition
    Add {
        word: String,
        definition: String,
    },

    /// Run a flashcard study session
    Study {
        /// Study direction: word-to-definition or definition-to-word
        #[arg(long, default_value = "word-to-definition", value_parser = parse_mode)]
        mode: StudyMode,
    },
}

fn parse_mode(s: &str) -> Result<StudyMode, String> {
    StudyMode::from_str(s)
        .ok_or_else(|| format!("unknown mode: {s} (expected word-to-definition or definition-to-word)"))
}

/// The persisted slot lives in one JSON file under the data directory.
fn store_path(data_dir: Option<PathBuf>) -> PathBuf {
    data_dir
        .unwrap_or_else(|| {
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("vocab-master")
        })
        .join("words.json")
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vocab_core=info".parse().unwrap())
                .add_directive("vocab_master_cli=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = JsonFileStore::new(store_path(cli.data_dir));

    let result = match cli.command {
        Commands::Stats => commands::stats::execute(&store),
        Commands::Import { file, paste, yes } => commands::import::execute(&store, file, paste, yes),
        Commands::Add { word, definition } => commands::add::execute(&store, &word, &definition),
        Commands::Study { mode } => commands::study::execute(&store, mode),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
