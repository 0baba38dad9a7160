//! CLI integration tests using assert_cmd.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use vocab_core::{JsonFileStore, WordStore};

fn vocab_master(data_dir: &Path) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("vocab-master").unwrap();
    cmd.arg("--data-dir").arg(data_dir);
    cmd
}

fn slot(data_dir: &Path) -> JsonFileStore {
    JsonFileStore::new(data_dir.join("words.json"))
}

fn write_csv(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn stats_on_empty_collection() {
    let dir = TempDir::new().unwrap();

    vocab_master(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Words"))
        .stdout(predicate::str::contains("No words yet"));
}

#[test]
fn add_then_stats() {
    let dir = TempDir::new().unwrap();

    vocab_master(dir.path())
        .arg("add")
        .arg("cat")
        .arg("a small domesticated feline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"cat\""));

    vocab_master(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("cat - a small domesticated feline"))
        .stdout(predicate::str::contains("Learning progress: 0 of 1"));
}

#[test]
fn add_rejects_blank_word() {
    let dir = TempDir::new().unwrap();

    vocab_master(dir.path())
        .arg("add")
        .arg("   ")
        .arg("a definition")
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-empty"));
}

#[test]
fn import_file_with_header_and_malformed_lines() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        dir.path(),
        "words.csv",
        "Word,Definition\ndog,a domesticated canine\nonlyoneword\n\"cat\",\"a small domesticated feline\"\n,missing\n",
    );

    vocab_master(dir.path())
        .arg("import")
        .arg(&csv)
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview (2 words)"))
        .stdout(predicate::str::contains("Saved 2 word(s)."));

    let words = slot(dir.path()).load().unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].word, "dog");
    assert_eq!(words[1].word, "cat");
}

#[test]
fn import_rejects_non_csv_file() {
    let dir = TempDir::new().unwrap();
    let txt = write_csv(dir.path(), "words.txt", "dog,a domesticated canine\n");

    vocab_master(dir.path())
        .arg("import")
        .arg(&txt)
        .assert()
        .success()
        .stdout(predicate::str::contains("not a CSV file"));

    assert!(slot(dir.path()).load().unwrap().is_empty());
}

#[test]
fn import_pasted_content() {
    let dir = TempDir::new().unwrap();

    vocab_master(dir.path())
        .arg("import")
        .arg("--paste")
        .arg("--yes")
        .write_stdin("dog,a domesticated canine\ncat,a small domesticated feline\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 2 word(s)."));
}

#[test]
fn import_preview_supports_dropping_entries() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        dir.path(),
        "words.csv",
        "dog,a domesticated canine\ncat,a small domesticated feline\n",
    );

    vocab_master(dir.path())
        .arg("import")
        .arg(&csv)
        .write_stdin("drop 1\nsave\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dropped \"dog\""))
        .stdout(predicate::str::contains("Saved 1 word(s)."));

    let words = slot(dir.path()).load().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "cat");
}

#[test]
fn import_can_be_cancelled() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), "words.csv", "dog,a domesticated canine\n");

    vocab_master(dir.path())
        .arg("import")
        .arg(&csv)
        .write_stdin("cancel\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Import cancelled."));

    assert!(slot(dir.path()).load().unwrap().is_empty());
}

#[test]
fn reimport_duplicates_records() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), "words.csv", "dog,a domesticated canine\n");

    for _ in 0..2 {
        vocab_master(dir.path())
            .arg("import")
            .arg(&csv)
            .arg("--yes")
            .assert()
            .success();
    }

    let words = slot(dir.path()).load().unwrap();
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].word, "dog");
    assert_eq!(words[1].word, "dog");
}

#[test]
fn study_without_words_points_at_import() {
    let dir = TempDir::new().unwrap();

    vocab_master(dir.path())
        .arg("study")
        .assert()
        .success()
        .stdout(predicate::str::contains("No words available"));
}

#[test]
fn study_end_to_end_in_word_mode() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(
        dir.path(),
        "words.csv",
        "dog,a domesticated canine\ncat,a small domesticated feline\n",
    );

    vocab_master(dir.path())
        .arg("import")
        .arg(&csv)
        .arg("--yes")
        .assert()
        .success();

    vocab_master(dir.path())
        .arg("study")
        .arg("--mode")
        .arg("definition-to-word")
        .write_stdin("dog\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt: a domesticated canine"))
        .stdout(predicate::str::contains("Correct!"))
        .stdout(predicate::str::contains("Session: 1/1 correct"));

    let words = slot(dir.path()).load().unwrap();
    assert_eq!(words[0].attempts, 1);
    assert_eq!(words[0].correct, 1);
    assert!(!words[0].learned);
    assert_eq!(words[1].attempts, 0);
}

#[test]
fn study_scores_wrong_answers() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), "words.csv", "dog,a domesticated canine\n");

    vocab_master(dir.path())
        .arg("import")
        .arg(&csv)
        .arg("--yes")
        .assert()
        .success();

    vocab_master(dir.path())
        .arg("study")
        .arg("--mode")
        .arg("definition-to-word")
        .write_stdin("cat\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect."))
        .stdout(predicate::str::contains("Answer: dog"))
        .stdout(predicate::str::contains("Session: 0/1 correct"));

    let words = slot(dir.path()).load().unwrap();
    assert_eq!(words[0].attempts, 1);
    assert_eq!(words[0].correct, 0);
}

#[test]
fn reveal_does_not_score_an_attempt() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), "words.csv", "dog,a domesticated canine\n");

    vocab_master(dir.path())
        .arg("import")
        .arg(&csv)
        .arg("--yes")
        .assert()
        .success();

    vocab_master(dir.path())
        .arg("study")
        .write_stdin(":reveal\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Answer: a domesticated canine"))
        .stdout(predicate::str::contains("Session: 0/0 correct"));

    let words = slot(dir.path()).load().unwrap();
    assert_eq!(words[0].attempts, 0);
}

#[test]
fn study_mode_can_be_toggled_mid_session() {
    let dir = TempDir::new().unwrap();
    let csv = write_csv(dir.path(), "words.csv", "dog,a domesticated canine\n");

    vocab_master(dir.path())
        .arg("import")
        .arg(&csv)
        .arg("--yes")
        .assert()
        .success();

    vocab_master(dir.path())
        .arg("study")
        .write_stdin(":mode\ndog\n:quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode: definition-to-word"))
        .stdout(predicate::str::contains("Prompt: a domesticated canine"))
        .stdout(predicate::str::contains("Correct!"));
}

#[test]
fn help_output() {
    let dir = TempDir::new().unwrap();

    vocab_master(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Vocabulary flashcard trainer"));
}

#[test]
fn version_output() {
    let dir = TempDir::new().unwrap();

    vocab_master(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("vocab-master"));
}
