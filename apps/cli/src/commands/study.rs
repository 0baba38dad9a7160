//! The `vocab-master study` command: the flashcard loop.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use vocab_core::types::{QuestionState, StudyMode};
use vocab_core::{JsonFileStore, SessionError, StudySession};

pub fn execute(store: &JsonFileStore, mode: StudyMode) -> Result<()> {
    let mut session = match StudySession::begin(store, mode) {
        Ok(session) => session,
        Err(SessionError::NoWords) => {
            println!("No words available. Run `vocab-master import` before studying.");
            return Ok(());
        }
        Err(SessionError::Store(err)) => return Err(err.into()),
    };

    println!("Type your answer, or :reveal, :next, :mode, :reset, :quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut show_card = true;

    loop {
        if show_card {
            print_card(&session);
            show_card = false;
        }

        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        match input {
            ":quit" | ":q" => break,
            ":next" | ":n" => {
                session.advance();
                show_card = true;
            }
            ":reveal" | ":r" => {
                session.reveal();
                println!("Answer: {}", session.expected());
            }
            ":mode" | ":m" => {
                session.toggle_mode();
                println!("Mode: {}", session.mode().as_str());
                show_card = true;
            }
            ":reset" => {
                session.reset();
                println!("Session reset.");
                show_card = true;
            }
            ":help" | ":h" => {
                println!("Commands: :reveal, :next, :mode, :reset, :quit");
            }
            _ => match session.submit(input)? {
                Some(correct) => {
                    println!("{}", if correct { "Correct!" } else { "Incorrect." });
                    println!("Answer: {}", session.expected());

                    let word = session.current();
                    println!(
                        "This word: {} attempt(s), {} correct ({}%)",
                        word.attempts,
                        word.correct,
                        word.accuracy()
                    );
                    print_session_line(&session);
                    println!("(:next to continue)");
                }
                None => {
                    if matches!(session.question(), QuestionState::Revealed { .. }) {
                        println!("Answer already shown. :next to continue.");
                    }
                }
            },
        }
    }

    print_session_line(&session);
    Ok(())
}

fn print_card<S: vocab_core::WordStore>(session: &StudySession<S>) {
    println!(
        "\nWord {} of {}  [{}]",
        session.position() + 1,
        session.len(),
        session.mode().as_str()
    );
    println!("Prompt: {}", session.prompt());
}

fn print_session_line<S: vocab_core::WordStore>(session: &StudySession<S>) {
    let stats = session.stats();
    println!(
        "Session: {}/{} correct ({}%)",
        stats.correct,
        stats.total,
        stats.accuracy()
    );
}
