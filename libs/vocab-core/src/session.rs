//! The study session state machine.
//!
//! One record is on screen at a time. Each question moves from
//! [`QuestionState::Unanswered`] to [`QuestionState::Revealed`] either by
//! judging a submitted answer or by revealing without scoring; advancing to
//! the next record starts over at `Unanswered`. The cursor wraps at the end
//! of the collection, so a session never terminates on its own.

use crate::error::{SessionError, StoreError};
use crate::judge::judge;
use crate::store::WordStore;
use crate::types::{QuestionState, SessionStats, StudyMode, WordRecord};

/// Correct judged answers required before a record counts as learned.
pub const LEARNED_THRESHOLD: u32 = 3;

/// A flashcard run over the persisted collection.
///
/// The collection is loaded once at the start and written back in full after
/// every judged answer. Session counters live only as long as the value.
pub struct StudySession<S: WordStore> {
    store: S,
    words: Vec<WordRecord>,
    index: usize,
    mode: StudyMode,
    question: QuestionState,
    stats: SessionStats,
}

impl<S: WordStore> StudySession<S> {
    /// Load the collection and start at the first record.
    pub fn begin(store: S, mode: StudyMode) -> Result<Self, SessionError> {
        let words = store.load()?;
        if words.is_empty() {
            return Err(SessionError::NoWords);
        }

        tracing::debug!(words = words.len(), mode = mode.as_str(), "study session started");
        Ok(Self {
            store,
            words,
            index: 0,
            mode,
            question: QuestionState::Unanswered,
            stats: SessionStats::default(),
        })
    }

    /// Number of records in the session. Never zero: the constructor rejects
    /// empty collections and records are not removed during study.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Zero-based cursor position.
    pub fn position(&self) -> usize {
        self.index
    }

    pub fn mode(&self) -> StudyMode {
        self.mode
    }

    pub fn question(&self) -> QuestionState {
        self.question
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// The record currently on screen.
    pub fn current(&self) -> &WordRecord {
        &self.words[self.index]
    }

    /// The side of the current record shown as the prompt.
    pub fn prompt(&self) -> &str {
        self.mode.prompt(self.current())
    }

    /// The side of the current record the answer is scored against.
    pub fn expected(&self) -> &str {
        self.mode.expected(self.current())
    }

    /// Judge `answer` for the current record.
    ///
    /// Returns `Ok(None)` without judging when the answer is blank or the
    /// question is already revealed. Otherwise updates the record's
    /// statistics, promotes it to learned once its correct count reaches
    /// [`LEARNED_THRESHOLD`], bumps the session counters, persists the whole
    /// collection, and reveals the answer.
    pub fn submit(&mut self, answer: &str) -> Result<Option<bool>, StoreError> {
        if self.question != QuestionState::Unanswered || answer.trim().is_empty() {
            return Ok(None);
        }

        let correct = judge(answer, self.mode, self.current());

        let word = &mut self.words[self.index];
        word.attempts += 1;
        if correct {
            word.correct += 1;
            if word.correct >= LEARNED_THRESHOLD {
                word.learned = true;
            }
        }

        self.stats.record(correct);
        self.question = QuestionState::Revealed {
            judgment: Some(correct),
        };
        self.store.save(&self.words)?;

        Ok(Some(correct))
    }

    /// Show the answer without scoring an attempt. No statistics change.
    pub fn reveal(&mut self) {
        if self.question == QuestionState::Unanswered {
            self.question = QuestionState::Revealed { judgment: None };
        }
    }

    /// Move to the next record, wrapping at the end of the collection.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.words.len();
        self.question = QuestionState::Unanswered;
    }

    /// Flip the study direction. The current question starts over; session
    /// counters are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.question = QuestionState::Unanswered;
    }

    /// Back to the first record with fresh session counters.
    pub fn reset(&mut self) {
        self.index = 0;
        self.question = QuestionState::Unanswered;
        self.stats = SessionStats::default();
    }
}
