//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};

/// One word/definition pair with its mastery statistics.
///
/// Records are created by the import pipeline and mutated in place by the
/// study session. `correct <= attempts` holds at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    pub id: String,
    pub word: String,
    pub definition: String,
    pub learned: bool,
    pub attempts: u32,
    pub correct: u32,
}

impl WordRecord {
    /// Create a fresh, unstudied record.
    pub fn new(id: String, word: String, definition: String) -> Self {
        Self {
            id,
            word,
            definition,
            learned: false,
            attempts: 0,
            correct: 0,
        }
    }

    /// Per-word accuracy as a rounded percentage, 0 when never attempted.
    pub fn accuracy(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        (100.0 * self.correct as f64 / self.attempts as f64).round() as u32
    }
}

/// Direction of a study question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StudyMode {
    /// Prompt shows the word; the definition is the expected answer.
    WordToDefinition,
    /// Prompt shows the definition; the word is the expected answer.
    DefinitionToWord,
}

impl Default for StudyMode {
    fn default() -> Self {
        Self::WordToDefinition
    }
}

impl StudyMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WordToDefinition => "word-to-definition",
            Self::DefinitionToWord => "definition-to-word",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "word-to-definition" => Some(Self::WordToDefinition),
            "definition-to-word" => Some(Self::DefinitionToWord),
            _ => None,
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::WordToDefinition => Self::DefinitionToWord,
            Self::DefinitionToWord => Self::WordToDefinition,
        }
    }

    /// The side of the record shown to the user.
    pub fn prompt<'a>(&self, record: &'a WordRecord) -> &'a str {
        match self {
            Self::WordToDefinition => &record.word,
            Self::DefinitionToWord => &record.definition,
        }
    }

    /// The side of the record the answer is scored against.
    pub fn expected<'a>(&self, record: &'a WordRecord) -> &'a str {
        match self {
            Self::WordToDefinition => &record.definition,
            Self::DefinitionToWord => &record.word,
        }
    }
}

/// State of the question currently on screen.
///
/// `judgment` is `None` when the answer was revealed without scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionState {
    Unanswered,
    Revealed { judgment: Option<bool> },
}

/// Session-level counters, independent of per-record statistics.
///
/// Not persisted; zeroed on an explicit session reset only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub correct: u32,
    pub total: u32,
}

impl SessionStats {
    pub fn record(&mut self, correct: bool) {
        self.total += 1;
        if correct {
            self.correct += 1;
        }
    }

    /// Session accuracy as a rounded percentage, 0 before the first answer.
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (100.0 * self.correct as f64 / self.total as f64).round() as u32
    }
}
