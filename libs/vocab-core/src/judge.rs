//! Answer judging for the study loop.

use crate::types::{StudyMode, WordRecord};

/// Judge a free-text answer against `record` for the given mode.
///
/// Callers must only judge non-blank answers; an empty answer would trivially
/// satisfy the containment rule.
///
/// - `WordToDefinition` is deliberately loose: the answer and the definition
///   match when either contains the other, case-insensitively.
/// - `DefinitionToWord` requires case-insensitive equality with the word.
pub fn judge(answer: &str, mode: StudyMode, record: &WordRecord) -> bool {
    let answer = normalize(answer);
    match mode {
        StudyMode::WordToDefinition => {
            let definition = normalize(&record.definition);
            answer.contains(&definition) || definition.contains(&answer)
        }
        StudyMode::DefinitionToWord => answer == normalize(&record.word),
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
