//! Core vocabulary-trainer library shared by the vocab-master applications.
//!
//! Provides:
//! - Word record types and session bookkeeping
//! - Delimited-text import pipeline with a pre-save preview
//! - Answer judging for both study directions
//! - Study session state machine with write-through persistence
//! - Dashboard statistics aggregation

pub mod error;
pub mod import;
pub mod judge;
pub mod session;
pub mod stats;
pub mod store;
pub mod types;

pub use error::{SessionError, StoreError};
pub use import::{parse_delimited_text, ImportPreview};
pub use judge::judge;
pub use session::{StudySession, LEARNED_THRESHOLD};
pub use stats::DashboardStats;
pub use store::{JsonFileStore, MemoryStore, WordStore};
pub use types::{QuestionState, SessionStats, StudyMode, WordRecord};
