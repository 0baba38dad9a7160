//! Read-only dashboard aggregation over the persisted collection.

use serde::Serialize;

use crate::types::WordRecord;

/// Summary statistics for the dashboard screen. Purely derived; computing
/// them never mutates a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub learned: usize,
    pub in_progress: usize,
    /// Overall accuracy across all judged answers, as a rounded percentage.
    pub accuracy: u32,
}

impl DashboardStats {
    pub fn from_records(records: &[WordRecord]) -> Self {
        let total = records.len();
        let learned = records.iter().filter(|r| r.learned).count();

        let attempts: u64 = records.iter().map(|r| u64::from(r.attempts)).sum();
        let correct: u64 = records.iter().map(|r| u64::from(r.correct)).sum();
        let accuracy = if attempts > 0 {
            (100.0 * correct as f64 / attempts as f64).round() as u32
        } else {
            0
        };

        Self {
            total,
            learned,
            in_progress: total - learned,
            accuracy,
        }
    }

    /// Share of the collection marked learned, as a rounded percentage.
    pub fn progress_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (100.0 * self.learned as f64 / self.total as f64).round() as u32
    }
}
