//! Session report types and their renderings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Score;

/// Summary of one completed quiz session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Unique session identifier.
    pub id: Uuid,
    /// When the session started.
    pub started_at: DateTime<Utc>,
    /// Number of questions loaded for the session.
    pub question_count: usize,
    /// Questions answered correctly.
    pub correct: u32,
    /// Questions that received an answer, right or wrong.
    pub total: u32,
    /// Whether the session was cut short by a deadline.
    pub timed_out: bool,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

impl SessionReport {
    pub fn new(
        id: Uuid,
        started_at: DateTime<Utc>,
        question_count: usize,
        score: Score,
        timed_out: bool,
        duration_ms: u64,
    ) -> Self {
        Self {
            id,
            started_at,
            question_count,
            correct: score.correct,
            total: score.total(),
            timed_out,
            duration_ms,
        }
    }

    /// Plain-text summary, one line per figure.
    pub fn to_text(&self) -> String {
        format!(
            "Correct answers {}\nTotal answers {}\n",
            self.correct, self.total
        )
    }

    /// Pretty-printed JSON summary.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
