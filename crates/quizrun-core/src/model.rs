//! Core data model types for quizrun.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Normalize an answer for comparison: trim surrounding whitespace and
/// upper-case.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// One question with its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    /// Question text, trimmed.
    pub question: String,
    /// Expected answer, already normalized with [`normalize_answer`].
    pub answer: String,
}

impl QuizItem {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: normalize_answer(answer),
        }
    }

    /// Whether a raw line of user input answers this item.
    pub fn is_answered_by(&self, input: &str) -> bool {
        normalize_answer(input) == self.answer
    }
}

/// The result of prompting a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Correct,
    Incorrect,
    TimedOut,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Correct => write!(f, "correct"),
            Outcome::Incorrect => write!(f, "incorrect"),
            Outcome::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Running tally for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

impl Score {
    /// Number of questions that received an answer.
    pub fn total(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Record an answered outcome. `TimedOut` leaves the tally untouched.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Correct => self.correct += 1,
            Outcome::Incorrect => self.wrong += 1,
            Outcome::TimedOut => {}
        }
    }
}
