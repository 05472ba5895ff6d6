//! quizrun-core — Quiz loading, timed prompting, and scoring.
//!
//! This crate holds everything the `quizrun` binary needs apart from
//! argument parsing: the CSV question source, the deadline-bounded prompt,
//! and the session driver that tallies the score.

pub mod answers;
pub mod error;
pub mod model;
pub mod prompt;
pub mod report;
pub mod session;
pub mod source;

pub use error::QuizError;
pub use model::{Outcome, QuizItem, Score};
