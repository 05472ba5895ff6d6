//! Quiz loading error types.
//!
//! Both variants are fatal: the binary reports them and exits before any
//! question is shown. Timeouts and wrong answers are not errors, see
//! [`crate::model::Outcome`].

use thiserror::Error;

/// Errors that can occur while loading a quiz.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The resource could not be opened, read, or decoded as CSV.
    #[error("cannot read quiz from {resource}: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: csv::Error,
    },

    /// A record did not have exactly two fields.
    #[error("invalid csv line {line}: expected 2 fields (question,answer), found {found}: {record:?}")]
    MalformedRecord {
        line: u64,
        found: usize,
        record: Vec<String>,
    },
}
