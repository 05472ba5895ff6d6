//! Session driver.
//!
//! Runs quiz items through [`prompt`] one at a time, keeps the score, and
//! stops at the first deadline that passes without an answer.

use std::fmt;
use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::answers::AnswerSource;
use crate::model::{Outcome, QuizItem, Score};
use crate::prompt::prompt;
use crate::report::SessionReport;

/// Observer for session progress.
pub trait SessionReporter: Send + Sync {
    fn on_question(&self, item: &QuizItem);
    fn on_outcome(&self, item: &QuizItem, outcome: Outcome);
    fn on_complete(&self, report: &SessionReport);
}

/// No-op session reporter.
pub struct NoopReporter;

impl SessionReporter for NoopReporter {
    fn on_question(&self, _: &QuizItem) {}
    fn on_outcome(&self, _: &QuizItem, _: Outcome) {}
    fn on_complete(&self, _: &SessionReport) {}
}

/// Where the driver is in a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Ready,
    Prompting,
    Scoring,
    /// A question timed out; terminal.
    Halted,
    /// Every item was answered; terminal.
    Done,
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionState::Halted | SessionState::Done)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Ready => write!(f, "ready"),
            SessionState::Prompting => write!(f, "prompting"),
            SessionState::Scoring => write!(f, "scoring"),
            SessionState::Halted => write!(f, "halted"),
            SessionState::Done => write!(f, "done"),
        }
    }
}

/// A single pass over a quiz.
#[derive(Debug)]
pub struct QuizSession {
    timeout: Duration,
    state: SessionState,
    score: Score,
}

impl QuizSession {
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            state: SessionState::Ready,
            score: Score::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> Score {
        self.score
    }

    fn transition(&mut self, next: SessionState) {
        tracing::trace!("session {} -> {}", self.state, next);
        self.state = next;
    }

    /// Ask every item in order until the items run out or one times out.
    ///
    /// A session runs once; calling `run` again after it reached a terminal
    /// state returns the same report figures without prompting.
    pub async fn run(
        &mut self,
        items: &[QuizItem],
        answers: &mut dyn AnswerSource,
        reporter: &dyn SessionReporter,
    ) -> SessionReport {
        let id = Uuid::new_v4();
        let started_at = chrono::Utc::now();
        let start = Instant::now();

        if self.state == SessionState::Ready {
            for item in items {
                self.transition(SessionState::Prompting);
                let outcome = prompt(item, self.timeout, answers, reporter).await;

                self.transition(SessionState::Scoring);
                if outcome == Outcome::TimedOut {
                    self.transition(SessionState::Halted);
                    break;
                }
                self.score.record(outcome);
            }

            if !self.state.is_terminal() {
                self.transition(SessionState::Done);
            }
        }

        let report = SessionReport::new(
            id,
            started_at,
            items.len(),
            self.score,
            self.state == SessionState::Halted,
            start.elapsed().as_millis() as u64,
        );

        tracing::info!(
            "session {} {}: {}/{} correct",
            report.id,
            self.state,
            report.correct,
            report.total
        );
        reporter.on_complete(&report);
        report
    }
}
