//! Terminal output for an interactive session.

use quizrun_core::answers::AnswerSource;
use quizrun_core::model::{Outcome, QuizItem};
use quizrun_core::report::SessionReport;
use quizrun_core::session::SessionReporter;

/// Prints questions and timeouts to stdout.
pub struct ConsoleReporter;

impl SessionReporter for ConsoleReporter {
    fn on_question(&self, item: &QuizItem) {
        println!("{}", item.question);
    }

    fn on_outcome(&self, _: &QuizItem, outcome: Outcome) {
        if outcome == Outcome::TimedOut {
            println!("Time is up!");
        }
    }

    fn on_complete(&self, report: &SessionReport) {
        tracing::debug!(
            "session {} finished after {}ms",
            report.id,
            report.duration_ms
        );
    }
}

/// Block until the player presses enter. End of input also starts the quiz.
pub async fn wait_for_start(answers: &mut dyn AnswerSource) {
    println!("Press enter to start");
    if answers.next_line().await.is_none() {
        tracing::debug!("input closed before start");
    }
}
