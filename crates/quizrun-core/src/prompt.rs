//! The timed prompt: one question against one deadline.

use std::time::Duration;

use crate::answers::AnswerSource;
use crate::model::{Outcome, QuizItem};
use crate::session::SessionReporter;

/// Ask `item` and wait at most `timeout` for an answer.
///
/// The deadline and the next input line race each other. If the deadline
/// wins, the pending read is dropped and [`Outcome::TimedOut`] is returned;
/// the line it would have produced stays with the source. If input wins, the
/// timer is dropped and can no longer fire. End of input counts as a wrong
/// answer.
pub async fn prompt(
    item: &QuizItem,
    timeout: Duration,
    answers: &mut dyn AnswerSource,
    reporter: &dyn SessionReporter,
) -> Outcome {
    reporter.on_question(item);

    let outcome = tokio::select! {
        biased;

        line = answers.next_line() => match line {
            Some(text) if item.is_answered_by(&text) => Outcome::Correct,
            Some(_) => Outcome::Incorrect,
            None => {
                tracing::debug!("input closed while waiting for an answer");
                Outcome::Incorrect
            }
        },
        () = tokio::time::sleep(timeout) => Outcome::TimedOut,
    };

    tracing::trace!(question = %item.question, %outcome, "prompt resolved");
    reporter.on_outcome(item, outcome);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::{ChannelAnswers, ScriptedAnswers};
    use crate::session::NoopReporter;

    const TIMEOUT: Duration = Duration::from_secs(30);

    fn france() -> QuizItem {
        QuizItem::new("Capital of France", "Paris")
    }

    #[tokio::test(start_paused = true)]
    async fn matching_answer_is_correct() {
        let mut answers = ScriptedAnswers::new().line(Duration::from_secs(3), " paris \n");
        let outcome = prompt(&france(), TIMEOUT, &mut answers, &NoopReporter).await;
        assert_eq!(outcome, Outcome::Correct);
    }

    #[tokio::test(start_paused = true)]
    async fn different_answer_is_incorrect() {
        let mut answers = ScriptedAnswers::new().immediate("Lyon\n");
        let outcome = prompt(&france(), TIMEOUT, &mut answers, &NoopReporter).await;
        assert_eq!(outcome, Outcome::Incorrect);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_line_is_incorrect() {
        let mut answers = ScriptedAnswers::new().immediate("\n");
        let outcome = prompt(&france(), TIMEOUT, &mut answers, &NoopReporter).await;
        assert_eq!(outcome, Outcome::Incorrect);
    }

    #[tokio::test(start_paused = true)]
    async fn end_of_input_is_incorrect_not_timeout() {
        let mut answers = ScriptedAnswers::new().eof();
        let outcome = prompt(&france(), TIMEOUT, &mut answers, &NoopReporter).await;
        assert_eq!(outcome, Outcome::Incorrect);
    }

    #[tokio::test(start_paused = true)]
    async fn silence_times_out() {
        let mut answers = ScriptedAnswers::new().silence();
        let started = tokio::time::Instant::now();
        let outcome = prompt(&france(), TIMEOUT, &mut answers, &NoopReporter).await;
        assert_eq!(outcome, Outcome::TimedOut);
        assert!(started.elapsed() >= TIMEOUT);
    }

    #[tokio::test(start_paused = true)]
    async fn answer_after_deadline_times_out() {
        let mut answers = ScriptedAnswers::new().line(Duration::from_secs(31), "paris");
        let outcome = prompt(&france(), TIMEOUT, &mut answers, &NoopReporter).await;
        assert_eq!(outcome, Outcome::TimedOut);
        // The late line was never consumed by the abandoned read.
        assert_eq!(answers.remaining(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn late_channel_line_stays_queued() {
        let (tx, mut answers) = ChannelAnswers::channel();
        let outcome = prompt(&france(), TIMEOUT, &mut answers, &NoopReporter).await;
        assert_eq!(outcome, Outcome::TimedOut);

        tx.send("paris\n".into()).unwrap();
        assert_eq!(answers.next_line().await.as_deref(), Some("paris\n"));
    }
}
