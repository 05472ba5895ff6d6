//! Sources of user answers.
//!
//! The prompt loop races [`AnswerSource::next_line`] against a deadline and
//! drops the losing future, so every implementation must be cancel safe:
//! dropping a pending `next_line` must not consume a line.
//!
//! Blocking readers such as stdin cannot be interrupted, so they are read on
//! a dedicated thread that forwards lines over a channel. Receiving from the
//! channel is cancel safe, and the thread owns the only buffered reader, so
//! an abandoned read never leaves a half-consumed buffer behind.

use std::collections::VecDeque;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

/// Something that yields lines of user input.
#[async_trait]
pub trait AnswerSource: Send {
    /// Wait for the next line of input. Returns `None` at end of input.
    async fn next_line(&mut self) -> Option<String>;
}

/// Answers delivered over an unbounded channel.
pub struct ChannelAnswers {
    rx: mpsc::UnboundedReceiver<String>,
}

impl ChannelAnswers {
    pub fn new(rx: mpsc::UnboundedReceiver<String>) -> Self {
        Self { rx }
    }

    /// Create a connected sender/source pair.
    pub fn channel() -> (mpsc::UnboundedSender<String>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self::new(rx))
    }
}

#[async_trait]
impl AnswerSource for ChannelAnswers {
    async fn next_line(&mut self) -> Option<String> {
        self.rx.recv().await
    }
}

/// Read lines from `reader` on a background thread.
///
/// The thread exits at end of input, on a read error, or once the returned
/// source is dropped and the next line has been read.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<ChannelAnswers>
where
    R: BufRead + Send + 'static,
{
    spawn_reader(move || reader)
}

/// Read lines from the process's standard input on a background thread.
pub fn stdin_answers() -> io::Result<ChannelAnswers> {
    spawn_reader(|| io::stdin().lock())
}

fn spawn_reader<F, R>(open: F) -> io::Result<ChannelAnswers>
where
    F: FnOnce() -> R + Send + 'static,
    R: BufRead,
{
    let (tx, answers) = ChannelAnswers::channel();

    thread::Builder::new()
        .name("quizrun-input".into())
        .spawn(move || {
            let mut reader = open();
            let mut buf = Vec::new();
            loop {
                buf.clear();
                match reader.read_until(b'\n', &mut buf) {
                    Ok(0) => {
                        tracing::debug!("input reached end of stream");
                        break;
                    }
                    Ok(_) => {
                        // Undecodable bytes only spoil this answer, not the ones after it.
                        let line = String::from_utf8_lossy(&buf).into_owned();
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!("failed to read input: {e}");
                        break;
                    }
                }
            }
        })?;

    Ok(answers)
}

/// One step of a [`ScriptedAnswers`] script.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    /// Produce `text` after waiting `after`.
    Line { after: Duration, text: String },
    /// Report end of input.
    Eof,
    /// Never produce anything.
    Silence,
}

/// A scripted answer source for driving sessions without a terminal.
///
/// Delays use `tokio::time`, so tests running with a paused clock resolve
/// them instantly and deterministically. A delay is measured from the call
/// that delivers the line.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    steps: VecDeque<ScriptStep>,
}

impl ScriptedAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `text` after `after`.
    pub fn line(mut self, after: Duration, text: &str) -> Self {
        self.steps.push_back(ScriptStep::Line {
            after,
            text: text.to_string(),
        });
        self
    }

    /// Answer `text` immediately.
    pub fn immediate(self, text: &str) -> Self {
        self.line(Duration::ZERO, text)
    }

    pub fn eof(mut self) -> Self {
        self.steps.push_back(ScriptStep::Eof);
        self
    }

    pub fn silence(mut self) -> Self {
        self.steps.push_back(ScriptStep::Silence);
        self
    }

    /// Steps not yet delivered.
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn next_line(&mut self) -> Option<String> {
        // Steps are only popped once delivered, which keeps this cancel safe.
        match self.steps.front().cloned() {
            Some(ScriptStep::Line { after, text }) => {
                tokio::time::sleep(after).await;
                self.steps.pop_front();
                Some(text)
            }
            Some(ScriptStep::Silence) => std::future::pending().await,
            Some(ScriptStep::Eof) | None => None,
        }
    }
}
