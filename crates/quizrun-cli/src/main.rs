//! quizrun CLI — a timed quiz in the terminal.

use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use quizrun_core::answers::stdin_answers;
use quizrun_core::session::QuizSession;
use quizrun_core::source::load_quiz;

mod config;
mod console;

use console::ConsoleReporter;

#[derive(Parser)]
#[command(name = "quizrun", version, about = "Timed quiz from a CSV of questions")]
struct Cli {
    /// A csv file with questions, one `question,answer` per line [default: problems.csv]
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Seconds allowed per question, minimum 1; running out ends the quiz [default: 30]
    #[arg(long)]
    timeout: Option<u64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Summary format
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    format: SummaryFormat,

    /// Start with the first question instead of waiting for enter
    #[arg(long)]
    no_start_prompt: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("quizrun=warn,quizrun_core=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config_from(cli.config.as_deref())?;

    let csv_path = cli.csv.unwrap_or(config.csv);
    let timeout_secs = cli.timeout.unwrap_or(config.timeout_secs);
    anyhow::ensure!(timeout_secs >= 1, "timeout must be at least 1 second");

    // Load everything up front so a bad file fails before the first question.
    let items = load_quiz(&csv_path)?;
    tracing::debug!(
        "{} questions from {}, {}s each",
        items.len(),
        csv_path.display(),
        timeout_secs
    );

    let mut answers = stdin_answers().context("failed to start input reader")?;
    let reporter = ConsoleReporter;

    if config.start_prompt && !cli.no_start_prompt {
        console::wait_for_start(&mut answers).await;
    }

    let mut session = QuizSession::new(Duration::from_secs(timeout_secs));
    let report = session.run(&items, &mut answers, &reporter).await;

    match cli.format {
        SummaryFormat::Text => print!("{}", report.to_text()),
        SummaryFormat::Json => {
            let json = report
                .to_json()
                .context("failed to serialize session report")?;
            println!("{json}");
        }
    }

    Ok(())
}
