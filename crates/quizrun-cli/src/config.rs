//! quizrun configuration.
//!
//! Settings come from, in increasing priority: built-in defaults, a
//! `quizrun.toml` file, the `QUIZRUN_TIMEOUT` environment variable, and
//! command-line flags (applied in `main`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizrun configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizrunConfig {
    /// Path to the question CSV.
    #[serde(default = "default_csv")]
    pub csv: PathBuf,
    /// Seconds allowed per question.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Wait for enter before the first question.
    #[serde(default = "default_true")]
    pub start_prompt: bool,
}

fn default_csv() -> PathBuf {
    PathBuf::from("problems.csv")
}
fn default_timeout() -> u64 {
    30
}
fn default_true() -> bool {
    true
}

impl Default for QuizrunConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            timeout_secs: default_timeout(),
            start_prompt: true,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `quizrun.toml` in the current directory
/// 2. `~/.config/quizrun/config.toml`
pub fn load_config_from(path: Option<&Path>) -> Result<QuizrunConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizrun.toml");
        if local.exists() {
            Some(local)
        } else {
            home_config_path().filter(|p| p.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizrunConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizrunConfig::default(),
    };

    apply_env_overrides(config, |key| std::env::var(key).ok())
}

/// Apply `QUIZRUN_*` overrides looked up through `var`.
fn apply_env_overrides<F>(mut config: QuizrunConfig, var: F) -> Result<QuizrunConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = var("QUIZRUN_TIMEOUT") {
        config.timeout_secs = raw
            .trim()
            .parse()
            .with_context(|| format!("invalid QUIZRUN_TIMEOUT value: '{raw}'"))?;
    }
    Ok(config)
}

fn home_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|h| {
        PathBuf::from(h)
            .join(".config")
            .join("quizrun")
            .join("config.toml")
    })
}
