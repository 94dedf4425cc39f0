//! word-index - writes the sorted distinct words of a text file
//!
//! Usage:
//!   word-index [INPUT] [--output <path>] [--case lowercase|preserve] [--pattern <regex>]
//!
//! Flags that are not given fall back to the `WORD_INDEX_*` environment
//! variables, then to the defaults.

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = cli::Cli::parse();
    let config = cli
        .resolve(|key| std::env::var(key).ok())
        .context("failed to load configuration")?;
    tracing::debug!(?config, "configuration resolved");

    let report = wordtree::index::run(&config)
        .with_context(|| format!("failed to index {}", config.input.display()))?;

    tracing::info!(
        "Wrote {} distinct words from {} to {}",
        report.distinct_words,
        config.input.display(),
        config.output.display()
    );
    Ok(())
}
