//! CLI for sessview.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sessview_core::config;
use std::path::PathBuf;

use commands::{run_cache, run_classify, run_resolve, run_sessions, run_title};

/// Top-level CLI for sessview.
#[derive(Debug, Parser)]
#[command(name = "sessview")]
#[command(about = "sessview: previews and titles for study-session content", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Show how a content URL would be previewed.
    Classify {
        /// Content URL (any string is accepted).
        url: String,
    },

    /// Resolve the preview image for one or more URLs.
    Resolve {
        /// Content URLs.
        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Normalize a raw session title (plain text or JSON metadata).
    Title {
        /// Raw title value.
        raw: String,
    },

    /// Resolve previews for a whole session list.
    Sessions {
        /// JSON file with session records; defaults to the configured GraphQL endpoint.
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
        /// Records resolved concurrently per batch (default from config).
        #[arg(long, value_name = "N")]
        batch_size: Option<usize>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List the persisted thumbnail cache.
    Cache,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Classify { url } => run_classify(&url),
            CliCommand::Resolve { urls } => run_resolve(&cfg, &urls).await?,
            CliCommand::Title { raw } => run_title(&raw),
            CliCommand::Sessions {
                file,
                batch_size,
                json,
            } => run_sessions(&cfg, file.as_deref(), batch_size, json).await?,
            CliCommand::Cache => run_cache()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
