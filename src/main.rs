//! # Podcast Dashboard Entry Point
//!
//! Runs a CLI command when one is given, otherwise opens the dashboard:
//!
//! ```bash
//! podcast-dashboard categories
//! podcast-dashboard top Sports -o top_10_podcasts.csv
//! podcast-dashboard --source applepodcasts.csv
//! ```
//!
//! Either way the dataset is loaded exactly once, before anything else runs.
//! A load failure is fatal: it is logged and the process exits non-zero.

#![warn(clippy::all, rust_2018_idioms)]

mod cli;

use anyhow::{Context as _, Result};
use clap::Parser as _;
use podcast_dashboard::{config, gui, logging, podcasts};
use std::sync::Arc;

fn main() -> Result<()> {
    if let Err(e) = logging::init() {
        logging::init_console();
        tracing::warn!("File logging unavailable: {e:#}");
    }

    let cli = cli::Cli::parse();
    let settings = config::load_settings();
    let source = settings.resolve_source(cli.source.as_deref());

    let table = match podcasts::load_table(&source) {
        Ok(table) => Arc::new(table),
        Err(e) => {
            tracing::error!("Failed to load podcast table: {e}");
            return Err(e).with_context(|| format!("Cannot start without the dataset at {source}"));
        }
    };

    if let Some(command) = cli.command {
        return cli::run_command(command, &table, &settings);
    }

    gui::run(table, settings).map_err(|e| anyhow::anyhow!("Dashboard failed: {e}"))
}
