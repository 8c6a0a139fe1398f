use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use podcast_dashboard::config::DashboardSettings;
use podcast_dashboard::export;
use podcast_dashboard::podcasts::{self, PodcastTable};
use podcast_dashboard::utils::fmt_rating;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "podcast-dashboard",
    about = "Apple Podcasts dashboard: category counts, top podcasts and directories"
)]
pub struct Cli {
    /// Dataset URL or path. Overrides the config file and environment.
    #[arg(long, global = true)]
    pub source: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Number of podcasts per category, largest first
    Categories,
    /// Best rated podcasts of a category
    Top {
        /// Category label, e.g. "Sports"
        category: String,

        /// Number of podcasts to list. Defaults to the configured top_k.
        #[arg(short, long)]
        k: Option<usize>,

        /// Export to this file (.csv or .parquet) instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Alphabetical listing of a category
    Directory {
        /// Category label, e.g. "Sports"
        category: String,

        /// Export to this file (.csv or .parquet) instead of printing
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run_command(
    command: Commands,
    table: &PodcastTable,
    settings: &DashboardSettings,
) -> Result<()> {
    match command {
        Commands::Categories => {
            handle_categories(table);
            Ok(())
        }
        Commands::Top {
            category,
            k,
            output,
        } => handle_top(table, &category, k.unwrap_or(settings.top_k), output),
        Commands::Directory { category, output } => handle_directory(table, &category, output),
    }
}

fn handle_categories(table: &PodcastTable) {
    let counts = podcasts::category_counts(table);
    for (category, count) in counts.sorted_by_count() {
        println!("{count:>8}  {category}");
    }
    println!("{:>8}  total", counts.total());
}

fn handle_top(
    table: &PodcastTable,
    category: &str,
    k: usize,
    output: Option<PathBuf>,
) -> Result<()> {
    let view = podcasts::top_k_by_category(table, category, k);
    if let Some(path) = output {
        export::write_ranked(&view, &path)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        println!("Wrote {} rows to {}", view.len(), path.display());
        return Ok(());
    }

    if view.is_empty() {
        println!("No podcasts in category '{category}'");
    }
    for (rank, entry) in view.iter().enumerate() {
        println!("{:>3}. {}  <{}>", rank + 1, entry.title, entry.link.uri());
    }
    Ok(())
}

fn handle_directory(table: &PodcastTable, category: &str, output: Option<PathBuf>) -> Result<()> {
    let view = podcasts::directory_by_category(table, category);
    if let Some(path) = output {
        export::write_directory(&view, &path)
            .with_context(|| format!("Failed to export to {}", path.display()))?;
        println!("Wrote {} rows to {}", view.len(), path.display());
        return Ok(());
    }

    if view.is_empty() {
        println!("No podcasts in category '{category}'");
    }
    for entry in &view {
        println!(
            "{:>5}  {}  <{}>",
            fmt_rating(entry.avg_rating),
            entry.title,
            entry.link.uri()
        );
    }
    Ok(())
}
