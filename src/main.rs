mod classify;
mod cluster;
mod extract;
mod report;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use classify::Taxonomy;

#[derive(Parser)]
#[command(name = "bookmark_clusters", about = "Cluster a browser bookmarks export by topic")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a bookmarks HTML export, classify, and write the JSON report
    Run {
        /// Bookmarks export file
        #[arg(default_value = "bookmarks.html")]
        input: PathBuf,
        /// JSON report path
        #[arg(short, long, default_value = "bookmarks_data.json")]
        output: PathBuf,
        /// Clusters to show in the console summary
        #[arg(long, default_value = "10")]
        top: usize,
    },
    /// Classify a single URL and show the per-category scores
    Classify {
        url: String,
        /// Bookmark title to score alongside the URL
        #[arg(short, long, default_value = "")]
        title: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let taxonomy = Taxonomy::builtin();

    match cli.command {
        Commands::Run { input, output, top } => {
            let html = std::fs::read_to_string(&input)
                .with_context(|| format!("reading {}", input.display()))?;

            let bookmarks: Vec<_> = extract::parse_bookmarks(&html)
                .map(|raw| taxonomy.label(raw))
                .collect();
            info!("extracted {} bookmarks from {}", bookmarks.len(), input.display());

            let report = report::Report::build(bookmarks);
            let json = serde_json::to_string_pretty(&report)?;
            std::fs::write(&output, json)
                .with_context(|| format!("writing {}", output.display()))?;

            report.print_summary(top);
            println!("Report written to {}", output.display());
            Ok(())
        }
        Commands::Classify { url, title } => {
            let domain = extract::domain_of(&url);
            let tag = taxonomy.classify(&url, &title, &domain);
            println!("{}", tag);

            let scores = taxonomy.scores(&url, &title, &domain);
            if scores.is_empty() {
                println!("  (no category terms matched)");
            }
            for (name, score) in scores {
                println!("  {:<20} {:>3}", name, score);
            }
            Ok(())
        }
    }
}
