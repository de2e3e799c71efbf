//! sassdoc-theme: HTML theme for SassDoc with built-in search.
//!
//! Generates a documentation page from SassDoc's parsed data, with a fuzzy
//! search index embedded for the in-page client.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sassdoc_theme::config::ThemeConfig;

#[derive(Parser)]
#[command(name = "sassdoc-theme")]
#[command(author, version, about = "SassDoc theme with built-in search", long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the documentation site
    Build {
        /// SassDoc data file (JSON)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, default_value = "sassdoc")]
        output: PathBuf,

        /// Theme configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "html")]
        format: OutputFormat,
    },

    /// Search a built site
    Search {
        /// Output directory of a build
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Search query (e.g., "button", "type:mixin", "colou*")
        #[arg(value_name = "QUERY")]
        query: String,

        /// Maximum results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Edit distance for typo tolerance
        #[arg(short = 'd', long, default_value = "1")]
        distance: u8,
    },

    /// Validate SassDoc data without writing anything
    Check {
        /// SassDoc data file (JSON)
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Theme configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// HTML page plus search index
    Html,
    /// Search index only (for tooling integration)
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Build {
            input,
            output,
            config,
            format,
        } => {
            let theme = ThemeConfig::load(config.as_deref())?;
            let summary = sassdoc_theme::build::run(sassdoc_theme::build::BuildConfig {
                input,
                output,
                format: match format {
                    OutputFormat::Html => sassdoc_theme::render::Format::Html,
                    OutputFormat::Json => sassdoc_theme::render::Format::Json,
                },
                theme,
            })?;
            tracing::info!(
                "Indexed {} of {} items ({} terms)",
                summary.documents,
                summary.items,
                summary.terms
            );
        }

        Commands::Search {
            dir,
            query,
            limit,
            distance,
        } => {
            let hits = sassdoc_theme::search::run(sassdoc_theme::search::SearchConfig {
                dir,
                query,
                limit,
                edit_distance: distance,
            })?;
            for hit in hits {
                println!("{}", hit);
            }
        }

        Commands::Check { input, config } => {
            let theme = ThemeConfig::load(config.as_deref())?;
            let report =
                sassdoc_theme::check::run(sassdoc_theme::check::CheckConfig { input, theme })?;
            println!("{}", report);
            if !report.is_ok() {
                bail!("{} items cannot be indexed", report.problems.len());
            }
        }
    }

    Ok(())
}
