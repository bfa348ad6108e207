//! gh-impact CLI
//!
//! Generates impact-weighted GitHub contribution heatmaps.
//! Fetches real activity (PRs, reviews, issues), scores it, and renders
//! a static SVG calendar heatmap.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use gh_impact::commands::{execute_generate, validate_args, GenerateArgs};
use gh_impact::utils::config::{DEFAULT_WINDOW_DAYS, SCHEMA_VERSION};

/// gh-impact - Impact-weighted GitHub contribution heatmaps
#[derive(Parser, Debug)]
#[command(name = "gh-impact")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch activity and generate the heatmap SVG
    Generate {
        /// GitHub personal access token
        #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
        token: String,

        /// GitHub username to report on
        #[arg(short, long, env = "GITHUB_USERNAME")]
        user: String,

        /// Output path for the SVG heatmap
        #[arg(short, long, default_value = "contributions.svg")]
        output: PathBuf,

        /// Output path for a JSON report (optional)
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// Trailing window length in days
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: i64,

        /// Heatmap title
        #[arg(long)]
        title: Option<String>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Generate {
            token,
            user,
            output,
            report,
            days,
            title,
            summary,
        } => {
            let args = GenerateArgs {
                token,
                username: user,
                output_svg: output,
                output_report: report,
                days,
                title,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            // Execute generation
            execute_generate(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Validate a report JSON file
///
/// **Private** - internal command implementation
fn validate_report_file(file_path: PathBuf) -> Result<()> {
    use gh_impact::output::read_report;

    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  User: {}", report.username);
    println!("  Window: {} days", report.window_days);
    println!("  Impact Score: {}", report.metrics.impact_score);
    println!("  Skipped Repos: {}", report.skipped_repos.len());

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("gh-impact v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Impact-weighted GitHub contribution heatmaps.");
}
