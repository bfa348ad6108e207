//! Generate command implementation.
//!
//! The generate command:
//! 1. Fetches contribution events from GitHub
//! 2. Aggregates them into metrics and a daily histogram
//! 3. Buckets the histogram into a calendar grid
//! 4. Renders the heatmap SVG
//! 5. Writes output files

use crate::github::{EventSource, GitHubClient};
use crate::heatmap::build_calendar_grid;
use crate::metrics::aggregate;
use crate::output::{write_report, write_svg, ContributionReport};
use crate::render::{render_heatmap, RenderConfig};
use crate::utils::config::{MAX_WINDOW_DAYS, SCHEMA_VERSION};
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the generate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// GitHub personal access token
    pub token: String,

    /// GitHub username to report on
    pub username: String,

    /// Output path for the SVG heatmap
    pub output_svg: PathBuf,

    /// Output path for the JSON report (optional)
    pub output_report: Option<PathBuf>,

    /// Trailing window length in days
    pub days: i64,

    /// Heatmap title override
    pub title: Option<String>,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            token: String::new(),
            username: String::new(),
            output_svg: PathBuf::from("contributions.svg"),
            output_report: None,
            days: crate::utils::config::DEFAULT_WINDOW_DAYS,
            title: None,
            print_summary: false,
        }
    }
}

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Generate command arguments
///
/// # Returns
/// Ok if generation succeeds, Err with context if any step fails
///
/// # Errors
/// * GitHub API failures (only a failed repository listing is fatal)
/// * Bucketing or rendering errors
/// * File write errors
pub fn execute_generate(args: GenerateArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Generating contribution heatmap for: {}", args.username);
    info!("Window: last {} days", args.days);

    let now = Utc::now();
    let since = now - Duration::days(args.days);

    // Step 1: Fetch events from GitHub
    info!("Step 1/5: Fetching contribution events...");
    let client = GitHubClient::new(&args.token).context("Failed to create GitHub client")?;
    let source = EventSource::new(&client, &args.username, since, now)
        .context("Invalid time window")?;
    let report = source
        .fetch()
        .context(format!("Failed to fetch events for {}", args.username))?;

    // Step 2: Aggregate into metrics and daily histogram
    info!("Step 2/5: Aggregating {} events...", report.events.len());
    let (metrics, activity) = aggregate(&report.events);
    info!("Metrics: {}", metrics.summary());

    // Step 3: Bucket into the calendar grid
    info!("Step 3/5: Bucketing into calendar grid...");
    let grid = build_calendar_grid(&activity, args.days, now.date_naive())
        .context("Failed to build calendar grid")?;
    debug!("Grid: {} cells in {} weeks", grid.cell_count(), grid.weeks.len());

    // Step 4: Render the SVG
    info!("Step 4/5: Rendering heatmap...");
    let mut config = RenderConfig::new();
    if let Some(title) = &args.title {
        config = config.with_title(title);
    }
    let svg = render_heatmap(&metrics, &grid, Some(&config))
        .context("Failed to render heatmap")?;

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");
    write_svg(&svg, &args.output_svg).context("Failed to write heatmap SVG")?;
    info!("✓ Heatmap written to: {}", args.output_svg.display());

    if let Some(report_path) = &args.output_report {
        let json_report = ContributionReport {
            version: SCHEMA_VERSION.to_string(),
            username: args.username.clone(),
            window_days: args.days,
            metrics: metrics.clone(),
            skipped_repos: report.skipped_repos.clone(),
            generated_at: now.to_rfc3339(),
        };
        write_report(&json_report, report_path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", report_path.display());
    }

    if args.print_summary {
        print_summary(&args, &metrics, report.skipped_repos.len());
    }

    let elapsed = start_time.elapsed();
    info!("Generation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Print a text summary to stdout
///
/// **Private** - internal helper for execute_generate
fn print_summary(args: &GenerateArgs, metrics: &crate::metrics::ContributionMetrics, skipped: usize) {
    println!("\n{}", "=".repeat(72));
    println!("CONTRIBUTION SUMMARY");
    println!("{}", "=".repeat(72));
    println!("User:          {}", args.username);
    println!("Window:        last {} days", args.days);
    println!("PRs Merged:    {}", metrics.prs_merged);
    println!("PRs Opened:    {}", metrics.prs_opened);
    println!("Reviews:       {}", metrics.reviews);
    println!("Issues Opened: {}", metrics.issues_opened);
    println!("Issues Closed: {}", metrics.issues_closed);
    println!("Repos:         {}", metrics.distinct_repos);
    println!("Impact Score:  {}", metrics.impact_score);
    if skipped > 0 {
        println!("Skipped repos: {}", skipped);
    }
    println!("{}", "=".repeat(72));
}

/// Validate generate arguments
///
/// **Public** - can be called before execute_generate for early validation
pub fn validate_args(args: &GenerateArgs) -> Result<()> {
    if args.token.is_empty() {
        anyhow::bail!("GitHub token cannot be empty (set GITHUB_TOKEN)");
    }

    if args.username.is_empty() {
        anyhow::bail!("Username cannot be empty (set GITHUB_USERNAME)");
    }

    if args.days <= 0 {
        anyhow::bail!("Window length must be positive");
    }

    if args.days > MAX_WINDOW_DAYS {
        anyhow::bail!("Window length is too large (max {} days)", MAX_WINDOW_DAYS);
    }

    Ok(())
}
