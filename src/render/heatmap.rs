//! SVG heatmap rendering using manual string templating.
//!
//! Emits a self-contained SVG: title, metrics summary line, the week-column
//! calendar grid, month and weekday labels, a Less→More legend, and a footer
//! naming the weighting policy. No drawing libraries; the markup is simple
//! enough that templating it directly keeps the dependency tree small.

use crate::heatmap::CalendarGrid;
use crate::metrics::ContributionMetrics;
use crate::utils::error::RenderError;
use chrono::Datelike;
use log::info;

// GitHub-dark palette, one color per intensity level 0..=4
const LEVEL_COLORS: [&str; 5] = ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"];

const BACKGROUND: &str = "#0d1117";
const TEXT_PRIMARY: &str = "#c9d1d9";
const TEXT_SECONDARY: &str = "#8b949e";

const FONT_FAMILY: &str = "system-ui, -apple-system, sans-serif";

const CELL_SIZE: usize = 12;
const CELL_GAP: usize = 3;
const WEEK_WIDTH: usize = CELL_SIZE + CELL_GAP;

const GRID_START_X: usize = 120;
const GRID_START_Y: usize = 80;

/// Heatmap rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub title: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            title: "Real Contributions (Impact-Weighted)".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Render the heatmap SVG from metrics and the calendar grid
///
/// **Public** - main entry point for the rendering stage
///
/// # Arguments
/// * `metrics` - Summary counters shown above the grid
/// * `grid` - Bucketed calendar grid to draw
/// * `config` - Optional title override
///
/// # Errors
/// * `RenderError::EmptyGrid` if the grid holds no cells
pub fn render_heatmap(
    metrics: &ContributionMetrics,
    grid: &CalendarGrid,
    config: Option<&RenderConfig>,
) -> Result<String, RenderError> {
    if grid.cell_count() == 0 {
        return Err(RenderError::EmptyGrid);
    }

    let config = config.cloned().unwrap_or_default();
    info!("Rendering heatmap with {} cells", grid.cell_count());

    let week_count = grid.weeks.len();
    let width = week_count * WEEK_WIDTH + 120; // extra space for labels
    let height = 7 * WEEK_WIDTH + 100; // 7 rows + header + footer

    let mut svg = String::new();

    svg.push_str(&format!(
        r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
        width, height
    ));
    svg.push_str(&format!(
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        width, height, BACKGROUND
    ));

    render_title(&mut svg, &config.title);
    render_metrics_line(&mut svg, metrics);
    render_grid(&mut svg, grid);
    render_month_labels(&mut svg, grid);
    render_day_labels(&mut svg);
    render_legend(&mut svg, height);
    render_footer(&mut svg, height);

    svg.push_str("</svg>");

    info!("Heatmap rendered successfully ({} bytes)", svg.len());
    Ok(svg)
}

fn render_title(svg: &mut String, title: &str) {
    svg.push_str(&format!(
        r#"<text x="10" y="25" font-family="{}" font-size="16" font-weight="600" fill="{}">{}</text>"#,
        FONT_FAMILY,
        TEXT_PRIMARY,
        escape_text(title)
    ));
}

fn render_metrics_line(svg: &mut String, metrics: &ContributionMetrics) {
    svg.push_str(&format!(
        r#"<text x="10" y="50" font-family="{}" font-size="12" fill="{}">PRs Merged: {} &#8226; PRs Opened: {} &#8226; Reviews: {} &#8226; Issues: {} &#8226; Impact Score: {}</text>"#,
        FONT_FAMILY,
        TEXT_SECONDARY,
        metrics.prs_merged,
        metrics.prs_opened,
        metrics.reviews,
        metrics.issues_opened,
        metrics.impact_score
    ));
}

/// One column per week, one 12px cell per day
fn render_grid(svg: &mut String, grid: &CalendarGrid) {
    for (week_idx, week) in grid.weeks.iter().enumerate() {
        let x = GRID_START_X + week_idx * WEEK_WIDTH;

        for (day_idx, cell) in week.iter().enumerate() {
            let y = GRID_START_Y + day_idx * WEEK_WIDTH;

            svg.push_str(&format!(
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}" rx="2" data-date="{}" data-activity="{}"/>"#,
                x,
                y,
                CELL_SIZE,
                CELL_SIZE,
                LEVEL_COLORS[cell.level as usize],
                cell.date,
                cell.raw_activity
            ));
        }
    }
}

/// Label each week column where a new month begins
fn render_month_labels(svg: &mut String, grid: &CalendarGrid) {
    let mut current_month = 0;

    for (week_idx, week) in grid.weeks.iter().enumerate() {
        let first_day = match week.first() {
            Some(cell) => cell.date,
            None => continue,
        };

        if first_day.month() != current_month {
            current_month = first_day.month();
            let x = GRID_START_X + week_idx * WEEK_WIDTH;
            svg.push_str(&format!(
                r#"<text x="{}" y="{}" font-family="{}" font-size="10" fill="{}">{}</text>"#,
                x,
                GRID_START_Y - 5,
                FONT_FAMILY,
                TEXT_SECONDARY,
                month_abbrev(current_month)
            ));
        }
    }
}

fn render_day_labels(svg: &mut String) {
    // Rows are positional within the window, labeled the way GitHub labels
    // its own graph (every other row)
    for (name, row) in [("Mon", 0usize), ("Wed", 2), ("Fri", 4)] {
        let y = GRID_START_Y + row * WEEK_WIDTH + CELL_SIZE / 2 + 4;
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" font-family="{}" font-size="10" fill="{}" text-anchor="end">{}</text>"#,
            GRID_START_X - 40,
            y,
            FONT_FAMILY,
            TEXT_SECONDARY,
            name
        ));
    }
}

fn render_legend(svg: &mut String, height: usize) {
    let legend_y = height - 40;

    svg.push_str(&format!(
        r#"<text x="10" y="{}" font-family="{}" font-size="11" fill="{}">Less</text>"#,
        legend_y, FONT_FAMILY, TEXT_SECONDARY
    ));

    for (i, color) in LEVEL_COLORS.iter().enumerate() {
        let x = 50 + i * 20;
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="12" height="12" fill="{}" rx="2"/>"#,
            x,
            legend_y - 8,
            color
        ));
    }

    svg.push_str(&format!(
        r#"<text x="170" y="{}" font-family="{}" font-size="11" fill="{}">More</text>"#,
        legend_y, FONT_FAMILY, TEXT_SECONDARY
    ));
}

fn render_footer(svg: &mut String, height: usize) {
    svg.push_str(&format!(
        r#"<text x="10" y="{}" font-family="{}" font-size="10" fill="{}">Weighted by impact: PRs (5pts) &#8226; Reviews (2pts) &#8226; Issues (1pt) &#8226; Not just commit count</text>"#,
        height - 15,
        FONT_FAMILY,
        TEXT_SECONDARY
    ));
}

fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

/// Escape the characters SVG text nodes cannot contain verbatim
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
