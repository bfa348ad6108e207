//! File output writers for the SVG heatmap and the JSON report.

pub mod json;
pub mod svg;

// Re-export main functions
pub use json::{read_report, write_report, ContributionReport};
pub use svg::write_svg;
