//! Calendar-grid bucketing for the heatmap.

pub mod bucketizer;

// Re-export main types and functions
pub use bucketizer::{build_calendar_grid, CalendarCell, CalendarGrid};
