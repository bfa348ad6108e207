//! Aggregation of contribution events into metrics and a daily histogram.
//!
//! This module transforms the event stream into:
//! - A `ContributionMetrics` summary (counters plus the derived impact score)
//! - A `DailyActivity` histogram (per-day point totals for the heatmap)

pub mod aggregator;
pub mod event;

// Re-export main types and functions
pub use aggregator::{aggregate, ContributionMetrics, DailyActivity};
pub use event::{ContributionEvent, ContributionKind};
