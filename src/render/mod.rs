//! SVG rendering of the heatmap and metrics summary.

pub mod heatmap;

// Re-export main types and functions
pub use heatmap::{render_heatmap, RenderConfig};
