//! gh-impact
//!
//! Impact-weighted GitHub contribution heatmaps as static SVG.
//!
//! Fetches a user's pull requests, review comments and issues over a
//! trailing window, scores them by impact, and renders a calendar heatmap
//! suitable for embedding in a profile page.
//!
//! This crate provides the core implementation for the `gh-impact` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install gh-impact
//! GITHUB_TOKEN=... gh-impact generate --user octocat
//! ```

pub mod commands;
pub mod github;
pub mod heatmap;
pub mod metrics;
pub mod output;
pub mod render;
pub mod utils;
