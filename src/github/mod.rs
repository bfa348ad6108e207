//! GitHub API access: HTTP client, response types, and the event source.

pub mod client;
pub mod source;
pub mod types;

// Re-export main types
pub use client::GitHubClient;
pub use source::{EventSource, FetchReport, SkippedRepo};
