//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API
#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed (check GITHUB_TOKEN)")]
    AuthFailed,

    #[error("Rate limited by GitHub, retry after {0} seconds")]
    RateLimited(u64),
}

/// Errors caused by invalid configuration, rejected before processing begins
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Window length must be positive, got {0}")]
    InvalidWindow(i64),
}

/// Errors caused by malformed input data
///
/// These indicate a collaborator contract violation (the event source is
/// expected to hand the core well-formed events), so they are fatal rather
/// than recoverable.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Negative-duration window: since {since} is after now {now}")]
    NegativeWindow { since: String, now: String },
}

/// Errors that can occur during SVG rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Empty calendar grid")]
    EmptyGrid,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
