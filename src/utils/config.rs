//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for GitHub API requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// GitHub REST API base URL
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// User agent sent with every API request (GitHub rejects requests without one)
pub const USER_AGENT: &str = concat!("gh-impact/", env!("CARGO_PKG_VERSION"));

/// Page size for paginated API listings (GitHub maximum)
pub const API_PAGE_SIZE: u32 = 100;

/// Default trailing window length in days
pub const DEFAULT_WINDOW_DAYS: i64 = 365;

/// Sanity cap on the window length (10 years)
pub const MAX_WINDOW_DAYS: i64 = 3650;

// Point weights for the impact score. Fixed policy:
// a merged PR outweighs an opened one, a review outweighs an issue.
pub const POINTS_PR_MERGED: u32 = 5;
pub const POINTS_PR_OPENED: u32 = 3;
pub const POINTS_REVIEW_COMMENT: u32 = 2;
pub const POINTS_ISSUE_OPENED: u32 = 1;

/// Number of intensity levels in the heatmap (levels 0..=4)
pub const MAX_INTENSITY_LEVEL: u64 = 4;

/// Days per heatmap column
pub const DAYS_PER_WEEK: usize = 7;
