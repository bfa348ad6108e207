//! Response types for the GitHub REST API.
//!
//! Only the fields the event source actually reads are modeled; everything
//! else in the API payloads is ignored by serde.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A repository owned by the tracked user
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    /// "owner/name" identifier used throughout the pipeline
    pub full_name: String,

    /// True for forks; kept for logging only
    #[serde(default)]
    pub fork: bool,
}

/// Minimal user object attached to PRs, comments and issues
#[derive(Debug, Clone, Deserialize)]
pub struct Actor {
    pub login: String,
}

/// A pull request as returned by `GET /repos/{repo}/pulls`
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub user: Actor,
    pub created_at: DateTime<Utc>,

    /// Set once the PR has been merged
    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,
}

/// A review comment as returned by `GET /repos/{repo}/pulls/comments`
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewComment {
    pub user: Actor,
    pub created_at: DateTime<Utc>,
}

/// An issue as returned by `GET /repos/{repo}/issues`
///
/// GitHub's issues endpoint also returns pull requests; those carry a
/// `pull_request` key and are filtered out by the event source.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
    pub user: Actor,
    pub created_at: DateTime<Utc>,
    pub state: String,

    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl Issue {
    /// True when this "issue" is actually a pull request
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.state == "closed"
    }
}

/// Error body GitHub returns for non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
