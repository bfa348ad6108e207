//! HTTP client for the GitHub REST API.
//!
//! Blocking client with bearer-token auth and page-loop pagination. All
//! listing endpoints are fetched page by page until a short page signals
//! the end of the collection.

use super::types::{ApiErrorBody, Issue, PullRequest, Repo, ReviewComment};
use crate::utils::config::{API_PAGE_SIZE, DEFAULT_HTTP_TIMEOUT, GITHUB_API_BASE, USER_AGENT};
use crate::utils::error::GitHubError;
use chrono::{DateTime, Utc};
use log::{debug, info};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

/// Client for fetching a user's contribution data from GitHub
pub struct GitHubClient {
    client: Client,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a new client authenticated with a personal access token
    ///
    /// The token and target identity are explicit inputs here; nothing in
    /// the pipeline reads ambient credential state.
    pub fn new(token: impl Into<String>) -> Result<Self, GitHubError> {
        Self::with_base_url(token, GITHUB_API_BASE)
    }

    /// Create a client against a custom API base URL (used by tests)
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, GitHubError> {
        let client = Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(GitHubError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    /// List the user's repositories
    pub fn fetch_user_repos(&self, username: &str) -> Result<Vec<Repo>, GitHubError> {
        let username = normalize_username(username);
        info!("Fetching repositories for user: {}", username);
        self.get_paged(&format!("/users/{}/repos", username), &[])
    }

    /// List all pull requests of a repository, any state
    pub fn fetch_pulls(&self, repo: &str) -> Result<Vec<PullRequest>, GitHubError> {
        self.get_paged(
            &format!("/repos/{}/pulls", repo),
            &[("state", "all".to_string()), ("sort", "updated".to_string()), ("direction", "desc".to_string())],
        )
    }

    /// List review comments across all pull requests of a repository
    pub fn fetch_review_comments(
        &self,
        repo: &str,
        since: DateTime<Utc>,
    ) -> Result<Vec<ReviewComment>, GitHubError> {
        self.get_paged(
            &format!("/repos/{}/pulls/comments", repo),
            &[("since", since.to_rfc3339())],
        )
    }

    /// List issues of a repository updated since the window start
    ///
    /// The endpoint mixes in pull requests; callers filter those out via
    /// [`Issue::is_pull_request`].
    pub fn fetch_issues(&self, repo: &str, since: DateTime<Utc>) -> Result<Vec<Issue>, GitHubError> {
        self.get_paged(
            &format!("/repos/{}/issues", repo),
            &[("state", "all".to_string()), ("since", since.to_rfc3339())],
        )
    }

    /// Fetch every page of a listing endpoint
    ///
    /// **Private** - shared pagination loop for all listings
    fn get_paged<T: DeserializeOwned>(
        &self,
        path: &str,
        extra_params: &[(&str, String)],
    ) -> Result<Vec<T>, GitHubError> {
        let url = format!("{}{}", self.base_url, path);
        let mut items: Vec<T> = Vec::new();

        for page in 1u32.. {
            debug!("GET {} page {}", path, page);

            let response = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .header("Accept", "application/vnd.github.v3+json")
                .query(extra_params)
                .query(&[("per_page", API_PAGE_SIZE), ("page", page)])
                .send()
                .map_err(GitHubError::RequestFailed)?;

            let response = check_status(response, path)?;

            let page_items: Vec<T> = response.json().map_err(GitHubError::RequestFailed)?;
            let page_len = page_items.len();
            items.extend(page_items);

            // A short page is the last one
            if page_len < API_PAGE_SIZE as usize {
                break;
            }
        }

        debug!("GET {} returned {} items", path, items.len());
        Ok(items)
    }
}

/// Normalize a username by stripping a leading '@' and surrounding whitespace
pub fn normalize_username(username: &str) -> &str {
    username.trim().trim_start_matches('@')
}

/// Map non-2xx responses to our error type
///
/// **Private** - mirrors GitHub's documented failure modes
fn check_status(response: Response, path: &str) -> Result<Response, GitHubError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    match status {
        StatusCode::UNAUTHORIZED => Err(GitHubError::AuthFailed),
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS => {
            Err(GitHubError::RateLimited(rate_limit_reset_secs(&response)))
        }
        StatusCode::NOT_FOUND => Err(GitHubError::NotFound(path.to_string())),
        _ => {
            let message = response
                .json::<ApiErrorBody>()
                .map(|body| body.message)
                .unwrap_or_else(|_| status.to_string());
            Err(GitHubError::InvalidResponse(format!("{}: {}", path, message)))
        }
    }
}

/// Seconds until the rate limit resets, from the X-RateLimit-Reset header
fn rate_limit_reset_secs(response: &Response) -> u64 {
    response
        .headers()
        .get("X-RateLimit-Reset")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i64>().ok())
        .map(|ts| (ts - Utc::now().timestamp()).max(0) as u64)
        .unwrap_or(3600)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_username() {
        assert_eq!(normalize_username("octocat"), "octocat");
        assert_eq!(normalize_username("@octocat"), "octocat");
        assert_eq!(normalize_username("  octocat "), "octocat");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = GitHubClient::with_base_url("t", "http://localhost:8080/").unwrap();
        assert_eq!(client.base_url, "http://localhost:8080");
    }
}
