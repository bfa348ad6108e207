//! Event source: turns GitHub API payloads into contribution events.
//!
//! The source owns the preconditions the aggregator documents: it scopes
//! events to the target actor and the `[since, now)` window, and it isolates
//! per-repository failures so one broken repo never aborts the whole run.
//! Skipped repositories are surfaced as metadata next to the event stream
//! rather than swallowed.

use super::client::{normalize_username, GitHubClient};
use crate::metrics::{ContributionEvent, ContributionKind};
use crate::utils::error::{DataError, GitHubError};
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// A repository that could not be processed, with the reason
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedRepo {
    pub repo: String,
    pub reason: String,
}

/// Everything the fetch produced: resolved events plus failure bookkeeping
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Events scoped to the actor and window, ready for aggregation
    pub events: Vec<ContributionEvent>,

    /// Repositories skipped because of per-repo API failures
    pub skipped_repos: Vec<SkippedRepo>,
}

/// Collects contribution events for one actor over one time window
pub struct EventSource<'a> {
    client: &'a GitHubClient,
    username: String,
    since: DateTime<Utc>,
    now: DateTime<Utc>,
}

impl<'a> EventSource<'a> {
    /// Create an event source for the given actor and window
    ///
    /// # Errors
    /// * `DataError::NegativeWindow` if `since` is not before `now`
    pub fn new(
        client: &'a GitHubClient,
        username: &str,
        since: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> Result<Self, DataError> {
        if since >= now {
            return Err(DataError::NegativeWindow {
                since: since.to_rfc3339(),
                now: now.to_rfc3339(),
            });
        }

        Ok(Self {
            client,
            username: normalize_username(username).to_string(),
            since,
            now,
        })
    }

    /// Fetch events across all of the user's repositories
    ///
    /// **Public** - main entry point for the fetch stage
    ///
    /// Fails only if the repository listing itself fails (nothing to iterate
    /// over); per-repository failures are recorded in the report instead.
    pub fn fetch(&self) -> Result<FetchReport, GitHubError> {
        let repos = self.client.fetch_user_repos(&self.username)?;
        let fork_count = repos.iter().filter(|r| r.fork).count();
        info!("Found {} repositories ({} forks)", repos.len(), fork_count);

        let mut report = FetchReport::default();

        for repo in &repos {
            match self.collect_repo_events(&repo.full_name) {
                Ok(mut events) => {
                    debug!("{}: {} events in window", repo.full_name, events.len());
                    report.events.append(&mut events);
                }
                Err(e) => {
                    warn!("Skipping {}: {}", repo.full_name, e);
                    report.skipped_repos.push(SkippedRepo {
                        repo: repo.full_name.clone(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        info!(
            "Collected {} events ({} repositories skipped)",
            report.events.len(),
            report.skipped_repos.len()
        );

        Ok(report)
    }

    /// Collect the events one repository contributes
    ///
    /// **Private** - the per-repo unit that failure isolation wraps
    fn collect_repo_events(&self, repo: &str) -> Result<Vec<ContributionEvent>, GitHubError> {
        let mut events = Vec::new();

        // Pull requests: a PR authored by the actor yields an opened event
        // for its creation and, independently, a merged event if it landed.
        for pull in self.client.fetch_pulls(repo)? {
            if pull.user.login != self.username {
                continue;
            }

            if let Some(merged_at) = pull.merged_at {
                if self.in_window(merged_at) {
                    events.push(self.event(merged_at, repo, ContributionKind::PrMerged));
                }
            }

            if self.in_window(pull.created_at) {
                events.push(self.event(pull.created_at, repo, ContributionKind::PrOpened));
            }
        }

        // Review comments left by the actor on any PR in the repo
        for comment in self.client.fetch_review_comments(repo, self.since)? {
            if comment.user.login == self.username && self.in_window(comment.created_at) {
                events.push(self.event(comment.created_at, repo, ContributionKind::ReviewComment));
            }
        }

        // Issues opened by the actor; the endpoint mixes in PRs, drop those
        for issue in self.client.fetch_issues(repo, self.since)? {
            if issue.is_pull_request() || issue.user.login != self.username {
                continue;
            }
            if self.in_window(issue.created_at) {
                events.push(self.event(
                    issue.created_at,
                    repo,
                    ContributionKind::IssueOpened { closed: issue.is_closed() },
                ));
            }
        }

        Ok(events)
    }

    /// Half-open window check: `[since, now)`
    fn in_window(&self, timestamp: DateTime<Utc>) -> bool {
        timestamp >= self.since && timestamp < self.now
    }

    fn event(
        &self,
        timestamp: DateTime<Utc>,
        repo: &str,
        kind: ContributionKind,
    ) -> ContributionEvent {
        ContributionEvent {
            actor: self.username.clone(),
            timestamp,
            repo: repo.to_string(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_negative_window_rejected() {
        let client = GitHubClient::with_base_url("t", "http://localhost:9").unwrap();
        let since = Utc.with_ymd_and_hms(2026, 8, 23, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2025, 8, 23, 0, 0, 0).unwrap();

        let result = EventSource::new(&client, "octocat", since, now);
        assert!(matches!(result, Err(DataError::NegativeWindow { .. })));
    }

    #[test]
    fn test_window_is_half_open() {
        let client = GitHubClient::with_base_url("t", "http://localhost:9").unwrap();
        let since = Utc.with_ymd_and_hms(2025, 8, 23, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 8, 23, 0, 0, 0).unwrap();
        let source = EventSource::new(&client, "@octocat", since, now).unwrap();

        assert!(source.in_window(since));
        assert!(!source.in_window(now));
        assert!(source.in_window(now - chrono::Duration::seconds(1)));
        assert_eq!(source.username, "octocat");
    }
}
