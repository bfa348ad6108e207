//! Contribution event model.
//!
//! One `ContributionEvent` per observed action. Events are produced by the
//! `github` event source, already scoped to a single actor and time window;
//! the aggregator consumes them without re-checking those preconditions.

use crate::utils::config::{
    POINTS_ISSUE_OPENED, POINTS_PR_MERGED, POINTS_PR_OPENED, POINTS_REVIEW_COMMENT,
};
use chrono::{DateTime, NaiveDate, Utc};

/// The kind of contribution an event records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContributionKind {
    /// A pull request authored by the actor was merged
    PrMerged,
    /// A pull request was opened by the actor
    PrOpened,
    /// A review comment left by the actor on a pull request
    ReviewComment,
    /// An issue opened by the actor; `closed` is the issue's current state
    IssueOpened { closed: bool },
}

/// A single observed action by the tracked actor
///
/// Immutable; the event source emits exactly one per action and performs
/// deduplication and window filtering before handing events to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContributionEvent {
    /// Login of the actor who performed the action
    pub actor: String,

    /// When the action happened (UTC)
    pub timestamp: DateTime<Utc>,

    /// Repository the action touched (owner/name)
    pub repo: String,

    /// What kind of action it was
    pub kind: ContributionKind,
}

impl ContributionEvent {
    /// Calendar day the event lands on in the activity histogram
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    /// Point value of this event under the fixed weight table
    pub fn points(&self) -> u32 {
        match self.kind {
            ContributionKind::PrMerged => POINTS_PR_MERGED,
            ContributionKind::PrOpened => POINTS_PR_OPENED,
            ContributionKind::ReviewComment => POINTS_REVIEW_COMMENT,
            ContributionKind::IssueOpened { .. } => POINTS_ISSUE_OPENED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(kind: ContributionKind) -> ContributionEvent {
        ContributionEvent {
            actor: "octocat".to_string(),
            timestamp: Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap(),
            repo: "octocat/spoon-knife".to_string(),
            kind,
        }
    }

    #[test]
    fn test_points_match_weight_table() {
        assert_eq!(event(ContributionKind::PrMerged).points(), 5);
        assert_eq!(event(ContributionKind::PrOpened).points(), 3);
        assert_eq!(event(ContributionKind::ReviewComment).points(), 2);
        assert_eq!(event(ContributionKind::IssueOpened { closed: false }).points(), 1);
        // The closed flag affects counters, never points
        assert_eq!(event(ContributionKind::IssueOpened { closed: true }).points(), 1);
    }

    #[test]
    fn test_date_truncates_time() {
        let e = event(ContributionKind::PrOpened);
        assert_eq!(e.date(), NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
    }
}
