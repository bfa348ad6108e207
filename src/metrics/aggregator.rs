//! Fold contribution events into summary metrics and a daily histogram.
//!
//! This is the scoring pipeline: each event bumps one counter and adds its
//! point value to the day it happened on. The impact score is derived from
//! the counters after the fold and must always equal the sum of per-event
//! point contributions (both are linear in the same weights).

use crate::metrics::event::{ContributionEvent, ContributionKind};
use crate::utils::config::{
    POINTS_ISSUE_OPENED, POINTS_PR_MERGED, POINTS_PR_OPENED, POINTS_REVIEW_COMMENT,
};
use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Per-day accumulated point totals, keyed by calendar date
///
/// A `BTreeMap` keeps iteration chronological, which the bucketizer and the
/// JSON report both rely on for deterministic output.
pub type DailyActivity = BTreeMap<NaiveDate, u64>;

/// Aggregate contribution counts for one actor over one window
///
/// All fields are plain counts; `impact_score` is always derived from the
/// other counters via [`ContributionMetrics::compute_impact_score`] and is
/// never set independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionMetrics {
    /// Pull requests authored by the actor that were merged
    pub prs_merged: u64,

    /// Pull requests opened by the actor
    pub prs_opened: u64,

    /// Review comments left by the actor
    pub reviews: u64,

    /// Issues opened by the actor
    pub issues_opened: u64,

    /// Subset of opened issues that are now closed
    pub issues_closed: u64,

    /// Unique repositories with a merged PR by the actor.
    /// Opened PRs, reviews and issues do not contribute to this count;
    /// that matches the tool's historical behavior.
    pub distinct_repos: u64,

    /// Weighted sum of the scored counters
    pub impact_score: u64,
}

impl ContributionMetrics {
    /// Derive the impact score from the scored counters
    fn compute_impact_score(&self) -> u64 {
        self.prs_merged * POINTS_PR_MERGED as u64
            + self.prs_opened * POINTS_PR_OPENED as u64
            + self.reviews * POINTS_REVIEW_COMMENT as u64
            + self.issues_opened * POINTS_ISSUE_OPENED as u64
    }

    /// Human-readable one-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "PRs merged: {} | PRs opened: {} | Reviews: {} | Issues: {} | Repos: {} | Impact: {}",
            self.prs_merged,
            self.prs_opened,
            self.reviews,
            self.issues_opened,
            self.distinct_repos,
            self.impact_score
        )
    }
}

/// Fold a finite event stream into metrics and a daily activity histogram
///
/// **Public** - main entry point for the aggregation stage
///
/// The input must already be deduplicated and scoped to one actor and one
/// time window; the fold does not re-check timestamps or actor logins. The
/// accumulation is commutative, so event order does not affect the result.
///
/// # Arguments
/// * `events` - Pre-filtered contribution events, in any order
///
/// # Returns
/// The metrics summary and the per-day point histogram
pub fn aggregate(events: &[ContributionEvent]) -> (ContributionMetrics, DailyActivity) {
    debug!("Aggregating {} contribution events", events.len());

    let mut metrics = ContributionMetrics::default();
    let mut activity = DailyActivity::new();
    let mut merged_repos: HashSet<&str> = HashSet::new();

    for event in events {
        match event.kind {
            ContributionKind::PrMerged => {
                metrics.prs_merged += 1;
                merged_repos.insert(event.repo.as_str());
            }
            ContributionKind::PrOpened => {
                metrics.prs_opened += 1;
            }
            ContributionKind::ReviewComment => {
                metrics.reviews += 1;
            }
            ContributionKind::IssueOpened { closed } => {
                metrics.issues_opened += 1;
                if closed {
                    metrics.issues_closed += 1;
                }
            }
        }

        *activity.entry(event.date()).or_insert(0) += event.points() as u64;
    }

    // Only the cardinality of the working set survives
    metrics.distinct_repos = merged_repos.len() as u64;
    metrics.impact_score = metrics.compute_impact_score();

    debug!("Aggregated metrics: {}", metrics.summary());

    (metrics, activity)
}
