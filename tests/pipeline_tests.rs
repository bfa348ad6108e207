//! End-to-end pipeline tests from events to written files, with the
//! network stage replaced by a hand-built event stream.

use chrono::{Duration, TimeZone, Utc};
use gh_impact::heatmap::build_calendar_grid;
use gh_impact::metrics::{aggregate, ContributionEvent, ContributionKind};
use gh_impact::output::{read_report, write_report, write_svg, ContributionReport};
use gh_impact::render::{render_heatmap, RenderConfig};
use gh_impact::utils::config::SCHEMA_VERSION;

fn sample_events() -> Vec<ContributionEvent> {
    let base = Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap();
    vec![
        ContributionEvent {
            actor: "octocat".to_string(),
            timestamp: base,
            repo: "octocat/alpha".to_string(),
            kind: ContributionKind::PrMerged,
        },
        ContributionEvent {
            actor: "octocat".to_string(),
            timestamp: base + Duration::days(2),
            repo: "octocat/alpha".to_string(),
            kind: ContributionKind::ReviewComment,
        },
        ContributionEvent {
            actor: "octocat".to_string(),
            timestamp: base + Duration::days(5),
            repo: "octocat/beta".to_string(),
            kind: ContributionKind::IssueOpened { closed: true },
        },
    ]
}

#[test]
fn events_to_svg_file() {
    let today = Utc.with_ymd_and_hms(2026, 8, 23, 0, 0, 0).unwrap().date_naive();

    let (metrics, activity) = aggregate(&sample_events());
    let grid = build_calendar_grid(&activity, 30, today).unwrap();
    let config = RenderConfig::new().with_title("octocat's contributions");
    let svg = render_heatmap(&metrics, &grid, Some(&config)).unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let svg_path = temp_dir.path().join("contributions.svg");
    write_svg(&svg, &svg_path).unwrap();

    let written = std::fs::read_to_string(&svg_path).unwrap();
    assert!(written.contains("octocat's contributions"));
    assert!(written.contains("Impact Score: 8")); // 5 + 2 + 1
    assert!(written.ends_with("</svg>"));
}

#[test]
fn metrics_survive_report_round_trip() {
    let (metrics, _) = aggregate(&sample_events());

    let report = ContributionReport {
        version: SCHEMA_VERSION.to_string(),
        username: "octocat".to_string(),
        window_days: 30,
        metrics: metrics.clone(),
        skipped_repos: vec![],
        generated_at: Utc::now().to_rfc3339(),
    };

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("report.json");
    write_report(&report, &path).unwrap();

    let read_back = read_report(&path).unwrap();
    assert_eq!(read_back.metrics, metrics);
    assert_eq!(read_back.metrics.impact_score, 8);
    assert_eq!(read_back.metrics.distinct_repos, 1);
}

#[test]
fn empty_stream_end_to_end() {
    let today = Utc.with_ymd_and_hms(2026, 8, 23, 0, 0, 0).unwrap().date_naive();

    let (metrics, activity) = aggregate(&[]);
    assert_eq!(metrics.impact_score, 0);

    let grid = build_calendar_grid(&activity, 365, today).unwrap();
    assert!(grid.cells().all(|c| c.level == 0));

    // Renders fine with nothing to show
    let svg = render_heatmap(&metrics, &grid, None).unwrap();
    assert!(svg.contains("Impact Score: 0"));
}
