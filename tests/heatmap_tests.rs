use chrono::{Duration, NaiveDate};
use gh_impact::heatmap::build_calendar_grid;
use gh_impact::metrics::DailyActivity;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
}

#[test]
fn grid_always_has_n_cells() {
    let activity = DailyActivity::new();

    for n in [1, 6, 7, 8, 30, 365] {
        let grid = build_calendar_grid(&activity, n, today()).unwrap();
        assert_eq!(grid.cell_count() as i64, n, "window of {} days", n);
    }
}

#[test]
fn weeks_are_positional_groups_of_seven() {
    let activity = DailyActivity::new();
    let grid = build_calendar_grid(&activity, 30, today()).unwrap();

    assert_eq!(grid.weeks.len(), 5);
    for week in &grid.weeks[..4] {
        assert_eq!(week.len(), 7);
    }
    assert_eq!(grid.weeks[4].len(), 2);
}

#[test]
fn documented_seven_day_scenario() {
    // N=7, activity {day5: 5, day6: 3}: max is 5, day5 gets level 4,
    // day6 gets floor((3/5)*4) = 2, everything else level 0.
    let mut activity = DailyActivity::new();
    activity.insert(today() - Duration::days(2), 5); // day5 of the window
    activity.insert(today() - Duration::days(1), 3); // day6 of the window

    let grid = build_calendar_grid(&activity, 7, today()).unwrap();
    assert_eq!(grid.weeks.len(), 1);

    let levels: Vec<u8> = grid.cells().map(|c| c.level).collect();
    assert_eq!(levels, vec![0, 0, 0, 0, 4, 2, 0]);

    let raws: Vec<u64> = grid.cells().map(|c| c.raw_activity).collect();
    assert_eq!(raws, vec![0, 0, 0, 0, 5, 3, 0]);
}

#[test]
fn sparse_activity_still_fills_window() {
    let mut activity = DailyActivity::new();
    activity.insert(today() - Duration::days(100), 1);

    let grid = build_calendar_grid(&activity, 365, today()).unwrap();
    assert_eq!(grid.cell_count(), 365);
    assert_eq!(grid.cells().filter(|c| c.raw_activity > 0).count(), 1);
}

#[test]
fn single_busiest_day_gets_level_four() {
    let mut activity = DailyActivity::new();
    activity.insert(today() - Duration::days(40), 1);
    activity.insert(today() - Duration::days(41), 13);
    activity.insert(today() - Duration::days(42), 12);

    let grid = build_calendar_grid(&activity, 90, today()).unwrap();
    let busiest = grid
        .cells()
        .max_by_key(|c| c.raw_activity)
        .expect("grid is non-empty");

    assert_eq!(busiest.raw_activity, 13);
    assert_eq!(busiest.level, 4);
}

#[test]
fn empty_activity_yields_all_zero_levels() {
    let activity = DailyActivity::new();
    let grid = build_calendar_grid(&activity, 365, today()).unwrap();
    assert!(grid.cells().all(|c| c.level == 0));
}

#[test]
fn dates_are_strictly_chronological() {
    let activity = DailyActivity::new();
    let grid = build_calendar_grid(&activity, 100, today()).unwrap();

    let dates: Vec<NaiveDate> = grid.cells().map(|c| c.date).collect();
    assert_eq!(*dates.first().unwrap(), today() - Duration::days(99));
    assert_eq!(*dates.last().unwrap(), today());
    for pair in dates.windows(2) {
        assert_eq!(pair[1], pair[0] + Duration::days(1));
    }
}

#[test]
fn zero_or_negative_window_is_a_config_error() {
    let activity = DailyActivity::new();
    assert!(build_calendar_grid(&activity, 0, today()).is_err());
    assert!(build_calendar_grid(&activity, -365, today()).is_err());
}
