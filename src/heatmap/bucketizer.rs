//! Bucket the daily activity histogram into a calendar grid.
//!
//! The grid covers the N most recent days ending today (inclusive), oldest
//! first, with each day carrying its raw point total and a normalized 0-4
//! intensity level relative to the busiest day in the window.

use crate::metrics::DailyActivity;
use crate::utils::config::{DAYS_PER_WEEK, MAX_INTENSITY_LEVEL};
use crate::utils::error::ConfigError;
use chrono::{Duration, NaiveDate};
use log::debug;
use serde::Serialize;

/// One day in the heatmap, derived once and immutable thereafter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarCell {
    /// Calendar date of this cell
    pub date: NaiveDate,

    /// Accumulated points for this day
    pub raw_activity: u64,

    /// Intensity level 0-4, relative to the window's busiest day
    pub level: u8,
}

/// Chronologically ordered weeks of daily intensity levels
///
/// Weeks are positional groups of 7 counted from the start of the window,
/// not aligned to calendar weekdays; the last group may be shorter than 7.
/// This only affects visual layout, never metrics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    pub weeks: Vec<Vec<CalendarCell>>,
}

impl CalendarGrid {
    /// Total number of cells across all weeks
    pub fn cell_count(&self) -> usize {
        self.weeks.iter().map(|w| w.len()).sum()
    }

    /// Iterate over all cells, oldest first
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }
}

/// Build the calendar grid for the `window_days` most recent days
///
/// **Public** - main entry point for the bucketing stage
///
/// # Arguments
/// * `activity` - Per-day point totals from the aggregator
/// * `window_days` - Window length in days; the grid always holds exactly
///   this many cells, however sparse `activity` is
/// * `today` - Anchor date; the window ends on it inclusively
///
/// # Errors
/// * `ConfigError::InvalidWindow` if `window_days <= 0`
pub fn build_calendar_grid(
    activity: &DailyActivity,
    window_days: i64,
    today: NaiveDate,
) -> Result<CalendarGrid, ConfigError> {
    if window_days <= 0 {
        return Err(ConfigError::InvalidWindow(window_days));
    }

    let window_start = today - Duration::days(window_days - 1);

    // Busiest day within the window; 1 when the window is empty or all-zero
    // so that every cell divides to level 0.
    let max_activity = activity
        .range(window_start..=today)
        .map(|(_, &points)| points)
        .max()
        .filter(|&max| max > 0)
        .unwrap_or(1);

    debug!(
        "Bucketing {} days ending {} (max activity {})",
        window_days, today, max_activity
    );

    let mut weeks: Vec<Vec<CalendarCell>> = Vec::new();
    let mut current_week: Vec<CalendarCell> = Vec::with_capacity(DAYS_PER_WEEK);

    for offset in 0..window_days {
        let date = window_start + Duration::days(offset);
        let raw = activity.get(&date).copied().unwrap_or(0);

        current_week.push(CalendarCell {
            date,
            raw_activity: raw,
            level: intensity_level(raw, max_activity),
        });

        if current_week.len() == DAYS_PER_WEEK {
            weeks.push(std::mem::take(&mut current_week));
        }
    }

    if !current_week.is_empty() {
        weeks.push(current_week);
    }

    Ok(CalendarGrid { weeks })
}

/// Normalize a day's raw activity to a 0-4 level
///
/// Integer arithmetic keeps `raw == max` at exactly level 4 with no
/// floating-point underflow to guard against; the clamp covers the
/// (unreachable with a correct max) raw > max case.
fn intensity_level(raw: u64, max_activity: u64) -> u8 {
    ((raw * MAX_INTENSITY_LEVEL) / max_activity).min(MAX_INTENSITY_LEVEL) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, d).unwrap()
    }

    #[test]
    fn test_intensity_level_boundaries() {
        assert_eq!(intensity_level(0, 5), 0);
        assert_eq!(intensity_level(3, 5), 2); // floor(2.4)
        assert_eq!(intensity_level(5, 5), 4);
        assert_eq!(intensity_level(1, 1), 4);
        // Clamped even if raw somehow exceeds max
        assert_eq!(intensity_level(10, 5), 4);
    }

    #[test]
    fn test_grid_has_exactly_n_cells() {
        let activity = DailyActivity::new();
        let grid = build_calendar_grid(&activity, 365, day(23)).unwrap();
        assert_eq!(grid.cell_count(), 365);
        // 52 full weeks plus one short week of a single day
        assert_eq!(grid.weeks.len(), 53);
        assert_eq!(grid.weeks.last().unwrap().len(), 1);
    }

    #[test]
    fn test_empty_activity_is_all_level_zero() {
        let activity = DailyActivity::new();
        let grid = build_calendar_grid(&activity, 30, day(23)).unwrap();
        assert!(grid.cells().all(|c| c.level == 0 && c.raw_activity == 0));
    }

    #[test]
    fn test_seven_day_scenario() {
        // Window is Aug 17..=Aug 23; day5 = Aug 21, day6 = Aug 22.
        let mut activity = DailyActivity::new();
        activity.insert(day(21), 5);
        activity.insert(day(22), 3);

        let grid = build_calendar_grid(&activity, 7, day(23)).unwrap();

        assert_eq!(grid.cell_count(), 7);
        assert_eq!(grid.weeks.len(), 1);

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells[0].date, day(17));
        assert_eq!(cells[4].level, 4); // raw 5, the max
        assert_eq!(cells[5].level, 2); // floor((3/5)*4)
        for i in [0, 1, 2, 3, 6] {
            assert_eq!(cells[i].level, 0, "cell {} should be level 0", i);
        }
    }

    #[test]
    fn test_busiest_day_always_level_four() {
        let mut activity = DailyActivity::new();
        activity.insert(day(10), 7);
        activity.insert(day(11), 1);

        let grid = build_calendar_grid(&activity, 21, day(23)).unwrap();
        let busiest = grid.cells().find(|c| c.date == day(10)).unwrap();
        assert_eq!(busiest.level, 4);
    }

    #[test]
    fn test_activity_outside_window_ignored_for_max() {
        let mut activity = DailyActivity::new();
        activity.insert(day(1), 100); // outside a 7-day window ending Aug 23
        activity.insert(day(20), 2);

        let grid = build_calendar_grid(&activity, 7, day(23)).unwrap();
        let in_window = grid.cells().find(|c| c.date == day(20)).unwrap();
        // Max within the window is 2, so Aug 20 is the busiest day
        assert_eq!(in_window.level, 4);
    }

    #[test]
    fn test_chronological_no_gaps() {
        let activity = DailyActivity::new();
        let grid = build_calendar_grid(&activity, 40, day(23)).unwrap();

        let mut expected = day(23) - Duration::days(39);
        for cell in grid.cells() {
            assert_eq!(cell.date, expected);
            expected += Duration::days(1);
        }
    }

    #[test]
    fn test_invalid_window_rejected() {
        let activity = DailyActivity::new();
        assert!(build_calendar_grid(&activity, 0, day(23)).is_err());
        assert!(build_calendar_grid(&activity, -5, day(23)).is_err());
    }
}
