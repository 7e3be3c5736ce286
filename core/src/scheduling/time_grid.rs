//! Calendar date, wall-clock and time-grid utilities.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};

use crate::errors::ScheduleError;

/// Granularity of derived time slots, in minutes
pub const SLOT_STEP_MINUTES: i64 = 30;

/// Maps a `YYYY-MM-DD` date string to a weekday index, Sunday = 0.
pub fn weekday_of(date: &str) -> Result<u8, ScheduleError> {
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        ScheduleError::InvalidDate {
            value: date.to_string(),
        }
    })?;
    Ok(parsed.weekday().num_days_from_sunday() as u8)
}

/// Parses an `HH:MM` wall-clock string.
///
/// Times are provider-local; no timezone handling is applied.
pub fn parse_clock_time(value: &str) -> Result<NaiveTime, ScheduleError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| ScheduleError::InvalidTimeFormat {
        value: value.to_string(),
    })
}

/// Formats a wall-clock time back into its `HH:MM` form.
pub fn format_clock_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Finite, restartable sequence of wall-clock points at a fixed step.
///
/// Emits every `t` with `start <= t < end`. An empty window (`end <= start`)
/// yields an empty sequence rather than an error; callers validate the
/// ordering of stored windows at creation time, not at expansion time.
/// Cloning the grid before iterating restarts it from `start`.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    current: NaiveTime,
    end: NaiveTime,
    step: Duration,
}

impl TimeGrid {
    /// Creates a grid over `[start, end)` at `step_minutes` granularity
    pub fn new(start: NaiveTime, end: NaiveTime, step_minutes: i64) -> Self {
        Self {
            current: start,
            end,
            step: Duration::minutes(step_minutes.max(1)),
        }
    }
}

impl Iterator for TimeGrid {
    type Item = NaiveTime;

    fn next(&mut self) -> Option<NaiveTime> {
        if self.current >= self.end {
            return None;
        }
        let emitted = self.current;
        let (next, wrapped_days) = self.current.overflowing_add_signed(self.step);
        if wrapped_days != 0 {
            // Stepping past midnight leaves the same-day window
            self.current = self.end;
        } else {
            self.current = next;
        }
        Some(emitted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(start: &str, end: &str) -> Vec<String> {
        TimeGrid::new(
            parse_clock_time(start).unwrap(),
            parse_clock_time(end).unwrap(),
            SLOT_STEP_MINUTES,
        )
        .map(format_clock_time)
        .collect()
    }

    #[test]
    fn test_weekday_of_sunday_is_zero() {
        // 2025-08-03 was a Sunday
        assert_eq!(weekday_of("2025-08-03").unwrap(), 0);
        // 2025-08-09 was a Saturday
        assert_eq!(weekday_of("2025-08-09").unwrap(), 6);
    }

    #[test]
    fn test_weekday_of_rejects_malformed_dates() {
        for bad in ["2025-13-01", "not-a-date", "2025/08/03", ""] {
            match weekday_of(bad) {
                Err(ScheduleError::InvalidDate { value }) => assert_eq!(value, bad),
                other => panic!("expected InvalidDate, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_clock_time() {
        assert!(parse_clock_time("09:00").is_ok());
        assert!(parse_clock_time("23:59").is_ok());
        assert!(parse_clock_time("24:00").is_err());
        assert!(parse_clock_time("9am").is_err());
        assert!(parse_clock_time("09:00:00").is_err());
    }

    #[test]
    fn test_grid_is_end_exclusive() {
        assert_eq!(grid("09:00", "10:00"), vec!["09:00", "09:30"]);
    }

    #[test]
    fn test_grid_partial_last_interval_still_emits_point() {
        // 10:45 is not a full step past 10:30, but 10:30 itself is < end
        assert_eq!(grid("10:00", "10:45"), vec!["10:00", "10:30"]);
    }

    #[test]
    fn test_empty_window_yields_empty_sequence() {
        assert!(grid("10:00", "10:00").is_empty());
        assert!(grid("11:00", "10:00").is_empty());
    }

    #[test]
    fn test_grid_stops_at_midnight() {
        assert_eq!(grid("23:00", "23:59"), vec!["23:00", "23:30"]);
    }

    #[test]
    fn test_grid_is_restartable_by_cloning() {
        let original = TimeGrid::new(
            parse_clock_time("09:00").unwrap(),
            parse_clock_time("10:00").unwrap(),
            SLOT_STEP_MINUTES,
        );
        let first: Vec<_> = original.clone().collect();
        let second: Vec<_> = original.collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }
}
