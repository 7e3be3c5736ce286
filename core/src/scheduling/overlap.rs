//! Interval overlap detection for same-weekday availability windows.

use chrono::NaiveTime;

/// A half-open wall-clock interval on a single weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }
}

/// Decides whether two same-weekday intervals overlap.
///
/// True iff `a.start < b.end && b.start < a.end`. Both inequalities are
/// strict, so intervals sharing only a boundary point (one slot ending
/// exactly where the next begins) do not overlap. Symmetric in its
/// arguments.
pub fn overlaps(a: &TimeRange, b: &TimeRange) -> bool {
    a.start < b.end && b.start < a.end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduling::time_grid::parse_clock_time;

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::new(
            parse_clock_time(start).unwrap(),
            parse_clock_time(end).unwrap(),
        )
    }

    #[test]
    fn test_partial_overlap() {
        let a = range("09:00", "10:00");
        let b = range("09:30", "10:30");
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_containment_is_overlap() {
        let outer = range("09:00", "12:00");
        let inner = range("10:00", "11:00");
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_identical_ranges_overlap() {
        let a = range("09:00", "10:00");
        assert!(overlaps(&a, &a));
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let a = range("09:00", "10:00");
        let b = range("10:00", "11:00");
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn test_disjoint_ranges() {
        let a = range("09:00", "10:00");
        let b = range("13:00", "14:00");
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }
}
