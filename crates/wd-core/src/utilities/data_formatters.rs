//! Data formatting helpers.
//!
//! Small text helpers used by the `Display` implementations of the
//! calculation results.

/// Format a count with its unit, pluralising the unit when needed
/// (e.g. `(1, "day")` → `"1 day"`, `(3, "week")` → `"3 weeks"`).
pub fn format_count(n: i64, unit: &str) -> String {
    if n.abs() == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Format a week/day decomposition (e.g. `"2 weeks, 3 days"`).
pub fn format_weeks_days(weeks: u32, days: u32) -> String {
    format!(
        "{}, {}",
        format_count(i64::from(weeks), "week"),
        format_count(i64::from(days), "day")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0, "day"), "0 days");
        assert_eq!(format_count(1, "day"), "1 day");
        assert_eq!(format_count(-1, "day"), "-1 day");
        assert_eq!(format_count(7, "week"), "7 weeks");
    }

    #[test]
    fn test_format_weeks_days() {
        assert_eq!(format_weeks_days(1, 1), "1 week, 1 day");
        assert_eq!(format_weeks_days(2, 0), "2 weeks, 0 days");
    }
}
