//! Countdown to a target date.
//!
//! Counts the working days between a reference date ("today") and a target,
//! in either direction, and restates the distance as weeks plus days.

use std::fmt;

use tracing::debug;

use crate::policy::TailHolidayPolicy;
use wd_core::utilities::data_formatters::{format_count, format_weeks_days};
use wd_core::{Days, Weeks};
use wd_time::{Calendar, Date};

/// Where the target lies relative to the reference date, in working days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStatus {
    /// The target is ahead.
    Remaining,
    /// The target has passed.
    Elapsed,
    /// No working day separates the two dates.
    Today,
}

/// Result of [`countdown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    /// The reference date.
    pub reference: Date,
    /// The target date.
    pub target: Date,
    /// Raw signed calendar-day difference, `target - reference`.
    pub raw: Days,
    /// Signed working-day difference: `raw` with holidays taken out.
    pub effective: Days,
    /// Whole weeks in the raw distance.
    pub weeks: Weeks,
    /// Remaining days after the whole weeks, less tail-window holidays.
    pub remainder_days: u32,
}

impl Countdown {
    /// Classify the countdown by the sign of the effective difference.
    pub fn status(&self) -> CountdownStatus {
        match self.effective {
            e if e > 0 => CountdownStatus::Remaining,
            e if e < 0 => CountdownStatus::Elapsed,
            _ => CountdownStatus::Today,
        }
    }

    /// Absolute number of working days.
    pub fn days(&self) -> u32 {
        self.effective.unsigned_abs()
    }
}

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = format_count(i64::from(self.days()), "working day");
        let split = format_weeks_days(self.weeks, self.remainder_days);
        match self.status() {
            CountdownStatus::Remaining => {
                write!(f, "{} is {days} away, or {split}", self.target)
            }
            CountdownStatus::Elapsed => {
                write!(f, "{} was {days} ago, or {split}", self.target)
            }
            CountdownStatus::Today => write!(f, "today is the target date ({})", self.target),
        }
    }
}

/// Count working days from `reference` to `target`.
///
/// The effective difference is the calendar's signed working-day count
/// between the two dates (reference excluded, target included when the
/// target is ahead; mirrored when it has passed).  The raw distance is split
/// into `|raw| / 7` whole weeks and a remainder; holidays in the tail window
/// after the whole weeks reduce the remainder according to `tail`.
pub fn countdown(
    calendar: &dyn Calendar,
    reference: Date,
    target: Date,
    tail: TailHolidayPolicy,
) -> Countdown {
    let raw = reference.days_between(target);
    let effective = calendar.business_days_between(reference, target);

    let magnitude = raw.unsigned_abs();
    let weeks = magnitude / 7;
    let step = if raw >= 0 { 1 } else { -1 };
    // |anchor - reference| <= |target - reference|, so the anchor is in range.
    let anchor = reference + step * 7 * weeks as i32;
    let tail_holidays = match tail {
        TailHolidayPolicy::SkipFirst => tail_holidays_skip_first(calendar, anchor, target, step),
        TailHolidayPolicy::ExcludeAnchor => calendar.holidays_between(anchor, target) as u32,
    };
    let remainder_days = (magnitude % 7).saturating_sub(tail_holidays);

    debug!(
        %reference, %target, raw, effective, weeks, tail_holidays,
        "countdown computed"
    );

    Countdown {
        reference,
        target,
        raw,
        effective,
        weeks,
        remainder_days,
    }
}

/// Walk from `anchor` to `target`, both included, and count the holidays
/// met after the first one.
fn tail_holidays_skip_first(calendar: &dyn Calendar, anchor: Date, target: Date, step: i32) -> u32 {
    let mut seen = 0u32;
    let mut d = anchor;
    loop {
        if calendar.is_holiday(d) {
            seen += 1;
        }
        if d == target {
            break;
        }
        d = d + step;
    }
    seen.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wd_time::{HolidaySet, NullCalendar};

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn weekends(from: Date, to: Date) -> HolidaySet {
        let mut set = HolidaySet::new("weekends");
        set.mark_weekends(from, to, "weekend").unwrap();
        set
    }

    #[test]
    fn same_day_is_today() {
        let d = date(2024, 6, 1);
        let c = countdown(&NullCalendar, d, d, TailHolidayPolicy::SkipFirst);
        assert_eq!(c.status(), CountdownStatus::Today);
        assert_eq!(c.effective, 0);
        assert_eq!(c.to_string(), "today is the target date (2024-06-01)");
    }

    #[test]
    fn no_holidays_plain_difference() {
        let r = date(2024, 6, 1);
        let c = countdown(&NullCalendar, r, date(2024, 6, 24), TailHolidayPolicy::SkipFirst);
        assert_eq!(c.status(), CountdownStatus::Remaining);
        assert_eq!(c.effective, 23);
        assert_eq!((c.weeks, c.remainder_days), (3, 2));
        assert_eq!(
            c.to_string(),
            "2024-06-24 is 23 working days away, or 3 weeks, 2 days"
        );
    }

    #[test]
    fn weekend_reference_example() {
        // Saturday 2024-06-01 to Monday 2024-06-10 with weekends as holidays:
        // Sun 2, Sat 8 and Sun 9 are taken out of the 9 raw days.
        let cal = weekends(date(2024, 5, 1), date(2024, 6, 30));
        let r = date(2024, 6, 1);
        let t = date(2024, 6, 10);
        for policy in [TailHolidayPolicy::SkipFirst, TailHolidayPolicy::ExcludeAnchor] {
            let c = countdown(&cal, r, t, policy);
            assert_eq!(c.raw, 9);
            assert_eq!(c.effective, 6);
            assert_eq!(c.weeks, 1);
            // Tail window after the anchor (Sat 8) holds Sun 9 only.
            assert_eq!(c.remainder_days, 1, "{policy:?}");
        }
    }

    #[test]
    fn skip_first_differs_when_anchor_is_a_working_day() {
        // Reference Monday 2024-06-03, target Sunday 2024-06-16.
        // Anchor = Mon 10; tail (Mon 10 .. Sun 16) holds Sat 15 and Sun 16.
        let cal = weekends(date(2024, 6, 1), date(2024, 6, 30));
        let r = date(2024, 6, 3);
        let t = date(2024, 6, 16);

        let legacy = countdown(&cal, r, t, TailHolidayPolicy::SkipFirst);
        assert_eq!((legacy.weeks, legacy.remainder_days), (1, 5));

        let strict = countdown(&cal, r, t, TailHolidayPolicy::ExcludeAnchor);
        assert_eq!((strict.weeks, strict.remainder_days), (1, 4));

        assert_eq!(legacy.effective, strict.effective);
        assert_eq!(strict.effective, 9);
    }

    #[test]
    fn past_target_is_elapsed() {
        // Wednesday 2024-06-12 back to Friday 2024-05-31.
        let cal = weekends(date(2024, 5, 1), date(2024, 6, 30));
        let r = date(2024, 6, 12);
        let t = date(2024, 5, 31);
        let c = countdown(&cal, r, t, TailHolidayPolicy::ExcludeAnchor);
        assert_eq!(c.raw, -12);
        // (May 31, Jun 12] holds Sat 1, Sun 2, Sat 8, Sun 9.
        assert_eq!(c.effective, -8);
        assert_eq!(c.status(), CountdownStatus::Elapsed);
        assert_eq!(c.days(), 8);
        // Anchor = Jun 5; tail (May 31, Jun 5] holds Sat 1 and Sun 2.
        assert_eq!((c.weeks, c.remainder_days), (1, 3));
        assert_eq!(
            c.to_string(),
            "2024-05-31 was 8 working days ago, or 1 week, 3 days"
        );
    }

    #[test]
    fn past_target_skip_first_walks_backward() {
        let cal = weekends(date(2024, 5, 1), date(2024, 6, 30));
        let c = countdown(&cal, date(2024, 6, 12), date(2024, 5, 31), TailHolidayPolicy::SkipFirst);
        assert_eq!(c.effective, -8);
        // Walking Jun 5 down to May 31 meets Sun 2 then Sat 1; only Sat 1 counts.
        assert_eq!((c.weeks, c.remainder_days), (1, 4));
        assert_eq!(
            c.to_string(),
            "2024-05-31 was 8 working days ago, or 1 week, 4 days"
        );
    }

    #[test]
    fn all_holidays_in_between_reads_as_today() {
        // Friday to Sunday with the weekend off: no working day remains.
        let cal = weekends(date(2024, 6, 1), date(2024, 6, 2));
        let c = countdown(
            &cal,
            date(2024, 5, 31),
            date(2024, 6, 2),
            TailHolidayPolicy::SkipFirst,
        );
        assert_eq!(c.raw, 2);
        assert_eq!(c.status(), CountdownStatus::Today);
    }
}
