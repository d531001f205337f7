//! Working-day span between two dates.
//!
//! Unlike a countdown, a span counts both boundary days, and its week figure
//! is a distance between ISO weeks rather than a split of the day count.

use std::fmt;

use tracing::debug;

use wd_core::utilities::data_formatters::format_count;
use wd_core::{Days, Weeks};
use wd_time::{Calendar, Date};

/// Result of [`span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// The start date.
    pub start: Date,
    /// The end date.
    pub end: Date,
    /// Signed working-day difference (start excluded, end included).
    pub effective: Days,
    /// Boundary-inclusive working-day count, `|effective ± 1|`, or 0.
    pub days: u32,
    /// ISO weeks touched, `|week difference ± 1|`, or 0.
    pub weeks: Weeks,
}

impl Span {
    /// Return `true` if no working day separates the two dates.
    pub fn is_empty(&self) -> bool {
        self.effective == 0
    }

    /// Return `true` if the end date precedes the start date.
    pub fn is_backward(&self) -> bool {
        self.effective < 0
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(
                f,
                "no working days between {} and {}",
                self.start, self.end
            );
        }
        let (from, to) = if self.is_backward() {
            (self.end, self.start)
        } else {
            (self.start, self.end)
        };
        write!(
            f,
            "{from} to {to} spans {} across {}",
            format_count(i64::from(self.days), "working day"),
            format_count(i64::from(self.weeks), "ISO week")
        )
    }
}

/// Measure the working-day span from `start` to `end`.
///
/// `effective` is the calendar's signed working-day count between the dates.
/// A positive count is reported boundary-inclusive as `effective + 1`, a
/// negative one as `|effective - 1|`.  The week figure is the distance
/// between the ISO weeks of the two dates, adjusted the same way.
pub fn span(calendar: &dyn Calendar, start: Date, end: Date) -> Span {
    let effective = calendar.business_days_between(start, end);
    // Measured between week-opening Mondays so that week-year rollovers
    // (week 52/53 to week 1) are handled.
    let week_diff = (end.iso_week_start() - start.iso_week_start()) / 7;
    let (days, weeks) = match effective {
        e if e > 0 => ((e + 1).unsigned_abs(), (week_diff + 1).unsigned_abs()),
        e if e < 0 => ((e - 1).unsigned_abs(), (week_diff - 1).unsigned_abs()),
        _ => (0, 0),
    };
    debug!(%start, %end, effective, week_diff, "span computed");
    Span {
        start,
        end,
        effective,
        days,
        weeks,
    }
}
