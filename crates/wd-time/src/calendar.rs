//! `Calendar` trait.
//!
//! A calendar knows which dates are working days.  Everything the date
//! calculator needs (stepping over holidays, counting working days in a
//! range) is provided on top of the single `is_business_day` query.

use crate::date::Date;
use wd_core::errors::Result;

/// A working-day calendar.
pub trait Calendar: std::fmt::Debug {
    /// Human-readable name (e.g. `"holidays.txt"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a working day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-working) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Advance `date` by `n` working days (backwards when `n < 0`).
    ///
    /// Every step, the last one included, skips holidays, so the result is
    /// always a working day unless `n == 0`, in which case `date` is returned
    /// unchanged.
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.unsigned_abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of working days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`, counting the
    /// days after `d2` up to and including `d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let holidays = self.holidays_between(d1, d2);
        let raw = d1.days_between(d2);
        if raw >= 0 {
            raw - holidays
        } else {
            raw + holidays
        }
    }

    /// Count the holidays after the earlier of `d1`/`d2` up to and including
    /// the later one.  Always non-negative.
    fn holidays_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end) = if d2 >= d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start;
        while d < end {
            d = d + 1;
            if self.is_holiday(d) {
                count += 1;
            }
        }
        count
    }
}

/// A null calendar: treats every day as a working day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }
}
