//! Shift a date by working days.

use std::fmt;

use tracing::debug;

use crate::policy::FinalDayPolicy;
use wd_core::errors::Result;
use wd_core::utilities::data_formatters::format_count;
use wd_core::Days;
use wd_time::{Calendar, Date};

/// Result of [`shift`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    /// The start date.
    pub start: Date,
    /// The requested signed working-day offset.
    pub offset: Days,
    /// The date reached.
    pub result: Date,
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days = format_count(i64::from(self.offset.abs()), "working day");
        match self.offset {
            0 => write!(f, "{} shifted by 0 working days is {}", self.start, self.result),
            n if n > 0 => write!(f, "{days} after {} is {}", self.start, self.result),
            _ => write!(f, "{days} before {} is {}", self.start, self.result),
        }
    }
}

/// Move `offset` working days away from `start`: forward when positive,
/// backward when negative.  A zero offset returns `start` itself.
///
/// Holidays never consume the offset.  `final_day` decides whether the last
/// step also skips holidays.
///
/// # Errors
/// Returns [`wd_core::Error::Date`] if the walk leaves the supported date range.
pub fn shift(
    calendar: &dyn Calendar,
    start: Date,
    offset: Days,
    final_day: FinalDayPolicy,
) -> Result<Shift> {
    let result = match final_day {
        FinalDayPolicy::Checked => calendar.advance_business_days(start, offset)?,
        FinalDayPolicy::Unchecked if offset == 0 => start,
        FinalDayPolicy::Unchecked => {
            let step = offset.signum();
            calendar
                .advance_business_days(start, offset - step)?
                .add_days(step)?
        }
    };
    debug!(%start, offset, %result, ?final_day, "shift computed");
    Ok(Shift {
        start,
        offset,
        result,
    })
}
