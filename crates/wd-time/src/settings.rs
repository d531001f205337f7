//! Calculation settings.
//!
//! [`Settings`] holds the **evaluation date**: the reference date that the
//! countdown and shift calculations treat as "today".  It is a plain value
//! handed to whoever needs it; when no date has been set it falls back to
//! the local system date.

use crate::date::Date;
use wd_core::errors::Result;

/// Settings shared by one calculation session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Explicit evaluation date, if any.
    evaluation_date: Option<Date>,
}

impl Settings {
    /// Settings that follow the system clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settings pinned to `date`.
    pub fn with_evaluation_date(date: Date) -> Self {
        Self {
            evaluation_date: Some(date),
        }
    }

    /// Return the evaluation date: the pinned date if set, today otherwise.
    pub fn evaluation_date(&self) -> Result<Date> {
        match self.evaluation_date {
            Some(date) => Ok(date),
            None => today(),
        }
    }

    /// Return `true` if the evaluation date has been pinned.
    pub fn has_evaluation_date(&self) -> bool {
        self.evaluation_date.is_some()
    }

    /// Pin the evaluation date.
    pub fn set_evaluation_date(&mut self, date: Date) {
        self.evaluation_date = Some(date);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&mut self) {
        self.evaluation_date = None;
    }
}

/// Return the current local date.
pub fn today() -> Result<Date> {
    Date::try_from(chrono::Local::now().date_naive())
}
