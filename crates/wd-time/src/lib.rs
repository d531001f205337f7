//! # wd-time
//!
//! Date, weekday, calendar and holiday set types, plus holiday persistence.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Calendar trait and the null calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `HolidaySet`: user-maintained holidays.
pub mod holiday_set;

/// Evaluation-date settings.
pub mod settings;

/// Holiday file format and the persisting `HolidayStore`.
pub mod storage;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, NullCalendar};
pub use date::Date;
pub use holiday_set::HolidaySet;
pub use settings::Settings;
pub use storage::{FileStorage, HolidayStorage, HolidayStore, MemoryStorage, StorageError};
pub use weekday::Weekday;
