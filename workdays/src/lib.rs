//! # workdays
//!
//! Holiday-aware working-day arithmetic.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates, and hosts the configuration model used by
//! the `workdays` command-line tool.
//!
//! ```rust
//! use workdays::calc::DateCalculator;
//! use workdays::time::{Date, HolidaySet};
//!
//! let mut holidays = HolidaySet::new("example");
//! holidays.insert(Date::parse("2024-06-05").unwrap(), "midweek").unwrap();
//!
//! let calc = DateCalculator::new(&holidays);
//! let c = calc.countdown(
//!     Date::parse("2024-06-03").unwrap(),
//!     Date::parse("2024-06-07").unwrap(),
//! );
//! assert_eq!(c.effective, 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions, parsers, and formatters.
pub use wd_core as core;

/// Date, calendar, and holiday set types.
pub use wd_time as time;

/// Countdown, shift, and span calculations.
pub use wd_calc as calc;

/// TOML configuration for the command-line tool.
pub mod config;

pub use config::WorkdaysConfig;
