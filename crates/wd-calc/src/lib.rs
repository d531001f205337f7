//! # wd-calc
//!
//! The date calculator: working-day arithmetic against a holiday calendar.
//!
//! Three calculations are offered, all pure functions of a [`Calendar`]
//! and their date arguments:
//!
//! * [`countdown()`]: working days remaining until (or elapsed since) a target;
//! * [`shift()`]: the date reached after a signed number of working days;
//! * [`span()`]: the inclusive working-day span between two dates.
//!
//! [`DateCalculator`] bundles a calendar with a [`CalculatorPolicy`] and
//! also accepts raw user input through [`Request`].
//!
//! [`Calendar`]: wd_time::Calendar

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `DateCalculator` and raw-input requests.
pub mod calculator;

/// Countdown to a target date.
pub mod countdown;

/// Behaviour switches for the calculations.
pub mod policy;

/// `DistanceResult`: the outcome of any calculation.
pub mod result;

/// Shift a date by working days.
pub mod shift;

/// Working-day span between two dates.
pub mod span;

pub use calculator::{DateCalculator, Request};
pub use countdown::{countdown, Countdown, CountdownStatus};
pub use policy::{CalculatorPolicy, FinalDayPolicy, TailHolidayPolicy};
pub use result::DistanceResult;
pub use shift::{shift, Shift};
pub use span::{span, Span};
