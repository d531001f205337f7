//! `DateCalculator`: a calendar and a policy, ready to answer requests.
//!
//! The typed methods take dates that are already valid.  [`Request`] carries
//! raw user input instead; [`DateCalculator::evaluate`] parses it and runs
//! the matching calculation, so every input problem comes back as an error
//! value and nothing is computed from a half-parsed request.

use tracing::debug;

use crate::countdown::{countdown, Countdown};
use crate::policy::CalculatorPolicy;
use crate::result::DistanceResult;
use crate::shift::{shift, Shift};
use crate::span::{span, Span};
use wd_core::errors::Result;
use wd_core::utilities::data_parsers::parse_day_offset;
use wd_core::Days;
use wd_time::{Calendar, Date, Settings};

/// A calculation request made of raw strings, as typed by a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Countdown from the evaluation date to `target`.
    Countdown {
        /// Target date, `YYYY-MM-DD`.
        target: String,
    },
    /// Shift `from` (the evaluation date if absent) by `offset` working days.
    Shift {
        /// Signed working-day offset.
        offset: String,
        /// Start date, `YYYY-MM-DD`.
        from: Option<String>,
    },
    /// Span between two explicit dates.
    Span {
        /// Start date, `YYYY-MM-DD`.
        start: String,
        /// End date, `YYYY-MM-DD`.
        end: String,
    },
}

/// Working-day calculator over a borrowed calendar.
#[derive(Debug, Clone, Copy)]
pub struct DateCalculator<'a> {
    calendar: &'a dyn Calendar,
    policy: CalculatorPolicy,
}

impl<'a> DateCalculator<'a> {
    /// Calculator with the default policy.
    pub fn new(calendar: &'a dyn Calendar) -> Self {
        Self::with_policy(calendar, CalculatorPolicy::default())
    }

    /// Calculator with an explicit policy.
    pub fn with_policy(calendar: &'a dyn Calendar, policy: CalculatorPolicy) -> Self {
        Self { calendar, policy }
    }

    /// Return the policy in use.
    pub fn policy(&self) -> CalculatorPolicy {
        self.policy
    }

    /// See [`countdown`](crate::countdown::countdown).
    pub fn countdown(&self, reference: Date, target: Date) -> Countdown {
        countdown(self.calendar, reference, target, self.policy.tail_holidays)
    }

    /// See [`shift`](crate::shift::shift).
    pub fn shift(&self, start: Date, offset: Days) -> Result<Shift> {
        shift(self.calendar, start, offset, self.policy.final_day)
    }

    /// See [`span`](crate::span::span).
    pub fn span(&self, start: Date, end: Date) -> Span {
        span(self.calendar, start, end)
    }

    /// Parse `request` and run it.  Dates not given in the request default
    /// to the evaluation date of `settings`.
    pub fn evaluate(&self, settings: &Settings, request: &Request) -> Result<DistanceResult> {
        debug!(?request, "evaluating request");
        let result: DistanceResult = match request {
            Request::Countdown { target } => {
                let target = Date::parse(target)?;
                self.countdown(settings.evaluation_date()?, target).into()
            }
            Request::Shift { offset, from } => {
                let offset = parse_day_offset(offset)?;
                let start = match from {
                    Some(s) => Date::parse(s)?,
                    None => settings.evaluation_date()?,
                };
                self.shift(start, offset)?.into()
            }
            Request::Span { start, end } => {
                let start = Date::parse(start)?;
                let end = Date::parse(end)?;
                self.span(start, end).into()
            }
        };
        Ok(result)
    }
}
