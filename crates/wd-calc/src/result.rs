//! `DistanceResult`: the outcome of any calculation.

use std::fmt;

use crate::countdown::Countdown;
use crate::shift::Shift;
use crate::span::Span;

/// A computed distance or date.  Never persisted; built on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceResult {
    /// Working days to or from a target.
    Countdown(Countdown),
    /// Date reached by a working-day shift.
    Shift(Shift),
    /// Working-day span between two dates.
    Span(Span),
}

impl fmt::Display for DistanceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceResult::Countdown(c) => c.fmt(f),
            DistanceResult::Shift(s) => s.fmt(f),
            DistanceResult::Span(s) => s.fmt(f),
        }
    }
}

impl From<Countdown> for DistanceResult {
    fn from(c: Countdown) -> Self {
        DistanceResult::Countdown(c)
    }
}

impl From<Shift> for DistanceResult {
    fn from(s: Shift) -> Self {
        DistanceResult::Shift(s)
    }
}

impl From<Span> for DistanceResult {
    fn from(s: Span) -> Self {
        DistanceResult::Span(s)
    }
}
