//! Behaviour switches for the calculations.
//!
//! Two edge behaviours of the working-day arithmetic have no single obvious
//! answer, so both are configurable.  The defaults are spelled out on each
//! enum.

use serde::Deserialize;

/// How holidays in the tail window of a countdown reduce the remainder.
///
/// A countdown splits the raw distance into whole weeks plus a remainder.
/// The tail window runs from the *anchor* (reference date plus the whole
/// weeks) to the target, and holidays found there are taken off the
/// remainder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailHolidayPolicy {
    /// The window includes the anchor; the first holiday met is not
    /// subtracted.  This reproduces the long-standing countdown figures.
    #[default]
    SkipFirst,
    /// The window starts the day after the anchor; every holiday in it is
    /// subtracted.
    ExcludeAnchor,
}

/// Whether the last day of a working-day shift must itself be a working day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FinalDayPolicy {
    /// Every step skips holidays; the result is always a working day.
    #[default]
    Checked,
    /// All but the last working day are walked with holiday skipping; the
    /// final calendar day is then taken without checking it.
    Unchecked,
}

/// All calculation switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorPolicy {
    /// Countdown tail-window treatment.
    pub tail_holidays: TailHolidayPolicy,
    /// Shift landing-day treatment.
    pub final_day: FinalDayPolicy,
}
