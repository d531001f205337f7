//! Holiday set: a calendar whose non-working days are listed explicitly.
//!
//! Any date can be marked as a holiday with a short label; a working day is
//! simply a date that is not in the set.  Weekends are not implied: they
//! count as holidays only once added (see [`HolidaySet::mark_weekends`]).

use std::collections::BTreeMap;

use crate::calendar::Calendar;
use crate::date::Date;
use wd_core::ensure;
use wd_core::errors::Result;

/// Default label used when a holiday is added without one.
pub const DEFAULT_LABEL: &str = "holiday";

/// Default label for days added by [`HolidaySet::mark_weekends`].
pub const WEEKEND_LABEL: &str = "weekend";

/// A calendar where holidays are added and removed at run time.
///
/// Entries are kept in ascending date order, which makes listings and saved
/// files deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidaySet {
    name: String,
    holidays: BTreeMap<Date, String>,
}

impl HolidaySet {
    /// Create a new holiday set with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the holiday on `date`.
    ///
    /// Returns the label previously stored for that date, if any.  Labels
    /// must fit on a single line of the holiday file.
    pub fn insert(&mut self, date: Date, label: impl Into<String>) -> Result<Option<String>> {
        let label = label.into();
        ensure!(
            !label.contains(['\n', '\r']),
            "holiday label must not contain a line break: {label:?}"
        );
        Ok(self.holidays.insert(date, label))
    }

    /// Remove the holiday on `date`, returning its label if it was present.
    pub fn remove(&mut self, date: Date) -> Option<String> {
        self.holidays.remove(&date)
    }

    /// Return `true` if `date` is marked as a holiday.
    pub fn contains(&self, date: Date) -> bool {
        self.holidays.contains_key(&date)
    }

    /// Return the label of the holiday on `date`.
    pub fn label(&self, date: Date) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Return the number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if no holiday is set.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Iterate over `(date, label)` pairs in ascending date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.holidays.iter().map(|(d, l)| (*d, l.as_str()))
    }

    /// Iterate over the holidays in the inclusive range `[from, to]`.
    pub fn range(&self, from: Date, to: Date) -> impl Iterator<Item = (Date, &str)> + '_ {
        // An inverted range would make BTreeMap::range panic.
        let (from, to) = if from <= to { (from, to) } else { (to, from) };
        self.holidays
            .range(from..=to)
            .map(|(d, l)| (*d, l.as_str()))
    }

    /// Iterate over the holidays falling in calendar year `year`.
    pub fn in_year(&self, year: i32) -> impl Iterator<Item = (Date, &str)> + '_ {
        self.holidays
            .iter()
            .filter(move |(d, _)| d.year() == year)
            .map(|(d, l)| (*d, l.as_str()))
    }

    /// Mark every Saturday and Sunday in `[from, to]` as a holiday.
    ///
    /// Dates that already carry a label keep it.  Returns the number of
    /// newly added holidays.
    pub fn mark_weekends(&mut self, from: Date, to: Date, label: &str) -> Result<usize> {
        ensure!(from <= to, "weekend range is empty: {from} > {to}");
        ensure!(
            !label.contains(['\n', '\r']),
            "holiday label must not contain a line break: {label:?}"
        );
        let mut added = 0;
        let mut d = from;
        loop {
            if d.weekday().is_weekend() && !self.holidays.contains_key(&d) {
                self.holidays.insert(d, label.to_owned());
                added += 1;
            }
            if d == to {
                break;
            }
            d = d + 1;
        }
        Ok(added)
    }
}

impl Calendar for HolidaySet {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.holidays.contains_key(&date)
    }
}
