//! Data parsing helpers.
//!
//! Turns the raw strings typed by a user (or read from the holiday file)
//! into numbers.  Calendar validation of the parsed triple is left to
//! `Date::from_ymd`.

use crate::errors::{Error, Result};

/// Parse a date string in ISO 8601 calendar format (`YYYY-MM-DD`).
///
/// Only the shape and the numeric fields are checked here; whether the
/// triple names a real day is up to the caller.  Surrounding whitespace is
/// ignored.
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Result<(i32, u8, u8)> {
    let trimmed = s.trim();
    let err = || Error::parse("date", s);
    let mut parts = trimmed.split('-');
    let (y, m, d) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d), None) => (y, m, d),
        _ => return Err(err()),
    };
    if y.len() != 4 || m.len() != 2 || d.len() != 2 {
        return Err(err());
    }
    if !(y.bytes().chain(m.bytes()).chain(d.bytes())).all(|b| b.is_ascii_digit()) {
        return Err(err());
    }
    let year: i32 = y.parse().map_err(|_| err())?;
    let month: u8 = m.parse().map_err(|_| err())?;
    let day: u8 = d.parse().map_err(|_| err())?;
    Ok((year, month, day))
}

/// Parse a signed day offset such as `"5"`, `"+5"` or `"-12"`.
pub fn parse_day_offset(s: &str) -> Result<i32> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
    if digits.is_empty() || digits.starts_with('+') {
        return Err(Error::parse("day offset", s));
    }
    digits.parse().map_err(|_| Error::parse("day offset", s))
}
