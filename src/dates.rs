//! Requested date range generation
//!
//! Turns a raw day-count request into the calendar dates the rate archive is
//! queried for, most recent first.

use crate::error::{RatesError, Result};
use chrono::{Duration, Local, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::num::{IntErrorKind, ParseIntError};

/// Smallest accepted day count
pub const MIN_DAYS: u32 = 1;
/// Largest accepted day count
pub const MAX_DAYS: u32 = 10;
/// Day count used when none is given
pub const DEFAULT_DAYS: &str = "2";

/// Query format of the rate archive
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// A calendar date in the archive's `DD.MM.YYYY` query form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateSpec(NaiveDate);

impl DateSpec {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `DD.MM.YYYY` string
    pub fn parse(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|e| RatesError::Validation(format!("invalid date {}: {}", s, e)))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DateSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl Serialize for DateSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn out_of_range(days: &str) -> RatesError {
    RatesError::Validation(format!(
        "out of allowed range: {} (choose between {} and {})",
        days, MIN_DAYS, MAX_DAYS
    ))
}

/// Validate a day-count request
pub fn parse_day_count(request: &str) -> Result<u32> {
    let trimmed = request.trim();
    let days: i64 = trimmed.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(trimmed),
        _ => RatesError::Validation(format!("not a valid integer: {:?}", request)),
    })?;

    if !(MIN_DAYS as i64..=MAX_DAYS as i64).contains(&days) {
        return Err(out_of_range(trimmed));
    }

    Ok(days as u32)
}

/// The `days` calendar days ending at `today`, descending
pub fn date_range(today: NaiveDate, days: u32) -> Vec<DateSpec> {
    (0..days as i64)
        .map(|offset| DateSpec(today - Duration::days(offset)))
        .collect()
}

/// Validate `request` and build the range ending at the local calendar date
pub fn last_days(request: &str) -> Result<Vec<DateSpec>> {
    let days = parse_day_count(request)?;
    Ok(date_range(Local::now().date_naive(), days))
}
