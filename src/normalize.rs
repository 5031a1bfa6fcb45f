//! Per-date rate normalization
//!
//! Reduces an archive payload to the allow-listed currencies, shaped as
//! `{"<date>": {"<CODE>": {"sale": .., "purchase": ..}}}` per entry.

use crate::currency::Currency;
use crate::data::raw::{RawCurrencyRate, RawRateResponse};
use crate::data::sources::{FetchFailure, FetchOutcome};
use crate::dates::DateSpec;
use log::debug;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Sale and purchase rate against the base currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rate {
    pub sale: f64,
    pub purchase: f64,
}

/// One (date, currency) rate
#[derive(Debug, Clone, PartialEq)]
pub struct RateEntry {
    /// Date as reported by the archive
    pub date: String,
    pub currency: Currency,
    pub rate: Rate,
}

impl RateEntry {
    /// An entry renders as a one-key map, even for a blank date
    pub fn is_empty(&self) -> bool {
        false
    }
}

struct CurrencyRate<'a>(Currency, &'a Rate);

impl Serialize for CurrencyRate<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.0.code(), self.1)?;
        map.end()
    }
}

impl Serialize for RateEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.date, &CurrencyRate(self.currency, &self.rate))?;
        map.end()
    }
}

/// Normalized rates for one requested date
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DayRates {
    Rates(Vec<RateEntry>),
    Failed { date: DateSpec, error: FetchFailure },
}

impl DayRates {
    /// Entries for this date; always empty for a failed fetch
    pub fn entries(&self) -> &[RateEntry] {
        match self {
            DayRates::Rates(entries) => entries,
            DayRates::Failed { .. } => &[],
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            DayRates::Rates(_) => None,
            DayRates::Failed { error, .. } => Some(error),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.failure().is_some()
    }
}

fn entry_for(date: &str, row: &RawCurrencyRate) -> Option<RateEntry> {
    let currency = row.currency.as_deref().and_then(Currency::from_code)?;

    match (row.sale(), row.purchase()) {
        (Some(sale), Some(purchase)) => Some(RateEntry {
            date: date.to_string(),
            currency,
            rate: Rate { sale, purchase },
        }),
        _ => {
            debug!("{} on {} has no sale/purchase rate, skipping", currency, date);
            None
        }
    }
}

/// Normalize one archive payload, keeping the input order of matching rows
pub fn normalize_response(raw: &RawRateResponse) -> Vec<RateEntry> {
    raw.exchange_rate
        .iter()
        .filter_map(|row| entry_for(&raw.date, row))
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Normalize the outcome of fetching `date`
pub fn normalize_outcome(date: DateSpec, outcome: &FetchOutcome) -> DayRates {
    match outcome {
        FetchOutcome::Success(raw) => DayRates::Rates(normalize_response(raw)),
        FetchOutcome::Failure(error) => DayRates::Failed {
            date,
            error: error.clone(),
        },
    }
}
