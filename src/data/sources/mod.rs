//! Exchange rate data sources
//!
//! A source performs one request per archive date and reports the result as a
//! [`FetchOutcome`]. Failures are values, so one bad date never aborts the
//! other fetches of a batch.
//!
//! - PrivatBank: public archive of daily cash and NB rates

pub mod privatbank;

pub use privatbank::{PrivatBankSource, SourceConfig};

use crate::data::raw::RawRateResponse;
use crate::dates::DateSpec;
use crate::error::RatesError;
use serde::Serialize;
use std::fmt;
use std::future::Future;

/// Result of fetching one archive date
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Success(RawRateResponse),
    Failure(FetchFailure),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}

/// Why a single date could not be fetched
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FetchFailure {
    /// The service answered with a status other than 200
    HttpStatus { status: u16, url: String },
    /// Connection, DNS, or timeout failure
    Transport { url: String, message: String },
    /// The body was not a valid archive payload
    Decode { url: String, message: String },
}

impl FetchFailure {
    pub fn url(&self) -> &str {
        match self {
            FetchFailure::HttpStatus { url, .. }
            | FetchFailure::Transport { url, .. }
            | FetchFailure::Decode { url, .. } => url,
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::HttpStatus { status, url } => {
                write!(f, "Error status: {}, for {}", status, url)
            }
            FetchFailure::Transport { url, message } => {
                write!(f, "Request to {} failed: {}", url, message)
            }
            FetchFailure::Decode { url, message } => {
                write!(f, "Invalid payload from {}: {}", url, message)
            }
        }
    }
}

impl From<FetchFailure> for RatesError {
    fn from(failure: FetchFailure) -> Self {
        match failure {
            FetchFailure::HttpStatus { status, url } => RatesError::Http { status, url },
            failure @ FetchFailure::Transport { .. } => RatesError::Transport(failure.to_string()),
            failure @ FetchFailure::Decode { .. } => RatesError::Decode(failure.to_string()),
        }
    }
}

/// Trait for exchange rate sources
pub trait RateSource: Send + Sync {
    /// Fetch the raw rates published for `date`
    fn fetch_day(&self, date: &DateSpec) -> impl Future<Output = FetchOutcome> + Send;

    /// Get the source name
    fn name(&self) -> &str;
}
