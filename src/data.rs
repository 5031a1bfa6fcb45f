//! Exchange rate data: archive wire model and sources

pub mod raw;
pub mod sources;

pub use raw::{RawCurrencyRate, RawRateResponse};
pub use sources::{FetchFailure, FetchOutcome, PrivatBankSource, RateSource, SourceConfig};
