//! # rusty-rates
//!
//! Historical EUR/USD exchange rates from the PrivatBank archive.
//!
//! A batch validates the requested day count, queries the archive for every
//! date concurrently and reduces each day's payload to the allow-listed
//! currencies, keeping the results in request order.
//!
//! ## Example
//!
//! ```rust,no_run
//! use rusty_rates::prelude::*;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let batch = RateBatch::new(PrivatBankSource::new());
//!     if let Some(result) = batch.run("3").await {
//!         println!("{}", serde_json::to_string_pretty(&result).unwrap());
//!     }
//! }
//! ```

pub mod batch;
pub mod currency;
pub mod data;
pub mod dates;
pub mod error;
pub mod normalize;
pub mod runtime;

pub mod prelude {
    //! Commonly used types and traits
    pub use crate::batch::{BatchResult, RateBatch};
    pub use crate::currency::Currency;
    pub use crate::data::raw::{RawCurrencyRate, RawRateResponse};
    pub use crate::data::sources::{
        FetchFailure, FetchOutcome, PrivatBankSource, RateSource, SourceConfig,
    };
    pub use crate::dates::DateSpec;
    pub use crate::error::{RatesError, Result};
    pub use crate::normalize::{DayRates, Rate, RateEntry};
    pub use crate::runtime::{RuntimeConfig, RuntimeFlavor};
}
