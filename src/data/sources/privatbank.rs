//! PrivatBank exchange rate archive integration
//!
//! Provides daily cash and NB (non-cash) rates against UAH. No API key required.

use super::{FetchFailure, FetchOutcome, RateSource};
use crate::data::raw::RawRateResponse;
use crate::dates::DateSpec;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::future::Future;
use std::time::Duration;

const PRIVATBANK_ARCHIVE_URL: &str = "https://api.privatbank.ua/p24api/exchange_rates";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the archive
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Endpoint queried with `?date=DD.MM.YYYY`
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: PRIVATBANK_ARCHIVE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

/// PrivatBank archive data source
///
/// Each fetch builds its own HTTP client and drops it when the request
/// completes, so concurrent fetches share no connection state.
#[derive(Debug, Clone, Default)]
pub struct PrivatBankSource {
    config: SourceConfig,
}

impl PrivatBankSource {
    /// Create a source for the public archive
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SourceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Archive URL for a single date
    pub fn url_for(&self, date: &DateSpec) -> String {
        format!("{}?date={}", self.config.base_url, date)
    }

    async fn fetch_url(url: String, timeout: Duration) -> FetchOutcome {
        let client = match Client::builder().timeout(timeout).build() {
            Ok(client) => client,
            Err(e) => {
                return Self::report(FetchFailure::Transport {
                    url,
                    message: format!("Failed to create HTTP client: {}", e),
                })
            }
        };

        debug!("GET {}", url);
        let response = match client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                return Self::report(FetchFailure::Transport {
                    url,
                    message: e.to_string(),
                })
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            return Self::report(FetchFailure::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        match response.json::<RawRateResponse>().await {
            Ok(raw) => {
                debug!("{} returned {} rate rows", url, raw.exchange_rate.len());
                FetchOutcome::Success(raw)
            }
            Err(e) => Self::report(FetchFailure::Decode {
                url,
                message: e.to_string(),
            }),
        }
    }

    fn report(failure: FetchFailure) -> FetchOutcome {
        warn!("{}", failure);
        FetchOutcome::Failure(failure)
    }
}

impl RateSource for PrivatBankSource {
    fn fetch_day(&self, date: &DateSpec) -> impl Future<Output = FetchOutcome> + Send {
        Self::fetch_url(self.url_for(date), self.config.timeout)
    }

    fn name(&self) -> &str {
        "privatbank"
    }
}
