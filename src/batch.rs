//! Concurrent multi-date fetch and normalize

use crate::data::sources::RateSource;
use crate::dates::{self, DateSpec};
use crate::error::Result;
use crate::normalize::{normalize_outcome, DayRates};
use futures::future::join_all;
use log::{error, info};

/// One slot per requested date, in request order
pub type BatchResult = Vec<DayRates>;

/// Drives a [`RateSource`] over a range of dates
pub struct RateBatch<S> {
    source: S,
}

impl<S: RateSource> RateBatch<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and normalize the last `request` days.
    ///
    /// Returns `None` without touching the network when `request` is not an
    /// integer in the accepted range.
    pub async fn run(&self, request: &str) -> Option<BatchResult> {
        match self.try_run(request).await {
            Ok(result) => Some(result),
            Err(e) => {
                error!("{}", e);
                None
            }
        }
    }

    /// Like [`RateBatch::run`], but hands back the validation error
    pub async fn try_run(&self, request: &str) -> Result<BatchResult> {
        let dates = dates::last_days(request)?;
        Ok(self.run_dates(&dates).await)
    }

    /// Fetch every date concurrently, then normalize in the order given
    pub async fn run_dates(&self, dates: &[DateSpec]) -> BatchResult {
        info!(
            "Fetching {} day(s) from {}",
            dates.len(),
            self.source.name()
        );

        let outcomes = join_all(dates.iter().map(|date| self.source.fetch_day(date))).await;

        let results: BatchResult = dates
            .iter()
            .zip(outcomes.iter())
            .map(|(date, outcome)| normalize_outcome(*date, outcome))
            .collect();

        let failed = results.iter().filter(|day| day.is_failed()).count();
        if failed > 0 {
            info!("{} of {} day(s) failed", failed, results.len());
        }

        results
    }
}
