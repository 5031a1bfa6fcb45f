//! Wire model of the PrivatBank exchange rate archive
//!
//! One response per queried date:
//!
//! ```json
//! {
//!   "date": "01.12.2014",
//!   "bank": "PB",
//!   "baseCurrency": 980,
//!   "baseCurrencyLit": "UAH",
//!   "exchangeRate": [
//!     {"baseCurrency": "UAH", "saleRateNB": 15.05, "purchaseRateNB": 15.05},
//!     {"baseCurrency": "UAH", "currency": "EUR", "saleRateNB": 18.79,
//!      "purchaseRateNB": 18.79, "saleRate": 20.0, "purchaseRate": 19.2}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Full payload for one archive date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRateResponse {
    pub date: String,
    #[serde(default)]
    pub bank: Option<String>,
    /// Numeric ISO 4217 code of the base currency (980 = UAH)
    #[serde(default)]
    pub base_currency: Option<u32>,
    #[serde(default)]
    pub base_currency_lit: Option<String>,
    #[serde(default)]
    pub exchange_rate: Vec<RawCurrencyRate>,
}

/// One currency row. The archive omits `currency` on the base-currency row and
/// omits the consumer rates for currencies the bank does not trade in cash.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCurrencyRate {
    #[serde(rename = "baseCurrency", default)]
    pub base_currency: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(rename = "saleRateNB", default)]
    pub sale_rate_nb: Option<f64>,
    #[serde(rename = "purchaseRateNB", default)]
    pub purchase_rate_nb: Option<f64>,
    #[serde(rename = "saleRate", default)]
    pub sale_rate: Option<f64>,
    #[serde(rename = "purchaseRate", default)]
    pub purchase_rate: Option<f64>,
}

impl RawCurrencyRate {
    /// Consumer sale rate, else the NB sale rate
    pub fn sale(&self) -> Option<f64> {
        self.sale_rate.or(self.sale_rate_nb)
    }

    /// Consumer purchase rate, else the NB purchase rate
    pub fn purchase(&self) -> Option<f64> {
        self.purchase_rate.or(self.purchase_rate_nb)
    }
}
