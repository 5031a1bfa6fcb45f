//! Currency allow-list

use std::fmt;

/// Currencies the rate pipeline keeps (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Currency {
    /// Euro
    EUR,
    /// US Dollar
    USD,
}

impl Currency {
    /// Every currency in the allow-list
    pub const ALL: [Currency; 2] = [Currency::EUR, Currency::USD];

    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::USD => "USD",
        }
    }

    /// Parse from ISO code. Codes outside the allow-list yield `None`.
    ///
    /// Matching is exact: the service always sends upper-case codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EUR" => Some(Currency::EUR),
            "USD" => Some(Currency::USD),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
