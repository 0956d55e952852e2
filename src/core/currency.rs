use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies the relay can charge in.
///
/// Only Kenyan Shillings are wired up; the gateway account and the billing
/// country code are both Kenyan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Kenyan Shilling (2 decimal places)
    KES,
}

impl Currency {
    /// Returns the decimal scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::KES => 2,
        }
    }

    /// ISO 3166 country code sent as the billing country
    pub fn country_code(&self) -> &'static str {
        match self {
            Currency::KES => "KE",
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::KES => write!(f, "KES"),
        }
    }
}
