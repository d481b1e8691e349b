use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Full English month names, the only keys accepted in rate tables and in
/// the `month` query parameter.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn is_known_month(name: &str) -> bool {
    MONTH_NAMES.contains(&name)
}

/// Rates for one month: currency code -> USD→currency rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthRates {
    pub rates: HashMap<String, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

/// One year's table from `exchange-rates/<year>.json`, keyed by month name.
/// USD is the implicit base and never appears as an entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(flatten)]
    pub months: HashMap<String, MonthRates>,
}

impl RateTable {
    /// USD→`currency` rate for `month`, if recorded.
    pub fn rate(&self, month: &str, currency: &str) -> Option<f64> {
        self.months
            .get(month)
            .and_then(|m| m.rates.get(currency))
            .copied()
    }
}

/// Wire shape of `/api/exchange-rates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRateResponse {
    /// Always "USD".
    pub base_currency: String,
    pub target_currency: String,
    pub year: i32,
    pub month: String,
    pub rate: f64,
}
