use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Currency metadata carried by each country entry.
///
/// `decimals` is a display hint from the data file: false for currencies
/// quoted in whole units (yen-style).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyMeta {
    pub code: String,
    pub decimals: bool,
    pub symbol: String,
}

/// Descriptive country metadata. Only `flag` is interpreted; the remaining
/// fields (continent, capital, population, ...) are opaque passthrough.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryMeta {
    pub flag: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One country record from `data-sample.json`, keyed externally by its
/// lowercase country id ("us", "jp", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryEntry {
    /// Display name, e.g. "Japan".
    pub country: String,
    /// Display code, e.g. "JP".
    pub code: String,
    pub currency: CurrencyMeta,
    /// product id -> year -> local price. A `null` price marks a year with
    /// no recorded value; gaps are normal, not errors.
    #[serde(default)]
    pub prices: HashMap<String, BTreeMap<i32, Option<f64>>>,
    /// Opaque economic indicators, passed through untouched.
    #[serde(default)]
    pub economy: serde_json::Value,
    pub meta: CountryMeta,
}

/// One recorded (year, price) step of a country's series, for charting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub price: f64,
}

/// Price resolution for one product within one country. Constructed per
/// request and discarded with the response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPriceInfo {
    pub requested_year: i32,
    pub current_local_price: Option<f64>,
    pub previous_available_year: Option<i32>,
    pub previous_local_price: Option<f64>,
    /// All recorded (year, price) pairs, ascending by year.
    pub history: Vec<SeriesPoint>,
}

/// Wire shape of one `/api/countries` item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryProductInfo {
    pub id: String,
    pub country_name: String,
    pub country_code: String,
    pub currency_meta: CurrencyMeta,
    pub flag: String,
    pub selected_product_id: String,
    pub prices_for_product: ResolvedPriceInfo,
}
