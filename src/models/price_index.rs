use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::CurrencyMeta;

/// Ordering applied to the aggregated comparison view.
///
/// Null converted prices compare greater than every value, so `PriceAsc`
/// places them last and `PriceDesc` first, never interleaved. `Trend` sorts
/// by descending |trend %| with unknown trends last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    None,
    Name,
    PriceAsc,
    PriceDesc,
    Trend,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SortOrder::None),
            "name" => Ok(SortOrder::Name),
            "price-asc" => Ok(SortOrder::PriceAsc),
            "price-desc" => Ok(SortOrder::PriceDesc),
            "trend" => Ok(SortOrder::Trend),
            other => Err(format!("Unknown sort order: {other:?}")),
        }
    }
}

/// The pair of USD-pivot rates behind one converted price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatesUsed {
    pub usd_to_local: f64,
    pub usd_to_target: f64,
}

/// One row of the aggregated comparison view.
///
/// Countries whose conversion failed, or that have no recorded local price,
/// keep their row with null converted fields; they are excluded from the
/// min/max but never dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexItem {
    pub id: String,
    pub country_name: String,
    pub country_code: String,
    pub currency_meta: CurrencyMeta,
    pub flag: String,
    pub local_price: Option<f64>,
    pub converted_price: Option<f64>,
    pub previous_year: Option<i32>,
    pub previous_local_price: Option<f64>,
    pub previous_converted_price: Option<f64>,
    /// Percent change of the converted price against the previous available
    /// year, when both conversions succeeded and the previous is non-zero.
    pub trend_pct: Option<f64>,
    /// Normalized 0-100 position within the view's min-max range.
    pub relative_position: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rates_used: Option<RatesUsed>,
}

/// Wire shape of `/api/index`: the full comparison view for one
/// (year, month, product, display currency) selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceIndex {
    pub year: i32,
    pub month: String,
    pub product_id: String,
    pub target_currency: String,
    /// Min/max over successfully converted current prices; 0 by convention
    /// when nothing converted.
    pub min_converted: f64,
    pub max_converted: f64,
    pub items: Vec<IndexItem>,
}
