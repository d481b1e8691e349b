use std::cmp::Ordering;

use futures::future::join_all;
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::{CountryEntry, IndexItem, PriceIndex, SortOrder};
use crate::services::conversion_service::{self, Conversion};
use crate::services::pricing_service;
use crate::services::rate_cache::RateCache;
use crate::store::CatalogStore;

/// Inputs for one aggregation pass. Selection state (product, display
/// currency) travels in here explicitly rather than through any ambient
/// global.
#[derive(Debug, Clone)]
pub struct IndexRequest {
    pub year: i32,
    pub month: String,
    pub product_id: String,
    pub target_currency: String,
    pub sort: SortOrder,
    pub search: Option<String>,
}

/// Build the aggregated comparison view: resolve every country's price,
/// convert into the display currency, compute min/max and relative
/// positions, then apply search and sort.
///
/// Conversions run concurrently per country; they are pure functions of
/// immutable data, so ordering is a latency concern only. Countries that
/// fail to convert keep their row with null converted fields.
pub async fn build_index(
    store: &dyn CatalogStore,
    cache: &RateCache,
    config: &AppConfig,
    request: &IndexRequest,
) -> Result<PriceIndex, AppError> {
    let countries = store.load_countries().await?;

    let selected: Vec<(&String, &CountryEntry)> = countries
        .iter()
        .filter(|(_, entry)| match &request.search {
            Some(term) => matches_search(&entry.country, &entry.code, term),
            None => true,
        })
        .collect();

    let converted = join_all(
        selected
            .into_iter()
            .map(|(id, entry)| convert_country(store, cache, id, entry, request)),
    )
    .await;
    let mut items = converted
        .into_iter()
        .collect::<Result<Vec<IndexItem>, AppError>>()?;

    let (min_converted, max_converted) = min_max(items.iter().filter_map(|i| i.converted_price));

    for item in &mut items {
        item.relative_position = item
            .converted_price
            .map(|v| relative_position(v, min_converted, max_converted));
    }

    sort_items(&mut items, request.sort);

    // Rounding happens once, here at the response boundary; the positions
    // above were computed from raw values.
    let decimals = conversion_service::display_decimals(
        &request.target_currency,
        &config.zero_decimal_currencies,
    );
    for item in &mut items {
        item.converted_price = item
            .converted_price
            .map(|v| conversion_service::round_for_display(v, decimals));
        item.previous_converted_price = item
            .previous_converted_price
            .map(|v| conversion_service::round_for_display(v, decimals));
    }

    Ok(PriceIndex {
        year: request.year,
        month: request.month.clone(),
        product_id: request.product_id.clone(),
        target_currency: request.target_currency.clone(),
        min_converted: conversion_service::round_for_display(min_converted, decimals),
        max_converted: conversion_service::round_for_display(max_converted, decimals),
        items,
    })
}

async fn convert_country(
    store: &dyn CatalogStore,
    cache: &RateCache,
    id: &str,
    entry: &CountryEntry,
    request: &IndexRequest,
) -> Result<IndexItem, AppError> {
    let resolved = pricing_service::resolve_product_prices(entry, &request.product_id, request.year);

    let mut item = IndexItem {
        id: id.to_string(),
        country_name: entry.country.clone(),
        country_code: entry.code.clone(),
        currency_meta: entry.currency.clone(),
        flag: entry.meta.flag.clone(),
        local_price: resolved.current_local_price,
        converted_price: None,
        previous_year: resolved.previous_available_year,
        previous_local_price: resolved.previous_local_price,
        previous_converted_price: None,
        trend_pct: None,
        relative_position: None,
        rates_used: None,
    };

    if let Some(local) = resolved.current_local_price {
        match conversion_service::convert(
            store,
            cache,
            local,
            &entry.currency.code,
            &request.target_currency,
            request.year,
            &request.month,
        )
        .await
        {
            Ok(Conversion { value, rates }) => {
                item.converted_price = Some(value);
                item.rates_used = Some(rates);
            }
            Err(AppError::RateUnavailable {
                year,
                month,
                currency,
            }) => {
                warn!(
                    "conversion unavailable for {}: no {} rate in {}, {}",
                    id, currency, month, year
                );
            }
            Err(e) => return Err(e),
        }
    }

    if let Some(previous) = resolved.previous_local_price {
        // The previous price converts with its own year's table, falling
        // back to the requested year when the table is absent.
        let rate_year = resolved.previous_available_year.unwrap_or(request.year);
        match conversion_service::convert(
            store,
            cache,
            previous,
            &entry.currency.code,
            &request.target_currency,
            rate_year,
            &request.month,
        )
        .await
        {
            Ok(Conversion { value, .. }) => item.previous_converted_price = Some(value),
            Err(AppError::RateUnavailable { .. }) => {}
            Err(e) => return Err(e),
        }
    }

    item.trend_pct = match (item.converted_price, item.previous_converted_price) {
        (Some(current), Some(previous)) if previous != 0.0 => {
            Some((current - previous) / previous * 100.0)
        }
        _ => None,
    };

    Ok(item)
}

/// Min/max over an iterator of converted values; (0, 0) by convention when
/// nothing converted.
fn min_max(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut any = false;
    for v in values {
        any = true;
        min = min.min(v);
        max = max.max(v);
    }
    if any {
        (min, max)
    } else {
        (0.0, 0.0)
    }
}

/// Normalized 0-100 position of `value` within [min, max], clamped. When
/// the range collapses: 100 for a positive common value, 0 otherwise.
pub fn relative_position(value: f64, min: f64, max: f64) -> f64 {
    let range = max - min;
    let pct = if range == 0.0 {
        if value > 0.0 {
            100.0
        } else {
            0.0
        }
    } else {
        (value - min) / range * 100.0
    };
    pct.clamp(0.0, 100.0)
}

/// Case-insensitive substring match on display name or code.
pub fn matches_search(name: &str, code: &str, term: &str) -> bool {
    let term = term.to_lowercase();
    name.to_lowercase().contains(&term) || code.to_lowercase().contains(&term)
}

/// A null price compares greater than every value, so ascending sorts put
/// unconverted rows last and descending sorts put them first.
fn cmp_price(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Stable in-place sort of the view. `None` leaves the store's id order.
pub fn sort_items(items: &mut [IndexItem], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::Name => items.sort_by(|a, b| {
            a.country_name
                .to_lowercase()
                .cmp(&b.country_name.to_lowercase())
        }),
        SortOrder::PriceAsc => items.sort_by(|a, b| cmp_price(a.converted_price, b.converted_price)),
        SortOrder::PriceDesc => {
            items.sort_by(|a, b| cmp_price(a.converted_price, b.converted_price).reverse())
        }
        // Largest swing first; rows without a trend go last.
        SortOrder::Trend => items.sort_by(|a, b| {
            match (a.trend_pct.map(f64::abs), b.trend_pct.map(f64::abs)) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CurrencyMeta;

    fn item(name: &str, converted: Option<f64>, trend: Option<f64>) -> IndexItem {
        IndexItem {
            id: name.to_lowercase(),
            country_name: name.to_string(),
            country_code: name.to_uppercase(),
            currency_meta: CurrencyMeta {
                code: "USD".into(),
                decimals: true,
                symbol: "$".into(),
            },
            flag: String::new(),
            local_price: converted,
            converted_price: converted,
            previous_year: None,
            previous_local_price: None,
            previous_converted_price: None,
            trend_pct: trend,
            relative_position: None,
            rates_used: None,
        }
    }

    #[test]
    fn test_min_max_ignores_nothing_but_defaults_to_zero() {
        assert_eq!(min_max([10.0, 20.0, 15.0].into_iter()), (10.0, 20.0));
        assert_eq!(min_max(std::iter::empty()), (0.0, 0.0));
    }

    #[test]
    fn test_relative_position_spans_the_range() {
        assert_eq!(relative_position(10.0, 10.0, 20.0), 0.0);
        assert_eq!(relative_position(20.0, 10.0, 20.0), 100.0);
        assert_eq!(relative_position(15.0, 10.0, 20.0), 50.0);
    }

    #[test]
    fn test_relative_position_collapsed_range() {
        // All values equal: full bars when positive, empty when zero.
        assert_eq!(relative_position(5.0, 5.0, 5.0), 100.0);
        assert_eq!(relative_position(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_relative_position_is_clamped() {
        assert_eq!(relative_position(30.0, 10.0, 20.0), 100.0);
        assert_eq!(relative_position(5.0, 10.0, 20.0), 0.0);
    }

    #[test]
    fn test_price_sort_keeps_nulls_at_the_edges() {
        let mut items = vec![
            item("Brazil", Some(20.0), None),
            item("Argentina", None, None),
            item("Chile", Some(10.0), None),
        ];

        sort_items(&mut items, SortOrder::PriceAsc);
        let asc: Vec<Option<f64>> = items.iter().map(|i| i.converted_price).collect();
        assert_eq!(asc, vec![Some(10.0), Some(20.0), None]);

        sort_items(&mut items, SortOrder::PriceDesc);
        let desc: Vec<Option<f64>> = items.iter().map(|i| i.converted_price).collect();
        assert_eq!(desc, vec![None, Some(20.0), Some(10.0)]);
    }

    #[test]
    fn test_name_sort_is_case_insensitive() {
        let mut items = vec![
            item("chile", Some(1.0), None),
            item("Argentina", Some(2.0), None),
            item("Brazil", Some(3.0), None),
        ];

        sort_items(&mut items, SortOrder::Name);
        let names: Vec<&str> = items.iter().map(|i| i.country_name.as_str()).collect();
        assert_eq!(names, vec!["Argentina", "Brazil", "chile"]);
    }

    #[test]
    fn test_trend_sort_puts_largest_swing_first_and_unknown_last() {
        let mut items = vec![
            item("A", Some(1.0), Some(2.0)),
            item("B", Some(1.0), None),
            item("C", Some(1.0), Some(-8.0)),
        ];

        sort_items(&mut items, SortOrder::Trend);
        let order: Vec<&str> = items.iter().map(|i| i.country_name.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_search_matches_name_or_code() {
        assert!(matches_search("Japan", "JP", "jap"));
        assert!(matches_search("Japan", "JP", "jp"));
        assert!(matches_search("United States", "US", "STATES"));
        assert!(!matches_search("Japan", "JP", "euro"));
    }
}
