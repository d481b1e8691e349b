use rand::Rng;

use crate::models::{CountryEntry, ResolvedPriceInfo, SeriesPoint};

/// How the product id for a lookup is chosen. An explicit id always wins;
/// `Randomize` is the ticker's mode and draws per country.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductSelection<'a> {
    Explicit(&'a str),
    Default,
    Randomize,
}

/// Pick the product id for one country under the given policy.
///
/// `Randomize` draws uniformly from the country's own recorded product keys
/// and falls back to the default when the country has none, so the response
/// shape stays uniform.
pub fn select_product_id(
    entry: &CountryEntry,
    selection: ProductSelection<'_>,
    default_product_id: &str,
) -> String {
    match selection {
        ProductSelection::Explicit(id) => id.to_string(),
        ProductSelection::Default => default_product_id.to_string(),
        ProductSelection::Randomize => {
            let keys: Vec<&String> = entry.prices.keys().collect();
            if keys.is_empty() {
                default_product_id.to_string()
            } else {
                let idx = rand::rng().random_range(0..keys.len());
                keys[idx].clone()
            }
        }
    }
}

/// Resolve current, nearest-previous and historical prices for one product
/// within one country.
///
/// Missing data is a normal state, never an error: an unknown product id or
/// a year without a recorded price simply yields absent fields. The
/// previous available year is the strictly-largest year below the requested
/// one that has a non-null price.
pub fn resolve_product_prices(
    entry: &CountryEntry,
    product_id: &str,
    year: i32,
) -> ResolvedPriceInfo {
    let Some(series) = entry.prices.get(product_id) else {
        return ResolvedPriceInfo {
            requested_year: year,
            current_local_price: None,
            previous_available_year: None,
            previous_local_price: None,
            history: Vec::new(),
        };
    };

    let current_local_price = series.get(&year).copied().flatten();

    let previous = series
        .range(..year)
        .rev()
        .find_map(|(y, price)| price.map(|p| (*y, p)));

    let history = series
        .iter()
        .filter_map(|(y, price)| price.map(|p| SeriesPoint { year: *y, price: p }))
        .collect();

    ResolvedPriceInfo {
        requested_year: year,
        current_local_price,
        previous_available_year: previous.map(|(y, _)| y),
        previous_local_price: previous.map(|(_, p)| p),
        history,
    }
}
