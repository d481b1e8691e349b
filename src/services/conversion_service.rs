use tracing::debug;

use crate::errors::AppError;
use crate::models::RatesUsed;
use crate::services::rate_cache::RateCache;
use crate::store::{CatalogStore, StoreError};

/// The common pivot for all two-hop conversions.
pub const BASE_CURRENCY: &str = "USD";

/// A local price expressed in the target currency, plus the two rates used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Conversion {
    pub value: f64,
    pub rates: RatesUsed,
}

/// USD→`currency` rate for one (year, month), memoized in `cache`.
///
/// USD itself is implicitly 1.0 and never touches the store. A missing year
/// file, month or currency is `RateUnavailable` — the caller decides whether
/// that is a 404 or a per-item null.
pub async fn lookup_rate(
    store: &dyn CatalogStore,
    cache: &RateCache,
    year: i32,
    month: &str,
    currency: &str,
) -> Result<f64, AppError> {
    if currency == BASE_CURRENCY {
        return Ok(1.0);
    }

    if let Some(rate) = cache.get(year, month, currency) {
        return Ok(rate);
    }

    let table = match store.load_rate_table(year).await {
        Ok(table) => table,
        Err(StoreError::NotFound { .. }) => {
            debug!("no rate table for year {}", year);
            return Err(AppError::RateUnavailable {
                year,
                month: month.to_string(),
                currency: currency.to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    match table.rate(month, currency) {
        Some(rate) => {
            cache.insert(year, month, currency, rate);
            Ok(rate)
        }
        None => Err(AppError::RateUnavailable {
            year,
            month: month.to_string(),
            currency: currency.to_string(),
        }),
    }
}

/// Convert a local price into the target currency through the USD pivot:
/// `price / usd_to_local * usd_to_target`.
///
/// Identity when the normalized codes match — no lookup is performed and
/// both reported rates are 1.
pub async fn convert(
    store: &dyn CatalogStore,
    cache: &RateCache,
    price: f64,
    local_code: &str,
    target_code: &str,
    year: i32,
    month: &str,
) -> Result<Conversion, AppError> {
    let local_code = local_code.to_uppercase();
    let target_code = target_code.to_uppercase();

    if local_code == target_code {
        return Ok(Conversion {
            value: price,
            rates: RatesUsed {
                usd_to_local: 1.0,
                usd_to_target: 1.0,
            },
        });
    }

    let usd_to_local = lookup_rate(store, cache, year, month, &local_code).await?;
    let usd_to_target = lookup_rate(store, cache, year, month, &target_code).await?;

    Ok(Conversion {
        value: price / usd_to_local * usd_to_target,
        rates: RatesUsed {
            usd_to_local,
            usd_to_target,
        },
    })
}

/// Decimal places used when displaying an amount of `currency`: zero for
/// the configured whole-unit set, two otherwise.
pub fn display_decimals(currency: &str, zero_decimal_currencies: &[String]) -> u32 {
    if zero_decimal_currencies.iter().any(|c| c == currency) {
        0
    } else {
        2
    }
}

pub fn round_for_display(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
