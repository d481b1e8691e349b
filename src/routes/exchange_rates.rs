use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{is_known_month, ExchangeRateResponse};
use crate::routes::parse_year;
use crate::services::conversion_service::BASE_CURRENCY;
use crate::state::AppState;
use crate::store::StoreError;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_exchange_rate))
}

#[derive(Debug, Default, Deserialize)]
pub struct ExchangeRateQuery {
    pub year: Option<String>,
    pub month: Option<String>,
    pub currency: Option<String>,
}

/// GET /api/exchange-rates?year=2025&month=January&currency=EUR
///
/// One USD→currency rate. The currency code is case-insensitive; USD itself
/// is the implicit base with rate 1. A missing year file or an unrecorded
/// month/currency pair is a not-found result, not a crash.
pub async fn get_exchange_rate(
    State(state): State<AppState>,
    Query(params): Query<ExchangeRateQuery>,
) -> Result<Json<ExchangeRateResponse>, AppError> {
    let year = parse_year(params.year.as_deref())?;
    let month = params.month.ok_or(AppError::MissingParameter("month"))?;
    let currency = params
        .currency
        .ok_or(AppError::MissingParameter("currency"))?
        .to_uppercase();

    if !is_known_month(&month) {
        return Err(AppError::MalformedInput(format!(
            "Unknown month name: {month:?}"
        )));
    }

    info!(
        "GET /api/exchange-rates - {} for {}, {}",
        currency, month, year
    );

    let rate = if currency == BASE_CURRENCY {
        1.0
    } else if let Some(rate) = state.rate_cache.get(year, &month, &currency) {
        rate
    } else {
        let table = match state.store.load_rate_table(year).await {
            Ok(table) => table,
            Err(StoreError::NotFound { .. }) => {
                return Err(AppError::NotFound(format!(
                    "Exchange rate data for year {year} not found."
                )));
            }
            Err(e) => {
                error!("Failed to load exchange rates for {}: {}", year, e);
                return Err(e.into());
            }
        };

        let rate = table
            .rate(&month, &currency)
            .ok_or_else(|| AppError::RateUnavailable {
                year,
                month: month.clone(),
                currency: currency.clone(),
            })?;
        state.rate_cache.insert(year, &month, &currency, rate);
        rate
    };

    Ok(Json(ExchangeRateResponse {
        base_currency: BASE_CURRENCY.to_string(),
        target_currency: currency,
        year,
        month,
        rate,
    }))
}
