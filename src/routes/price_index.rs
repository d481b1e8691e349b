use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{is_known_month, PriceIndex, SortOrder};
use crate::routes::parse_year;
use crate::services::conversion_service::BASE_CURRENCY;
use crate::services::index_service::{self, IndexRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_price_index))
}

#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    pub year: Option<String>,
    pub product_id: Option<String>,
    pub currency: Option<String>,
    pub month: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
}

/// GET /api/index?year=2025&currency=EUR&month=January&sort=price-asc&search=ja
///
/// The aggregated comparison view behind the table: per-country converted
/// prices, min/max over the successful conversions, relative positions, and
/// the requested sort/search applied. `currency` defaults to USD, `month`
/// to the current UTC month.
pub async fn get_price_index(
    State(state): State<AppState>,
    Query(params): Query<IndexQuery>,
) -> Result<Json<PriceIndex>, AppError> {
    let year = parse_year(params.year.as_deref())?;

    let month = match params.month {
        Some(month) => {
            if !is_known_month(&month) {
                return Err(AppError::MalformedInput(format!(
                    "Unknown month name: {month:?}"
                )));
            }
            month
        }
        None => Utc::now().format("%B").to_string(),
    };

    let sort = params
        .sort
        .as_deref()
        .map(str::parse::<SortOrder>)
        .transpose()
        .map_err(AppError::MalformedInput)?
        .unwrap_or_default();

    let request = IndexRequest {
        year,
        month,
        product_id: params
            .product_id
            .unwrap_or_else(|| state.config.default_product_id.clone()),
        target_currency: params
            .currency
            .map(|c| c.to_uppercase())
            .unwrap_or_else(|| BASE_CURRENCY.to_string()),
        sort,
        search: params.search,
    };

    info!(
        "GET /api/index - {} in {} for {}, {}",
        request.product_id, request.target_currency, request.month, request.year
    );

    let index = index_service::build_index(
        state.store.as_ref(),
        &state.rate_cache,
        &state.config,
        &request,
    )
    .await
    .map_err(|e| {
        if let AppError::Store(inner) = &e {
            error!("Failed to build price index: {}", inner);
        }
        e
    })?;

    Ok(Json(index))
}
