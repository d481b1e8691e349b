use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::CountryProductInfo;
use crate::routes::parse_year;
use crate::services::pricing_service::{self, ProductSelection};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_country_prices))
}

#[derive(Debug, Default, Deserialize)]
pub struct CountriesQuery {
    pub year: Option<String>,
    pub product_id: Option<String>,
    pub randomize: Option<bool>,
}

/// GET /api/countries?year=2025&product_id=big-mac&randomize=false
///
/// Resolves the selected product's prices for every country, ordered by
/// country id. Countries with no recorded price are returned with null
/// fields, never dropped. An explicit `product_id` wins over `randomize`;
/// with neither, the configured default product is used.
pub async fn list_country_prices(
    State(state): State<AppState>,
    Query(params): Query<CountriesQuery>,
) -> Result<Json<Vec<CountryProductInfo>>, AppError> {
    let year = parse_year(params.year.as_deref())?;
    info!(
        "GET /api/countries - year {}, product {:?}, randomize {}",
        year,
        params.product_id,
        params.randomize.unwrap_or(false)
    );

    let countries = state.store.load_countries().await.map_err(|e| {
        error!("Failed to load country data: {}", e);
        e
    })?;

    let selection = match (params.product_id.as_deref(), params.randomize.unwrap_or(false)) {
        (Some(id), _) => ProductSelection::Explicit(id),
        (None, true) => ProductSelection::Randomize,
        (None, false) => ProductSelection::Default,
    };

    let response = countries
        .iter()
        .map(|(id, entry)| {
            let product_id = pricing_service::select_product_id(
                entry,
                selection,
                &state.config.default_product_id,
            );
            let prices_for_product = pricing_service::resolve_product_prices(entry, &product_id, year);
            CountryProductInfo {
                id: id.clone(),
                country_name: entry.country.clone(),
                country_code: entry.code.clone(),
                currency_meta: entry.currency.clone(),
                flag: entry.meta.flag.clone(),
                selected_product_id: product_id,
                prices_for_product,
            }
        })
        .collect();

    Ok(Json(response))
}
