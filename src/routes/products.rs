use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{ProductList, ProductWithId};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_products))
}

/// GET /api/products
///
/// The full product catalog, ordered by product id.
pub async fn list_products(State(state): State<AppState>) -> Result<Json<ProductList>, AppError> {
    info!("GET /api/products - Listing product catalog");

    let products = state.store.load_products().await.map_err(|e| {
        error!("Failed to load product catalog: {}", e);
        e
    })?;

    let products = products
        .into_iter()
        .map(|(id, details)| ProductWithId { id, details })
        .collect();

    Ok(Json(ProductList { products }))
}
