use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{countries, exchange_rates, health, price_index, products};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The table/ticker front-end is served from another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/countries", countries::router())
        .nest("/api/products", products::router())
        .nest("/api/exchange-rates", exchange_rates::router())
        .nest("/api/index", price_index::router())
        .layer(cors)
        .with_state(state)
}
