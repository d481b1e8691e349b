use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// Request-level failures, mapped onto HTTP statuses with a JSON
/// `{"error": ...}` body.
///
/// Missing or malformed query input is rejected before any data access.
/// A missing backing data file is a server-side data error for the price
/// endpoints; for exchange rates it is a not-found result.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required query parameter: {0}")]
    MissingParameter(&'static str),
    #[error("{0}")]
    MalformedInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Exchange rate not found for {currency} in {month}, {year}.")]
    RateUnavailable {
        year: i32,
        month: String,
        currency: String,
    },
    #[error("Data store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            AppError::MissingParameter(_) | AppError::MalformedInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RateUnavailable { .. } => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Data-store details go to the log, not to the client.
        let message = match &self {
            AppError::Store(StoreError::NotFound { .. }) => "Data file not found".to_string(),
            AppError::Store(_) => "Internal Server Error".to_string(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
