use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::service::{LoyaltyService, LoyaltyServiceError, QuoteItem};
use super::PurchaseRecord;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub transactions: Vec<PurchaseRecord>,
    /// Reference instant in epoch milliseconds; the server clock when absent.
    #[serde(default)]
    pub now: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    #[serde(default)]
    pub transactions: Vec<PurchaseRecord>,
    #[serde(default)]
    pub now: Option<i64>,
    pub items: Vec<QuoteItem>,
}

/// Router builder exposing loyalty scoring, quoting, and catalog endpoints.
pub fn loyalty_router(service: Arc<LoyaltyService>) -> Router {
    Router::new()
        .route("/api/v1/loyalty/profile", post(profile_handler))
        .route("/api/v1/loyalty/quote", post(quote_handler))
        .route("/api/v1/catalog", get(catalog_handler))
        .with_state(service)
}

pub(crate) async fn profile_handler(
    State(service): State<Arc<LoyaltyService>>,
    payload: Result<axum::Json<ProfileRequest>, JsonRejection>,
) -> Response {
    let axum::Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    let now = request.now.unwrap_or_else(|| Utc::now().timestamp_millis());
    match service.profile(&request.transactions, now) {
        Ok(profile) => {
            info!(
                records = request.transactions.len(),
                cohort = profile.snapshot.cohort.label(),
                "loyalty profile served"
            );
            (StatusCode::OK, axum::Json(profile)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn quote_handler(
    State(service): State<Arc<LoyaltyService>>,
    payload: Result<axum::Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let axum::Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return rejection_response(rejection),
    };
    let now = request.now.unwrap_or_else(|| Utc::now().timestamp_millis());
    match service.quote(&request.transactions, now, &request.items) {
        Ok(quote) => {
            info!(
                items = quote.lines.len(),
                cohort = quote.cohort.label(),
                "price quote served"
            );
            (StatusCode::OK, axum::Json(quote)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn catalog_handler(State(service): State<Arc<LoyaltyService>>) -> Response {
    (StatusCode::OK, axum::Json(service.catalog().products())).into_response()
}

fn rejection_response(rejection: JsonRejection) -> Response {
    let status = rejection.status();
    warn!(%status, error = %rejection.body_text(), "loyalty request body rejected");

    let payload = json!({ "error": rejection.body_text() });
    (status, axum::Json(payload)).into_response()
}

fn error_response(err: LoyaltyServiceError) -> Response {
    let status = match &err {
        LoyaltyServiceError::InvalidRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
        LoyaltyServiceError::UnknownProduct(_) => StatusCode::NOT_FOUND,
    };
    warn!(%err, "loyalty request rejected");

    let payload = json!({ "error": err.to_string() });
    (status, axum::Json(payload)).into_response()
}
