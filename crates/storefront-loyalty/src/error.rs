use crate::config::ConfigError;
use crate::history::HistoryImportError;
use crate::loyalty::{InvalidRecordError, LoyaltyServiceError};
use crate::storefront::CartError;
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Server(axum::Error),
    History(HistoryImportError),
    Scoring(LoyaltyServiceError),
    Cart(CartError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Server(err) => write!(f, "server error: {}", err),
            AppError::History(err) => write!(f, "history error: {}", err),
            AppError::Scoring(err) => write!(f, "scoring error: {}", err),
            AppError::Cart(err) => write!(f, "cart error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Server(err) => Some(err),
            AppError::History(err) => Some(err),
            AppError::Scoring(err) => Some(err),
            AppError::Cart(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::History(_) | AppError::Cart(_) => StatusCode::BAD_REQUEST,
            AppError::Scoring(LoyaltyServiceError::InvalidRecord(_)) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            AppError::Scoring(LoyaltyServiceError::UnknownProduct(_)) => StatusCode::NOT_FOUND,
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<axum::Error> for AppError {
    fn from(value: axum::Error) -> Self {
        Self::Server(value)
    }
}

impl From<HistoryImportError> for AppError {
    fn from(value: HistoryImportError) -> Self {
        Self::History(value)
    }
}

impl From<LoyaltyServiceError> for AppError {
    fn from(value: LoyaltyServiceError) -> Self {
        Self::Scoring(value)
    }
}

impl From<InvalidRecordError> for AppError {
    fn from(value: InvalidRecordError) -> Self {
        Self::Scoring(LoyaltyServiceError::InvalidRecord(value))
    }
}

impl From<CartError> for AppError {
    fn from(value: CartError) -> Self {
        Self::Cart(value)
    }
}
