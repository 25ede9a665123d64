use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application error taxonomy.
///
/// `InvalidCode` and `NotFound` are distinct outcomes internally (a
/// malformed code vs. a well-formed code that decodes to an unknown
/// identifier) but both map to 404 at the HTTP boundary. `Storage` is a
/// server-side failure and never conflated with either.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },
    #[error("short code contains characters outside the base62 alphabet")]
    InvalidCode,
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Storage { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::InvalidCode => (
                StatusCode::NOT_FOUND,
                "not_found",
                "Invalid short code".to_string(),
                json!({}),
            ),
            AppError::NotFound { message } => {
                (StatusCode::NOT_FOUND, "not_found", message, json!({}))
            }
            AppError::Storage { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                json!({}),
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Funnels an sqlx error into the storage failure variant.
///
/// Unique violations on `urls.long_url` are absorbed by the
/// get-or-create upsert and never reach this function; anything that
/// does is a genuine storage-layer failure.
pub fn map_sqlx_error(e: sqlx::Error) -> AppError {
    tracing::error!("Database error: {e}");
    AppError::storage("Database error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_code_and_not_found_collapse_to_404() {
        let invalid = AppError::InvalidCode.into_response();
        let missing = AppError::not_found("No such link").into_response();
        assert_eq!(invalid.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_is_400() {
        let resp = AppError::bad_request("Invalid URL", json!({})).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_storage_is_500() {
        let resp = AppError::storage("Database error").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
