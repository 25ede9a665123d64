//! Handler for the URL shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use metrics::counter;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Responses
///
/// - **201 Created**: `{ "short_code", "short_url", "long_url" }`.
///   Shortening the same URL again returns the same code with the same
///   status — the operation is idempotent, not a conflict.
/// - **400 Bad Request**: missing, malformed, or non-http(s) URL.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(request): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let shortened = state.shortener.shorten(&request.url).await?;

    counter!("urls_shortened_total").increment(1);
    tracing::debug!(id = shortened.id, code = %shortened.code, "URL shortened");

    let short_url = format!(
        "{}/{}",
        state.base_url.trim_end_matches('/'),
        shortened.code
    );

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: shortened.code,
            short_url,
            long_url: request.url,
        }),
    ))
}
