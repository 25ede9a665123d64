//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use metrics::counter;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - **308 Permanent Redirect**: stored mappings are immutable, so the
///   redirect is permanent and safely cacheable by clients.
/// - **404 Not Found**: the code contains out-of-alphabet characters,
///   or decodes to an identifier that was never allocated. The two
///   cases are distinct internally but present identically.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let long_url = match state.shortener.resolve(&code).await {
        Ok(url) => url,
        Err(e) => {
            if matches!(e, AppError::InvalidCode | AppError::NotFound { .. }) {
                counter!("failed_lookups_total").increment(1);
            }
            return Err(e);
        }
    };

    counter!("redirects_total").increment(1);
    tracing::debug!(code = %code, "Redirecting");

    Ok(Redirect::permanent(&long_url))
}
