//! Long URL validation.
//!
//! Validation is a boundary concern: every URL must be rejected here
//! before it can reach the mapping store, so that all stored `long_url`
//! values are well-formed absolute http(s) URLs.

use crate::error::AppError;
use serde_json::json;
use url::Url;

/// Validates that `long_url` is a non-empty absolute http(s) URL.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL is empty, fails to
/// parse, or uses a scheme other than `http` or `https`.
pub fn validate_long_url(long_url: &str) -> Result<(), AppError> {
    if long_url.is_empty() {
        return Err(AppError::bad_request(
            "URL must not be empty",
            json!({}),
        ));
    }

    let parsed = Url::parse(long_url).map_err(|e| {
        AppError::bad_request(
            "Invalid URL. Must start with http:// or https://",
            json!({ "reason": e.to_string() }),
        )
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(AppError::bad_request(
            "Invalid URL. Must start with http:// or https://",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    Ok(())
}
