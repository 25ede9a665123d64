//! URL shortening and resolution service.

use std::sync::Arc;

use crate::codec;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::url_validator::validate_long_url;

/// Result of shortening a URL: the allocated identifier and its code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub id: i64,
    pub code: String,
}

/// Service tying the base62 codec to the mapping store.
///
/// The codec and the store never see each other directly; this service
/// is the narrow interface the HTTP layer calls into.
pub struct ShortenerService<R: UrlRepository> {
    repository: Arc<R>,
}

impl<R: UrlRepository> ShortenerService<R> {
    /// Creates a new shortener service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Shortens a long URL, returning its identifier and short code.
    ///
    /// Idempotent: the same URL always yields the same code, because
    /// the underlying store allocates exactly one identifier per
    /// distinct URL and the code is a pure function of the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a malformed or non-http(s)
    /// URL (rejected before touching the store) and
    /// [`AppError::Storage`] on database errors.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenedUrl, AppError> {
        validate_long_url(long_url)?;

        let record = self.repository.get_or_create(long_url).await?;

        Ok(ShortenedUrl {
            id: record.id,
            code: record.short_code(),
        })
    }

    /// Resolves a short code back to its long URL.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidCode`] if the code is empty or contains a
    ///   character outside the base62 alphabet
    /// - [`AppError::NotFound`] if the code is well-formed but no
    ///   record has that identifier
    /// - [`AppError::Storage`] on database errors
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let decoded = codec::decode(code)?;

        // Identifiers are allocated from the signed rowid range, so
        // anything above i64::MAX cannot exist. Skip the lookup.
        let Ok(id) = i64::try_from(decoded) else {
            return Err(AppError::not_found("Short link not found"));
        };

        match self.repository.find_by_id(id).await? {
            Some(UrlRecord { long_url, .. }) => Ok(long_url),
            None => Err(AppError::not_found("Short link not found")),
        }
    }

    /// Number of stored URL mappings.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn stored_count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use chrono::Utc;
    use serde_json::json;

    fn record(id: i64, long_url: &str) -> UrlRecord {
        UrlRecord::new(id, long_url.to_string(), Utc::now())
    }

    #[tokio::test]
    async fn test_shorten_returns_code_for_allocated_id() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_or_create()
            .withf(|url| url == "https://example.com/page")
            .returning(|url| Ok(record(1, url)));

        let service = ShortenerService::new(Arc::new(repo));
        let shortened = service.shorten("https://example.com/page").await.unwrap();

        assert_eq!(shortened.id, 1);
        assert_eq!(shortened.code, "1");
    }

    #[tokio::test]
    async fn test_shorten_code_matches_codec_for_large_ids() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_or_create()
            .returning(|url| Ok(record(3844, url)));

        let service = ShortenerService::new(Arc::new(repo));
        let shortened = service.shorten("https://example.com").await.unwrap();

        assert_eq!(shortened.code, "100");
    }

    #[tokio::test]
    async fn test_shorten_rejects_invalid_url_before_storage() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_or_create().never();

        let service = ShortenerService::new(Arc::new(repo));
        let result = service.shorten("ftp://example.com").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_shorten_propagates_storage_error() {
        let mut repo = MockUrlRepository::new();
        repo.expect_get_or_create()
            .returning(|_| Err(AppError::storage("Database error")));

        let service = ShortenerService::new(Arc::new(repo));
        let result = service.shorten("https://example.com").await;

        assert!(matches!(result, Err(AppError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_resolve_returns_stored_url() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_id()
            .withf(|id| *id == 1)
            .returning(|id| Ok(Some(record(id, "https://example.com/page"))));

        let service = ShortenerService::new(Arc::new(repo));
        let url = service.resolve("1").await.unwrap();

        assert_eq!(url, "https://example.com/page");
    }

    #[tokio::test]
    async fn test_resolve_unknown_id_is_not_found() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ShortenerService::new(Arc::new(repo));
        let result = service.resolve("zZ9").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_resolve_invalid_code_skips_storage() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_id().never();

        let service = ShortenerService::new(Arc::new(repo));
        let result = service.resolve("no-such-code!").await;

        assert!(matches!(result, Err(AppError::InvalidCode)));
    }

    #[tokio::test]
    async fn test_resolve_id_beyond_rowid_range_skips_storage() {
        let mut repo = MockUrlRepository::new();
        repo.expect_find_by_id().never();

        let service = ShortenerService::new(Arc::new(repo));
        // Decodes fine as u64 but can never have been allocated.
        let code = codec::encode(u64::MAX);
        let result = service.resolve(&code).await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_stored_count_delegates_to_repository() {
        let mut repo = MockUrlRepository::new();
        repo.expect_count().returning(|| Ok(42));

        let service = ShortenerService::new(Arc::new(repo));
        assert_eq!(service.stored_count().await.unwrap(), 42);
    }

    #[test]
    fn test_validation_error_carries_details() {
        let err = AppError::bad_request("Invalid URL", json!({ "scheme": "ftp" }));
        assert!(matches!(err, AppError::Validation { .. }));
    }
}
