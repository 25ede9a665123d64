//! Repository trait for the identifier-to-URL mapping store.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Durable, concurrency-safe mapping between identifiers and long URLs.
///
/// All coordination is pushed down to the storage layer: implementations
/// must enforce the uniqueness of `long_url` with a storage-level
/// constraint, not an application-level check-then-act.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns the record for `long_url`, creating it if unseen.
    ///
    /// Idempotent: repeated calls with the same URL return the same
    /// record. Safe under concurrent calls with the same URL from
    /// different tasks — at most one row is ever created, and a losing
    /// concurrent writer reads the winning row instead of erroring.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn get_or_create(&self, long_url: &str) -> Result<UrlRecord, AppError>;

    /// Finds a record by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlRecord))` if found
    /// - `Ok(None)` if no record has that identifier (a normal outcome,
    ///   not an error)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
