//! URL record entity, the sole persisted entity of the service.

use chrono::{DateTime, Utc};

/// A stored association between a sequential identifier and a long URL.
///
/// `id` is assigned by the store on first insertion and never reused or
/// mutated; `long_url` is unique across all records and immutable. The
/// short code is not stored — it is always recomputed from `id` via
/// [`crate::codec::encode`].
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new record instance.
    pub fn new(id: i64, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            long_url,
            created_at,
        }
    }

    /// The public base62 short code for this record.
    pub fn short_code(&self) -> String {
        crate::codec::encode(self.id as u64)
    }
}
