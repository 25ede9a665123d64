use std::sync::Arc;

use crate::application::services::ShortenerService;
use crate::infrastructure::persistence::SqliteUrlRepository;

/// Shared application state injected into all handlers.
///
/// Owns the shortener service (and through it the mapping store) with
/// an explicit lifetime: it is constructed once by the composition
/// root in [`crate::server`], never an ambient singleton.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService<SqliteUrlRepository>>,
    /// Public base used when formatting short URLs, e.g. `http://localhost:8000`.
    pub base_url: String,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService<SqliteUrlRepository>>, base_url: String) -> Self {
        Self {
            shortener,
            base_url,
        }
    }
}
