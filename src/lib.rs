//! # urlite
//!
//! A minimal URL shortener with sequential base62 codes, built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Codec** ([`codec`]) - Pure base62 transform between identifiers and short codes
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - The shortener service
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## How it works
//!
//! Shortening is get-or-create: the mapping store allocates exactly one
//! monotonically increasing identifier per distinct long URL (enforced by a
//! storage-level `UNIQUE` constraint, so it holds under concurrent requests),
//! and the public short code is the base62 encoding of that identifier.
//! Codes are never stored; resolution decodes the code and looks the
//! identifier up.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; defaults to sqlite://data/urls.db
//! export DATABASE_URL="sqlite://data/urls.db"
//! export BASE_URL="http://localhost:8000"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod codec;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{ShortenedUrl, ShortenerService};
    pub use crate::domain::entities::UrlRecord;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
