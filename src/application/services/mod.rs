//! Business logic services.

mod shortener_service;

pub use shortener_service::{ShortenedUrl, ShortenerService};
