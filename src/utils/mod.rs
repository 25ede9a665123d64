//! Shared helpers.

pub mod url_validator;
