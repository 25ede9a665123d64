//! Data transfer objects for the HTTP API.

pub mod health;
pub mod shorten;
