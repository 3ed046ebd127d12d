//! Error types for the crawlview client.
//!
//! Errors are split by concern: [`ApiError`] covers everything that can go wrong while running an
//! action, [`ConfigError`] covers startup configuration. Neither ever reaches a view directly;
//! actions collapse `ApiError` into an [`ApiResponse`](crate::model::api::ApiResponse).

pub mod api;
pub mod config;

pub use api::ApiError;
pub use config::ConfigError;
