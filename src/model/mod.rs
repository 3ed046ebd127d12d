//! Data shapes exchanged with the crawler API.
//!
//! Request bodies serialize with the exact keys the API expects. Response payloads are kept as
//! raw JSON in [`api::ApiResponse`]; the typed DTOs here are optional projections used by views.

pub mod account;
pub mod api;
pub mod page;
