pub mod auth;

pub use auth::{AppStore, AuthState};
