//! Access to the crawler API.
//!
//! - [`client`]: typed HTTP layer, one method per endpoint, returning `Result<ApiResponse, ApiError>`
//! - [`token`]: where the session token lives (browser cookie, or memory)
//! - [`session`]: the actions views call, which look up the token and normalize every outcome

pub mod client;
pub mod session;
pub mod token;

pub use client::ApiClient;
pub use session::Session;
pub use token::{MemoryTokenStore, TokenStore};
