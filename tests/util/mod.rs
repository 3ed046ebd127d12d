use std::sync::Arc;

use crawlview::client::api::{ApiClient, MemoryTokenStore, Session, TokenStore};
use crawlview_test_utils::TestSetup;

/// Session against the mock server, optionally already holding `token`.
pub fn session(setup: &TestSetup, token: Option<&str>) -> (Session, Arc<MemoryTokenStore>) {
    session_at(&setup.url(), token)
}

pub fn session_at(url: &str, token: Option<&str>) -> (Session, Arc<MemoryTokenStore>) {
    let tokens = Arc::new(match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::new(),
    });
    let store: Arc<dyn TokenStore> = tokens.clone();

    (Session::new(ApiClient::new(url), store), tokens)
}
