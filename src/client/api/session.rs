use std::{future::Future, sync::Arc};

use dioxus_logger::tracing;
use serde_json::Value;

use crate::{
    client::api::{token::TokenStore, ApiClient},
    error::ApiError,
    model::{
        account::{AccountRequest, LoginRequest, SignupRequest},
        api::ApiResponse,
        page::{AddUrlRequest, EditPageRequest, SearchRequest},
    },
};

/// The actions available to views.
///
/// A `Session` bundles the API client with the token storage so each action can be run against
/// any backend and any storage, which is how tests drive it. Every action returns an
/// [`ApiResponse`]; failures are folded into that shape instead of being returned as errors.
#[derive(Clone)]
pub struct Session {
    client: ApiClient,
    tokens: Arc<dyn TokenStore>,
}

impl Session {
    pub fn new(client: ApiClient, tokens: Arc<dyn TokenStore>) -> Self {
        Self { client, tokens }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Current token, if a non-empty one is stored.
    pub fn token(&self) -> Option<String> {
        self.tokens.get().filter(|token| !token.is_empty())
    }

    /// Whether a token is present. Does not contact the server.
    pub fn check_auth(&self) -> bool {
        self.token().is_some()
    }

    /// Runs `call` with the stored token, or answers 401 without sending anything.
    async fn authorized<'a, F, Fut>(&'a self, call: F) -> ApiResponse
    where
        F: FnOnce(&'a ApiClient, String) -> Fut,
        Fut: Future<Output = Result<ApiResponse, ApiError>>,
    {
        match self.token() {
            Some(token) => call(&self.client, token).await.into(),
            None => {
                tracing::debug!("No session token, skipping request");
                ApiError::Unauthorized.into()
            }
        }
    }

    /// Logs in and stores the returned token when the server answers 200.
    pub async fn login(&self, email: &str, password: &str) -> ApiResponse {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: ApiResponse = self.client.login(&body).await.into();

        if response.status == 200 {
            match extract_token(&response.data) {
                Some(token) => self.tokens.set(&token),
                None => tracing::warn!("Login succeeded but the response carried no token"),
            }
        }

        response
    }

    pub async fn signup(&self, username: &str, email: &str, password: &str) -> ApiResponse {
        let body = SignupRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.client.signup(&body).await.into()
    }

    /// Forgets the stored token.
    pub fn logout(&self) {
        self.tokens.clear();
    }

    pub async fn profile(&self) -> ApiResponse {
        self.authorized(|client, token| async move { client.get_account(&token).await })
            .await
    }

    pub async fn edit(&self, username: &str, email: &str, password: &str) -> ApiResponse {
        let body = AccountRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        self.authorized(|client, token| async move { client.edit_account(&token, &body).await })
            .await
    }

    pub async fn delete(&self) -> ApiResponse {
        self.authorized(|client, token| async move { client.delete_account(&token).await })
            .await
    }

    pub async fn get_pages(&self) -> ApiResponse {
        self.authorized(|client, token| async move { client.get_pages(&token).await })
            .await
    }

    pub async fn get_page(&self, id: &str) -> ApiResponse {
        self.authorized(|client, token| async move { client.get_page(&token, id).await })
            .await
    }

    pub async fn edit_page(&self, id: &str, content: &str) -> ApiResponse {
        let body = EditPageRequest {
            content: content.to_string(),
        };
        self.authorized(|client, token| async move { client.edit_page(&token, id, &body).await })
            .await
    }

    pub async fn delete_page(&self, id: &str) -> ApiResponse {
        self.authorized(|client, token| async move { client.delete_page(&token, id).await })
            .await
    }

    pub async fn add_url(&self, url: &str) -> ApiResponse {
        let body = AddUrlRequest {
            url: url.to_string(),
        };
        self.authorized(|client, token| async move { client.add_url(&token, &body).await })
            .await
    }

    pub async fn search_page(&self, query: &str) -> ApiResponse {
        let body = SearchRequest {
            query: query.to_string(),
        };
        self.authorized(|client, token| async move { client.search_pages(&token, &body).await })
            .await
    }
}

/// Finds the session token in a login payload.
///
/// Accepts `{"token": ..}`, `{"Token": ..}` or a bare JSON string.
pub fn extract_token(data: &Value) -> Option<String> {
    let token = match data {
        Value::String(token) => Some(token.as_str()),
        Value::Object(fields) => fields
            .get("token")
            .or_else(|| fields.get("Token"))
            .and_then(Value::as_str),
        _ => None,
    }?;

    (!token.is_empty()).then(|| token.to_string())
}
