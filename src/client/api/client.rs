use dioxus_logger::tracing;
use reqwest::{Method, RequestBuilder};

use crate::{
    error::ApiError,
    model::{
        account::{AccountRequest, LoginRequest, SignupRequest},
        api::{parse_body, ApiResponse},
        page::{AddUrlRequest, EditPageRequest, SearchRequest},
    },
};

/// HTTP client for the crawler API.
///
/// Every method issues exactly one request. Non-success statuses are returned as
/// [`ApiError::Http`] and transport failures as [`ApiError::Network`]; nothing is retried.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));

        match token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn dispatch(&self, label: &str, builder: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let response = builder.send().await.map_err(|e| {
            tracing::warn!("{} failed without a response: {}", label, e);
            ApiError::Network(e)
        })?;

        let status = response.status();
        let message = status.canonical_reason().unwrap_or_default().to_string();
        tracing::debug!("{} -> {}", label, status.as_u16());

        if !status.is_success() {
            return Err(ApiError::Http {
                status: status.as_u16(),
                message,
            });
        }

        // A success status stands even when the body can't be read.
        let body = response.text().await.unwrap_or_else(|e| {
            tracing::warn!(
                "{} -> {} but the body could not be read: {}",
                label,
                status.as_u16(),
                e
            );
            String::new()
        });

        Ok(ApiResponse::new(status.as_u16(), message, parse_body(&body)))
    }

    /// `POST /login`
    pub async fn login(&self, body: &LoginRequest) -> Result<ApiResponse, ApiError> {
        let builder = self.request(Method::POST, "/login", None).json(body);
        self.dispatch("POST /login", builder).await
    }

    /// `POST /signup`
    pub async fn signup(&self, body: &SignupRequest) -> Result<ApiResponse, ApiError> {
        let builder = self.request(Method::POST, "/signup", None).json(body);
        self.dispatch("POST /signup", builder).await
    }

    /// `GET /account/get`
    pub async fn get_account(&self, token: &str) -> Result<ApiResponse, ApiError> {
        let builder = self.request(Method::GET, "/account/get", Some(token));
        self.dispatch("GET /account/get", builder).await
    }

    /// `PUT /account/edit`
    pub async fn edit_account(
        &self,
        token: &str,
        body: &AccountRequest,
    ) -> Result<ApiResponse, ApiError> {
        let builder = self
            .request(Method::PUT, "/account/edit", Some(token))
            .json(body);
        self.dispatch("PUT /account/edit", builder).await
    }

    /// `DELETE /account/delete`
    pub async fn delete_account(&self, token: &str) -> Result<ApiResponse, ApiError> {
        let builder = self.request(Method::DELETE, "/account/delete", Some(token));
        self.dispatch("DELETE /account/delete", builder).await
    }

    /// `GET /page/`
    pub async fn get_pages(&self, token: &str) -> Result<ApiResponse, ApiError> {
        let builder = self.request(Method::GET, "/page/", Some(token));
        self.dispatch("GET /page/", builder).await
    }

    /// `GET /page/{id}`
    pub async fn get_page(&self, token: &str, id: &str) -> Result<ApiResponse, ApiError> {
        let path = format!("/page/{}", id);
        let builder = self.request(Method::GET, &path, Some(token));
        self.dispatch(&format!("GET {}", path), builder).await
    }

    /// `PUT /page/edit/{id}`
    pub async fn edit_page(
        &self,
        token: &str,
        id: &str,
        body: &EditPageRequest,
    ) -> Result<ApiResponse, ApiError> {
        let path = format!("/page/edit/{}", id);
        let builder = self.request(Method::PUT, &path, Some(token)).json(body);
        self.dispatch(&format!("PUT {}", path), builder).await
    }

    /// `DELETE /page/delete/{id}`
    pub async fn delete_page(&self, token: &str, id: &str) -> Result<ApiResponse, ApiError> {
        let path = format!("/page/delete/{}", id);
        let builder = self.request(Method::DELETE, &path, Some(token));
        self.dispatch(&format!("DELETE {}", path), builder).await
    }

    /// `POST /page/add`
    pub async fn add_url(&self, token: &str, body: &AddUrlRequest) -> Result<ApiResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/page/add", Some(token))
            .json(body);
        self.dispatch("POST /page/add", builder).await
    }

    /// `POST /page/search`
    pub async fn search_pages(
        &self,
        token: &str,
        body: &SearchRequest,
    ) -> Result<ApiResponse, ApiError> {
        let builder = self
            .request(Method::POST, "/page/search", Some(token))
            .json(body);
        self.dispatch("POST /page/search", builder).await
    }
}
