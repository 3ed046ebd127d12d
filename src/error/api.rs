use thiserror::Error;

use crate::model::api::ApiResponse;

/// Status reported for requests that never received a response.
pub const NETWORK_ERROR_STATUS: u16 = 0;

/// Failure of a single action.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No session token is stored, the request was never sent.
    #[error("Unauthorized")]
    Unauthorized,
    /// The server answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// The request failed before any response arrived (DNS, refused connection, CORS, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            Self::Unauthorized => 401,
            Self::Http { status, .. } => *status,
            Self::Network(_) => NETWORK_ERROR_STATUS,
        }
    }
}

impl From<ApiError> for ApiResponse {
    fn from(err: ApiError) -> Self {
        let status = err.status();
        let message = match err {
            ApiError::Unauthorized => "Unauthorized".to_string(),
            ApiError::Http { message, .. } => message,
            ApiError::Network(_) => "Network Error".to_string(),
        };

        ApiResponse::empty(status, message)
    }
}

impl From<Result<ApiResponse, ApiError>> for ApiResponse {
    fn from(result: Result<ApiResponse, ApiError>) -> Self {
        result.unwrap_or_else(ApiResponse::from)
    }
}
