use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uniform result of every action.
///
/// Successful responses, server-reported errors and locally detected failures all collapse into
/// this shape so views never have to branch on error vs. return value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// HTTP status code, `401` for a missing token, `0` when no response was received
    pub status: u16,
    /// HTTP reason phrase for `status`
    pub message: String,
    /// Response body, or an empty string on any failure
    pub data: Value,
}

impl ApiResponse {
    pub fn new(status: u16, message: impl Into<String>, data: Value) -> Self {
        Self {
            status,
            message: message.into(),
            data,
        }
    }

    /// Failure response carrying no payload.
    pub fn empty(status: u16, message: impl Into<String>) -> Self {
        Self::new(status, message, Value::String(String::new()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Best-effort human readable text of `data` for display.
    pub fn data_text(&self) -> String {
        match &self.data {
            Value::String(text) => text.clone(),
            value => serde_json::to_string_pretty(value).unwrap_or_default(),
        }
    }
}

/// Interprets a raw response body.
///
/// JSON bodies are parsed, anything else is kept verbatim as a JSON string.
pub fn parse_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::String(String::new());
    }

    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
