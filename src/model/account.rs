use serde::{Deserialize, Serialize};

/// Body of `POST /login`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /signup`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `PUT /account/edit`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Account details returned by `GET /account/get`
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AccountDto {
    #[serde(default, alias = "Username")]
    pub username: String,
    #[serde(default, alias = "Email")]
    pub email: String,
}

impl AccountDto {
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }
}
