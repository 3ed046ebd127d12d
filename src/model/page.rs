use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A crawled page as listed by the API.
///
/// The server owns pages; this projection only exists to render listings and never feeds back
/// into requests beyond its id.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageDto {
    #[serde(alias = "ID", alias = "Id", deserialize_with = "id_to_string")]
    pub id: String,
    #[serde(default, alias = "URL", alias = "Url")]
    pub url: String,
    #[serde(default, alias = "Content")]
    pub content: String,
}

impl PageDto {
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    /// Pages in a listing payload, skipping entries that don't look like pages.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        match value {
            Value::Array(items) => items.iter().filter_map(Self::from_value).collect(),
            _ => Vec::new(),
        }
    }
}

// Page ids arrive as numbers or strings depending on the backend's storage.
fn id_to_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(id) => Ok(id),
        Value::Number(id) => Ok(id.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "unsupported page id: {other}"
        ))),
    }
}

/// Body of `PUT /page/edit/{id}`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EditPageRequest {
    pub content: String,
}

/// Body of `POST /page/add`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddUrlRequest {
    #[serde(rename = "URL")]
    pub url: String,
}

/// Body of `POST /page/search`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SearchRequest {
    pub query: String,
}
