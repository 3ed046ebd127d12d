//! JSON payloads shaped like the crawler API's responses.

use serde_json::{json, Value};

/// A page as the API lists it.
pub fn page(id: i64, url: &str, content: &str) -> Value {
    json!({
        "ID": id,
        "URL": url,
        "Content": content,
    })
}

/// Account details as returned by `GET /account/get`.
pub fn account(username: &str, email: &str) -> Value {
    json!({
        "Username": username,
        "Email": email,
    })
}

/// Successful login payload carrying `token`.
pub fn login(token: &str) -> Value {
    json!({ "token": token })
}
