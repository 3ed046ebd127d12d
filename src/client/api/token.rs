use std::sync::{Arc, PoisonError, RwLock};

#[cfg(all(feature = "web", target_arch = "wasm32"))]
use crate::config::Config;

/// Storage for the session token.
///
/// Presence of a non-empty token is all the client ever checks; format and expiry are left to
/// the server.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn clear(&self);
}

/// In-process token storage used by native builds and tests.
#[derive(Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            token: RwLock::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Looks up `name` in a `document.cookie` style header and percent-decodes its value.
///
/// A value that doesn't decode to UTF-8 is treated as missing.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    let (_, value) = cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)?;

    urlencoding::decode(value).ok().map(|value| value.into_owned())
}

/// Formats a cookie assignment for `name`, percent-encoding the token so `;`, `,` and spaces
/// can't end the value early.
pub fn cookie_assignment(name: &str, token: &str) -> String {
    format!(
        "{}={}; path=/; SameSite=Strict",
        name,
        urlencoding::encode(token)
    )
}

/// Token storage backed by a browser cookie.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub struct CookieTokenStore {
    name: String,
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl CookieTokenStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;

        web_sys::window()?.document()?.dyn_into().ok()
    }

    fn write(&self, cookie: &str) {
        if let Some(document) = Self::document() {
            if let Err(err) = document.set_cookie(cookie) {
                dioxus_logger::tracing::error!("Failed to write auth cookie: {:?}", err);
            }
        }
    }
}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<String> {
        let cookies = Self::document()?.cookie().ok()?;
        cookie_value(&cookies, &self.name)
    }

    fn set(&self, token: &str) {
        self.write(&cookie_assignment(&self.name, token));
    }

    fn clear(&self) {
        self.write(&format!("{}=; path=/; max-age=0; SameSite=Strict", self.name));
    }
}

/// Token storage appropriate for the current target.
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn platform_token_store(config: &Config) -> Arc<dyn TokenStore> {
    Arc::new(CookieTokenStore::new(config.auth_cookie.clone()))
}

/// Token storage appropriate for the current target.
#[cfg(not(all(feature = "web", target_arch = "wasm32")))]
pub fn platform_token_store(_config: &crate::config::Config) -> Arc<dyn TokenStore> {
    Arc::new(MemoryTokenStore::new())
}
