use crate::error::ConfigError;

pub const API_URL_VAR: &str = "CRAWLVIEW_API_URL";
pub const AUTH_COOKIE_VAR: &str = "CRAWLVIEW_AUTH_COOKIE";

const DEFAULT_API_URL: &str = match option_env!("CRAWLVIEW_API_URL") {
    Some(url) => url,
    None => "http://localhost:8081",
};

const DEFAULT_AUTH_COOKIE: &str = match option_env!("CRAWLVIEW_AUTH_COOKIE") {
    Some(name) => name,
    None => "authToken",
};

/// Client configuration.
///
/// Defaults are baked in at build time, which is the only source available to the browser build.
/// Native builds can override them through the environment with [`Config::from_env`].
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the crawler API, without trailing slash
    pub api_url: String,
    /// Name of the cookie holding the session token
    pub auth_cookie: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.trim_end_matches('/').to_string(),
            auth_cookie: DEFAULT_AUTH_COOKIE.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to build-time defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_url = match lookup(API_URL_VAR) {
            Some(url) => validate_api_url(&url)?,
            None => defaults.api_url,
        };

        let auth_cookie = match lookup(AUTH_COOKIE_VAR) {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::InvalidEnvValue {
                    var: AUTH_COOKIE_VAR.to_string(),
                    reason: "cookie name must not be empty".to_string(),
                })
            }
            Some(name) => name.trim().to_string(),
            None => defaults.auth_cookie,
        };

        Ok(Self {
            api_url,
            auth_cookie,
        })
    }
}

fn validate_api_url(url: &str) -> Result<String, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: API_URL_VAR.to_string(),
        reason,
    };

    let parsed = reqwest::Url::parse(url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {:?}", parsed.scheme())));
    }

    Ok(url.trim().trim_end_matches('/').to_string())
}
