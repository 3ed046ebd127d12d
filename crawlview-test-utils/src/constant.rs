//! Placeholder values shared across tests. None of these are real credentials.

/// Session token handed out by the mocked `/login` endpoint.
pub static TEST_TOKEN: &str = "test-session-token";

pub static TEST_USERNAME: &str = "crawler";

pub static TEST_EMAIL: &str = "crawler@example.com";

pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Base URL nothing listens on, for provoking transport failures.
pub static UNREACHABLE_URL: &str = "http://127.0.0.1:1";
