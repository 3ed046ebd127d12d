//! Mock endpoints for every route of the crawler API.
//!
//! - `auth` - login and signup, no bearer token involved
//! - `account` - account details, edits and deletion
//! - `page` - page listing, CRUD and search
//!
//! Authorized endpoints only match requests carrying `Authorization: Bearer TEST_TOKEN`.
//! Every created mock is also recorded in [`TestSetup::mocks`] for [`TestSetup::assert_mocks`].

pub mod account;
pub mod auth;
pub mod page;

use mockito::Matcher;
use serde_json::Value;

use crate::{constant::TEST_TOKEN, TestSetup};

impl TestSetup {
    pub fn auth<'a>(&'a mut self) -> AuthFixtures<'a> {
        AuthFixtures { setup: self }
    }

    pub fn account<'a>(&'a mut self) -> AccountFixtures<'a> {
        AccountFixtures { setup: self }
    }

    pub fn pages<'a>(&'a mut self) -> PageFixtures<'a> {
        PageFixtures { setup: self }
    }

    /// Mocks that fail the test if any request at all reaches the server.
    pub fn expect_no_requests(&mut self) {
        for method in ["GET", "POST", "PUT", "DELETE"] {
            let mock = self
                .server
                .mock(method, Matcher::Any)
                .expect(0)
                .create();
            self.mocks.push(mock);
        }
    }

    /// Creates an endpoint answering `status` with `body`.
    ///
    /// With `token` set, only requests carrying that bearer token match; with `request_body`
    /// set, only requests whose JSON body equals it match.
    pub(crate) fn endpoint(
        &mut self,
        method: &str,
        path: &str,
        token: Option<&str>,
        request_body: Option<Value>,
        status: usize,
        body: &Value,
    ) {
        let mut mock = self.server.mock(method, path);

        if let Some(token) = token {
            mock = mock.match_header("authorization", format!("Bearer {}", token).as_str());
        }
        if let Some(request_body) = request_body {
            mock = mock.match_body(Matcher::Json(request_body));
        }

        let mock = mock
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create();
        self.mocks.push(mock);
    }

    /// Shorthand for an endpoint requiring [`TEST_TOKEN`].
    pub(crate) fn authorized_endpoint(
        &mut self,
        method: &str,
        path: &str,
        request_body: Option<Value>,
        status: usize,
        body: &Value,
    ) {
        self.endpoint(method, path, Some(TEST_TOKEN), request_body, status, body);
    }
}

pub struct AuthFixtures<'a> {
    setup: &'a mut TestSetup,
}

pub struct AccountFixtures<'a> {
    setup: &'a mut TestSetup,
}

pub struct PageFixtures<'a> {
    setup: &'a mut TestSetup,
}
