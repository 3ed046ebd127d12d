use serde_json::{json, Value};

use crate::{
    constant::{TEST_EMAIL, TEST_PASSWORD, TEST_USERNAME},
    factory,
    fixtures::AuthFixtures,
};

impl<'a> AuthFixtures<'a> {
    /// `POST /login` accepting the test credentials and answering with `token`.
    pub fn create_login_endpoint(&mut self, token: &str) {
        self.create_login_response(200, &factory::login(token));
    }

    /// `POST /login` for the test credentials answering `status` with `body`.
    pub fn create_login_response(&mut self, status: usize, body: &Value) {
        let request = json!({ "Email": TEST_EMAIL, "Password": TEST_PASSWORD });
        self.setup
            .endpoint("POST", "/login", None, Some(request), status, body);
    }

    /// `POST /signup` for the test account answering `status`.
    pub fn create_signup_endpoint(&mut self, status: usize) {
        let request = json!({
            "Username": TEST_USERNAME,
            "Email": TEST_EMAIL,
            "Password": TEST_PASSWORD,
        });
        self.setup.endpoint(
            "POST",
            "/signup",
            None,
            Some(request),
            status,
            &json!({ "message": "account created" }),
        );
    }
}
