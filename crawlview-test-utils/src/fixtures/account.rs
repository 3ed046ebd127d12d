use serde_json::json;

use crate::{
    constant::{TEST_EMAIL, TEST_PASSWORD, TEST_USERNAME},
    factory,
    fixtures::AccountFixtures,
};

impl<'a> AccountFixtures<'a> {
    /// `GET /account/get` returning the test account.
    pub fn create_get_endpoint(&mut self) {
        self.setup.authorized_endpoint(
            "GET",
            "/account/get",
            None,
            200,
            &factory::account(TEST_USERNAME, TEST_EMAIL),
        );
    }

    /// `PUT /account/edit` expecting the test account details.
    pub fn create_edit_endpoint(&mut self, status: usize) {
        let request = json!({
            "Username": TEST_USERNAME,
            "Email": TEST_EMAIL,
            "Password": TEST_PASSWORD,
        });
        self.setup.authorized_endpoint(
            "PUT",
            "/account/edit",
            Some(request),
            status,
            &json!({ "message": "account updated" }),
        );
    }

    /// `DELETE /account/delete`
    pub fn create_delete_endpoint(&mut self, status: usize) {
        self.setup.authorized_endpoint(
            "DELETE",
            "/account/delete",
            None,
            status,
            &json!({ "message": "account deleted" }),
        );
    }
}
