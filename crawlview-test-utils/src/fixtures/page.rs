use std::io::{self, Write};

use serde_json::{json, Value};

use crate::{constant::TEST_TOKEN, fixtures::PageFixtures};

impl<'a> PageFixtures<'a> {
    /// `GET /page/` returning `pages`.
    pub fn create_list_endpoint(&mut self, pages: Vec<Value>) {
        self.setup
            .authorized_endpoint("GET", "/page/", None, 200, &Value::Array(pages));
    }

    /// `GET /page/` answering 200, then dropping the connection partway through the body.
    pub fn create_truncated_list_endpoint(&mut self) {
        let mock = self
            .setup
            .server
            .mock("GET", "/page/")
            .match_header("authorization", format!("Bearer {}", TEST_TOKEN).as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_chunked_body(|writer| {
                writer.write_all(br#"[{"ID": 1, "URL": "https://a.exa"#)?;
                Err(io::Error::other("connection dropped"))
            })
            .create();
        self.setup.mocks.push(mock);
    }

    /// `GET /page/{id}` returning `page`.
    pub fn create_get_endpoint(&mut self, id: &str, page: &Value) {
        self.setup
            .authorized_endpoint("GET", &format!("/page/{}", id), None, 200, page);
    }

    /// `GET /page/{id}` failing with `status`.
    pub fn create_get_failure(&mut self, id: &str, status: usize) {
        self.setup.authorized_endpoint(
            "GET",
            &format!("/page/{}", id),
            None,
            status,
            &json!({ "error": "page unavailable" }),
        );
    }

    /// `PUT /page/edit/{id}` expecting `content`.
    pub fn create_edit_endpoint(&mut self, id: &str, content: &str) {
        self.setup.authorized_endpoint(
            "PUT",
            &format!("/page/edit/{}", id),
            Some(json!({ "Content": content })),
            200,
            &json!({ "message": "page updated" }),
        );
    }

    /// `DELETE /page/delete/{id}`
    pub fn create_delete_endpoint(&mut self, id: &str) {
        self.setup.authorized_endpoint(
            "DELETE",
            &format!("/page/delete/{}", id),
            None,
            200,
            &json!({ "message": "page deleted" }),
        );
    }

    /// `POST /page/add` expecting `url`, answering with `page`.
    pub fn create_add_endpoint(&mut self, url: &str, page: &Value) {
        self.setup.authorized_endpoint(
            "POST",
            "/page/add",
            Some(json!({ "URL": url })),
            201,
            page,
        );
    }

    /// `POST /page/search` expecting `query`, answering with `hits`.
    pub fn create_search_endpoint(&mut self, query: &str, hits: Vec<Value>) {
        self.setup.authorized_endpoint(
            "POST",
            "/page/search",
            Some(json!({ "Query": query })),
            200,
            &Value::Array(hits),
        );
    }
}
