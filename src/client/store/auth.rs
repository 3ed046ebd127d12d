use dioxus::prelude::*;

use crate::{client::api::Session, model::api::ApiResponse};

/// Application-wide authentication state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AuthState {
    pub auth: bool,
}

impl AuthState {
    pub fn new(auth: bool) -> Self {
        Self { auth }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth
    }

    pub fn is_guest(&self) -> bool {
        !self.auth
    }
}

/// The store shared by every view.
///
/// Holds the reactive [`AuthState`] next to the [`Session`] and re-exports the session's actions,
/// keeping `auth` in step with login and logout.
#[derive(Clone)]
pub struct AppStore {
    pub state: Store<AuthState>,
    pub session: Session,
}

impl AppStore {
    pub fn new(state: Store<AuthState>, session: Session) -> Self {
        Self { state, session }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().is_authenticated()
    }

    pub fn check_auth(&self) -> bool {
        self.session.check_auth()
    }

    pub async fn login(&mut self, email: &str, password: &str) -> ApiResponse {
        let response = self.session.login(email, password).await;
        if response.status == 200 {
            self.state.write().auth = true;
        }
        response
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.state.write().auth = false;
    }

    pub async fn signup(&self, username: &str, email: &str, password: &str) -> ApiResponse {
        self.session.signup(username, email, password).await
    }

    pub async fn profile(&self) -> ApiResponse {
        self.session.profile().await
    }

    pub async fn edit(&self, username: &str, email: &str, password: &str) -> ApiResponse {
        self.session.edit(username, email, password).await
    }

    pub async fn delete(&self) -> ApiResponse {
        self.session.delete().await
    }

    pub async fn get_pages(&self) -> ApiResponse {
        self.session.get_pages().await
    }

    pub async fn get_page(&self, id: &str) -> ApiResponse {
        self.session.get_page(id).await
    }

    pub async fn edit_page(&self, id: &str, content: &str) -> ApiResponse {
        self.session.edit_page(id, content).await
    }

    pub async fn delete_page(&self, id: &str) -> ApiResponse {
        self.session.delete_page(id).await
    }

    pub async fn add_url(&self, url: &str) -> ApiResponse {
        self.session.add_url(url).await
    }

    pub async fn search_page(&self, query: &str) -> ApiResponse {
        self.session.search_page(query).await
    }
}

/// Fetches the [`AppStore`] provided by the root component.
pub fn use_app_store() -> AppStore {
    use_context::<AppStore>()
}
