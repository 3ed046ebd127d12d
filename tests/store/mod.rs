//! Tests for `AppStore` running inside a Dioxus runtime.
//!
//! The store is built the way the root component builds it, through `use_store` and
//! `use_context_provider`, so login and logout write to a live reactive store.

use std::{cell::RefCell, rc::Rc};

use crawlview::client::store::{AppStore, AuthState};
use crawlview_test_utils::prelude::*;
use dioxus::{
    core::{RuntimeGuard, VirtualDom},
    prelude::*,
};
use serde_json::json;

use crate::util::session_at;

#[derive(Clone)]
struct StoreRootProps {
    url: String,
    token: Option<&'static str>,
    slot: Rc<RefCell<Option<AppStore>>>,
}

fn store_root(props: StoreRootProps) -> Element {
    let session = use_hook(|| session_at(&props.url, props.token).0);
    let state = use_store(|| AuthState::new(session.check_auth()));
    let store = use_context_provider(|| AppStore::new(state, session.clone()));
    props.slot.borrow_mut().replace(store);

    rsx! {}
}

/// Renders the store root once and hands back the dom together with the provided store.
///
/// The dom owns the store's reactive state and must outlive every use of the store.
fn mount(url: &str, token: Option<&'static str>) -> (VirtualDom, AppStore) {
    let slot = Rc::new(RefCell::new(None));
    let mut dom = VirtualDom::new_with_props(
        store_root,
        StoreRootProps {
            url: url.to_string(),
            token,
            slot: slot.clone(),
        },
    );
    dom.rebuild_in_place();

    let store = slot.borrow_mut().take().expect("root component provides the store");
    (dom, store)
}

/// Tests that a 200 login flips the reactive `auth` flag.
///
/// Verifies the flag starts false for a session without a token and reads true after the
/// server accepts the credentials.
///
/// Expected: `auth` false before, true after, token stored
#[tokio::test]
async fn login_sets_auth_flag() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.auth().create_login_endpoint(TEST_TOKEN);
    let (dom, mut store) = mount(&test.url(), None);
    let _runtime = RuntimeGuard::new(dom.runtime());
    assert!(!store.state.peek().auth);

    let response = store.login(TEST_EMAIL, TEST_PASSWORD).await;

    assert_eq!(response.status, 200);
    assert!(store.state.peek().auth);
    assert!(store.is_authenticated());
    assert!(store.check_auth());
    test.assert_mocks();

    Ok(())
}

/// Tests that rejected credentials leave the flag untouched.
///
/// Expected: status 401 and `auth` still false
#[tokio::test]
async fn rejected_login_keeps_guest() -> Result<(), TestError> {
    let mut test = TestSetup::new().await;
    test.auth()
        .create_login_response(401, &json!({ "error": "invalid credentials" }));
    let (dom, mut store) = mount(&test.url(), None);
    let _runtime = RuntimeGuard::new(dom.runtime());

    let response = store.login(TEST_EMAIL, TEST_PASSWORD).await;

    assert_eq!(response.status, 401);
    assert!(!store.state.peek().auth);
    assert!(store.state.peek().is_guest());
    test.assert_mocks();

    Ok(())
}

/// Tests that the flag starts from a stored token and resets on logout.
///
/// Expected: `auth` true at mount, false after logout with the token gone
#[tokio::test]
async fn logout_resets_auth_flag() -> Result<(), TestError> {
    let (dom, mut store) = mount(UNREACHABLE_URL, Some(TEST_TOKEN));
    let _runtime = RuntimeGuard::new(dom.runtime());
    assert!(store.state.peek().auth);

    store.logout();

    assert!(!store.state.peek().auth);
    assert!(!store.check_auth());

    Ok(())
}
