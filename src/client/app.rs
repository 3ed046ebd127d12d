use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        api::{token::platform_token_store, ApiClient, Session},
        router::Route,
        store::{AppStore, AuthState},
    },
    config::Config,
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| {
        Config::from_env().unwrap_or_else(|err| {
            tracing::error!("Configuration error, using defaults: {}", err);
            Config::default()
        })
    });

    let session = use_hook(|| {
        let session = Session::new(
            ApiClient::new(config.api_url.clone()),
            platform_token_store(&config),
        );
        tracing::info!("Using crawler API at {}", session.client().base_url());
        session
    });

    let state = use_store(|| AuthState::new(session.check_auth()));
    use_context_provider(|| AppStore::new(state, session.clone()));

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
