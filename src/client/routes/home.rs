use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaLink;
use dioxus_free_icons::Icon;

use crate::{
    client::{
        components::ResponseNotice,
        router::Route,
        store::auth::use_app_store,
    },
    model::{api::ApiResponse, page::PageDto},
};

#[component]
pub fn Home() -> Element {
    let store = use_app_store();

    rsx!(
        Title { "crawlview" }
        Meta {
            name: "description",
            content: "Crawl pages and search their contents."
        }
        div { class: "flex flex-col items-center",
            if store.is_authenticated() {
                PageLibrary { }
            } else {
                Welcome { }
            }
        }
    )
}

#[component]
fn Welcome() -> Element {
    rsx!(
        div { class: "flex flex-col items-center gap-2",
            p { class: "text-2xl", "crawlview" }
            p { "Add pages to crawl, then search everything that was fetched." }
            div { class: "flex gap-2",
                Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
                Link { to: Route::Signup {}, class: "btn btn-outline", "Sign up" }
            }
        }
    )
}

/// Crawled pages of the current account plus a form to queue new URLs.
#[component]
fn PageLibrary() -> Element {
    let store = use_app_store();
    let mut url = use_signal(String::new);
    let mut notice = use_signal(|| None::<ApiResponse>);

    let mut pages = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move { store.get_pages().await }
        }
    });

    let add_url = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            let response = store.add_url(url().trim()).await;
            if response.is_success() {
                url.set(String::new());
                pages.restart();
            }
            notice.set(Some(response));
        });
    };

    let listing = pages.read().as_ref().cloned();

    rsx!(
        div { class: "flex flex-col gap-2 w-full max-w-256",
            form { class: "flex gap-2",
                onsubmit: add_url,
                input {
                    class: "input",
                    r#type: "url",
                    placeholder: "https://example.com",
                    value: "{url}",
                    oninput: move |evt| url.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Add URL" }
            }
            if let Some(response) = notice() {
                ResponseNotice { response }
            }
            match listing {
                Some(response) if response.is_success() => {
                    let list = PageDto::list_from_value(&response.data);
                    let empty = list.is_empty();
                    rsx! {
                        if empty {
                            p { "No pages yet." }
                        }
                        ul { class: "flex flex-col gap-2",
                            for page in list {
                                li { key: "{page.id}", class: "flex gap-2 items-center",
                                    Icon { width: 16, height: 16, icon: FaLink }
                                    Link {
                                        to: Route::Page { id: page.id.clone() },
                                        "{page.url}"
                                    }
                                }
                            }
                        }
                    }
                }
                Some(response) => rsx! { ResponseNotice { response } },
                None => rsx! { p { "Loading pages..." } },
            }
        }
    )
}
