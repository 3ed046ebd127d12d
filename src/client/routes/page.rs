use dioxus::prelude::*;

use crate::{
    client::{
        components::ResponseNotice,
        router::Route,
        store::auth::use_app_store,
    },
    model::{api::ApiResponse, page::PageDto},
};

#[component]
pub fn Page(id: String) -> Element {
    rsx!(
        Title { "Page {id} | crawlview" }
        div { class: "flex flex-col items-center",
            // keyed so navigating between pages reloads the content
            PageView { key: "{id}", id: id.clone() }
        }
    )
}

#[component]
fn PageView(id: String) -> Element {
    let store = use_app_store();

    let page = use_resource({
        let store = store.clone();
        let id = id.clone();
        move || {
            let store = store.clone();
            let id = id.clone();
            async move { store.get_page(&id).await }
        }
    });

    let response = page.read().as_ref().cloned();

    match response {
        Some(response) if response.is_success() => {
            let details = PageDto::from_value(&response.data);
            let url = details.as_ref().map(|p| p.url.clone()).unwrap_or_default();
            let content = match details {
                Some(details) => details.content,
                None => response.data_text(),
            };
            rsx! { PageEditor { id: id.clone(), url, content } }
        }
        Some(response) => rsx! { ResponseNotice { response } },
        None => rsx! { p { "Loading page..." } },
    }
}

#[component]
fn PageEditor(id: String, url: String, content: String) -> Element {
    let store = use_app_store();
    let navigator = use_navigator();
    let mut draft = use_signal(|| content.clone());
    let mut notice = use_signal(|| None::<ApiResponse>);

    let save = {
        let store = store.clone();
        let id = id.clone();
        move |_: MouseEvent| {
            let store = store.clone();
            let id = id.clone();
            spawn(async move {
                let response = store.edit_page(&id, &draft()).await;
                notice.set(Some(response));
            });
        }
    };

    let delete = {
        let store = store.clone();
        let id = id.clone();
        move |_: MouseEvent| {
            let store = store.clone();
            let id = id.clone();
            spawn(async move {
                let response = store.delete_page(&id).await;
                if response.is_success() {
                    navigator.push(Route::Home {});
                } else {
                    notice.set(Some(response));
                }
            });
        }
    };

    rsx!(
        div { class: "flex flex-col gap-2 w-full max-w-256",
            a { href: "{url}", target: "_blank", "{url}" }
            textarea {
                class: "textarea",
                value: "{draft}",
                oninput: move |evt| draft.set(evt.value()),
            }
            div { class: "flex gap-2",
                button { class: "btn btn-primary", onclick: save, "Save" }
                button { class: "btn btn-error", onclick: delete, "Delete" }
            }
            if let Some(response) = notice() {
                ResponseNotice { response }
            }
        }
    )
}
