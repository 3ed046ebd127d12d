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
pub fn Search() -> Element {
    let store = use_app_store();
    let mut query = use_signal(String::new);
    let mut results = use_signal(|| None::<ApiResponse>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            let response = store.search_page(query().trim()).await;
            results.set(Some(response));
        });
    };

    rsx!(
        Title { "Search | crawlview" }
        div { class: "flex flex-col items-center",
            div { class: "flex flex-col gap-2 w-full max-w-256",
                form { class: "flex gap-2",
                    onsubmit: submit,
                    input {
                        class: "input",
                        r#type: "search",
                        placeholder: "Search crawled pages",
                        value: "{query}",
                        oninput: move |evt| query.set(evt.value()),
                    }
                    button { class: "btn btn-primary", r#type: "submit", "Search" }
                }
                match results() {
                    Some(response) if response.is_success() => {
                        let hits = PageDto::list_from_value(&response.data);
                        let raw = hits.is_empty().then(|| response.data_text());
                        rsx! {
                            if let Some(raw) = raw {
                                pre { "{raw}" }
                            }
                            ul { class: "flex flex-col gap-2",
                                for hit in hits {
                                    li { key: "{hit.id}",
                                        Link { to: Route::Page { id: hit.id.clone() }, "{hit.url}" }
                                    }
                                }
                            }
                        }
                    }
                    Some(response) => rsx! { ResponseNotice { response } },
                    None => rsx! {},
                }
            }
        }
    )
}
