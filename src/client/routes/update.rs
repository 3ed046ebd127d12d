use dioxus::prelude::*;

use crate::{
    client::{
        components::ResponseNotice,
        router::Route,
        store::auth::use_app_store,
    },
    model::api::ApiResponse,
};

/// Edits the account's username, email and password.
#[component]
pub fn Update() -> Element {
    let store = use_app_store();
    let navigator = use_navigator();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut notice = use_signal(|| None::<ApiResponse>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        spawn(async move {
            let response = store.edit(&username(), &email(), &password()).await;
            if response.is_success() {
                navigator.push(Route::Profile {});
            } else {
                notice.set(Some(response));
            }
        });
    };

    rsx!(
        Title { "Update account | crawlview" }
        div { class: "flex flex-col items-center",
            form { class: "flex flex-col gap-2 w-full max-w-96",
                onsubmit: submit,
                h2 { class: "text-xl", "Update account" }
                input {
                    class: "input",
                    placeholder: "Username",
                    value: "{username}",
                    oninput: move |evt| username.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "email",
                    placeholder: "Email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                input {
                    class: "input",
                    r#type: "password",
                    placeholder: "New password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { class: "btn btn-primary", r#type: "submit", "Save" }
                if let Some(response) = notice() {
                    ResponseNotice { response }
                }
            }
        }
    )
}
