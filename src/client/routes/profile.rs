use dioxus::prelude::*;

use crate::{
    client::{
        components::ResponseNotice,
        router::Route,
        store::auth::use_app_store,
    },
    model::{account::AccountDto, api::ApiResponse},
};

#[component]
pub fn Profile() -> Element {
    let store = use_app_store();
    let navigator = use_navigator();
    let mut notice = use_signal(|| None::<ApiResponse>);

    let account = use_resource({
        let store = store.clone();
        move || {
            let store = store.clone();
            async move { store.profile().await }
        }
    });

    let delete_account = move |_: MouseEvent| {
        let mut store = store.clone();
        spawn(async move {
            let response = store.delete().await;
            if response.is_success() {
                store.logout();
                navigator.push(Route::Home {});
            } else {
                notice.set(Some(response));
            }
        });
    };

    let details = account.read().as_ref().cloned();

    rsx!(
        Title { "Profile | crawlview" }
        div { class: "flex flex-col items-center",
            div { class: "card flex flex-col gap-2 w-full max-w-96",
                h2 { class: "text-xl", "Profile" }
                match details {
                    Some(response) if response.is_success() => {
                        let account = AccountDto::from_value(&response.data).unwrap_or_default();
                        rsx! {
                            p { "Username: {account.username}" }
                            p { "Email: {account.email}" }
                        }
                    }
                    Some(response) => rsx! { ResponseNotice { response } },
                    None => rsx! { div { class: "skeleton h-6 w-40" } },
                }
                div { class: "flex gap-2",
                    Link { to: Route::Update {}, class: "btn btn-outline", "Edit account" }
                    button { class: "btn btn-error", onclick: delete_account, "Delete account" }
                }
                if let Some(response) = notice() {
                    ResponseNotice { response }
                }
            }
        }
    )
}
