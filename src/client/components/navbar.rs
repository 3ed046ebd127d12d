use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaMagnifyingGlass, FaUser};
use dioxus_free_icons::Icon;

use crate::client::{router::Route, store::auth::use_app_store};

/// Layout for every routed view: a fixed navbar above the active route.
#[component]
pub fn Navbar() -> Element {
    let mut store = use_app_store();
    let navigator = use_navigator();
    let authenticated = store.is_authenticated();

    rsx! {
        div {
            class: "navbar bg-base-200 fixed",
            div {
                class: "navbar-start",
                Link {
                    to: Route::Home {},
                    p { class: "text-xl", "crawlview" }
                }
            }
            div {
                class: "navbar-end flex gap-2",
                if authenticated {
                    Link {
                        to: Route::Search {},
                        class: "btn btn-ghost flex gap-2",
                        Icon { width: 16, height: 16, icon: FaMagnifyingGlass }
                        "Search"
                    }
                    Link {
                        to: Route::Profile {},
                        class: "btn btn-ghost flex gap-2",
                        Icon { width: 16, height: 16, icon: FaUser }
                        "Profile"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| {
                            store.logout();
                            navigator.push(Route::Login {});
                        },
                        "Logout"
                    }
                } else {
                    Link { to: Route::Login {}, class: "btn btn-primary", "Login" }
                    Link { to: Route::Signup {}, class: "btn btn-outline", "Sign up" }
                }
            }
        }

        main {
            class: "min-h-screen pt-[64px] p-4",
            Outlet::<Route> {}
        }
    }
}
