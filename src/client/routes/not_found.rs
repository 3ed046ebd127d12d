use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Title { "Not Found | crawlview" }
        div { class: "min-h-screen p-4 flex flex-col items-center justify-center gap-2",
            p { class: "text-2xl", "404" }
            p { "Nothing lives at {path}" }
            Link { to: Route::Home {}, class: "btn btn-outline", "Back home" }
        }
    )
}
