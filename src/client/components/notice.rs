use dioxus::prelude::*;

use crate::model::api::ApiResponse;

/// Shows the outcome of the last action.
#[component]
pub fn ResponseNotice(response: ApiResponse) -> Element {
    let class = if response.is_success() {
        "alert alert-success"
    } else {
        "alert alert-error"
    };

    let message = if response.message.is_empty() {
        format!("Status {}", response.status)
    } else {
        format!("{} ({})", response.message, response.status)
    };

    rsx!(
        div { class: "{class}",
            p { "{message}" }
        }
    )
}
