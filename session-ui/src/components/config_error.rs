/*
 * Copyright 2025 Security Union LLC
 * Licensed under MIT OR Apache-2.0
 */

use dioxus::prelude::*;

#[component]
pub fn ConfigError(message: String) -> Element {
    rsx! {
        div { class: "error-container",
            p { class: "error-message", "{message}" }
            p {
                "The session list needs "
                code { "window.__APP_CONFIG" }
                " to be defined before the app loads. An empty object is enough."
            }
        }
    }
}
