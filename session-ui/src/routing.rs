// SPDX-License-Identifier: MIT OR Apache-2.0

//! Application route definitions.

use dioxus::prelude::*;

use crate::context::DeviceListCtx;
use crate::pages::sessions::SessionsPage;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Sessions {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Sessions route: renders the device list provided by the app root.
#[component]
fn Sessions() -> Element {
    let devices = try_use_context::<DeviceListCtx>()
        .map(|devices| devices.read().clone())
        .unwrap_or_default();
    rsx! { SessionsPage { devices: devices } }
}

/// Simple 404 page component.
#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "not-found",
            h1 { "404" }
            p { "Nothing lives at /{path}" }
            Link { to: Route::Sessions {}, "Back to sessions" }
        }
    }
}
