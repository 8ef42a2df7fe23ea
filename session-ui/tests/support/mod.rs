// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for session-ui component tests.
//
// Provides mount/cleanup helpers, device fixtures and Dioxus rendering
// helpers so that individual test files stay focused on assertions rather
// than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use session_types::DeviceWithVerification;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Text of the first element matching `selector`, or `None` if absent.
pub fn text_of(mount: &web_sys::Element, selector: &str) -> Option<String> {
    mount
        .query_selector(selector)
        .unwrap()
        .map(|el| el.text_content().unwrap_or_default())
}

/// Click the first element matching `selector`.
pub fn click(mount: &web_sys::Element, selector: &str) {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
        .dyn_into::<web_sys::HtmlElement>()
        .unwrap()
        .click();
}

// ---------------------------------------------------------------------------
// Dioxus rendering helpers
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Render and wait for the initial mutations to be applied.
pub async fn mount_dioxus(root: fn() -> Element, mount: &web_sys::Element) {
    render_into(mount, root);
    yield_now().await;
}

/// Yield to the browser event loop so Dioxus can process pending renders.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            // requestAnimationFrame fires after the current microtask queue is
            // drained and before the next paint.
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

// ---------------------------------------------------------------------------
// Device fixtures
// ---------------------------------------------------------------------------

pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// `{ABC123, "", None, "", false}`: nothing but an id.
pub fn bare_device() -> DeviceWithVerification {
    DeviceWithVerification {
        display_name: Some(String::new()),
        last_seen_ip: Some(String::new()),
        ..DeviceWithVerification::new("ABC123")
    }
}

/// `{XYZ, "My Phone", now - 1000, "1.2.3.4", true}`: every field set.
pub fn full_device() -> DeviceWithVerification {
    DeviceWithVerification {
        display_name: Some("My Phone".to_string()),
        last_seen_ts: Some(now_ms() - 1000),
        last_seen_ip: Some("1.2.3.4".to_string()),
        is_verified: true,
        ..DeviceWithVerification::new("XYZ")
    }
}
