/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use std::collections::HashSet;

use dioxus::prelude::*;
use session_types::DeviceWithVerification;

use crate::components::device_tile::DeviceTile;
use crate::components::heading::{Heading, HeadingSize};
use crate::context::use_translator;

/// Most recently active first. Devices never seen go last, ties by id.
pub fn sort_by_last_activity(
    mut devices: Vec<DeviceWithVerification>,
) -> Vec<DeviceWithVerification> {
    devices.sort_by(|a, b| {
        b.last_seen_ts()
            .cmp(&a.last_seen_ts())
            .then_with(|| a.device_id.cmp(&b.device_id))
    });
    devices
}

#[component]
pub fn SessionsPage(devices: Vec<DeviceWithVerification>) -> Element {
    let tr = use_translator();
    let mut expanded = use_signal(HashSet::<String>::new);

    let title = tr.t("Sessions");
    let devices = sort_by_last_activity(devices);

    rsx! {
        div { class: "mx_SessionManager",
            Heading { size: HeadingSize::H3, "{title}" }
            if devices.is_empty() {
                p { class: "mx_SessionManager_empty", {tr.t("No sessions found.")} }
            } else {
                ol { class: "mx_FilteredDeviceList_list",
                    for device in devices {
                        SessionItem {
                            key: "{device.device_id}",
                            is_expanded: expanded.read().contains(&device.device_id),
                            device: device.clone(),
                            on_toggle: move |device_id: String| {
                                let mut open = expanded.write();
                                if !open.remove(&device_id) {
                                    open.insert(device_id);
                                }
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SessionItem(
    device: DeviceWithVerification,
    is_expanded: bool,
    on_toggle: EventHandler<String>,
) -> Element {
    let tr = use_translator();
    let device_id = device.device_id.clone();
    let button_id = device_id.clone();
    let toggle_label = if is_expanded {
        tr.t("Hide details")
    } else {
        tr.t("Show details")
    };

    rsx! {
        li { class: "mx_FilteredDeviceList_listItem",
            DeviceTile {
                device: device.clone(),
                on_click: move |_: MouseEvent| on_toggle.call(device_id.clone()),
                button {
                    class: "mx_DeviceTile_detailsButton",
                    "aria-expanded": "{is_expanded}",
                    onclick: move |_| on_toggle.call(button_id.clone()),
                    "{toggle_label}"
                }
            }
            if is_expanded {
                DeviceDetails { device: device }
            }
        }
    }
}

#[component]
fn DeviceDetails(device: DeviceWithVerification) -> Element {
    let translator = use_translator();
    let session_id_label = translator.t("Session ID");
    let ip_label = translator.t("IP address");
    let ip = device.last_seen_ip().map(str::to_string);

    rsx! {
        div { class: "mx_DeviceDetails", "data-testid": "device-details-{device.device_id}",
            table {
                tbody {
                    tr {
                        td { class: "mxDeviceDetails_metadataLabel", "{session_id_label}" }
                        td { class: "mxDeviceDetails_metadataValue", "{device.device_id}" }
                    }
                    if let Some(ip) = ip {
                        tr {
                            td { class: "mxDeviceDetails_metadataLabel", "{ip_label}" }
                            td { class: "mxDeviceDetails_metadataValue", "{ip}" }
                        }
                    }
                }
            }
        }
    }
}
