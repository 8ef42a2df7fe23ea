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

//! One row of the session list: name, metadata line and an actions slot.

use chrono::{DateTime, Local, TimeZone};
use dioxus::prelude::*;
use session_types::DeviceWithVerification;

use crate::components::heading::{Heading, HeadingSize};
use crate::components::tooltip::{Alignment, TooltipTarget};
use crate::context::{use_display_settings, DisplaySettings};
use crate::date_utils::{format_date, format_relative_time, from_timestamp_ms, MS_6_DAYS};

/// Rendered between consecutive metadata entries.
pub const METADATA_SEPARATOR: &str = " · ";

/// One labelled value on the metadata line. An empty `value` is not rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceMetadataEntry {
    pub id: &'static str,
    pub value: String,
}

/// Format a last-seen timestamp relative to `now`.
///
/// Activity within the last six days (or in the future) gets an absolute
/// weekday and time, anything older the compact relative form. Returns `None`
/// for timestamps chrono cannot represent.
pub fn format_last_activity<Tz: TimeZone>(
    timestamp: i64,
    now: &DateTime<Tz>,
    settings: &DisplaySettings,
) -> Option<String> {
    let Some(date) = from_timestamp_ms(&now.timezone(), timestamp) else {
        log::warn!("last activity timestamp {timestamp} is out of range");
        return None;
    };
    let tr = settings.translator();
    let twelve_hour = settings.show_twelve_hour_timestamps;
    if timestamp.saturating_add(MS_6_DAYS) >= now.timestamp_millis() {
        Some(format_date(&date, now, twelve_hour, &tr))
    } else {
        Some(format_relative_time(&date, now, twelve_hour, &tr))
    }
}

/// The three metadata entries of a tile, always in the order verification,
/// last activity, last seen IP.
pub fn device_metadata<Tz: TimeZone>(
    device: &DeviceWithVerification,
    now: &DateTime<Tz>,
    settings: &DisplaySettings,
) -> [DeviceMetadataEntry; 3] {
    let tr = settings.translator();
    let verification_status = if device.is_verified {
        tr.t("Verified")
    } else {
        tr.t("Unverified")
    };
    let last_activity = device
        .last_seen_ts()
        .and_then(|ts| format_last_activity(ts, now, settings))
        .map(|formatted| format!("{} {formatted}", tr.t("Last activity")))
        .unwrap_or_default();
    let last_seen_ip = device.last_seen_ip.clone().unwrap_or_default();

    [
        DeviceMetadataEntry {
            id: "isVerified",
            value: verification_status,
        },
        DeviceMetadataEntry {
            id: "lastActivity",
            value: last_activity,
        },
        DeviceMetadataEntry {
            id: "lastSeenIp",
            value: last_seen_ip,
        },
    ]
}

/// [`device_metadata`] against the current local time. This is what a tile
/// renders.
pub fn device_metadata_now(
    device: &DeviceWithVerification,
    settings: &DisplaySettings,
) -> [DeviceMetadataEntry; 3] {
    device_metadata(device, &Local::now(), settings)
}

/// Heading for the device, with a tooltip naming both the display name and
/// the id when a display name is set.
#[component]
pub fn DeviceTileName(device: DeviceWithVerification) -> Element {
    let name = device.display_label().to_string();
    match device.tooltip_label() {
        Some(label) => rsx! {
            TooltipTarget { alignment: Alignment::Top, label: label,
                Heading { size: HeadingSize::H4, "{name}" }
            }
        },
        None => rsx! {
            Heading { size: HeadingSize::H4, "{name}" }
        },
    }
}

#[component]
pub fn DeviceMetadata(id: String, value: String) -> Element {
    if value.is_empty() {
        return rsx! {};
    }
    rsx! {
        span { "data-testid": "device-metadata-{id}", "{value}" }
    }
}

#[component]
pub fn DeviceTile(
    device: DeviceWithVerification,
    /// Called when the name block is clicked.
    #[props(default)]
    on_click: Option<EventHandler<MouseEvent>>,
    /// Action controls rendered at the end of the row.
    children: Element,
) -> Element {
    let settings = use_display_settings();
    let metadata = device_metadata_now(&device, &settings);
    let device_id = device.device_id.clone();
    let clicked_id = device_id.clone();

    rsx! {
        div { class: "mx_DeviceTile", "data-testid": "device-tile-{device_id}",
            div {
                class: "mx_DeviceTile_info",
                onclick: move |evt| {
                    log::debug!("device tile clicked: {clicked_id}");
                    if let Some(handler) = on_click {
                        handler.call(evt);
                    }
                },
                DeviceTileName { device: device.clone() }
                div { class: "mx_DeviceTile_metadata",
                    for (index, entry) in metadata.into_iter().filter(|e| !e.value.is_empty()).enumerate() {
                        Fragment { key: "{entry.id}",
                            if index > 0 {
                                "{METADATA_SEPARATOR}"
                            }
                            DeviceMetadata { id: entry.id.to_string(), value: entry.value }
                        }
                    }
                }
            }
            div { class: "mx_DeviceTile_actions", {children} }
        }
    }
}
