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
 */

//! Device (session) records as handed to the session manager UI.
//!
//! The record mirrors one entry of the homeserver's `/devices` response with
//! the verification flag merged in by the caller. The UI only ever reads it.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A device the user is logged in on, together with its verification state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceWithVerification {
    /// Unique device identifier. Doubles as the row key and the fallback label.
    pub device_id: String,
    /// Human-readable name set by the user or the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Last activity, in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_ts: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_seen_ip: Option<String>,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

impl DeviceWithVerification {
    pub fn new(device_id: impl Into<String>) -> Self {
        Self {
            device_id: device_id.into(),
            ..Default::default()
        }
    }

    /// Display name, or `None` when it is missing or empty.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|name| !name.is_empty())
    }

    /// The label shown as the row heading.
    pub fn display_label(&self) -> &str {
        self.display_name().unwrap_or(&self.device_id)
    }

    /// Hover label combining name and id. Only devices with a display name
    /// get one.
    pub fn tooltip_label(&self) -> Option<String> {
        self.display_name()
            .map(|name| format!("{name} ({})", self.device_id))
    }

    /// Last activity timestamp. A zero timestamp counts as never seen.
    pub fn last_seen_ts(&self) -> Option<i64> {
        self.last_seen_ts.filter(|ts| *ts != 0)
    }

    pub fn last_seen_ip(&self) -> Option<&str> {
        self.last_seen_ip.as_deref().filter(|ip| !ip.is_empty())
    }
}

impl std::fmt::Display for DeviceWithVerification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.display_name() {
            Some(name) => write!(f, "{name} ({})", self.device_id),
            None => write!(f, "{}", self.device_id),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DeviceListShape {
    Wrapped { devices: Vec<DeviceWithVerification> },
    Bare(Vec<DeviceWithVerification>),
}

/// Parse a device list from JSON.
///
/// Accepts either a bare array of devices or the `{"devices": [...]}` object
/// returned by the homeserver.
pub fn parse_device_list(json: &str) -> anyhow::Result<Vec<DeviceWithVerification>> {
    let shape: DeviceListShape =
        serde_json::from_str(json).context("failed to parse device list")?;
    Ok(match shape {
        DeviceListShape::Wrapped { devices } => devices,
        DeviceListShape::Bare(devices) => devices,
    })
}
