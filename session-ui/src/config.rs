// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use session_types::{parse_device_list, truthy, DeviceWithVerification};
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::i18n::Language;

/// Device list shown when the host page does not inject one.
pub const DEMO_DEVICES_JSON: &str = include_str!("../assets/demo_devices.json");

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default)]
    pub language: Option<String>,
    #[serde(rename = "showTwelveHourTimestamps")]
    #[serde(default)]
    pub show_twelve_hour_timestamps: String,
    #[serde(default)]
    pub devices: Option<Vec<DeviceWithVerification>>,
}

impl RuntimeConfig {
    pub fn language(&self) -> Language {
        self.language
            .as_deref()
            .map(Language::from_tag_or_default)
            .unwrap_or_default()
    }

    pub fn show_twelve_hour_timestamps(&self) -> bool {
        truthy(Some(self.show_twelve_hour_timestamps.as_str()))
    }

    /// Devices injected by the host page, or the bundled demo list.
    pub fn devices(&self) -> anyhow::Result<Vec<DeviceWithVerification>> {
        match &self.devices {
            Some(devices) => Ok(devices.clone()),
            None => parse_device_list(DEMO_DEVICES_JSON),
        }
    }
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = window().ok_or_else(|| "No window available".to_string())?;
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))
}
