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

use dioxus::prelude::*;
use session_types::DeviceWithVerification;
use session_ui::components::config_error::ConfigError;
use session_ui::config::{app_config, RuntimeConfig};
use session_ui::context::{DeviceListCtx, DisplaySettings, DisplaySettingsCtx};
use session_ui::routing::Route;

fn load_devices(config: &Result<RuntimeConfig, String>) -> Vec<DeviceWithVerification> {
    let Ok(config) = config else {
        return Vec::new();
    };
    match config.devices() {
        Ok(devices) => {
            log::info!("loaded {} sessions", devices.len());
            devices
        }
        Err(e) => {
            log::error!("failed to load sessions: {e:#}");
            Vec::new()
        }
    }
}

/// App root component
#[component]
fn App() -> Element {
    let config = use_hook(app_config);

    let settings: DisplaySettingsCtx = use_signal(|| {
        config
            .as_ref()
            .map(DisplaySettings::from)
            .unwrap_or_default()
    });
    use_context_provider(|| settings);

    let devices: DeviceListCtx = use_signal(|| load_devices(&config));
    use_context_provider(|| devices);

    if let Err(e) = config {
        log::error!("{e}");
        return rsx! {
            ConfigError { message: e }
        };
    }

    rsx! {
        Router::<Route> {}
    }
}

fn main() {
    let level = if cfg!(feature = "debugAssertions") {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
