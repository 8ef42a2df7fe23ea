// SPDX-License-Identifier: MIT OR Apache-2.0

//! Context providers for the application
//!
//! Display preferences (language and clock style) are provided once at the
//! root and read by any component that renders user-facing text or times.

use dioxus::prelude::*;

use crate::config::RuntimeConfig;
use crate::i18n::{Language, Translator};

/// How user-facing text and timestamps are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplaySettings {
    pub language: Language,
    /// Render times as `8:15PM` instead of `20:15`.
    pub show_twelve_hour_timestamps: bool,
}

impl DisplaySettings {
    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }
}

impl From<&RuntimeConfig> for DisplaySettings {
    fn from(config: &RuntimeConfig) -> Self {
        Self {
            language: config.language(),
            show_twelve_hour_timestamps: config.show_twelve_hour_timestamps(),
        }
    }
}

/// Context type for display settings.
///
/// `Signal<DisplaySettings>` so a settings panel can switch language at
/// runtime and every tile re-renders.
pub type DisplaySettingsCtx = Signal<DisplaySettings>;

/// Read the display settings from context. Components rendered without a
/// provider (for example in isolation tests) get the defaults.
pub fn use_display_settings() -> DisplaySettings {
    try_use_context::<DisplaySettingsCtx>()
        .map(|settings| *settings.read())
        .unwrap_or_default()
}

pub fn use_translator() -> Translator {
    use_display_settings().translator()
}

/// Devices shown on the sessions page, provided by the app root.
pub type DeviceListCtx = Signal<Vec<session_types::DeviceWithVerification>>;
