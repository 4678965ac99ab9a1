// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Tool configuration with cosmic-config support.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

/// Tool configuration.
///
/// Export settings (margins, threshold, presets) are deliberately absent:
/// they start from fixed defaults on every run.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Program and leading arguments used to crop margins. The crop flags,
    /// input and output paths are appended after these.
    pub crop_command: Vec<String>,
    /// Name of the presentation application addressed by the macOS bridge.
    pub host_app_name: String,
    /// Keep the window above other windows.
    pub always_on_top: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            crop_command: vec!["pdf-crop-margins".to_string()],
            host_app_name: "Microsoft PowerPoint".to_string(),
            always_on_top: true,
        }
    }
}

impl AppConfig {
    /// Load the persisted configuration, falling back to defaults.
    pub fn load(app_id: &str) -> Self {
        match cosmic_config::Config::new(app_id, Self::VERSION) {
            Ok(handler) => match Self::get_entry(&handler) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for why in errors {
                        log::debug!("Config entry not loaded: {why}");
                    }
                    config
                }
            },
            Err(why) => {
                log::warn!("Config unavailable, using defaults: {why}");
                Self::default()
            }
        }
    }
}
