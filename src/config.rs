// Copyright 2025 QuakeMap Desktop Contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Application configuration management.
//!
//! Persistent TOML configuration via confy: selected basemap, overlay
//! toggles, viewport position, and pane state. Every field carries a serde
//! default so older config files keep loading as fields are added.

use serde::{Deserialize, Serialize};

use crate::basemap::Basemap;

/// Initial viewport center (California, where both feeds are busiest).
pub const DEFAULT_CENTER: (f64, f64) = (36.7783, -119.4179);

/// Initial slippy-map zoom level.
pub const DEFAULT_ZOOM: f64 = 5.0;

const APP_NAME: &str = "quakemap-desktop";
const CONFIG_NAME: &str = "config";

/// Application configuration stored in TOML format.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Active background layer.
    #[serde(default)]
    pub basemap: Basemap,

    /// Show the tectonic plate boundary overlay.
    #[serde(default = "default_true")]
    pub show_plates: bool,

    /// Show the earthquake marker overlay.
    #[serde(default = "default_true")]
    pub show_quakes: bool,

    /// Show the depth legend.
    #[serde(default = "default_true")]
    pub show_legend: bool,

    /// Show the event list pane.
    #[serde(default = "default_true")]
    pub show_event_list: bool,

    /// Map center latitude at startup.
    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    /// Map center longitude at startup.
    #[serde(default = "default_center_lon")]
    pub center_lon: f64,

    /// Map zoom level at startup.
    #[serde(default = "default_zoom")]
    pub zoom: f64,
}

fn default_true() -> bool {
    true
}

fn default_center_lat() -> f64 {
    DEFAULT_CENTER.0
}

fn default_center_lon() -> f64 {
    DEFAULT_CENTER.1
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            basemap: Basemap::default(),
            show_plates: true,
            show_quakes: true,
            show_legend: true,
            show_event_list: true,
            center_lat: DEFAULT_CENTER.0,
            center_lon: DEFAULT_CENTER.1,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl AppConfig {
    /// Load configuration from disk.
    pub fn load() -> Result<Self, confy::ConfyError> {
        confy::load(APP_NAME, CONFIG_NAME)
    }

    /// Save configuration to disk.
    pub fn save(&self) -> Result<(), confy::ConfyError> {
        confy::store(APP_NAME, CONFIG_NAME, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.basemap, Basemap::OpenStreetMap);
        assert!(config.show_plates);
        assert!(config.show_quakes);
        assert!((config.zoom - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("show_plates = false").unwrap();
        assert!(!config.show_plates);
        assert!(config.show_quakes);
        assert_eq!(config.basemap, Basemap::OpenStreetMap);
    }
}
