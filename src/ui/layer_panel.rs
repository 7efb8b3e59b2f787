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

//! Layer control pane: mutually exclusive basemap selection plus
//! independent overlay toggles with per-overlay load status.

use eframe::egui;
use quake_feed::{BoundaryLine, Earthquake};

use crate::basemap::Basemap;
use crate::config::AppConfig;
use crate::overlay::OverlayState;

const STATUS_READY: egui::Color32 = egui::Color32::from_rgb(100, 255, 100);
const STATUS_LOADING: egui::Color32 = egui::Color32::from_rgb(255, 200, 50);
const STATUS_FAILED: egui::Color32 = egui::Color32::from_rgb(255, 100, 100);

/// Render the layer control. Returns true when a setting changed so the
/// caller can persist the config.
pub fn show(
    ctx: &egui::Context,
    config: &mut AppConfig,
    plates: &OverlayState<BoundaryLine>,
    quakes: &OverlayState<Earthquake>,
) -> bool {
    let mut changed = false;

    egui::Window::new("Layers")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-10.0, 10.0))
        .resizable(false)
        .collapsible(true)
        .frame(super::pane_frame(ctx))
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new("BASEMAP")
                    .color(egui::Color32::from_rgb(150, 150, 150))
                    .size(10.0)
                    .monospace(),
            );
            for basemap in Basemap::ALL {
                if ui
                    .radio_value(&mut config.basemap, basemap, basemap.label())
                    .changed()
                {
                    changed = true;
                }
            }

            ui.separator();
            ui.label(
                egui::RichText::new("OVERLAYS")
                    .color(egui::Color32::from_rgb(150, 150, 150))
                    .size(10.0)
                    .monospace(),
            );

            if ui
                .checkbox(&mut config.show_plates, "Tectonic Plates")
                .changed()
            {
                changed = true;
            }
            status_line(ui, plates, "boundaries");

            if ui
                .checkbox(&mut config.show_quakes, "Earthquakes")
                .changed()
            {
                changed = true;
            }
            status_line(ui, quakes, "events");

            ui.separator();
            if ui.checkbox(&mut config.show_legend, "Legend").changed() {
                changed = true;
            }
            if ui
                .checkbox(&mut config.show_event_list, "Event List")
                .changed()
            {
                changed = true;
            }
        });

    changed
}

fn status_line<T>(ui: &mut egui::Ui, state: &OverlayState<T>, noun: &str) {
    let (text, color) = match state {
        OverlayState::Loading => ("loading…".to_string(), STATUS_LOADING),
        OverlayState::Ready(items) => (format!("{} {noun}", items.len()), STATUS_READY),
        OverlayState::Failed(reason) => (format!("unavailable: {reason}"), STATUS_FAILED),
    };

    ui.indent(noun, |ui| {
        ui.label(egui::RichText::new(text).color(color).size(9.0).monospace());
    });
}
