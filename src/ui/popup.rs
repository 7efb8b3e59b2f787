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

//! Popup for the selected earthquake: magnitude, depth, location, origin
//! time, and a link to the USGS event page. Opens only on user
//! interaction (marker or list click), never automatically.

use eframe::egui;
use log::warn;
use quake_feed::{depth_band, Earthquake};

pub fn show(ctx: &egui::Context, quakes: &[Earthquake], selected: &mut Option<String>) {
    let Some(id) = selected.clone() else {
        return;
    };
    let Some(quake) = quakes.iter().find(|q| q.id == id) else {
        // Selection no longer present in the loaded data.
        *selected = None;
        return;
    };

    let mut open = true;
    egui::Window::new("Event")
        .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -24.0))
        .resizable(false)
        .collapsible(false)
        .open(&mut open)
        .frame(super::pane_frame(ctx))
        .show(ctx, |ui| {
            let band = depth_band(quake.depth_km);

            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(match quake.magnitude {
                        Some(mag) => format!("Magnitude {mag:.1}"),
                        None => "Magnitude —".to_string(),
                    })
                    .color(super::band_color(band.color))
                    .size(14.0)
                    .strong(),
                );
            });

            ui.label(
                egui::RichText::new(format!("Depth: {:.1} km ({})", quake.depth_km, band.label))
                    .size(11.0),
            );
            if let Some(place) = &quake.place {
                ui.label(egui::RichText::new(format!("Location: {place}")).size(11.0));
            }
            if let Some(time) = quake.time {
                ui.label(
                    egui::RichText::new(format!(
                        "Time: {} UTC",
                        time.format("%Y-%m-%d %H:%M:%S")
                    ))
                    .size(11.0),
                );
            }
            ui.label(
                egui::RichText::new(format!(
                    "{:.4}°, {:.4}°",
                    quake.latitude, quake.longitude
                ))
                .color(egui::Color32::from_rgb(120, 120, 120))
                .size(9.0)
                .monospace(),
            );

            if let Some(url) = &quake.detail_url {
                ui.add_space(4.0);
                if ui.button("View on USGS").clicked() {
                    if let Err(e) = webbrowser::open(url) {
                        warn!("failed to open browser for {url}: {e}");
                    }
                }
            }
        });

    if !open {
        *selected = None;
    }
}
