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

//! Depth legend pane.
//!
//! Rendered straight from the shared depth band table, so the legend can
//! never disagree with the marker colors.

use eframe::egui;
use quake_feed::DEPTH_BANDS;

pub fn show(ctx: &egui::Context) {
    egui::Window::new("Depth")
        .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-10.0, -10.0))
        .resizable(false)
        .collapsible(false)
        .frame(super::pane_frame(ctx))
        .show(ctx, |ui| {
            for band in &DEPTH_BANDS {
                ui.horizontal(|ui| {
                    let (rect, _) = ui.allocate_exact_size(
                        egui::vec2(14.0, 10.0),
                        egui::Sense::hover(),
                    );
                    ui.painter()
                        .rect_filled(rect, 2.0, super::band_color(band.color));
                    ui.label(
                        egui::RichText::new(band.label)
                            .color(egui::Color32::from_rgb(200, 220, 255))
                            .size(10.0)
                            .monospace(),
                    );
                });
            }
        });
}
