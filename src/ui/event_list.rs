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

//! Scrollable list of loaded earthquakes, strongest first. Clicking a row
//! selects the event, same as clicking its marker on the map.

use chrono::{DateTime, Utc};
use eframe::egui;
use quake_feed::{depth_band, Earthquake};

use crate::overlay::OverlayState;

pub fn show(
    ctx: &egui::Context,
    state: &OverlayState<Earthquake>,
    selected: &mut Option<String>,
) {
    let screen_height = ctx.content_rect().height();

    egui::Window::new("Earthquakes")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(10.0, 10.0))
        .default_size(egui::vec2(300.0, (screen_height - 20.0).min(600.0)))
        .resizable(true)
        .collapsible(true)
        .frame(super::pane_frame(ctx))
        .show(ctx, |ui| match state {
            OverlayState::Loading => {
                ui.label(
                    egui::RichText::new("loading…")
                        .color(egui::Color32::from_rgb(255, 200, 50))
                        .monospace(),
                );
            }
            OverlayState::Failed(reason) => {
                ui.label(
                    egui::RichText::new(format!("feed unavailable: {reason}"))
                        .color(egui::Color32::from_rgb(255, 100, 100))
                        .size(10.0),
                );
            }
            OverlayState::Ready(quakes) => {
                ui.label(
                    egui::RichText::new(format!("TOTAL: {}", quakes.len()))
                        .color(egui::Color32::from_rgb(150, 150, 150))
                        .size(10.0)
                        .monospace(),
                );
                ui.add_space(4.0);

                let mut sorted: Vec<&Earthquake> = quakes.iter().collect();
                sorted.sort_unstable_by(|a, b| {
                    b.magnitude
                        .unwrap_or(0.0)
                        .total_cmp(&a.magnitude.unwrap_or(0.0))
                });

                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.push_id("event_list", |ui| {
                        for quake in sorted {
                            draw_row(ui, quake, selected);
                            ui.add_space(3.0);
                        }
                    });
                });
            }
        });
}

fn draw_row(ui: &mut egui::Ui, quake: &Earthquake, selected: &mut Option<String>) {
    let is_selected = selected.as_deref() == Some(quake.id.as_str());

    let frame = if is_selected {
        egui::Frame::group(ui.style())
            .fill(egui::Color32::from_rgba_unmultiplied(100, 140, 180, 120))
    } else {
        egui::Frame::group(ui.style())
    };

    let response = frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            let band = depth_band(quake.depth_km);
            ui.label(
                egui::RichText::new(magnitude_text(quake.magnitude))
                    .color(super::band_color(band.color))
                    .size(12.0)
                    .monospace()
                    .strong(),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(format!("{:.0} km", quake.depth_km))
                        .color(egui::Color32::from_rgb(180, 180, 180))
                        .size(9.0)
                        .monospace(),
                );
            });
        });

        if let Some(place) = &quake.place {
            ui.label(
                egui::RichText::new(place)
                    .color(egui::Color32::from_rgb(200, 220, 255))
                    .size(10.0),
            );
        }

        if let Some(time) = quake.time {
            ui.label(
                egui::RichText::new(format_age(time))
                    .color(egui::Color32::from_rgb(120, 120, 120))
                    .size(8.5)
                    .monospace(),
            );
        }
    });

    if response.response.interact(egui::Sense::click()).clicked() {
        *selected = Some(quake.id.clone());
    }
}

fn magnitude_text(magnitude: Option<f64>) -> String {
    match magnitude {
        Some(mag) => format!("M {mag:.1}"),
        None => "M —".to_string(),
    }
}

fn format_age(time: DateTime<Utc>) -> String {
    let minutes = (Utc::now() - time).num_minutes();
    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else {
        format!("{}h {}m ago", minutes / 60, minutes % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_magnitude_text() {
        assert_eq!(magnitude_text(Some(4.25)), "M 4.2");
        assert_eq!(magnitude_text(None), "M —");
    }

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(Utc::now()), "just now");
        assert_eq!(format_age(Utc::now() - Duration::minutes(5)), "5m ago");
        assert_eq!(
            format_age(Utc::now() - Duration::minutes(125)),
            "2h 5m ago"
        );
    }
}
