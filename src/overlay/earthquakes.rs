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

//! Earthquake marker overlay.
//!
//! Each event is a filled circle: radius from magnitude, fill from the
//! depth band, black stroke. Clicking a marker selects the event for the
//! popup; clicking empty map clears the selection.

use eframe::egui;
use quake_feed::{depth_band, marker_radius, Earthquake};
use walkers::{lon_lat, MapMemory, Plugin, Projector};

const FILL_ALPHA: u8 = 191; // 0.75 fill opacity
const STROKE_WIDTH: f32 = 0.5;
const MIN_CLICK_RADIUS: f32 = 6.0;

/// Plugin drawing earthquake markers and handling marker clicks.
pub struct QuakeLayer<'a> {
    pub quakes: &'a [Earthquake],
    /// Id of the event whose popup is open, shared with the list pane.
    pub selected: &'a mut Option<String>,
}

impl Plugin for QuakeLayer<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter().with_clip_rect(response.rect);
        let mut clicked_event: Option<String> = None;
        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };

        for quake in self.quakes {
            let projected = projector.project(lon_lat(quake.longitude, quake.latitude));
            let pos = egui::pos2(projected.x, projected.y);
            let radius = marker_radius(quake.magnitude.unwrap_or(0.0));

            if !response.rect.expand(radius).contains(pos) {
                continue;
            }

            let band = depth_band(quake.depth_km);
            let fill = egui::Color32::from_rgba_unmultiplied(
                band.color.r,
                band.color.g,
                band.color.b,
                FILL_ALPHA,
            );

            let stroke = if self.selected.as_deref() == Some(quake.id.as_str()) {
                egui::Stroke::new(1.5, egui::Color32::WHITE)
            } else {
                egui::Stroke::new(STROKE_WIDTH, egui::Color32::BLACK)
            };

            painter.circle(pos, radius, fill, stroke);

            if let Some(click) = click_pos {
                if click.distance(pos) <= radius.max(MIN_CLICK_RADIUS) {
                    clicked_event = Some(quake.id.clone());
                }
            }
        }

        // Later markers draw on top, so the last hit wins the click too.
        if click_pos.is_some() {
            *self.selected = clicked_event;
        }
    }
}
