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

//! Tectonic plate boundary overlay.

use eframe::egui;
use quake_feed::BoundaryLine;
use walkers::{lon_lat, MapMemory, Plugin, Projector};

const BOUNDARY_COLOR: egui::Color32 = egui::Color32::RED;
const BOUNDARY_STROKE_WIDTH: f32 = 1.0;

/// Plugin drawing plate boundaries as red polylines.
pub struct PlateLayer<'a> {
    pub lines: &'a [BoundaryLine],
}

impl Plugin for PlateLayer<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut egui::Ui,
        response: &egui::Response,
        projector: &Projector,
        _memory: &MapMemory,
    ) {
        let painter = ui.painter().with_clip_rect(response.rect);
        let stroke = egui::Stroke::new(BOUNDARY_STROKE_WIDTH, BOUNDARY_COLOR);

        for line in self.lines {
            let points: Vec<egui::Pos2> = line
                .points
                .iter()
                .map(|&(lon, lat)| {
                    let projected = projector.project(lon_lat(lon, lat));
                    egui::pos2(projected.x, projected.y)
                })
                .collect();

            painter.add(egui::Shape::line(points, stroke));
        }
    }
}
