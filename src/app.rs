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

//! Application state and frame loop.

use eframe::egui;
use log::warn;
use quake_feed::{BoundaryLine, Earthquake};
use walkers::{lon_lat, Map, MapMemory};

use crate::basemap::BasemapTiles;
use crate::config::AppConfig;
use crate::overlay::earthquakes::QuakeLayer;
use crate::overlay::plates::PlateLayer;
use crate::overlay::{self, OverlayHandle, OverlayState};
use crate::ui;
use crate::Args;

pub struct QuakeMapApp {
    config: AppConfig,
    basemap_tiles: BasemapTiles,
    map_memory: MapMemory,
    plates: OverlayHandle<BoundaryLine>,
    quakes: OverlayHandle<Earthquake>,
    /// Id of the event whose popup is open, if any.
    selected_event: Option<String>,
}

impl std::fmt::Debug for QuakeMapApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuakeMapApp")
            .field("config", &self.config)
            .field("selected_event", &self.selected_event)
            .finish_non_exhaustive()
    }
}

impl QuakeMapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: &Args) -> Self {
        let mut config = AppConfig::load().unwrap_or_else(|e| {
            warn!("failed to load config, using defaults: {e}");
            AppConfig::default()
        });

        if let Some((lat, lon)) = args.center {
            config.center_lat = lat;
            config.center_lon = lon;
        }
        if let Some(zoom) = args.zoom {
            config.zoom = zoom;
        }

        let mut map_memory = MapMemory::default();
        if let Err(e) = map_memory.set_zoom(config.zoom) {
            warn!("invalid startup zoom {}: {e:?}", config.zoom);
        }

        // One fetch per overlay, issued at startup with no ordering
        // dependency between them. Each populates only its own handle.
        let plates = OverlayHandle::new();
        let quakes = OverlayHandle::new();

        let plates_url = args
            .plates_url
            .clone()
            .unwrap_or_else(|| quake_feed::PLATE_BOUNDARIES_URL.to_string());
        overlay::spawn_fetch(&plates, cc.egui_ctx.clone(), "tectonic plates", async move {
            quake_feed::fetch_plate_boundaries(&plates_url).await
        });

        let quakes_url = args
            .quakes_url
            .clone()
            .unwrap_or_else(|| quake_feed::QUAKES_ALL_DAY_URL.to_string());
        overlay::spawn_fetch(&quakes, cc.egui_ctx.clone(), "earthquakes", async move {
            quake_feed::fetch_earthquakes(&quakes_url).await
        });

        Self {
            config,
            basemap_tiles: BasemapTiles::new(),
            map_memory,
            plates,
            quakes,
            selected_event: None,
        }
    }

    fn draw_map(&mut self, ui: &mut egui::Ui) {
        let plates_state = self.plates.snapshot();
        let quakes_state = self.quakes.snapshot();

        let center = lon_lat(self.config.center_lon, self.config.center_lat);
        let tiles = self.basemap_tiles.get_or_create(self.config.basemap, ui.ctx());

        let mut map = Map::new(Some(tiles), &mut self.map_memory, center);

        // Plates render beneath quake markers.
        if self.config.show_plates {
            if let OverlayState::Ready(lines) = &plates_state {
                map = map.with_plugin(PlateLayer {
                    lines: lines.as_slice(),
                });
            }
        }
        if self.config.show_quakes {
            if let OverlayState::Ready(events) = &quakes_state {
                map = map.with_plugin(QuakeLayer {
                    quakes: events.as_slice(),
                    selected: &mut self.selected_event,
                });
            }
        }

        let response = ui.add(map);
        let rect = response.rect;
        let painter = ui.painter();

        painter.text(
            rect.left_top() + egui::vec2(10.0, 10.0),
            egui::Align2::LEFT_TOP,
            "Drag to pan | Scroll to zoom",
            egui::FontId::proportional(11.0),
            egui::Color32::from_rgb(120, 120, 120),
        );

        // Attribution for the active basemap (provider licensing requirement).
        let attribution = self.config.basemap.attribution();
        let anchor = rect.right_bottom() + egui::vec2(-8.0, -8.0);
        let galley = painter.layout_no_wrap(
            attribution.text.to_string(),
            egui::FontId::proportional(10.0),
            egui::Color32::WHITE,
        );
        let padding = egui::vec2(4.0, 2.0);
        let box_rect = egui::Rect::from_min_size(
            anchor - galley.size() - padding,
            galley.size() + padding * 2.0,
        );
        painter.rect_filled(
            box_rect,
            2.0,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 150),
        );
        painter.text(
            anchor,
            egui::Align2::RIGHT_BOTTOM,
            attribution.text,
            egui::FontId::proportional(10.0),
            egui::Color32::WHITE,
        );
    }
}

impl eframe::App for QuakeMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_map(ui);
            });

        let plates_state = self.plates.snapshot();
        let quakes_state = self.quakes.snapshot();

        let changed =
            ui::layer_panel::show(ctx, &mut self.config, &plates_state, &quakes_state);

        if self.config.show_legend {
            ui::legend::show(ctx);
        }
        if self.config.show_event_list {
            ui::event_list::show(ctx, &quakes_state, &mut self.selected_event);
        }
        if let OverlayState::Ready(events) = &quakes_state {
            ui::popup::show(ctx, events, &mut self.selected_event);
        }

        if changed {
            if let Err(e) = self.config.save() {
                warn!("failed to save config: {e}");
            }
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Persist the viewport so the next launch resumes where we left off.
        self.config.zoom = self.map_memory.zoom();
        if let Some(position) = self.map_memory.detached() {
            // Position is a geo point: x is longitude, y is latitude.
            self.config.center_lat = position.y();
            self.config.center_lon = position.x();
        }
        if let Err(e) = self.config.save() {
            warn!("failed to save config on exit: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use walkers::lon_lat;

    #[test]
    fn test_position_axes_map_to_lon_lat() {
        // The detached map position exposes geo axes, not lat()/lon()
        // accessors: x is longitude, y is latitude.
        let position = lon_lat(-119.4179, 36.7783);
        assert!((position.x() - (-119.4179)).abs() < 1e-9);
        assert!((position.y() - 36.7783).abs() < 1e-9);
    }
}
