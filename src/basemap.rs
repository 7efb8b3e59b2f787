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

//! Basemap registry: the four selectable background tile layers.
//!
//! Each basemap is a walkers [`TileSource`] with the attribution text its
//! provider requires. Tile pipelines are created lazily on first selection
//! and kept alive afterwards, so switching back to a basemap re-uses its
//! HTTP cache and already-decoded textures.

use eframe::egui;
use serde::{Deserialize, Serialize};
use walkers::sources::{Attribution, TileSource};
use walkers::{HttpOptions, HttpTiles, TileId};

/// The selectable background layers. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Basemap {
    /// Default street map.
    #[default]
    OpenStreetMap,
    /// Stamen Toner Lite via Stadia Maps.
    Grayscale,
    /// Esri World Imagery (satellite).
    WorldImagery,
    /// Esri National Geographic world map.
    NatGeoWorld,
}

impl Basemap {
    pub const ALL: [Basemap; 4] = [
        Basemap::OpenStreetMap,
        Basemap::Grayscale,
        Basemap::WorldImagery,
        Basemap::NatGeoWorld,
    ];

    /// Display name for the layer control.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Basemap::OpenStreetMap => "Default",
            Basemap::Grayscale => "Grayscale",
            Basemap::WorldImagery => "World Imagery",
            Basemap::NatGeoWorld => "Nat Geo World",
        }
    }

    /// Attribution for the active basemap, drawn on the map surface.
    /// Displaying this text is a licensing requirement of each provider.
    #[must_use]
    pub fn attribution(self) -> Attribution {
        match self {
            Basemap::OpenStreetMap => OsmSource.attribution(),
            Basemap::Grayscale => TonerLiteSource.attribution(),
            Basemap::WorldImagery => EsriImagerySource.attribution(),
            Basemap::NatGeoWorld => EsriNatGeoSource.attribution(),
        }
    }

    fn cache_slug(self) -> &'static str {
        match self {
            Basemap::OpenStreetMap => "osm",
            Basemap::Grayscale => "toner_lite",
            Basemap::WorldImagery => "world_imagery",
            Basemap::NatGeoWorld => "natgeo",
        }
    }
}

/// Default street basemap from openstreetmap.org.
pub struct OsmSource;

impl TileSource for OsmSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://tile.openstreetmap.org/{}/{}/{}.png",
            tile_id.zoom, tile_id.x, tile_id.y
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© OpenStreetMap contributors",
            url: "https://www.openstreetmap.org/copyright",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        19
    }
}

/// Grayscale basemap: Stamen Toner Lite hosted by Stadia Maps.
pub struct TonerLiteSource;

impl TileSource for TonerLiteSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://tiles.stadiamaps.com/tiles/stamen_toner_lite/{}/{}/{}.png",
            tile_id.zoom, tile_id.x, tile_id.y
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© Stadia Maps © Stamen Design © OpenMapTiles © OpenStreetMap contributors",
            url: "https://www.stadiamaps.com/",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        20
    }
}

/// Esri World Imagery satellite basemap.
/// Esri tile servers order the path as z/y/x rather than z/x/y.
pub struct EsriImagerySource;

impl TileSource for EsriImagerySource {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://server.arcgisonline.com/ArcGIS/rest/services/World_Imagery/MapServer/tile/{}/{}/{}",
            tile_id.zoom, tile_id.y, tile_id.x
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "Tiles © Esri — Source: Esri, i-cubed, USDA, USGS, AEX, GeoEye, Getmapping, Aerogrid, IGN, IGP, UPR-EGP, and the GIS User Community",
            url: "https://www.esri.com/",
            logo_light: None,
            logo_dark: None,
        }
    }
}

/// Esri National Geographic world basemap (topographic).
pub struct EsriNatGeoSource;

impl TileSource for EsriNatGeoSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://server.arcgisonline.com/ArcGIS/rest/services/NatGeo_World_Map/MapServer/tile/{}/{}/{}",
            tile_id.zoom, tile_id.y, tile_id.x
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "Tiles © Esri — National Geographic, Esri, DeLorme, NAVTEQ, UNEP-WCMC, USGS, NASA, ESA, METI, NRCAN, GEBCO, NOAA, iPC",
            url: "https://www.esri.com/",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        16
    }
}

/// Lazily constructed tile pipelines, one per basemap.
pub struct BasemapTiles {
    osm: Option<HttpTiles>,
    toner_lite: Option<HttpTiles>,
    world_imagery: Option<HttpTiles>,
    natgeo: Option<HttpTiles>,
}

impl std::fmt::Debug for BasemapTiles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasemapTiles").finish_non_exhaustive()
    }
}

impl BasemapTiles {
    #[must_use]
    pub fn new() -> Self {
        Self {
            osm: None,
            toner_lite: None,
            world_imagery: None,
            natgeo: None,
        }
    }

    /// Get the tile pipeline for a basemap, creating it on first use.
    ///
    /// Exactly one pipeline is handed to the map widget per frame, which is
    /// what keeps the basemap swap atomic: the newly selected layer takes
    /// over on the very frame the selection changes.
    pub fn get_or_create(&mut self, basemap: Basemap, ctx: &egui::Context) -> &mut HttpTiles {
        let options = Self::http_options(basemap);

        let slot = match basemap {
            Basemap::OpenStreetMap => &mut self.osm,
            Basemap::Grayscale => &mut self.toner_lite,
            Basemap::WorldImagery => &mut self.world_imagery,
            Basemap::NatGeoWorld => &mut self.natgeo,
        };

        if slot.is_none() {
            *slot = Some(match basemap {
                Basemap::OpenStreetMap => {
                    HttpTiles::with_options(OsmSource, options, ctx.clone())
                }
                Basemap::Grayscale => {
                    HttpTiles::with_options(TonerLiteSource, options, ctx.clone())
                }
                Basemap::WorldImagery => {
                    HttpTiles::with_options(EsriImagerySource, options, ctx.clone())
                }
                Basemap::NatGeoWorld => {
                    HttpTiles::with_options(EsriNatGeoSource, options, ctx.clone())
                }
            });
        }

        slot.as_mut().expect("tile pipeline just inserted")
    }

    fn http_options(basemap: Basemap) -> HttpOptions {
        let cache_dir = dirs::cache_dir()
            .unwrap_or_else(|| std::path::PathBuf::from(".cache"))
            .join("quakemap-desktop")
            .join("tiles")
            .join(basemap.cache_slug());

        HttpOptions {
            cache: Some(cache_dir),
            ..Default::default()
        }
    }
}

impl Default for BasemapTiles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile() -> TileId {
        TileId {
            x: 5,
            y: 12,
            zoom: 4,
        }
    }

    #[test]
    fn test_registry_has_four_basemaps() {
        assert_eq!(Basemap::ALL.len(), 4);
        for basemap in Basemap::ALL {
            assert!(!basemap.label().is_empty());
            assert!(!basemap.attribution().text.is_empty());
        }
    }

    #[test]
    fn test_osm_url_shape() {
        assert_eq!(
            OsmSource.tile_url(tile()),
            "https://tile.openstreetmap.org/4/5/12.png"
        );
    }

    #[test]
    fn test_esri_urls_order_y_before_x() {
        let url = EsriImagerySource.tile_url(tile());
        assert!(url.ends_with("/tile/4/12/5"));
        let url = EsriNatGeoSource.tile_url(tile());
        assert!(url.ends_with("/tile/4/12/5"));
    }

    #[test]
    fn test_toner_lite_url_shape() {
        assert_eq!(
            TonerLiteSource.tile_url(tile()),
            "https://tiles.stadiamaps.com/tiles/stamen_toner_lite/4/5/12.png"
        );
    }
}
