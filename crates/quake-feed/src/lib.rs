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

//! Client library for the USGS earthquake summary feed and the PB2002
//! tectonic plate boundary dataset.
//!
//! The library is split into independent layers:
//!
//! - **GeoJSON layer**: decoding of the two FeatureCollection shapes into
//!   plain domain types ([`Earthquake`], [`BoundaryLine`])
//! - **Severity layer**: the depth band table and magnitude-to-radius
//!   scaling shared by the map markers and the legend
//! - **Fetch layer**: single-shot async HTTP retrieval with an explicit
//!   error taxonomy ([`FeedError`])
//!
//! # Quick Start
//!
//! ```no_run
//! # async fn run() -> Result<(), quake_feed::FeedError> {
//! let quakes = quake_feed::fetch_earthquakes(quake_feed::QUAKES_ALL_DAY_URL).await?;
//! for quake in &quakes {
//!     let band = quake_feed::depth_band(quake.depth_km);
//!     println!("{}: {:?} ({})", quake.id, quake.place, band.label);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Classification can be used on its own, without any network access:
//!
//! ```
//! use quake_feed::{depth_band, marker_radius};
//!
//! assert_eq!(depth_band(42.0).label, "30–50 km");
//! assert_eq!(marker_radius(3.0), 15.0);
//! ```

pub mod fetch;
pub mod geojson;
pub mod model;
pub mod severity;

pub use fetch::{
    fetch_earthquakes, fetch_plate_boundaries, FeedError, PLATE_BOUNDARIES_URL,
    QUAKES_ALL_DAY_URL,
};
pub use model::{BoundaryLine, Earthquake};
pub use severity::{depth_band, marker_radius, DepthBand, Rgb, DEPTH_BANDS};
