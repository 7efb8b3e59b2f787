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

//! Domain types produced by the feed parsers.

use chrono::{DateTime, Utc};

/// One earthquake event from the USGS summary feed.
///
/// Read-only once parsed; the depth is the third coordinate of the GeoJSON
/// point geometry, in kilometres.
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    /// USGS event id, e.g. "us7000abcd".
    pub id: String,
    /// Magnitude. The live feed occasionally reports `null`.
    pub magnitude: Option<f64>,
    /// Human-readable location, e.g. "12 km SSE of Ridgecrest, CA".
    pub place: Option<String>,
    /// Origin time (UTC).
    pub time: Option<DateTime<Utc>>,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Hypocentre depth in kilometres. Slightly negative values occur for
    /// events above the reference ellipsoid.
    pub depth_km: f64,
    /// USGS event page for this quake.
    pub detail_url: Option<String>,
}

/// One tectonic plate boundary polyline in lon/lat order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryLine {
    pub points: Vec<(f64, f64)>,
}
