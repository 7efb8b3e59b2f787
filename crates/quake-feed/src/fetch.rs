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

//! Async HTTP fetch for the two feeds.
//!
//! Each function performs a single unauthenticated GET and decodes the
//! body. There is no retry or polling; callers decide how often (if ever)
//! to fetch again.

use log::info;
use thiserror::Error;

use crate::geojson::{parse_boundary_feed, parse_earthquake_feed};
use crate::model::{BoundaryLine, Earthquake};

/// USGS "all earthquakes, past day" summary feed.
pub const QUAKES_ALL_DAY_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_day.geojson";

/// PB2002 tectonic plate boundary dataset.
pub const PLATE_BOUNDARIES_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Errors from fetching or decoding a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned HTTP {0}")]
    Status(u16),

    #[error("malformed feed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fetch and decode the earthquake summary feed.
pub async fn fetch_earthquakes(url: &str) -> Result<Vec<Earthquake>, FeedError> {
    let payload = get_text(url).await?;
    let quakes = parse_earthquake_feed(&payload)?;
    info!("earthquake feed: {} events from {url}", quakes.len());
    Ok(quakes)
}

/// Fetch and decode the plate boundary dataset.
pub async fn fetch_plate_boundaries(url: &str) -> Result<Vec<BoundaryLine>, FeedError> {
    let payload = get_text(url).await?;
    let lines = parse_boundary_feed(&payload)?;
    info!("boundary feed: {} polylines from {url}", lines.len());
    Ok(lines)
}

async fn get_text(url: &str) -> Result<String, FeedError> {
    let response = reqwest::get(url).await?;
    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}
