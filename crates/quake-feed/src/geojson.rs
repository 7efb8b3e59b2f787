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

//! GeoJSON decoding for the two inbound feeds.
//!
//! The USGS earthquake summary feed is a FeatureCollection of point
//! geometries with `mag`/`place`/`time` properties and the depth embedded
//! as the third coordinate. The PB2002 plate boundary dataset is a
//! FeatureCollection of `LineString` features.
//!
//! Decoding a payload fails only when the document as a whole is not the
//! expected shape. Individual features missing a coordinate or geometry
//! are skipped with a warning rather than failing the batch.

use chrono::{DateTime, Utc};
use log::warn;
use serde::Deserialize;

use crate::model::{BoundaryLine, Earthquake};

#[derive(Debug, Deserialize)]
struct FeatureCollection<P> {
    #[serde(default = "Vec::new")]
    features: Vec<Feature<P>>,
}

#[derive(Debug, Deserialize)]
struct Feature<P> {
    #[serde(default)]
    id: Option<String>,
    properties: Option<P>,
    geometry: Option<Geometry>,
}

/// Geometry variants we care about. Coordinates are kept loosely typed
/// because point coordinates may carry two or three components.
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Point {
        coordinates: Vec<f64>,
    },
    LineString {
        coordinates: Vec<Vec<f64>>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Vec<f64>>>,
    },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Default, Deserialize)]
struct QuakeProperties {
    mag: Option<f64>,
    place: Option<String>,
    /// Milliseconds since the Unix epoch.
    time: Option<i64>,
    url: Option<String>,
}

/// Decode the USGS earthquake summary feed.
pub fn parse_earthquake_feed(payload: &str) -> Result<Vec<Earthquake>, serde_json::Error> {
    let doc: FeatureCollection<QuakeProperties> = serde_json::from_str(payload)?;

    let mut quakes = Vec::with_capacity(doc.features.len());
    for (index, feature) in doc.features.into_iter().enumerate() {
        let id = feature
            .id
            .unwrap_or_else(|| format!("event-{index}"));

        let Some(Geometry::Point { coordinates }) = feature.geometry else {
            warn!("earthquake feed: feature {id} has no point geometry, skipping");
            continue;
        };
        let (Some(&longitude), Some(&latitude), Some(&depth_km)) = (
            coordinates.first(),
            coordinates.get(1),
            coordinates.get(2),
        ) else {
            warn!("earthquake feed: feature {id} has incomplete coordinates, skipping");
            continue;
        };

        let properties = feature.properties.unwrap_or_default();
        quakes.push(Earthquake {
            id,
            magnitude: properties.mag,
            place: properties.place,
            time: properties.time.and_then(millis_to_utc),
            longitude,
            latitude,
            depth_km,
            detail_url: properties.url,
        });
    }

    Ok(quakes)
}

/// Decode the PB2002 plate boundary dataset into polylines.
pub fn parse_boundary_feed(payload: &str) -> Result<Vec<BoundaryLine>, serde_json::Error> {
    let doc: FeatureCollection<serde_json::Value> = serde_json::from_str(payload)?;

    let mut lines = Vec::with_capacity(doc.features.len());
    for feature in doc.features {
        match feature.geometry {
            Some(Geometry::LineString { coordinates }) => {
                push_line(&mut lines, coordinates);
            }
            Some(Geometry::MultiLineString { coordinates }) => {
                for part in coordinates {
                    push_line(&mut lines, part);
                }
            }
            _ => {
                warn!("boundary feed: feature without line geometry, skipping");
            }
        }
    }

    Ok(lines)
}

fn push_line(lines: &mut Vec<BoundaryLine>, coordinates: Vec<Vec<f64>>) {
    let points: Vec<(f64, f64)> = coordinates
        .iter()
        .filter_map(|position| match (position.first(), position.get(1)) {
            (Some(&lon), Some(&lat)) => Some((lon, lat)),
            _ => None,
        })
        .collect();

    if points.len() >= 2 {
        lines.push(BoundaryLine { points });
    }
}

fn millis_to_utc(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUAKE_SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "metadata": {"generated": 1700000000000, "title": "USGS All Earthquakes, Past Day"},
        "features": [
            {
                "type": "Feature",
                "id": "nc73999000",
                "properties": {
                    "mag": 2.3,
                    "place": "10 km NW of Parkfield, CA",
                    "time": 1700000000000,
                    "url": "https://earthquake.usgs.gov/earthquakes/eventpage/nc73999000"
                },
                "geometry": {"type": "Point", "coordinates": [-120.5, 35.95, 6.2]}
            },
            {
                "type": "Feature",
                "id": "ak0239000001",
                "properties": {"mag": null, "place": "Central Alaska", "time": 1700000100000},
                "geometry": {"type": "Point", "coordinates": [-150.1, 63.2, 95.4]}
            },
            {
                "type": "Feature",
                "id": "us7000nodepth",
                "properties": {"mag": 4.1, "place": "somewhere", "time": 1700000200000},
                "geometry": {"type": "Point", "coordinates": [12.0, 45.0]}
            }
        ]
    }"#;

    const BOUNDARY_SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"Name": "AF-AN"},
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-0.4, -54.8], [0.6, -54.5], [1.8, -54.2]]
                }
            },
            {
                "type": "Feature",
                "properties": {"Name": "split"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [[[10.0, 20.0], [11.0, 21.0]], [[12.0, 22.0], [13.0, 23.0]]]
                }
            },
            {
                "type": "Feature",
                "properties": {"Name": "odd one"},
                "geometry": {"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]]}
            }
        ]
    }"#;

    #[test]
    fn test_parse_earthquakes() {
        let quakes = parse_earthquake_feed(QUAKE_SAMPLE).unwrap();

        // The feature without a depth coordinate is skipped.
        assert_eq!(quakes.len(), 2);

        let first = &quakes[0];
        assert_eq!(first.id, "nc73999000");
        assert_eq!(first.magnitude, Some(2.3));
        assert_eq!(first.place.as_deref(), Some("10 km NW of Parkfield, CA"));
        assert!((first.longitude - (-120.5)).abs() < 1e-9);
        assert!((first.latitude - 35.95).abs() < 1e-9);
        assert!((first.depth_km - 6.2).abs() < 1e-9);
        assert!(first.detail_url.is_some());
        assert_eq!(first.time.unwrap().timestamp_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_null_magnitude_is_tolerated() {
        let quakes = parse_earthquake_feed(QUAKE_SAMPLE).unwrap();
        let alaska = quakes.iter().find(|q| q.id == "ak0239000001").unwrap();
        assert_eq!(alaska.magnitude, None);
        assert!((alaska.depth_km - 95.4).abs() < 1e-9);
    }

    #[test]
    fn test_parse_boundaries() {
        let lines = parse_boundary_feed(BOUNDARY_SAMPLE).unwrap();

        // One LineString plus two MultiLineString parts; polygon skipped.
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].points.len(), 3);
        assert_eq!(lines[0].points[0], (-0.4, -54.8));
        assert_eq!(lines[1].points, vec![(10.0, 20.0), (11.0, 21.0)]);
        assert_eq!(lines[2].points, vec![(12.0, 22.0), (13.0, 23.0)]);
    }

    #[test]
    fn test_depth_fixture_classification() {
        use crate::severity::{depth_band, marker_radius, Rgb};

        let features: Vec<String> = [5.0, 25.0, 45.0, 65.0, 85.0, 95.0]
            .iter()
            .enumerate()
            .map(|(i, depth)| {
                format!(
                    r#"{{"type":"Feature","id":"q{i}","properties":{{"mag":0.0}},"geometry":{{"type":"Point","coordinates":[0.0,0.0,{depth}]}}}}"#
                )
            })
            .collect();
        let payload = format!(
            r#"{{"type":"FeatureCollection","features":[{}]}}"#,
            features.join(",")
        );

        let quakes = parse_earthquake_feed(&payload).unwrap();
        assert_eq!(quakes.len(), 6);

        let expected = [
            Rgb::new(0, 128, 0),
            Rgb::new(212, 255, 23),
            Rgb::new(255, 189, 23),
            Rgb::new(255, 131, 23),
            Rgb::new(255, 85, 23),
            Rgb::new(255, 0, 0),
        ];
        for (quake, color) in quakes.iter().zip(expected) {
            assert_eq!(depth_band(quake.depth_km).color, color);
            // Zero-magnitude events still get the minimum visible radius.
            let radius = marker_radius(quake.magnitude.unwrap());
            assert!((radius - 1.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn test_empty_collection() {
        let quakes = parse_earthquake_feed(r#"{"type": "FeatureCollection"}"#).unwrap();
        assert!(quakes.is_empty());
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(parse_earthquake_feed("<html>not json</html>").is_err());
        assert!(parse_boundary_feed(r#"{"features": 7}"#).is_err());
    }
}
