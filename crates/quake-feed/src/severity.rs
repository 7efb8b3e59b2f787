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

//! Depth and magnitude classification for earthquake markers.
//!
//! A single ordered band table drives both the marker fill color and the
//! legend, so the two can never drift apart. Band boundaries are strict
//! greater-than: a depth exactly on a threshold falls into the shallower
//! band.

/// An RGB color, independent of any UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// One row of the depth classification scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthBand {
    /// Lower bound of the band in kilometres (exclusive for all but the
    /// shallowest band, which also absorbs anything below it).
    pub floor_km: f64,
    /// Marker fill color for quakes in this band.
    pub color: Rgb,
    /// Legend label, e.g. "10–30 km".
    pub label: &'static str,
}

/// Depth scale from shallow (green) to deep (red).
///
/// Lower bounds mirror the USGS convention of allowing slightly negative
/// depths for events above the reference ellipsoid.
pub const DEPTH_BANDS: [DepthBand; 6] = [
    DepthBand {
        floor_km: -10.0,
        color: Rgb::new(0, 128, 0),
        label: "-10–10 km",
    },
    DepthBand {
        floor_km: 10.0,
        color: Rgb::new(212, 255, 23),
        label: "10–30 km",
    },
    DepthBand {
        floor_km: 30.0,
        color: Rgb::new(255, 189, 23),
        label: "30–50 km",
    },
    DepthBand {
        floor_km: 50.0,
        color: Rgb::new(255, 131, 23),
        label: "50–70 km",
    },
    DepthBand {
        floor_km: 70.0,
        color: Rgb::new(255, 85, 23),
        label: "70–90 km",
    },
    DepthBand {
        floor_km: 90.0,
        color: Rgb::new(255, 0, 0),
        label: "90+ km",
    },
];

/// Classify a depth into its band.
///
/// Total over all inputs: depths at or below the shallowest floor map to
/// the shallowest band.
#[must_use]
pub fn depth_band(depth_km: f64) -> &'static DepthBand {
    DEPTH_BANDS
        .iter()
        .rev()
        .find(|band| depth_km > band.floor_km)
        .unwrap_or(&DEPTH_BANDS[0])
}

/// Marker radius in pixels for a given magnitude.
///
/// Zero (or negative, which the live feed does produce) magnitudes get a
/// fixed 1px radius so the event remains visible; everything else scales
/// linearly with no upper cap.
#[must_use]
pub fn marker_radius(magnitude: f64) -> f32 {
    if magnitude <= 0.0 {
        1.0
    } else {
        (magnitude * 5.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgb = Rgb::new(0, 128, 0);
    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_boundaries_are_strict() {
        // A depth exactly on a threshold falls into the shallower band.
        assert_eq!(depth_band(10.0).color, GREEN);
        assert_eq!(depth_band(30.0).color, Rgb::new(212, 255, 23));
        assert_eq!(depth_band(50.0).color, Rgb::new(255, 189, 23));
        assert_eq!(depth_band(70.0).color, Rgb::new(255, 131, 23));
        assert_eq!(depth_band(90.0).color, Rgb::new(255, 85, 23));
        assert_eq!(depth_band(90.0001).color, RED);
    }

    #[test]
    fn test_classification_is_total() {
        for depth in [-500.0, -10.0, 0.0, 9.999, 89.9, 700.0, f64::MAX] {
            // Every input lands in one of the six bands.
            let band = depth_band(depth);
            assert!(DEPTH_BANDS.iter().any(|b| b.label == band.label));
        }
        assert_eq!(depth_band(-500.0).color, GREEN);
        assert_eq!(depth_band(f64::MAX).color, RED);
    }

    #[test]
    fn test_sample_feed_depths() {
        let depths = [5.0, 25.0, 45.0, 65.0, 85.0, 95.0];
        let expected = [
            GREEN,
            Rgb::new(212, 255, 23),
            Rgb::new(255, 189, 23),
            Rgb::new(255, 131, 23),
            Rgb::new(255, 85, 23),
            RED,
        ];
        for (depth, color) in depths.iter().zip(expected) {
            assert_eq!(depth_band(*depth).color, color);
        }
    }

    #[test]
    fn test_radius_scaling() {
        assert!((marker_radius(0.0) - 1.0).abs() < f32::EPSILON);
        assert!((marker_radius(-0.4) - 1.0).abs() < f32::EPSILON);
        assert!((marker_radius(2.0) - 10.0).abs() < f32::EPSILON);
        assert!((marker_radius(7.8) - 39.0).abs() < 0.001);

        // Monotonically non-decreasing above zero, with no cap.
        let mut last = 0.0_f32;
        for i in 1..100 {
            let radius = marker_radius(f64::from(i) * 0.1);
            assert!(radius >= last);
            last = radius;
        }
    }

    #[test]
    fn test_legend_rows_match_thresholds() {
        assert_eq!(DEPTH_BANDS.len(), 6);
        let floors: Vec<f64> = DEPTH_BANDS.iter().map(|b| b.floor_km).collect();
        assert_eq!(floors, vec![-10.0, 10.0, 30.0, 50.0, 70.0, 90.0]);
        assert_eq!(DEPTH_BANDS[1].label, "10–30 km");
        assert_eq!(DEPTH_BANDS[5].label, "90+ km");
    }
}
