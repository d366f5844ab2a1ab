//! Great-circle distance and compass bearing between two coordinates.
//!
//! Distances use the haversine formula on a spherical Earth; bearings use the
//! forward-azimuth formula and are bucketed into eight 45° octants.

// Octant bucketing and km rounding cast finite, range-checked floats
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use serde::Serialize;
use std::fmt;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A point on the globe in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    /// Latitude, −90..=90.
    pub lat: f64,
    /// Longitude, −180..=180.
    pub lng: f64,
}

impl GeoPoint {
    /// Create a new point.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Total order used to make distance computation argument-order independent.
    fn precedes(self, other: Self) -> bool {
        self.lat
            .total_cmp(&other.lat)
            .then(self.lng.total_cmp(&other.lng))
            .is_le()
    }
}

/// One of the eight compass octants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// North, centred on 0°.
    N,
    /// North-east, centred on 45°.
    NE,
    /// East, centred on 90°.
    E,
    /// South-east, centred on 135°.
    SE,
    /// South, centred on 180°.
    S,
    /// South-west, centred on 225°.
    SW,
    /// West, centred on 270°.
    W,
    /// North-west, centred on 315°.
    NW,
}

impl Direction {
    /// All octants in clockwise order starting at north.
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    /// Bucket a bearing in degrees into its octant.
    ///
    /// Any finite angle is accepted; it is normalized into 0..360 first.
    #[must_use]
    pub fn from_bearing(degrees: f64) -> Self {
        let normalized = degrees.rem_euclid(360.0);
        let index = ((normalized + 22.5) / 45.0).floor() as usize % 8;
        Self::ALL[index]
    }

    /// Arrow glyph shown next to a wrong guess.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::N => "⬆️",
            Self::NE => "↗️",
            Self::E => "➡️",
            Self::SE => "↘️",
            Self::S => "⬇️",
            Self::SW => "↙️",
            Self::W => "⬅️",
            Self::NW => "↖️",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Unrounded haversine distance in kilometres.
#[must_use]
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    // Fixed argument order keeps the result bit-identical in both directions.
    let (a, b) = if a.precedes(b) { (a, b) } else { (b, a) };

    let phi1 = a.lat.to_radians();
    let phi2 = b.lat.to_radians();
    let d_phi = (b.lat - a.lat).to_radians();
    let d_lambda = (b.lng - a.lng).to_radians();

    let h = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).max(0.0).sqrt());

    EARTH_RADIUS_KM * c
}

/// Great-circle distance rounded to the nearest whole kilometre.
///
/// Symmetric in its arguments and zero for identical points.
#[must_use]
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> u32 {
    haversine_km(a, b).round() as u32
}

/// Initial compass bearing from `from` towards `to`, in degrees 0..360.
#[must_use]
pub fn bearing_degrees(from: GeoPoint, to: GeoPoint) -> f64 {
    let phi1 = from.lat.to_radians();
    let phi2 = to.lat.to_radians();
    let d_lambda = (to.lng - from.lng).to_radians();

    let y = d_lambda.sin() * phi2.cos();
    let x = phi1.cos() * phi2.sin() - phi1.sin() * phi2.cos() * d_lambda.cos();

    y.atan2(x).to_degrees().rem_euclid(360.0)
}

/// Octant of the bearing from `from` towards `to`.
#[must_use]
pub fn bearing_arrow(from: GeoPoint, to: GeoPoint) -> Direction {
    Direction::from_bearing(bearing_degrees(from, to))
}
