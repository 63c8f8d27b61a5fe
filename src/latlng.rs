//! Spherical coordinate helpers.

use crate::types::LatLng;
use std::f64::consts::PI;

/// Mean Earth radius in kilometers, for great-circle distances.
pub(crate) const EARTH_RADIUS_KM: f64 = 6371.007180918475;

/// Distance threshold below which two coordinates compare as equal,
/// roughly 0.1 millimeters on the Earth's surface.
pub(crate) const EPSILON_RAD: f64 = 1.0e-9 * PI / 180.0;

/// Constrains longitude to the range `[-PI, PI]`.
#[inline]
#[must_use]
pub(crate) fn constrain_lng(mut lng: f64) -> f64 {
  while lng > PI {
    lng -= 2.0 * PI;
  }
  while lng < -PI {
    lng += 2.0 * PI;
  }
  lng
}

/// Whether the components of two coordinates are within `threshold` of each other.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal_threshold(p1: &LatLng, p2: &LatLng, threshold: f64) -> bool {
  (p1.lat - p2.lat).abs() < threshold && (p1.lng - p2.lng).abs() < threshold
}

/// Whether two coordinates are within the standard epsilon of each other.
#[inline]
#[must_use]
pub(crate) fn geo_almost_equal(p1: &LatLng, p2: &LatLng) -> bool {
  geo_almost_equal_threshold(p1, p2, EPSILON_RAD)
}

/// The great circle distance in radians between two spherical coordinates.
///
/// Uses the Haversine formula. For math details, see:
///     <https://en.wikipedia.org/wiki/Haversine_formula>
pub fn great_circle_distance_rads(a: &LatLng, b: &LatLng) -> f64 {
  let sin_lat_half = ((b.lat - a.lat) * 0.5).sin();
  let sin_lng_half = ((b.lng - a.lng) * 0.5).sin();
  let h = sin_lat_half * sin_lat_half + a.lat.cos() * b.lat.cos() * sin_lng_half * sin_lng_half;
  let h_clamped = h.clamp(0.0, 1.0);
  2.0 * h_clamped.sqrt().atan2((1.0 - h_clamped).sqrt())
}

/// The great circle distance in kilometers between two spherical coordinates.
pub fn great_circle_distance_km(a: &LatLng, b: &LatLng) -> f64 {
  great_circle_distance_rads(a, b) * EARTH_RADIUS_KM
}

/// Converts degrees to radians.
pub fn degs_to_rads(degrees: f64) -> f64 {
  degrees * PI / 180.0
}

/// Converts radians to degrees.
pub fn rads_to_degs(radians: f64) -> f64 {
  radians * 180.0 / PI
}
