//! Point-in-polygon containment over rings with holes.

use crate::bbox::{bbox_contains_point, bbox_is_transmeridian};
use crate::types::{BBox, GeoLoop, GeoPolygon, LatLng};
use std::f64::consts::PI;

/// Shifts negative longitudes east by a full turn so a loop that crosses the
/// antimeridian becomes contiguous for comparison.
#[inline]
fn normalize_lng_east(lng: f64, transmeridian: bool) -> f64 {
  if transmeridian && lng < 0.0 {
    lng + 2.0 * PI
  } else {
    lng
  }
}

/// Ray-casting containment test of a point against one ring.
///
/// The ring is implicitly closed. A horizontal ray is cast eastward and edge
/// crossings are counted; winding order does not matter. Points whose
/// latitude or longitude coincides with a vertex are nudged (north,
/// respectively west) so edges are never counted twice. Degenerate rings
/// (fewer than 3 vertices, or zero area) contain nothing.
#[must_use]
pub(crate) fn point_inside_loop(geoloop: &GeoLoop, bbox: &BBox, coord: &LatLng) -> bool {
  if geoloop.is_degenerate() {
    return false;
  }
  // Fail fast if we're outside the bounding box.
  if !bbox_contains_point(bbox, coord) {
    return false;
  }

  let transmeridian = bbox_is_transmeridian(bbox);
  let mut contains = false;

  let mut lat = coord.lat;
  let mut lng = normalize_lng_east(coord.lng, transmeridian);

  let n = geoloop.verts.len();
  for i in 0..n {
    let p1 = geoloop.verts[i];
    let p2 = geoloop.verts[(i + 1) % n];

    // Bias the point north off a vertex latitude so horizontal edges are
    // handled unambiguously.
    if lat == p1.lat || lat == p2.lat {
      lat += f64::EPSILON * 10.0;
    }

    let p1_lng = normalize_lng_east(p1.lng, transmeridian);
    let p2_lng = normalize_lng_east(p2.lng, transmeridian);

    // Rays are cast eastward; for points exactly on a vertex longitude,
    // bias westerly.
    if (p1_lng - lng).abs() < f64::EPSILON || (p2_lng - lng).abs() < f64::EPSILON {
      lng -= f64::EPSILON * 10.0;
    }

    // Order the segment endpoints south to north.
    let (a_lat, a_lng, b_lat, b_lng) = if p1.lat > p2.lat {
      (p2.lat, p2_lng, p1.lat, p1_lng)
    } else {
      (p1.lat, p1_lng, p2.lat, p2_lng)
    };

    // The ray at this latitude only intersects edges it passes through
    // vertically; the half-open bound keeps shared vertices single-counted.
    if lat < a_lat || lat >= b_lat {
      continue;
    }
    if (b_lat - a_lat).abs() < f64::EPSILON {
      continue; // horizontal edge, no vertical extent
    }

    let intersect_lng = (b_lng - a_lng) * (lat - a_lat) / (b_lat - a_lat) + a_lng;
    if intersect_lng > lng {
      contains = !contains;
    }
  }
  contains
}

/// Whether a point is covered by a polygon: inside the outer ring and outside
/// every hole.
///
/// `bboxes` must hold the outer ring's box at index 0 and one box per hole
/// after it, as produced by [`crate::bbox::bboxes_from_polygon`].
#[must_use]
pub(crate) fn point_inside_polygon(polygon: &GeoPolygon, bboxes: &[BBox], coord: &LatLng) -> bool {
  if !point_inside_loop(&polygon.geoloop, &bboxes[0], coord) {
    return false;
  }
  for (hole, bbox) in polygon.holes.iter().zip(&bboxes[1..]) {
    if point_inside_loop(hole, bbox, coord) {
      return false;
    }
  }
  true
}
