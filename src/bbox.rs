//! Geographic bounding box functions.

use crate::latlng::{constrain_lng, EPSILON_RAD};
use crate::types::{BBox, GeoLoop, GeoPolygon, LatLng};
use std::f64::consts::PI;

/// Whether the bounding box crosses the antimeridian.
#[inline]
#[must_use]
pub(crate) fn bbox_is_transmeridian(bbox: &BBox) -> bool {
  bbox.east < bbox.west
}

/// Longitudinal extent of the box in radians.
pub(crate) fn bbox_width_rads(bbox: &BBox) -> f64 {
  if bbox_is_transmeridian(bbox) {
    bbox.east - bbox.west + 2.0 * PI
  } else {
    bbox.east - bbox.west
  }
}

/// Latitudinal extent of the box in radians.
pub(crate) fn bbox_height_rads(bbox: &BBox) -> f64 {
  bbox.north - bbox.south
}

/// Center of the bounding box.
#[inline]
pub(crate) fn bbox_center(bbox: &BBox) -> LatLng {
  // If the box crosses the antimeridian, shift east 360 degrees first.
  let east = if bbox_is_transmeridian(bbox) {
    bbox.east + 2.0 * PI
  } else {
    bbox.east
  };
  LatLng {
    lat: (bbox.north + bbox.south) * 0.5,
    lng: constrain_lng((east + bbox.west) * 0.5),
  }
}

/// Whether the bounding box contains a given point.
#[inline]
#[must_use]
pub(crate) fn bbox_contains_point(bbox: &BBox, point: &LatLng) -> bool {
  if point.lat < bbox.south - EPSILON_RAD || point.lat > bbox.north + EPSILON_RAD {
    return false;
  }
  if bbox_is_transmeridian(bbox) {
    point.lng >= bbox.west - EPSILON_RAD || point.lng <= bbox.east + EPSILON_RAD
  } else {
    point.lng >= bbox.west - EPSILON_RAD && point.lng <= bbox.east + EPSILON_RAD
  }
}

/// Computes the bounding box of a ring in a single pass.
///
/// If any edge of the ring spans more than half the globe in longitude, the
/// ring is treated as crossing the antimeridian and the box is built from the
/// smallest positive and largest negative longitudes instead of the plain
/// min/max.
pub(crate) fn bbox_from_geoloop(geoloop: &GeoLoop) -> BBox {
  if geoloop.verts.is_empty() {
    return BBox::default();
  }

  let mut bbox = BBox {
    north: -f64::MAX,
    south: f64::MAX,
    east: -f64::MAX,
    west: f64::MAX,
  };
  let mut crosses_antimeridian = false;

  let n = geoloop.verts.len();
  for (i, p) in geoloop.verts.iter().enumerate() {
    bbox.south = bbox.south.min(p.lat);
    bbox.north = bbox.north.max(p.lat);
    bbox.west = bbox.west.min(p.lng);
    bbox.east = bbox.east.max(p.lng);

    let next = &geoloop.verts[(i + 1) % n];
    if (p.lng - next.lng).abs() > PI {
      crosses_antimeridian = true;
    }
  }

  if crosses_antimeridian {
    // West edge is the smallest positive longitude, east edge the largest
    // negative one. Vertices exactly on lng 0 stay in whichever half they
    // already bound.
    let mut west = f64::MAX;
    let mut east = -f64::MAX;
    let mut has_pos = false;
    let mut has_neg = false;
    for p in &geoloop.verts {
      if p.lng > 0.0 {
        west = west.min(p.lng);
        has_pos = true;
      }
      if p.lng < 0.0 {
        east = east.max(p.lng);
        has_neg = true;
      }
    }
    if has_pos {
      bbox.west = west;
    }
    if has_neg {
      bbox.east = east;
    }
  }

  bbox
}

/// Computes bounding boxes for a polygon: index 0 is the outer ring, indices
/// 1.. are the holes in order.
pub(crate) fn bboxes_from_polygon(polygon: &GeoPolygon) -> Vec<BBox> {
  let mut bboxes = Vec::with_capacity(1 + polygon.holes.len());
  bboxes.push(bbox_from_geoloop(&polygon.geoloop));
  for hole in &polygon.holes {
    bboxes.push(bbox_from_geoloop(hole));
  }
  bboxes
}
