//! Core geometric data structures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Opaque identifier for one cell of the grid at some resolution.
///
/// The fill treats this as a 64-bit token: equality-comparable, hashable and
/// totally ordered for deduplication, never otherwise interpreted. Only the
/// [`Grid`](crate::Grid) implementation that minted it knows its layout.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellId(pub u64);

/// Latitude/longitude coordinates in radians.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LatLng {
  /// Latitude in radians.
  pub lat: f64,
  /// Longitude in radians.
  pub lng: f64,
}

impl LatLng {
  /// Constructs a coordinate from a latitude and longitude in radians.
  pub fn new(lat: f64, lng: f64) -> Self {
    Self { lat, lng }
  }
}

/// A single closed ring of geographic coordinates.
///
/// The ring is implicitly closed: the last vertex connects back to the first.
/// Fewer than three vertices makes the ring degenerate (zero area); that is a
/// defined edge case, not an error.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLoop {
  /// Vertices forming the ring, in radians.
  pub verts: Vec<LatLng>,
}

impl GeoLoop {
  /// Constructs a ring from its vertices.
  pub fn new(verts: Vec<LatLng>) -> Self {
    Self { verts }
  }

  /// Whether the ring has too few vertices to enclose any area.
  pub fn is_degenerate(&self) -> bool {
    self.verts.len() < 3
  }
}

/// A polygon with one outer ring and zero or more hole rings.
///
/// Holes are assumed to nest inside the outer ring; the containment test
/// stays deterministic and panic-free if they do not, but only well-formed
/// input gets a correctness guarantee on the covered area.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPolygon {
  /// The outer ring of the polygon.
  pub geoloop: GeoLoop,
  /// Hole rings, excluded from the covered area.
  pub holes: Vec<GeoLoop>,
}

impl GeoPolygon {
  /// Constructs a polygon from an outer ring and its holes.
  pub fn new(geoloop: GeoLoop, holes: Vec<GeoLoop>) -> Self {
    Self { geoloop, holes }
  }

  /// Constructs a polygon with no holes.
  pub fn without_holes(geoloop: GeoLoop) -> Self {
    Self {
      geoloop,
      holes: Vec::new(),
    }
  }
}

/// Geographic bounding box with coordinates in radians.
///
/// `east < west` encodes a box that crosses the antimeridian.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BBox {
  /// North latitude in radians.
  pub north: f64,
  /// South latitude in radians.
  pub south: f64,
  /// East longitude in radians.
  pub east: f64,
  /// West longitude in radians.
  pub west: f64,
}
