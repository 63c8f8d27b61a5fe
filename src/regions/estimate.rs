//! Upper-bound sizing for the polygon fill.

use crate::bbox::{bbox_from_geoloop, bbox_height_rads, bbox_is_transmeridian, bbox_width_rads};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::types::GeoPolygon;
use tracing::debug;

/// Worst-case shrink of a cell relative to the average: the most distorted
/// cells of an icosahedral grid (pentagons and their neighbors) run about 20%
/// under the mean area, so size for them.
const DISTORTION_FACTOR: f64 = 0.8;

/// Flat addend covering the maximally-distorted cells themselves.
const DISTORTED_CELL_COUNT: u64 = 12;

/// Computes a conservative upper bound on the number of cells
/// [`polygon_to_cells`](crate::polygon_to_cells) can produce for this
/// polygon and resolution.
///
/// The bound is the outer ring's bounding-box area divided by the grid's
/// distortion-adjusted average cell area, plus a margin for cells straddling
/// the box boundary. Every cell the fill emits has its center inside the
/// outer ring, hence inside the box, so the box's worst-case cell population
/// bounds the fill. A box crossing the antimeridian is budgeted once per
/// side of the seam: a grid without longitudinal wraparound realizes such a
/// box as two separate strips of cells. The estimate intentionally
/// overshoots; it never underestimates.
///
/// A degenerate outer ring (zero-extent bounding box) returns 1: a
/// zero-area ring might still capture the single cell whose center coincides
/// with it.
///
/// Pure function of its inputs; holes are ignored since excluding them only
/// shrinks the result.
///
/// # Errors
/// `InvalidResolution` if `res` is outside the grid's supported range.
pub fn max_polygon_to_cells_size<G: Grid>(grid: &G, polygon: &GeoPolygon, res: i32) -> Result<u64> {
  if !grid.is_valid_resolution(res) {
    return Err(Error::InvalidResolution { res });
  }

  let bbox = bbox_from_geoloop(&polygon.geoloop);
  let width = bbox_width_rads(&bbox);
  let height = bbox_height_rads(&bbox);
  if polygon.geoloop.verts.is_empty() || width <= 0.0 || height <= 0.0 {
    return Ok(1);
  }

  let avg_cell_area = grid.average_cell_area_rads2(res)?;
  let base = (width * height / (avg_cell_area * DISTORTION_FACTOR)).ceil();

  // Cells straddling the box boundary have their centers inside the box but
  // are not accounted for by the area quotient alone. One strip of cells per
  // unit of perimeter, measured in cell diameters.
  let perimeter = 2.0 * (width + height);
  let boundary_margin = (2.0 * perimeter / avg_cell_area.sqrt()).ceil();

  // A seam-straddling box fills as two disjoint strips on a non-wrapping
  // grid, each up to a full box's worth of cells.
  let strips: u64 = if bbox_is_transmeridian(&bbox) { 2 } else { 1 };

  let estimate = (base + boundary_margin) as u64 * strips + DISTORTED_CELL_COUNT;
  debug!(res, estimate, "sized polygon fill bound");
  Ok(estimate.max(1))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hexgrid::PlanarHexGrid;
  use crate::types::{GeoLoop, GeoPolygon, LatLng};

  fn square_polygon(size: f64) -> GeoPolygon {
    GeoPolygon::without_holes(GeoLoop::new(vec![
      LatLng::new(0.0, 0.0),
      LatLng::new(0.0, size),
      LatLng::new(size, size),
      LatLng::new(size, 0.0),
    ]))
  }

  #[test]
  fn test_estimate_scales_with_resolution() {
    let grid = PlanarHexGrid::new();
    let polygon = square_polygon(0.05);
    let coarse = max_polygon_to_cells_size(&grid, &polygon, 3).unwrap();
    let fine = max_polygon_to_cells_size(&grid, &polygon, 8).unwrap();
    assert!(fine > coarse, "finer resolution means more, smaller cells");
  }

  #[test]
  fn test_estimate_dominates_area_quotient() {
    let grid = PlanarHexGrid::new();
    let size = 0.05;
    let polygon = square_polygon(size);
    let res = 7;
    let avg = grid.average_cell_area_rads2(res).unwrap();
    let quotient = (size * size / avg).ceil() as u64;
    let estimate = max_polygon_to_cells_size(&grid, &polygon, res).unwrap();
    assert!(estimate > quotient, "estimate {estimate} must exceed the raw quotient {quotient}");
  }

  #[test]
  fn test_estimate_degenerate_ring() {
    let grid = PlanarHexGrid::new();
    let polygon = GeoPolygon::without_holes(GeoLoop::new(vec![LatLng::new(0.2, 0.2); 4]));
    assert_eq!(max_polygon_to_cells_size(&grid, &polygon, 5).unwrap(), 1);

    let empty = GeoPolygon::default();
    assert_eq!(max_polygon_to_cells_size(&grid, &empty, 5).unwrap(), 1);
  }

  #[test]
  fn test_estimate_invalid_resolution() {
    let grid = PlanarHexGrid::new();
    let polygon = square_polygon(0.05);
    assert!(matches!(
      max_polygon_to_cells_size(&grid, &polygon, -1),
      Err(Error::InvalidResolution { res: -1 })
    ));
    assert!(max_polygon_to_cells_size(&grid, &polygon, 99).is_err());
  }

  #[test]
  fn test_estimate_budgets_both_seam_sides() {
    let grid = PlanarHexGrid::new();
    let pi = std::f64::consts::PI;
    let seam = GeoPolygon::without_holes(GeoLoop::new(vec![
      LatLng::new(-0.01, pi - 0.02),
      LatLng::new(-0.01, -pi + 0.02),
      LatLng::new(0.01, -pi + 0.02),
      LatLng::new(0.01, pi - 0.02),
    ]));
    // Same extents away from the seam.
    let plain = GeoPolygon::without_holes(GeoLoop::new(vec![
      LatLng::new(-0.01, -0.02),
      LatLng::new(-0.01, 0.02),
      LatLng::new(0.01, 0.02),
      LatLng::new(0.01, -0.02),
    ]));
    let res = 7;
    let seam_bound = max_polygon_to_cells_size(&grid, &seam, res).unwrap();
    let plain_bound = max_polygon_to_cells_size(&grid, &plain, res).unwrap();
    assert!(
      seam_bound >= 2 * (plain_bound - DISTORTED_CELL_COUNT),
      "seam bound {seam_bound} must cover both planar strips (plain bound {plain_bound})"
    );
  }

  #[test]
  fn test_estimate_ignores_holes() {
    let grid = PlanarHexGrid::new();
    let without = square_polygon(0.05);
    let mut with = without.clone();
    with.holes.push(GeoLoop::new(vec![
      LatLng::new(0.01, 0.01),
      LatLng::new(0.01, 0.04),
      LatLng::new(0.04, 0.04),
      LatLng::new(0.04, 0.01),
    ]));
    assert_eq!(
      max_polygon_to_cells_size(&grid, &without, 6).unwrap(),
      max_polygon_to_cells_size(&grid, &with, 6).unwrap(),
      "holes only shrink the fill, the bound stays"
    );
  }
}
