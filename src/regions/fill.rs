//! Containment-driven frontier fill.

use crate::bbox::{bbox_center, bboxes_from_polygon};
use crate::error::{Error, Result};
use crate::grid::Grid;
use crate::polygon::point_inside_polygon;
use crate::types::{BBox, CellId, GeoPolygon, LatLng};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use tracing::debug;

/// Enumerates every cell at `res` whose center lies inside the polygon's
/// outer ring and outside all of its holes, writing identifiers into `out`
/// in discovery order and returning the count written.
///
/// The caller sizes `out` with
/// [`max_polygon_to_cells_size`](crate::max_polygon_to_cells_size); the fill
/// never writes past `out.len()` and reports [`Error::BufferTooSmall`] if
/// discovery would overflow it, rather than truncating silently. Entries past
/// the returned count are left untouched.
///
/// The traversal seeds from interior probe cells (the cells of the ring's
/// vertices, centroid, and bounding-box center, plus each probe's immediate
/// neighbors) and expands a breadth-first frontier over grid adjacency, with
/// an explicit visited set so every candidate is tested and emitted at most
/// once. Output order is deterministic for fixed inputs: seeds are sorted
/// and the grid's neighbor enumeration order is fixed. A degenerate outer
/// ring with no resolvable interior probe yields `Ok(0)`.
///
/// All working state is local to the call; nothing persists between
/// invocations.
///
/// # Errors
/// `InvalidResolution` for an out-of-range resolution, `BufferTooSmall` if
/// the cell set outgrows `out`, `InvalidCell` if the grid rejects one of its
/// own identifiers.
pub fn polygon_to_cells<G: Grid>(grid: &G, polygon: &GeoPolygon, res: i32, out: &mut [CellId]) -> Result<usize> {
  if !grid.is_valid_resolution(res) {
    return Err(Error::InvalidResolution { res });
  }
  if polygon.geoloop.verts.is_empty() {
    return Ok(0);
  }

  debug!(
    res,
    verts = polygon.geoloop.verts.len(),
    holes = polygon.holes.len(),
    "starting polygon fill"
  );

  let bboxes = bboxes_from_polygon(polygon);

  // `visited` holds every cell whose center has been containment-tested;
  // only cells that passed enter the frontier.
  let mut visited: FxHashSet<CellId> = FxHashSet::default();
  let mut frontier: VecDeque<CellId> = VecDeque::new();

  let mut seeds = seed_candidates(grid, polygon, &bboxes[0], res)?;
  seeds.sort_unstable();
  seeds.dedup();
  for cell in seeds {
    test_candidate(grid, polygon, &bboxes, cell, &mut visited, &mut frontier)?;
  }

  let mut count = 0usize;
  while let Some(cell) = frontier.pop_front() {
    if count >= out.len() {
      return Err(Error::BufferTooSmall { capacity: out.len() });
    }
    out[count] = cell;
    count += 1;

    for &neighbor in grid.neighbors_of(cell)?.as_slice() {
      test_candidate(grid, polygon, &bboxes, neighbor, &mut visited, &mut frontier)?;
    }
  }

  debug!(res, cells = count, tested = visited.len(), "polygon fill complete");
  Ok(count)
}

/// Tests a candidate cell's center for containment, at most once per cell,
/// and enqueues it if it passed.
fn test_candidate<G: Grid>(
  grid: &G,
  polygon: &GeoPolygon,
  bboxes: &[BBox],
  cell: CellId,
  visited: &mut FxHashSet<CellId>,
  frontier: &mut VecDeque<CellId>,
) -> Result<()> {
  if !visited.insert(cell) {
    return Ok(());
  }
  let center = grid.center_of(cell)?;
  if point_inside_polygon(polygon, bboxes, &center) {
    frontier.push_back(cell);
  }
  Ok(())
}

/// Collects seed candidate cells from interior probe points.
///
/// A single centroid probe can land outside a non-convex ring, and extreme
/// shapes can split the interior into several grid-connected components, so
/// probes are taken at every outer-ring vertex as well as the centroid and
/// the bounding-box center, and each probe contributes its cell plus that
/// cell's immediate neighbors. Containment filtering happens later, in the
/// shared candidate test.
fn seed_candidates<G: Grid>(grid: &G, polygon: &GeoPolygon, outer_bbox: &BBox, res: i32) -> Result<Vec<CellId>> {
  let verts = &polygon.geoloop.verts;

  let mut probes: Vec<LatLng> = verts.clone();
  let centroid = LatLng {
    lat: verts.iter().map(|p| p.lat).sum::<f64>() / verts.len() as f64,
    lng: verts.iter().map(|p| p.lng).sum::<f64>() / verts.len() as f64,
  };
  probes.push(centroid);
  probes.push(bbox_center(outer_bbox));

  let mut candidates = Vec::with_capacity(probes.len() * 7);
  for probe in &probes {
    let cell = grid.point_to_cell(probe, res)?;
    candidates.push(cell);
    candidates.extend_from_slice(grid.neighbors_of(cell)?.as_slice());
  }
  Ok(candidates)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hexgrid::PlanarHexGrid;
  use crate::types::GeoLoop;

  fn square_polygon(lat0: f64, lng0: f64, size: f64) -> GeoPolygon {
    GeoPolygon::without_holes(GeoLoop::new(vec![
      LatLng::new(lat0, lng0),
      LatLng::new(lat0, lng0 + size),
      LatLng::new(lat0 + size, lng0 + size),
      LatLng::new(lat0 + size, lng0),
    ]))
  }

  #[test]
  fn test_fill_simple_square() {
    let grid = PlanarHexGrid::new();
    let polygon = square_polygon(0.0, 0.0, 0.05);
    let res = 7;
    let mut out = vec![CellId::default(); 4096];
    let count = polygon_to_cells(&grid, &polygon, res, &mut out).unwrap();
    assert!(count > 0, "fill of a real square is non-empty");

    let bboxes = bboxes_from_polygon(&polygon);
    for &cell in &out[..count] {
      let center = grid.center_of(cell).unwrap();
      assert!(
        point_inside_polygon(&polygon, &bboxes, &center),
        "emitted cell {cell:?} center {center:?} is not covered"
      );
    }
  }

  #[test]
  fn test_fill_no_duplicates() {
    let grid = PlanarHexGrid::new();
    let polygon = square_polygon(0.3, -0.2, 0.04);
    let mut out = vec![CellId::default(); 4096];
    let count = polygon_to_cells(&grid, &polygon, 7, &mut out).unwrap();
    let mut cells: Vec<CellId> = out[..count].to_vec();
    cells.sort_unstable();
    cells.dedup();
    assert_eq!(cells.len(), count, "no cell is emitted twice");
  }

  #[test]
  fn test_fill_buffer_too_small() {
    let grid = PlanarHexGrid::new();
    let polygon = square_polygon(0.0, 0.0, 0.05);
    let mut out = vec![CellId::default(); 2];
    assert_eq!(
      polygon_to_cells(&grid, &polygon, 7, &mut out),
      Err(Error::BufferTooSmall { capacity: 2 })
    );
  }

  #[test]
  fn test_fill_empty_ring() {
    let grid = PlanarHexGrid::new();
    let polygon = GeoPolygon::default();
    let mut out = vec![CellId::default(); 8];
    assert_eq!(polygon_to_cells(&grid, &polygon, 5, &mut out).unwrap(), 0);
  }

  #[test]
  fn test_fill_degenerate_ring() {
    let grid = PlanarHexGrid::new();
    let polygon = GeoPolygon::without_holes(GeoLoop::new(vec![LatLng::new(0.1, 0.1); 4]));
    let mut out = vec![CellId::default(); 8];
    assert_eq!(
      polygon_to_cells(&grid, &polygon, 5, &mut out).unwrap(),
      0,
      "zero-area ring yields zero cells with no error"
    );
  }

  #[test]
  fn test_fill_invalid_resolution() {
    let grid = PlanarHexGrid::new();
    let polygon = square_polygon(0.0, 0.0, 0.05);
    let mut out = vec![CellId::default(); 8];
    assert!(matches!(
      polygon_to_cells(&grid, &polygon, 16, &mut out),
      Err(Error::InvalidResolution { res: 16 })
    ));
  }

  #[test]
  fn test_fill_concave_ring() {
    // A "C" shape whose vertex centroid falls in the notch, outside the
    // ring. The vertex probes must still seed the fill.
    let grid = PlanarHexGrid::new();
    let polygon = GeoPolygon::without_holes(GeoLoop::new(vec![
      LatLng::new(0.00, 0.00),
      LatLng::new(0.06, 0.00),
      LatLng::new(0.06, 0.05),
      LatLng::new(0.05, 0.05),
      LatLng::new(0.05, 0.01),
      LatLng::new(0.01, 0.01),
      LatLng::new(0.01, 0.05),
      LatLng::new(0.00, 0.05),
    ]));
    let mut out = vec![CellId::default(); 8192];
    let count = polygon_to_cells(&grid, &polygon, 8, &mut out).unwrap();
    assert!(count > 0, "concave ring still fills");

    let bboxes = bboxes_from_polygon(&polygon);
    for &cell in &out[..count] {
      let center = grid.center_of(cell).unwrap();
      assert!(point_inside_polygon(&polygon, &bboxes, &center));
    }
  }
}
