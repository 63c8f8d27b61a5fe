//! Polygon-to-cell-set conversion: size estimation and the containment fill.

mod estimate;
mod fill;

pub use estimate::max_polygon_to_cells_size;
pub use fill::polygon_to_cells;

use crate::error::Result;
use crate::grid::Grid;
use crate::types::{CellId, GeoPolygon};

/// Convenience wrapper around the two-call contract: estimates the bound,
/// allocates once, fills, and truncates to the cells actually written.
///
/// # Errors
/// `InvalidResolution` if `res` is outside the grid's supported range.
pub fn polyfill<G: Grid>(grid: &G, polygon: &GeoPolygon, res: i32) -> Result<Vec<CellId>> {
  let max_size = max_polygon_to_cells_size(grid, polygon, res)?;
  let mut out = vec![CellId::default(); max_size as usize];
  let count = polygon_to_cells(grid, polygon, res, &mut out)?;
  out.truncate(count);
  Ok(out)
}
