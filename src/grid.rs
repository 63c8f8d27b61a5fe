//! The grid collaborator interface.
//!
//! The fill never interprets cell identifiers or cell geometry itself; it
//! only needs a way to resolve a point to a cell, walk from a cell to its
//! neighbors, and read a cell's representative point back. Anything that can
//! do those three things (plus validate a resolution and report an average
//! cell area for buffer sizing) can drive the traversal.

use crate::error::Result;
use crate::types::{CellId, LatLng};

/// Maximum number of edge-sharing neighbors a cell can have. Hexagonal cells
/// have six; distorted cells (pentagons in icosahedral grids) have fewer.
pub const MAX_CELL_NEIGHBORS: usize = 6;

/// The neighbors of one cell: a fixed-width array plus a count.
///
/// Entries past `count` are not significant. The enumeration order is fixed
/// per grid implementation, which keeps the fill's traversal deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellNeighbors {
  /// Number of valid neighbors.
  pub count: usize,
  /// Neighbor identifiers; only the first `count` are meaningful.
  pub cells: [CellId; MAX_CELL_NEIGHBORS],
}

impl CellNeighbors {
  /// Appends a neighbor. Caller must not exceed [`MAX_CELL_NEIGHBORS`].
  pub(crate) fn push(&mut self, cell: CellId) {
    self.cells[self.count] = cell;
    self.count += 1;
  }

  /// The valid neighbors as a slice.
  #[must_use]
  pub fn as_slice(&self) -> &[CellId] {
    &self.cells[..self.count]
  }
}

/// A hierarchical cell grid the polygon fill can traverse.
///
/// Resolutions run from 0 (coarsest) to [`Grid::max_resolution`] (finest).
/// Implementations must be deterministic: the same point always resolves to
/// the same cell, and a cell's neighbors always come back in the same order.
/// `center_of` and `neighbors_of` are only ever called with identifiers the
/// grid itself produced during the same fill.
pub trait Grid {
  /// Finest resolution this grid supports.
  fn max_resolution(&self) -> i32;

  /// Resolves a geographic point to its enclosing cell at `res`.
  ///
  /// # Errors
  /// `InvalidResolution` if `res` is outside `0..=max_resolution()`.
  fn point_to_cell(&self, point: &LatLng, res: i32) -> Result<CellId>;

  /// Representative point (center) of a cell.
  ///
  /// # Errors
  /// `InvalidCell` if the identifier does not name a cell of this grid.
  fn center_of(&self, cell: CellId) -> Result<LatLng>;

  /// Edge-sharing neighbors of a cell, at the cell's own resolution.
  ///
  /// # Errors
  /// `InvalidCell` if the identifier does not name a cell of this grid.
  fn neighbors_of(&self, cell: CellId) -> Result<CellNeighbors>;

  /// Approximate average cell area at `res`, in square radians. Used only
  /// for buffer sizing, never for containment.
  ///
  /// # Errors
  /// `InvalidResolution` if `res` is outside `0..=max_resolution()`.
  fn average_cell_area_rads2(&self, res: i32) -> Result<f64>;

  /// Whether `res` is within this grid's supported range.
  fn is_valid_resolution(&self, res: i32) -> bool {
    (0..=self.max_resolution()).contains(&res)
  }
}
