//! A planar axial-coordinate hexagonal grid.
//!
//! [`PlanarHexGrid`] treats (longitude, latitude) radians as a flat plane and
//! tiles it with pointy-top hexagons. Each resolution step halves the cell
//! circumradius, giving sixteen levels from about 0.1 rad (res 0) down to
//! about 3e-6 rad (res 15). It is the built-in [`Grid`] collaborator: small
//! enough to reason about, deterministic, and good for regional polygons.
//!
//! Being planar, the lattice neither wraps at the antimeridian nor corrects
//! for convergence of meridians toward the poles. The fill's multi-seed
//! strategy covers polygons that straddle the seam, but cell shapes near the
//! poles are distorted when projected back onto the sphere.

use crate::error::{Error, Result};
use crate::grid::{CellNeighbors, Grid};
use crate::types::{CellId, LatLng};

/// Circumradius in radians of a resolution 0 cell.
const RES0_CIRCUMRADIUS: f64 = 0.1;

/// Finest supported resolution.
const MAX_RES: i32 = 15;

const SQRT3: f64 = 1.7320508075688772;

// CellId layout: [6 bits res][29 bits q + BIAS][29 bits r + BIAS].
// Geographic coordinates stay far below the 28-bit coordinate magnitude
// even at resolution 15.
const COORD_BITS: u32 = 29;
const COORD_MASK: u64 = (1 << COORD_BITS) - 1;
const COORD_BIAS: i64 = 1 << (COORD_BITS - 1);

// Axial direction vectors, fixed enumeration order for deterministic
// traversal: E, NE, NW, W, SW, SE.
const NEIGHBOR_DIRS: [(i64, i64); 6] = [(1, 0), (1, -1), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// Pointy-top hexagonal lattice over the (lng, lat) radian plane.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarHexGrid;

impl PlanarHexGrid {
  /// Constructs the grid. The lattice is fixed; there is nothing to configure.
  pub fn new() -> Self {
    Self
  }

  /// Cell circumradius in radians at `res`.
  fn circumradius(res: i32) -> f64 {
    RES0_CIRCUMRADIUS / f64::from(1 << res)
  }

  fn pack(res: i32, q: i64, r: i64) -> CellId {
    let qb = (q + COORD_BIAS) as u64;
    let rb = (r + COORD_BIAS) as u64;
    CellId(((res as u64) << (2 * COORD_BITS)) | (qb << COORD_BITS) | rb)
  }

  fn unpack(cell: CellId) -> Result<(i32, i64, i64)> {
    let res = (cell.0 >> (2 * COORD_BITS)) as i32; // 6-bit field, 0..=63
    if res > MAX_RES {
      return Err(Error::InvalidCell(cell));
    }
    let q = ((cell.0 >> COORD_BITS) & COORD_MASK) as i64 - COORD_BIAS;
    let r = (cell.0 & COORD_MASK) as i64 - COORD_BIAS;
    Ok((res, q, r))
  }

  /// Rounds fractional axial coordinates to the nearest hexagon using cube
  /// rounding. See <https://www.redblobgames.com/grids/hexagons/#rounding>.
  fn axial_round(qf: f64, rf: f64) -> (i64, i64) {
    let sf = -qf - rf;
    let mut q = qf.round();
    let mut r = rf.round();
    let s = sf.round();

    let dq = (q - qf).abs();
    let dr = (r - rf).abs();
    let ds = (s - sf).abs();

    if dq > dr && dq > ds {
      q = -r - s;
    } else if dr > ds {
      r = -q - s;
    }
    (q as i64, r as i64)
  }
}

impl Grid for PlanarHexGrid {
  fn max_resolution(&self) -> i32 {
    MAX_RES
  }

  fn point_to_cell(&self, point: &LatLng, res: i32) -> Result<CellId> {
    if !self.is_valid_resolution(res) {
      return Err(Error::InvalidResolution { res });
    }
    let size = Self::circumradius(res);
    // Standard pixel-to-axial transform for pointy-top hexagons, with
    // lng as x and lat as y.
    let qf = (SQRT3 / 3.0 * point.lng - point.lat / 3.0) / size;
    let rf = (2.0 / 3.0 * point.lat) / size;
    let (q, r) = Self::axial_round(qf, rf);
    Ok(Self::pack(res, q, r))
  }

  fn center_of(&self, cell: CellId) -> Result<LatLng> {
    let (res, q, r) = Self::unpack(cell)?;
    let size = Self::circumradius(res);
    Ok(LatLng {
      lat: size * 1.5 * r as f64,
      lng: size * SQRT3 * (q as f64 + r as f64 / 2.0),
    })
  }

  fn neighbors_of(&self, cell: CellId) -> Result<CellNeighbors> {
    let (res, q, r) = Self::unpack(cell)?;
    let mut neighbors = CellNeighbors::default();
    for (dq, dr) in NEIGHBOR_DIRS {
      neighbors.push(Self::pack(res, q + dq, r + dr));
    }
    Ok(neighbors)
  }

  fn average_cell_area_rads2(&self, res: i32) -> Result<f64> {
    if !self.is_valid_resolution(res) {
      return Err(Error::InvalidResolution { res });
    }
    let size = Self::circumradius(res);
    // Area of a regular hexagon with circumradius `size`.
    Ok(1.5 * SQRT3 * size * size)
  }
}
