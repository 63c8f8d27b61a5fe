#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)] // Common in geometry code, review carefully
#![allow(clippy::cast_precision_loss)] // Common in geometry code, review carefully
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::similar_names)] // Can be common in math-heavy code

//! `hexcover` converts a geographic polygon (outer ring plus optional holes)
//! into the set of hexagonal grid cells whose centers the polygon covers.
//!
//! The grid itself is an external collaborator: anything that can resolve a
//! point to a cell, enumerate a cell's neighbors, and report a cell's center
//! implements [`Grid`] and can drive the fill. A planar axial-coordinate grid
//! ([`PlanarHexGrid`]) is included so the crate is usable out of the box.
//!
//! All coordinates are latitude/longitude in **radians**. Ring winding order
//! does not matter; the containment test is ray-casting based.
//!
//! The two-call contract: size the output buffer with
//! [`max_polygon_to_cells_size`], then run [`polygon_to_cells`] into it. The
//! bound is conservative and never underestimates. [`polyfill`] wraps the
//! handshake for callers that just want a `Vec`.

pub mod bbox;
pub mod error;
pub mod grid;
pub mod hexgrid;
pub mod latlng;
pub mod polygon;
pub mod regions;
pub mod types;

pub use error::{Error, Result};
pub use grid::{CellNeighbors, Grid, MAX_CELL_NEIGHBORS};
pub use hexgrid::PlanarHexGrid;
pub use latlng::{degs_to_rads, great_circle_distance_km, great_circle_distance_rads, rads_to_degs};
pub use regions::{max_polygon_to_cells_size, polyfill, polygon_to_cells};
pub use types::{BBox, CellId, GeoLoop, GeoPolygon, LatLng};
