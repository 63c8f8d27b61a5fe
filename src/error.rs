//! Error types for hexcover.

use crate::types::CellId;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the estimator, the filler, or a grid collaborator.
///
/// All errors are fatal to the call that produced them; no partial output is
/// valid after an `Err`. None of them is retryable: re-running a
/// deterministic geometric computation with unchanged inputs cannot change
/// the outcome. `BufferTooSmall` in particular signals a broken allocation
/// contract on the caller's side (the estimator's bound was not honored), not
/// a transient condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Resolution outside the grid's supported range.
  #[error("resolution {res} is outside the grid's supported range")]
  InvalidResolution {
    /// The rejected resolution.
    res: i32,
  },

  /// Discovery would exceed the caller-provided output capacity.
  #[error("output buffer of capacity {capacity} is too small for the fill")]
  BufferTooSmall {
    /// Capacity of the buffer the caller provided.
    capacity: usize,
  },

  /// A grid implementation rejected a cell identifier.
  #[error("cell identifier {0:?} is not valid for this grid")]
  InvalidCell(CellId),
}
