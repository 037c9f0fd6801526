//! Error types for grid construction and settling.
//!
//! Organized by layer: [`GridError`] for the grid model, [`SettleError`]
//! for a settle invocation. A settle call wraps grid errors via `From`.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors from grid construction or coordinate access.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Width or height is zero.
    EmptyGrid,
    /// `width * height` does not fit in `usize`.
    DimensionOverflow {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// The backing buffer does not hold exactly `width * height` cells.
    BufferLength {
        /// `width * height`.
        expected: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
    /// Text could not be parsed into a grid.
    Parse {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one column and one row"),
            Self::DimensionOverflow { width, height } => {
                write!(f, "grid dimensions {width}x{height} overflow usize")
            }
            Self::BufferLength { expected, actual } => {
                write!(f, "buffer holds {actual} cells, expected {expected}")
            }
            Self::CoordOutOfBounds {
                coord,
                width,
                height,
            } => {
                write!(f, "coordinate {coord} out of bounds [0, {width}) x [0, {height})")
            }
            Self::Parse { reason } => write!(f, "cannot parse grid: {reason}"),
        }
    }
}

impl Error for GridError {}

/// Errors surfaced synchronously by a settle call.
///
/// There is no partial success: on error the grid is either untouched
/// (argument and cell validation run before any mutation) or, for
/// [`AllocationFailed`](Self::AllocationFailed), holds a valid but
/// unsettled arrangement of the same tokens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SettleError {
    /// A caller-supplied argument is out of range.
    InvalidArgument {
        /// What was wrong with it.
        reason: String,
    },
    /// A cell holds a value outside `{0, 1, >=2}` under
    /// [`CellPolicy::Reject`](crate::CellPolicy::Reject).
    InvalidCell {
        /// First offending cell in priority order.
        coord: Coord,
        /// Its value.
        value: i32,
    },
    /// An internal worklist or queue could not grow.
    AllocationFailed {
        /// Number of additional entries that were requested.
        requested: usize,
    },
    /// The grid itself is malformed.
    Grid(GridError),
}

impl fmt::Display for SettleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::InvalidCell { coord, value } => {
                write!(f, "cell {coord} holds undefined value {value}")
            }
            Self::AllocationFailed { requested } => {
                write!(f, "failed to grow internal worklist by {requested} entries")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for SettleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SettleError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_chains_as_source() {
        let e = SettleError::from(GridError::EmptyGrid);
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "grid: grid must have at least one column and one row");
    }

    #[test]
    fn invalid_cell_names_coordinate() {
        let e = SettleError::InvalidCell {
            coord: Coord::new(2, 5),
            value: -3,
        };
        assert_eq!(e.to_string(), "cell (2, 5) holds undefined value -3");
        assert!(e.source().is_none());
    }
}
