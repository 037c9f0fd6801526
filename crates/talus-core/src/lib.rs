//! Core types for the Talus grid settling kernel.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: cell
//! classification, coordinates and their processing priority, error
//! types, and per-run counters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod coord;
pub mod error;
pub mod stats;

pub use cell::{is_empty, is_movable, Cell, CellPolicy, EMPTY, MIN_TOKEN, OBSTACLE};
pub use coord::{Coord, Priority};
pub use error::{GridError, SettleError};
pub use stats::SettleStats;
