//! Talus: a gravity settling kernel for falling-block board games.
//!
//! Given a board snapshot after some cells were cleared, Talus lets every
//! movable token fall (straight down, else down-left, else down-right)
//! until nothing can move. This is the top-level facade crate that
//! re-exports the public API from all Talus sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use talus::prelude::*;
//!
//! // Top row first. `1` is an obstacle; 7 falls one row and rests on
//! // the obstacle and on token 3.
//! let mut grid: Grid = "
//!     7 . .
//!     . . .
//!     1 3 .
//! ".parse().unwrap();
//!
//! let metrics = settle(&mut grid.view_mut(), &SettleConfig::default()).unwrap();
//! assert_eq!(grid.get(Coord::new(0, 1)), Some(7));
//! assert_eq!(metrics.stats.moves, 1);
//!
//! // Already settled: a second call is a no-op.
//! let again = settle(&mut grid.view_mut(), &SettleConfig::default()).unwrap();
//! assert_eq!(again.stats.moves, 0);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `talus-core` | Cell values, coordinates, errors, counters |
//! | [`grid`] | `talus-grid` | The grid model, layouts, neighbourhoods |
//! | [`settlers`] | `talus-settle` | The `Settler` trait and the four algorithms |
//! | [`engine`] | `talus-engine` | Configuration, validation, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types (`talus-core`).
///
/// Cell classification ([`types::Cell`], [`types::CellPolicy`]),
/// coordinates and priorities, [`types::SettleError`].
pub use talus_core as types;

/// The grid model (`talus-grid`).
pub use talus_grid as grid;

/// Settle algorithms (`talus-settle`).
///
/// [`settlers::IncrementalSettler`] is the primary engine;
/// [`settlers::EventDrivenSettler`] the queue-driven alternative.
/// [`settlers::BaselineSettler`] and [`settlers::GreedySettler`] are
/// reference oracles.
pub use talus_settle as settlers;

/// Settle orchestration (`talus-engine`).
pub use talus_engine as engine;

/// Common imports for typical Talus usage.
///
/// ```rust
/// use talus::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use talus_core::{Cell, CellPolicy, Coord, SettleError, SettleStats, EMPTY, OBSTACLE};

    // Grid
    pub use talus_grid::{Grid, GridMut, Layout};

    // Settlers
    pub use talus_settle::{
        BaselineSettler, EventDrivenSettler, GreedySettler, IncrementalSettler, Propagation,
        Settler,
    };

    // Engine
    pub use talus_engine::{settle, settle_slice, SettleConfig, SettleMetrics, Variant};
}
