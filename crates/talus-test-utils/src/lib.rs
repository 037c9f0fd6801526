//! Test utilities for Talus development.
//!
//! - [`fixtures`]: hand-traced boards with their expected fixpoints.
//! - [`boards`]: seeded random boards for differential and bench runs.
//! - [`strategies`]: proptest strategies over grids.
//! - [`compliance`]: assertions every [`Settler`](talus_settle::Settler)
//!   must pass.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod boards;
pub mod compliance;
pub mod fixtures;
pub mod strategies;

pub use boards::{random_board, BoardSpec};
pub use fixtures::{all_fixtures, Fixture};

use talus_grid::Grid;

/// Parse a board drawn top row first.
///
/// # Panics
///
/// Panics on malformed text; fixtures are written by hand.
pub fn board(text: &str) -> Grid {
    text.parse()
        .unwrap_or_else(|e| panic!("bad board literal: {e}\n{text}"))
}
