//! The movement rule shared by every settler.
//!
//! For a movable token at `(col, row)` with `row > 0`:
//!
//! 1. straight down if `(col, row-1)` is empty,
//! 2. else down-left if `col > 0` and `(col-1, row-1)` is empty,
//! 3. else down-right if `col < width-1` and `(col+1, row-1)` is empty,
//! 4. else it cannot move.
//!
//! One evaluation yields at most one step. Tokens in row 0 never move.

use talus_core::{is_empty, Coord, EMPTY};
use talus_grid::{Grid, GridMut, SUPPORT_OFFSETS};

/// Destination of one step for the token at `coord`, or `None` if it is
/// blocked.
///
/// Does not look at `coord` itself, so it can also be used to trace a
/// token's path before the grid is written.
#[inline]
pub fn next_step<B: AsRef<[i32]>>(grid: &Grid<B>, coord: Coord) -> Option<Coord> {
    SUPPORT_OFFSETS
        .iter()
        .filter_map(|&off| grid.neighbour(coord, off))
        .find(|&c| is_empty(grid.at(c)))
}

/// Whether any in-bounds support cell of `coord` is empty.
#[inline]
pub fn has_empty_support<B: AsRef<[i32]>>(grid: &Grid<B>, coord: Coord) -> bool {
    next_step(grid, coord).is_some()
}

/// Move the value at `from` to `to` and clear `from`.
#[inline]
pub fn relocate(grid: &mut GridMut<'_>, from: Coord, to: Coord) {
    let value = grid.at(from);
    grid.put(to, value);
    grid.put(from, EMPTY);
}
