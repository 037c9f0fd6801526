//! Settler compliance test helpers.
//!
//! These functions verify that a [`Settler`] honours its contract on a
//! given board. Reused by the unit, integration and property tests of
//! every settler and of the engine.

use indexmap::IndexMap;
use talus_core::{is_empty, is_movable, SettleStats};
use talus_grid::Grid;
use talus_settle::Settler;

/// Count of each token value on the board.
pub fn token_census<B: AsRef<[i32]>>(grid: &Grid<B>) -> IndexMap<i32, usize> {
    let mut census = IndexMap::new();
    for (_, v) in grid.cells().filter(|&(_, v)| is_movable(v)) {
        *census.entry(v).or_insert(0) += 1;
    }
    census
}

/// Sum of the rows of every token. Each single-step move lowers it by one.
pub fn potential_energy<B: AsRef<[i32]>>(grid: &Grid<B>) -> u64 {
    grid.movable_coords().map(|c| u64::from(c.row)).sum()
}

/// Assert the multiset of token values is unchanged.
pub fn assert_conserves(before: &Grid, after: &Grid) {
    assert_eq!(
        token_census(before),
        token_census(after),
        "token multiset changed\nbefore:\n{before}\nafter:\n{after}"
    );
}

/// Assert every non-token, non-empty cell kept its value and position.
pub fn assert_obstacles_untouched(before: &Grid, after: &Grid) {
    for (coord, v) in before.cells() {
        if !is_movable(v) && !is_empty(v) {
            assert_eq!(
                after.get(coord),
                Some(v),
                "fixed cell {coord} overwritten\nbefore:\n{before}\nafter:\n{after}"
            );
        }
    }
}

/// Assert no token has an empty in-bounds support cell.
pub fn assert_fixpoint(grid: &Grid) {
    for coord in grid.movable_coords() {
        for s in grid.support_cells(coord) {
            assert!(
                !is_empty(grid.at(s)),
                "token at {coord} can still fall into {s}\n{grid}"
            );
        }
    }
    assert!(grid.is_settled());
}

/// Assert the reported move count matches the drop in potential energy.
pub fn assert_moves_accounted(before: &Grid, after: &Grid, stats: &SettleStats) {
    assert_eq!(
        potential_energy(before) - potential_energy(after),
        stats.moves,
        "moves counter disagrees with the rows fallen"
    );
}

/// Assert settling an already-settled board changes nothing.
pub fn assert_idempotent(settler: &dyn Settler, settled: &Grid) {
    let mut again = settled.clone();
    let stats = settler
        .settle(&mut again.view_mut())
        .expect("settling a settled board should succeed");
    assert_eq!(&again, settled, "{} is not idempotent", settler.name());
    assert_eq!(stats.moves, 0, "{} moved tokens on a settled board", settler.name());
}

/// Settle a copy of `start` and run every compliance check on the result.
///
/// Returns the settled board for further comparison.
pub fn run_full_compliance(settler: &dyn Settler, start: &Grid) -> Grid {
    let mut settled = start.clone();
    let stats = settler
        .settle(&mut settled.view_mut())
        .unwrap_or_else(|e| panic!("{} failed: {e}\n{start}", settler.name()));
    assert_conserves(start, &settled);
    assert_obstacles_untouched(start, &settled);
    assert_fixpoint(&settled);
    assert_moves_accounted(start, &settled, &stats);
    assert_idempotent(settler, &settled);
    settled
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board;

    #[test]
    fn census_counts_each_value() {
        let g = board(
            "2 3 2
             # . 9",
        );
        let census = token_census(&g);
        assert_eq!(census.get(&2), Some(&2));
        assert_eq!(census.get(&3), Some(&1));
        assert_eq!(census.get(&9), Some(&1));
        assert_eq!(census.len(), 3);
    }

    #[test]
    fn energy_sums_token_rows() {
        let g = board(
            "4 .
             . 3
             2 #",
        );
        assert_eq!(potential_energy(&g), 2 + 1);
    }

    #[test]
    #[should_panic(expected = "token multiset changed")]
    fn conservation_catches_lost_token() {
        assert_conserves(&board("2 3"), &board("2 ."));
    }

    #[test]
    #[should_panic(expected = "can still fall")]
    fn fixpoint_catches_floating_token() {
        assert_fixpoint(&board(
            "2 .
             . .",
        ));
    }
}
