//! Full-sweep reference settler.

use crate::movement::{next_step, relocate};
use crate::settler::{Schedule, Settler};
use talus_core::{is_movable, Coord, SettleError, SettleStats};
use talus_grid::GridMut;

/// Sweeps every cell bottom-to-top, left-to-right, moving each token at
/// most one step per sweep, until a sweep changes nothing.
///
/// O(rounds × cells). Kept as the oracle for [`IncrementalSettler`],
/// which must reproduce its output exactly.
///
/// [`IncrementalSettler`]: crate::IncrementalSettler
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaselineSettler;

impl Settler for BaselineSettler {
    fn name(&self) -> &str {
        "baseline"
    }

    fn schedule(&self) -> Schedule {
        Schedule::Sweep
    }

    fn settle(&self, grid: &mut GridMut<'_>) -> Result<SettleStats, SettleError> {
        let mut stats = SettleStats::default();
        loop {
            stats.rounds += 1;
            let mut changed = false;
            for row in 0..grid.height() {
                for col in 0..grid.width() {
                    let here = Coord::new(col, row);
                    if !is_movable(grid.at(here)) {
                        continue;
                    }
                    stats.examined += 1;
                    // Destinations are always earlier in the sweep, so a
                    // moved token is not visited again this round.
                    if let Some(to) = next_step(grid, here) {
                        relocate(grid, here, to);
                        stats.moves += 1;
                        changed = true;
                    }
                }
            }
            tracing::trace!(round = stats.rounds, moves = stats.moves, "baseline sweep");
            if !changed {
                return Ok(stats);
            }
        }
    }
}
