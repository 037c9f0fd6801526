//! Stability-tracked worklist settler.
//!
//! Each round visits only the cells that could possibly move, in the same
//! bottom-to-top, left-to-right order as a full sweep:
//!
//! - every token starts on the worklist;
//! - a token found blocked is flagged stable and dropped;
//! - a token that moves is re-queued at its destination for the next
//!   round (one step per round, like the sweep);
//! - vacating a cell clears the stability flag of every token directly
//!   above it (up-left, up, up-right) and schedules it.
//!
//! Reactivated cells are always above the vacated one, so they sort after
//! the cell being processed and are scheduled into the *current* round.
//! A full sweep would reach them later in the same pass, which is what
//! keeps this settler's output identical to [`BaselineSettler`]'s.
//!
//! [`BaselineSettler`]: crate::BaselineSettler

use crate::movement::{has_empty_support, next_step, relocate};
use crate::queue::{RoundQueue, Worklist};
use crate::settler::{Schedule, Settler};
use crate::stability::StabilityTable;
use talus_core::{is_movable, SettleError, SettleStats};
use talus_grid::GridMut;

/// Primary settle engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IncrementalSettler;

impl Settler for IncrementalSettler {
    fn name(&self) -> &str {
        "incremental"
    }

    fn schedule(&self) -> Schedule {
        Schedule::Sweep
    }

    fn settle(&self, grid: &mut GridMut<'_>) -> Result<SettleStats, SettleError> {
        let width = grid.width();
        let mut stats = SettleStats::default();
        let mut stable = StabilityTable::new(grid.len())?;

        let mut worklist = Worklist::with_capacity(grid.token_count())?;
        for coord in grid.movable_coords() {
            worklist.push(coord.priority(width))?;
        }

        while !worklist.is_empty() {
            stats.rounds += 1;
            stats.observe_pending(worklist.len());
            let mut round = RoundQueue::new(worklist);
            let mut next = Worklist::default();
            let mut moved = false;

            while let Some(p) = round.pop() {
                let here = p.coord(width);
                if !is_movable(grid.at(here)) || stable.is_stable(p) {
                    continue;
                }
                stats.examined += 1;
                let Some(to) = next_step(grid, here) else {
                    if has_empty_support(grid, here) {
                        next.push(p)?;
                    } else {
                        stable.mark(p);
                    }
                    continue;
                };

                relocate(grid, here, to);
                stats.moves += 1;
                moved = true;
                let dest = to.priority(width);
                stable.clear(dest);
                next.push(dest)?;

                for upper in grid.upper_cells(here) {
                    let up = upper.priority(width);
                    if is_movable(grid.at(upper)) && stable.clear(up) {
                        debug_assert!(up > p, "reactivated {upper} sorts before {here}");
                        stats.activations += 1;
                        round.push(up)?;
                        stats.observe_pending(round.len() + next.len());
                    }
                }
            }

            tracing::trace!(
                round = stats.rounds,
                moves = stats.moves,
                pending = next.len(),
                "incremental round"
            );
            if !moved {
                break;
            }
            worklist = next;
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BaselineSettler;
    use talus_core::Coord;
    use talus_grid::Grid;

    fn settle_both(text: &str) -> (Grid, SettleStats, SettleStats) {
        let start: Grid = text.parse().unwrap();
        let mut a = start.clone();
        let mut b = start;
        let inc = IncrementalSettler.settle(&mut a.view_mut()).unwrap();
        let base = BaselineSettler.settle(&mut b.view_mut()).unwrap();
        assert_eq!(a, b, "incremental diverged from baseline");
        (a, inc, base)
    }

    #[test]
    fn stable_stack_is_examined_once() {
        let (_, inc, _) = settle_both(
            "4 .
             3 2
             # #",
        );
        assert_eq!(inc.moves, 0);
        assert_eq!(inc.rounds, 1);
        assert_eq!(inc.examined, 3);
    }

    #[test]
    fn no_tokens_means_no_rounds() {
        let (_, inc, _) = settle_both(". #\n# .");
        assert_eq!(inc, SettleStats::default());
    }

    #[test]
    fn vacated_support_reactivates_in_same_round() {
        // 3 is stable on 2 until 2 slides away; it must move in the same
        // round, exactly when a full sweep would reach it.
        let (g, inc, base) = settle_both(
            ". . 4
             2 3 .
             # . #
             # . #",
        );
        assert_eq!(g.get(Coord::new(1, 0)), Some(2));
        assert_eq!(g.get(Coord::new(1, 1)), Some(3));
        assert_eq!(g.get(Coord::new(2, 2)), Some(4));
        assert_eq!(inc.activations, 1);
        assert_eq!(inc.rounds, base.rounds);
        assert_eq!(inc.moves, base.moves);
    }

    #[test]
    fn skips_work_the_sweep_repeats() {
        let (_, inc, base) = settle_both(
            "6 .
             5 .
             4 .
             3 .
             . .
             # .",
        );
        assert!(inc.examined < base.examined);
    }
}
