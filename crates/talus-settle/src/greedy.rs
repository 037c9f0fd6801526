//! Single-pass slide-to-rest reference settler.

use crate::movement::next_step;
use crate::settler::{Schedule, Settler};
use talus_core::{is_movable, Coord, SettleError, SettleStats, EMPTY};
use talus_grid::GridMut;

/// Scans once, bottom-to-top and left-to-right, sliding each token it
/// meets all the way to rest before resuming at the next coordinate.
///
/// Every step lands in a row the scan has already passed, so a single
/// pass reaches a fixpoint. Oracle for [`EventDrivenSettler`].
///
/// [`EventDrivenSettler`]: crate::EventDrivenSettler
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GreedySettler;

impl Settler for GreedySettler {
    fn name(&self) -> &str {
        "greedy"
    }

    fn schedule(&self) -> Schedule {
        Schedule::Cascade
    }

    fn settle(&self, grid: &mut GridMut<'_>) -> Result<SettleStats, SettleError> {
        let mut stats = SettleStats {
            rounds: 1,
            ..SettleStats::default()
        };
        for row in 0..grid.height() {
            for col in 0..grid.width() {
                let start = Coord::new(col, row);
                let value = grid.at(start);
                if !is_movable(value) {
                    continue;
                }
                // The path never revisits `start`: every step goes down a
                // row, so tracing it before writing sees the same cells.
                let mut at = start;
                loop {
                    stats.examined += 1;
                    match next_step(grid, at) {
                        Some(to) => {
                            at = to;
                            stats.moves += 1;
                        }
                        None => break,
                    }
                }
                if at != start {
                    grid.put(at, value);
                    grid.put(start, EMPTY);
                }
            }
        }
        tracing::trace!(moves = stats.moves, "greedy pass");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talus_grid::Grid;

    fn settle(text: &str) -> (Grid, SettleStats) {
        let mut g: Grid = text.parse().unwrap();
        let stats = GreedySettler.settle(&mut g.view_mut()).unwrap();
        (g, stats)
    }

    #[test]
    fn slides_token_to_rest_in_one_pass() {
        let (g, stats) = settle(
            "5 .
             . .
             . .",
        );
        assert_eq!(g.get(Coord::new(0, 0)), Some(5));
        assert_eq!(g.get(Coord::new(0, 2)), Some(EMPTY));
        assert_eq!(stats.moves, 2);
        assert_eq!(stats.rounds, 1);
        // Two successful steps and the blocked check at the bottom.
        assert_eq!(stats.examined, 3);
    }

    #[test]
    fn zigzag_slide_in_a_single_visit() {
        let (g, stats) = settle(
            "2 . .
             # . .
             # # .",
        );
        assert_eq!(g.get(Coord::new(2, 0)), Some(2));
        assert_eq!(g.token_count(), 1);
        assert_eq!(stats.moves, 2);
    }

    #[test]
    fn right_edge_token_blocked_by_obstacles() {
        let (g, _) = settle(
            ". . 2
             . # #
             . . #",
        );
        // Both supports of (2,2) are obstacles.
        assert_eq!(g.get(Coord::new(2, 2)), Some(2));
        assert!(g.is_settled());
    }

    #[test]
    fn lower_token_finishes_before_upper_starts() {
        let (g, _) = settle(
            "2 3 .
             # . .
             # . #",
        );
        // 2 reaches (1,0) before 3 moves, so 3 then falls straight.
        assert_eq!(g.get(Coord::new(1, 0)), Some(2));
        assert_eq!(g.get(Coord::new(1, 1)), Some(3));
        assert!(g.is_settled());
    }
}
