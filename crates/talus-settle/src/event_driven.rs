//! Priority-queue settler without rounds.

use crate::movement::{next_step, relocate};
use crate::queue::PendingQueue;
use crate::settler::{Schedule, Settler};
use talus_core::{is_movable, SettleError, SettleStats};
use talus_grid::{GridMut, UPPER_OFFSETS};

/// Which cells above a vacated cell the event-driven settler re-enqueues.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Propagation {
    /// Up-left, up and up-right, matching the incremental settler.
    #[default]
    Neighbourhood,
    /// Only the cell straight above.
    StraightUp,
}

const STRAIGHT_UP: [(i32, i32); 1] = [(0, 1)];

impl Propagation {
    fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            Propagation::Neighbourhood => &UPPER_OFFSETS,
            Propagation::StraightUp => &STRAIGHT_UP,
        }
    }
}

/// Processes one global min-priority queue keyed by `row * width + col`.
///
/// A moved token's destination sorts below everything still queued, so
/// it is popped next: each token slides to rest before the next one is
/// touched. The result therefore matches [`GreedySettler`], not the
/// sweep-scheduled settlers.
///
/// Because every token is seeded, a token found blocked was checked after
/// all tokens below it came to rest, and its supports never empty again.
/// Both [`Propagation`] modes consequently give identical grids; they only
/// differ in how much redundant work is queued.
///
/// [`GreedySettler`]: crate::GreedySettler
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventDrivenSettler {
    propagation: Propagation,
}

impl EventDrivenSettler {
    /// Create a settler with the given propagation mode.
    pub fn new(propagation: Propagation) -> Self {
        Self { propagation }
    }

    /// The configured propagation mode.
    pub fn propagation(&self) -> Propagation {
        self.propagation
    }
}

impl Settler for EventDrivenSettler {
    fn name(&self) -> &str {
        match self.propagation {
            Propagation::Neighbourhood => "event-driven",
            Propagation::StraightUp => "event-driven/straight-up",
        }
    }

    fn schedule(&self) -> Schedule {
        Schedule::Cascade
    }

    fn settle(&self, grid: &mut GridMut<'_>) -> Result<SettleStats, SettleError> {
        let width = grid.width();
        let mut stats = SettleStats::default();
        let mut queue = PendingQueue::with_capacity(grid.token_count())?;
        for coord in grid.movable_coords() {
            queue.push(coord.priority(width))?;
        }
        stats.observe_pending(queue.len());

        while let Some(p) = queue.pop() {
            let here = p.coord(width);
            if !is_movable(grid.at(here)) {
                continue;
            }
            stats.examined += 1;
            let Some(to) = next_step(grid, here) else {
                continue;
            };
            relocate(grid, here, to);
            stats.moves += 1;
            queue.push(to.priority(width))?;
            for &offset in self.propagation.offsets() {
                if let Some(upper) = grid.neighbour(here, offset) {
                    if is_movable(grid.at(upper)) {
                        stats.activations += 1;
                        queue.push(upper.priority(width))?;
                    }
                }
            }
            stats.observe_pending(queue.len());
        }
        tracing::trace!(moves = stats.moves, examined = stats.examined, "event queue drained");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GreedySettler;
    use talus_core::Coord;
    use talus_grid::Grid;

    fn settle_with(settler: &dyn Settler, text: &str) -> (Grid, SettleStats) {
        let mut g: Grid = text.parse().unwrap();
        let stats = settler.settle(&mut g.view_mut()).unwrap();
        (g, stats)
    }

    const CONTENDED: &str = "
        2 3 .
        # . .
        # . #";

    #[test]
    fn default_propagates_to_full_neighbourhood() {
        let s = EventDrivenSettler::default();
        assert_eq!(s.propagation(), Propagation::Neighbourhood);
        assert_eq!(s.name(), "event-driven");
    }

    #[test]
    fn matches_greedy_on_contended_board() {
        let (greedy, _) = settle_with(&GreedySettler, CONTENDED);
        for mode in [Propagation::Neighbourhood, Propagation::StraightUp] {
            let (g, stats) = settle_with(&EventDrivenSettler::new(mode), CONTENDED);
            assert_eq!(g, greedy, "{mode:?}");
            assert_eq!(stats.rounds, 0);
        }
        assert_eq!(greedy.get(Coord::new(1, 1)), Some(3));
    }

    #[test]
    fn straight_up_queues_less_work() {
        let text = "
            3 4 5
            . 2 .
            . . .";
        let (a, wide) = settle_with(&EventDrivenSettler::new(Propagation::Neighbourhood), text);
        let (b, narrow) = settle_with(&EventDrivenSettler::new(Propagation::StraightUp), text);
        assert_eq!(a, b);
        assert!(narrow.activations <= wide.activations);
        assert_eq!(a.token_count(), 4);
        assert!(a.is_settled());
    }

    #[test]
    fn duplicate_entries_are_harmless() {
        let (g, stats) = settle_with(
            &EventDrivenSettler::default(),
            "5 .
             . .
             . .",
        );
        assert_eq!(g.get(Coord::new(0, 0)), Some(5));
        assert_eq!(stats.moves, 2);
    }
}
