//! Hand-traced boards with known fixpoints.
//!
//! Each [`Fixture`] records the start board and the expected result for
//! both schedule families. Most boards have no contention, so both
//! expectations coincide; [`cascade_divergence`] is the one that tells
//! the families apart.

use crate::board;
use talus_core::{Coord, EMPTY};
use talus_grid::Grid;
use talus_settle::Schedule;

/// A start board and its expected fixpoints.
#[derive(Clone, Debug)]
pub struct Fixture {
    pub name: &'static str,
    pub start: Grid,
    /// Result of the sweep-scheduled settlers (baseline, incremental).
    pub sweep: Grid,
    /// Result of the cascade-scheduled settlers (greedy, event-driven).
    pub cascade: Grid,
}

impl Fixture {
    fn uncontended(name: &'static str, start: Grid, settled: Grid) -> Self {
        Self {
            name,
            start,
            sweep: settled.clone(),
            cascade: settled,
        }
    }

    /// Expected fixpoint for a settler with the given schedule.
    pub fn expected(&self, schedule: Schedule) -> &Grid {
        match schedule {
            Schedule::Sweep => &self.sweep,
            Schedule::Cascade => &self.cascade,
        }
    }
}

/// A lone token falls straight to the floor.
pub fn straight_fall() -> Fixture {
    Fixture::uncontended(
        "straight-fall",
        board(
            "5 .
             . .
             . .",
        ),
        board(
            ". .
             . .
             5 .",
        ),
    )
}

/// Straight down is blocked and down-left is off the board, so the token
/// slides down-right.
pub fn diagonal_fall() -> Fixture {
    Fixture::uncontended(
        "diagonal-fall",
        board(
            "2 .
             # .",
        ),
        board(
            ". .
             # 2",
        ),
    )
}

/// A column of tokens on an obstacle, beside an empty column, with the
/// bottom token of the stack removed (zeroed). Every token above the gap
/// must be destabilised and re-settled.
pub fn stack_collapse() -> Fixture {
    let mut start = board(
        "6 .
         5 .
         4 .
         3 .
         2 .
         # .",
    );
    start.put(Coord::new(0, 1), EMPTY);
    Fixture::uncontended(
        "stack-collapse",
        start,
        board(
            ". .
             . .
             . .
             6 .
             4 5
             # 3",
        ),
    )
}

/// A stable token whose support is vacated mid-round must move in that
/// same round, before a token from the row above can claim the gap.
pub fn sweep_lag() -> Fixture {
    Fixture::uncontended(
        "sweep-lag",
        board(
            ". . 4
             2 3 .
             # . #
             # . #",
        ),
        board(
            ". . .
             . . 4
             # 3 #
             # 2 #",
        ),
    )
}

/// Two tokens contend for one cell. The sweep moves them side by side and
/// diverts the right one; the cascade lands the left one first and the
/// right one then falls straight.
pub fn cascade_divergence() -> Fixture {
    Fixture {
        name: "cascade-divergence",
        start: board(
            "2 3 .
             # . .
             # . #",
        ),
        sweep: board(
            ". . .
             # . 3
             # 2 #",
        ),
        cascade: board(
            ". . .
             # 3 .
             # 2 #",
        ),
    }
}

/// Every fixture, in a stable order.
pub fn all_fixtures() -> Vec<Fixture> {
    vec![
        straight_fall(),
        diagonal_fall(),
        stack_collapse(),
        sweep_lag(),
        cascade_divergence(),
    ]
}
