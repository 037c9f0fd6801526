//! Differential property tests across settlers.
//!
//! Within a schedule family results must be identical for every board:
//!
//! - `BaselineSettler` ≡ `IncrementalSettler`
//! - `GreedySettler` ≡ `EventDrivenSettler` in both propagation modes
//!
//! Across families results agree whenever no two tokens contend for a
//! cell. Every settler must pass the compliance suite on every board.

use proptest::prelude::*;
use talus_grid::Grid;
use talus_settle::{
    BaselineSettler, EventDrivenSettler, GreedySettler, IncrementalSettler, Propagation, Settler,
};
use talus_test_utils::compliance::run_full_compliance;
use talus_test_utils::random_board;
use talus_test_utils::strategies::{arb_board, arb_single_token_board};

fn settled(settler: &dyn Settler, start: &Grid) -> Grid {
    let mut g = start.clone();
    settler
        .settle(&mut g.view_mut())
        .unwrap_or_else(|e| panic!("{} failed: {e}", settler.name()));
    g
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn incremental_matches_baseline(start in arb_board(9, 9)) {
        let base = settled(&BaselineSettler, &start);
        let inc = settled(&IncrementalSettler, &start);
        prop_assert_eq!(inc, base, "start:\n{}", start);
    }

    #[test]
    fn incremental_never_examines_more_than_baseline(start in arb_board(9, 9)) {
        let mut a = start.clone();
        let mut b = start;
        let base = BaselineSettler.settle(&mut a.view_mut()).unwrap();
        let inc = IncrementalSettler.settle(&mut b.view_mut()).unwrap();
        prop_assert!(inc.examined <= base.examined);
        prop_assert_eq!(inc.moves, base.moves);
    }

    #[test]
    fn event_driven_matches_greedy(start in arb_board(9, 9)) {
        let greedy = settled(&GreedySettler, &start);
        for mode in [Propagation::Neighbourhood, Propagation::StraightUp] {
            let ev = settled(&EventDrivenSettler::new(mode), &start);
            prop_assert_eq!(&ev, &greedy, "{:?} on\n{}", mode, start);
        }
    }

    #[test]
    fn every_settler_is_compliant(start in arb_board(7, 7)) {
        run_full_compliance(&BaselineSettler, &start);
        run_full_compliance(&IncrementalSettler, &start);
        run_full_compliance(&GreedySettler, &start);
        run_full_compliance(&EventDrivenSettler::new(Propagation::Neighbourhood), &start);
        run_full_compliance(&EventDrivenSettler::new(Propagation::StraightUp), &start);
    }

    #[test]
    fn families_agree_on_single_token(start in arb_single_token_board(8, 8)) {
        let sweep = settled(&IncrementalSettler, &start);
        let cascade = settled(&EventDrivenSettler::default(), &start);
        prop_assert_eq!(sweep, cascade);
    }

    #[test]
    fn families_agree_on_single_column(start in arb_board(1, 12)) {
        let sweep = settled(&BaselineSettler, &start);
        let cascade = settled(&GreedySettler, &start);
        prop_assert_eq!(sweep, cascade);
    }
}

#[test]
fn large_random_boards_stay_equivalent() {
    for seed in 0..8 {
        let start = random_board(48, 32, seed);
        assert_eq!(
            settled(&IncrementalSettler, &start),
            settled(&BaselineSettler, &start),
            "seed {seed}"
        );
        assert_eq!(
            settled(&EventDrivenSettler::default(), &start),
            settled(&GreedySettler, &start),
            "seed {seed}"
        );
    }
}
