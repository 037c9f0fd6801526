//! Proptest strategies over grids.

use proptest::collection::vec;
use proptest::prelude::*;
use talus_core::{EMPTY, OBSTACLE};
use talus_grid::{Grid, Layout};

/// Either storage layout.
pub fn arb_layout() -> impl Strategy<Value = Layout> {
    prop_oneof![Just(Layout::ColumnMajor), Just(Layout::RowMajor)]
}

/// A defined cell value, weighted towards empty cells so that tokens have
/// room to fall.
pub fn arb_cell() -> impl Strategy<Value = i32> + Clone {
    prop_oneof![
        4 => Just(EMPTY),
        1 => Just(OBSTACLE),
        3 => 2..7i32,
    ]
}

/// A cell value that may also be undefined (negative).
pub fn arb_cell_with_undefined() -> impl Strategy<Value = i32> + Clone {
    prop_oneof![
        8 => arb_cell(),
        1 => -5..0i32,
    ]
}

fn grid_of<S>(max_width: u32, max_height: u32, cell: S) -> impl Strategy<Value = Grid>
where
    S: Strategy<Value = i32> + Clone,
{
    (1..=max_width, 1..=max_height, arb_layout()).prop_flat_map(move |(w, h, layout)| {
        vec(cell.clone(), (w * h) as usize).prop_map(move |cells| {
            Grid::from_buffer(cells, w, h, layout).expect("strategy sizes the buffer")
        })
    })
}

/// A board of defined values up to `max_width` × `max_height`.
pub fn arb_board(max_width: u32, max_height: u32) -> impl Strategy<Value = Grid> {
    grid_of(max_width, max_height, arb_cell())
}

/// A board that may contain undefined (negative) values.
pub fn arb_board_with_undefined(max_width: u32, max_height: u32) -> impl Strategy<Value = Grid> {
    grid_of(max_width, max_height, arb_cell_with_undefined())
}

/// A board holding exactly one token among obstacles and empty cells.
pub fn arb_single_token_board(max_width: u32, max_height: u32) -> impl Strategy<Value = Grid> {
    let terrain = prop_oneof![3 => Just(EMPTY), 1 => Just(OBSTACLE)];
    (grid_of(max_width, max_height, terrain), any::<prop::sample::Index>(), 2..9i32).prop_map(
        |(mut grid, at, value)| {
            let i = at.index(grid.len());
            let coord = grid.layout().coord(i, grid.width(), grid.height());
            grid.put(coord, value);
            grid
        },
    )
}
