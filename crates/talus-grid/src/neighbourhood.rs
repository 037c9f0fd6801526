//! Support and upper neighbourhoods.
//!
//! A token at `(col, row)` is held up by up to three *support* cells in
//! the row below, and can itself hold up to three *upper* cells in the row
//! above. Cells outside the grid are simply absent; there is no wrapping.

use crate::grid::Grid;
use smallvec::SmallVec;
use talus_core::Coord;

/// Support offsets `(dcol, drow)` in movement-rule precedence order:
/// straight down, down-left, down-right.
pub const SUPPORT_OFFSETS: [(i32, i32); 3] = [(0, -1), (-1, -1), (1, -1)];

/// Upper offsets `(dcol, drow)`: up-left, straight up, up-right.
pub const UPPER_OFFSETS: [(i32, i32); 3] = [(-1, 1), (0, 1), (1, 1)];

impl<B: AsRef<[i32]>> Grid<B> {
    /// Neighbour of `coord` at `(dcol, drow)`, if inside the grid.
    #[inline]
    pub fn neighbour(&self, coord: Coord, (dcol, drow): (i32, i32)) -> Option<Coord> {
        coord.offset(dcol, drow).filter(|&c| self.contains(c))
    }

    /// In-bounds support cells of `coord`, in precedence order.
    ///
    /// Empty for row 0: nothing lies below the grid.
    pub fn support_cells(&self, coord: Coord) -> SmallVec<[Coord; 3]> {
        SUPPORT_OFFSETS
            .iter()
            .filter_map(|&off| self.neighbour(coord, off))
            .collect()
    }

    /// In-bounds upper cells of `coord`: up-left, up, up-right.
    pub fn upper_cells(&self, coord: Coord) -> SmallVec<[Coord; 3]> {
        UPPER_OFFSETS
            .iter()
            .filter_map(|&off| self.neighbour(coord, off))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Layout;

    fn grid(w: u32, h: u32) -> Grid {
        Grid::new(w, h, Layout::RowMajor).unwrap()
    }

    #[test]
    fn interior_support_in_precedence_order() {
        let g = grid(3, 3);
        let s = g.support_cells(Coord::new(1, 1));
        assert_eq!(
            s.as_slice(),
            &[Coord::new(1, 0), Coord::new(0, 0), Coord::new(2, 0)]
        );
    }

    #[test]
    fn bottom_row_has_no_support() {
        let g = grid(3, 3);
        assert!(g.support_cells(Coord::new(1, 0)).is_empty());
    }

    #[test]
    fn left_edge_never_offers_down_left() {
        let g = grid(3, 3);
        let s = g.support_cells(Coord::new(0, 2));
        assert_eq!(s.as_slice(), &[Coord::new(0, 1), Coord::new(1, 1)]);
    }

    #[test]
    fn right_edge_never_offers_down_right() {
        let g = grid(3, 3);
        let s = g.support_cells(Coord::new(2, 2));
        assert_eq!(s.as_slice(), &[Coord::new(2, 1), Coord::new(1, 1)]);
    }

    #[test]
    fn single_column_is_pure_vertical() {
        let g = grid(1, 4);
        assert_eq!(g.support_cells(Coord::new(0, 3)).as_slice(), &[Coord::new(0, 2)]);
        assert_eq!(g.upper_cells(Coord::new(0, 1)).as_slice(), &[Coord::new(0, 2)]);
    }

    #[test]
    fn top_row_has_no_upper_cells() {
        let g = grid(3, 3);
        assert!(g.upper_cells(Coord::new(1, 2)).is_empty());
    }

    #[test]
    fn upper_cells_mirror_support_cells() {
        // b is a support of a  <=>  a is an upper cell of b.
        let g = grid(4, 4);
        for (a, _) in g.cells() {
            for b in g.support_cells(a) {
                assert!(g.upper_cells(b).contains(&a), "{a} supported by {b}");
            }
            for b in g.upper_cells(a) {
                assert!(g.support_cells(b).contains(&a), "{a} supports {b}");
            }
        }
    }
}
