//! Grid coordinates and their processing priority.

use std::fmt;

/// A cell position: `col` grows to the right, `row` grows upwards.
///
/// Row 0 is the bottom of the grid. Coordinates are unsigned; stepping
/// below row 0 or left of column 0 yields `None` from the offset helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    /// Column index, `0..width`.
    pub col: u32,
    /// Row index, `0..height`, bottom first.
    pub row: u32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Processing priority of this cell on a grid `width` columns wide.
    pub const fn priority(self, width: u32) -> Priority {
        Priority(self.row as usize * width as usize + self.col as usize)
    }

    /// Offset by `(dcol, drow)`, or `None` if either axis goes negative
    /// or overflows.
    ///
    /// The upper bounds are the grid's business; see `talus-grid`.
    pub fn offset(self, dcol: i32, drow: i32) -> Option<Self> {
        let col = self.col.checked_add_signed(dcol)?;
        let row = self.row.checked_add_signed(drow)?;
        Some(Self { col, row })
    }
}

impl From<(u32, u32)> for Coord {
    fn from((col, row): (u32, u32)) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// Processing order key `row * width + col`.
///
/// Ascending priority walks the grid bottom-to-top, left-to-right within
/// a row. Every settler orders its work by this key so that all of them
/// resolve contention for a cell the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority(pub usize);

impl Priority {
    /// Recover the coordinate on a grid `width` columns wide.
    pub const fn coord(self, width: u32) -> Coord {
        let w = width as usize;
        Coord {
            col: (self.0 % w) as u32,
            row: (self.0 / w) as u32,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn priority_is_bottom_up_left_to_right() {
        let w = 4;
        let mut cells = vec![
            Coord::new(3, 0),
            Coord::new(0, 1),
            Coord::new(2, 0),
            Coord::new(0, 0),
        ];
        cells.sort_by_key(|c| c.priority(w));
        assert_eq!(
            cells,
            vec![
                Coord::new(0, 0),
                Coord::new(2, 0),
                Coord::new(3, 0),
                Coord::new(0, 1)
            ]
        );
    }

    #[test]
    fn offset_rejects_negative_axes() {
        let c = Coord::new(0, 0);
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(c.offset(0, -1), None);
        assert_eq!(c.offset(1, 1), Some(Coord::new(1, 1)));
    }

    #[test]
    fn display_is_col_then_row() {
        assert_eq!(Coord::new(3, 7).to_string(), "(3, 7)");
    }

    proptest! {
        #[test]
        fn priority_recovers_coord(col in 0u32..500, row in 0u32..500, extra in 1u32..500) {
            let width = col + extra;
            let c = Coord::new(col, row);
            prop_assert_eq!(c.priority(width).coord(width), c);
        }

        #[test]
        fn lower_row_always_first(
            a_col in 0u32..64, b_col in 0u32..64, row in 0u32..64,
        ) {
            let width = 64;
            let lower = Coord::new(a_col, row);
            let upper = Coord::new(b_col, row + 1);
            prop_assert!(lower.priority(width) < upper.priority(width));
        }
    }
}
