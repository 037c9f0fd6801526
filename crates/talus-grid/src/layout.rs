//! Physical storage order of grid cells.

use talus_core::Coord;

/// How `(col, row)` maps to a flat buffer index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// `index = col * height + row`. Each column is contiguous, bottom
    /// cell first. This is the buffer convention of existing C and
    /// Python callers, hence the default.
    #[default]
    ColumnMajor,
    /// `index = row * width + col`. Each row is contiguous, bottom row
    /// first; the flat index equals the cell's processing priority.
    RowMajor,
}

impl Layout {
    /// Flat index of an in-bounds coordinate.
    #[inline]
    pub const fn index(self, coord: Coord, width: u32, height: u32) -> usize {
        match self {
            Self::ColumnMajor => coord.col as usize * height as usize + coord.row as usize,
            Self::RowMajor => coord.row as usize * width as usize + coord.col as usize,
        }
    }

    /// Coordinate stored at a flat index.
    #[inline]
    pub const fn coord(self, index: usize, width: u32, height: u32) -> Coord {
        match self {
            Self::ColumnMajor => Coord {
                col: (index / height as usize) as u32,
                row: (index % height as usize) as u32,
            },
            Self::RowMajor => Coord {
                col: (index % width as usize) as u32,
                row: (index / width as usize) as u32,
            },
        }
    }
}

impl TryFrom<i32> for Layout {
    type Error = i32;

    /// ABI code: `0` = ColumnMajor, `1` = RowMajor.
    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::ColumnMajor),
            1 => Ok(Self::RowMajor),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn column_major_matches_legacy_indexing() {
        // Legacy callers compute `col * height + row`.
        let (w, h) = (3, 5);
        assert_eq!(Layout::ColumnMajor.index(Coord::new(2, 1), w, h), 11);
        assert_eq!(Layout::ColumnMajor.index(Coord::new(0, 4), w, h), 4);
    }

    #[test]
    fn row_major_index_is_priority() {
        let (w, h) = (3, 5);
        let c = Coord::new(2, 1);
        assert_eq!(Layout::RowMajor.index(c, w, h), c.priority(w).0);
    }

    proptest! {
        #[test]
        fn index_is_a_bijection(w in 1u32..40, h in 1u32..40, row_major in any::<bool>()) {
            let layout = if row_major { Layout::RowMajor } else { Layout::ColumnMajor };
            let n = (w * h) as usize;
            let mut seen = vec![false; n];
            for col in 0..w {
                for row in 0..h {
                    let c = Coord::new(col, row);
                    let i = layout.index(c, w, h);
                    prop_assert!(i < n);
                    prop_assert!(!seen[i], "index {} produced twice", i);
                    seen[i] = true;
                    prop_assert_eq!(layout.coord(i, w, h), c);
                }
            }
        }
    }
}
