//! Text rendering and parsing.
//!
//! Boards are drawn the way gravity reads them: top row first, one line
//! per row, cells separated by spaces. Empty cells print as `.`,
//! obstacles as `#`, everything else as its number. [`FromStr`] accepts
//! the same notation, which keeps test fixtures legible:
//!
//! ```
//! use talus_grid::Grid;
//! use talus_core::Coord;
//!
//! let g: Grid = "
//!     . 5
//!     2 #
//! ".parse().unwrap();
//! assert_eq!(g.get(Coord::new(1, 1)), Some(5));
//! assert_eq!(g.get(Coord::new(1, 0)), Some(1));
//! ```

use crate::grid::Grid;
use crate::layout::Layout;
use std::fmt;
use std::str::FromStr;
use talus_core::{Coord, GridError, EMPTY, OBSTACLE};

fn glyph(v: i32) -> String {
    match v {
        EMPTY => ".".to_string(),
        OBSTACLE => "#".to_string(),
        v => v.to_string(),
    }
}

impl<B: AsRef<[i32]>> fmt::Display for Grid<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self.cells().map(|(_, v)| glyph(v).len()).max().unwrap_or(1);
        for row in (0..self.height()).rev() {
            for col in 0..self.width() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>cell_width$}", glyph(self.at(Coord::new(col, row))))?;
            }
            if row > 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl Grid<Vec<i32>> {
    /// Parse the text notation into a grid with the given layout.
    ///
    /// Blank lines are ignored, so raw string literals can be indented.
    pub fn parse_with_layout(text: &str, layout: Layout) -> Result<Self, GridError> {
        let mut rows: Vec<Vec<i32>> = Vec::new();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row = line
                .split_whitespace()
                .map(|tok| match tok {
                    "." => Ok(EMPTY),
                    "#" => Ok(OBSTACLE),
                    t => t.parse::<i32>().map_err(|_| GridError::Parse {
                        reason: format!("unrecognised cell '{t}'"),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }
        if rows.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        Self::from_rows(&rows, layout)
    }
}

impl FromStr for Grid<Vec<i32>> {
    type Err = GridError;

    /// Parse with the default [`Layout`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_layout(s, Layout::default())
    }
}
