//! The [`Grid`] type: a bounds-checked 2-D view over a flat buffer.

use crate::layout::Layout;
use talus_core::{is_empty, is_movable, Cell, Coord, GridError, EMPTY};

/// A rectangular grid of cell values.
///
/// `B` is the backing buffer. `Grid<Vec<i32>>` owns its cells;
/// [`GridMut`] borrows a caller's buffer so that settling happens in
/// place. Width and height are always non-zero and `width * height`
/// always equals the buffer length; both are checked at construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<B = Vec<i32>> {
    cells: B,
    width: u32,
    height: u32,
    layout: Layout,
}

/// A grid borrowing a caller-owned buffer mutably.
pub type GridMut<'a> = Grid<&'a mut [i32]>;

/// Validate dimensions and return the cell count.
fn cell_count(width: u32, height: u32) -> Result<usize, GridError> {
    if width == 0 || height == 0 {
        return Err(GridError::EmptyGrid);
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(GridError::DimensionOverflow { width, height })
}

impl Grid<Vec<i32>> {
    /// Create an all-empty owned grid.
    pub fn new(width: u32, height: u32, layout: Layout) -> Result<Self, GridError> {
        let n = cell_count(width, height)?;
        Ok(Self {
            cells: vec![EMPTY; n],
            width,
            height,
            layout,
        })
    }

    /// Build an owned grid from rows given top row first.
    ///
    /// This reads the way a board is drawn: the last slice is row 0.
    /// Every row must have the same non-zero length.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R], layout: Layout) -> Result<Self, GridError> {
        let height = u32::try_from(rows.len()).map_err(|_| GridError::Parse {
            reason: format!("{} rows exceed u32::MAX", rows.len()),
        })?;
        let width_usize = rows.first().map_or(0, |r| r.as_ref().len());
        let width = u32::try_from(width_usize).map_err(|_| GridError::Parse {
            reason: format!("{width_usize} columns exceed u32::MAX"),
        })?;
        let mut grid = Self::new(width, height, layout)?;
        for (i, row_values) in rows.iter().enumerate() {
            let row_values = row_values.as_ref();
            if row_values.len() != width_usize {
                return Err(GridError::Parse {
                    reason: format!(
                        "row {i} from the top has {} cells, expected {width_usize}",
                        row_values.len()
                    ),
                });
            }
            let row = height - 1 - i as u32;
            for (col, &v) in row_values.iter().enumerate() {
                grid.put(Coord::new(col as u32, row), v);
            }
        }
        Ok(grid)
    }
}

impl<B: AsRef<[i32]>> Grid<B> {
    /// Wrap an existing buffer.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is zero,
    /// `Err(GridError::DimensionOverflow)` if the cell count overflows,
    /// or `Err(GridError::BufferLength)` on a size mismatch.
    pub fn from_buffer(cells: B, width: u32, height: u32, layout: Layout) -> Result<Self, GridError> {
        let expected = cell_count(width, height)?;
        let actual = cells.as_ref().len();
        if actual != expected {
            return Err(GridError::BufferLength { expected, actual });
        }
        Ok(Self {
            cells,
            width,
            height,
            layout,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Storage order of the backing buffer.
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.as_ref().len()
    }

    /// Always returns `false`; construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The raw buffer in storage order.
    pub fn as_slice(&self) -> &[i32] {
        self.cells.as_ref()
    }

    /// Give back the backing buffer.
    pub fn into_inner(self) -> B {
        self.cells
    }

    /// Whether `coord` lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.col < self.width && coord.row < self.height
    }

    /// Flat buffer index of `coord`, or `None` if out of bounds.
    #[inline]
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| self.layout.index(coord, self.width, self.height))
    }

    /// Value at `coord`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<i32> {
        self.index_of(coord).map(|i| self.cells.as_ref()[i])
    }

    /// Classified cell at `coord`, or `None` if out of bounds.
    pub fn cell(&self, coord: Coord) -> Option<Cell> {
        self.get(coord).map(Cell::classify)
    }

    /// Value at an in-bounds coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds. Settlers only call this with
    /// coordinates produced by the grid itself.
    #[inline]
    pub fn at(&self, coord: Coord) -> i32 {
        debug_assert!(self.contains(coord), "{coord} outside {}x{}", self.width, self.height);
        self.cells.as_ref()[self.layout.index(coord, self.width, self.height)]
    }

    /// All cells with their values, in priority order (bottom row first,
    /// left to right).
    pub fn cells(&self) -> impl Iterator<Item = (Coord, i32)> + '_ {
        (0..self.height).flat_map(move |row| {
            (0..self.width).map(move |col| {
                let c = Coord::new(col, row);
                (c, self.at(c))
            })
        })
    }

    /// Coordinates of every movable token, in priority order.
    pub fn movable_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells()
            .filter(|&(_, v)| is_movable(v))
            .map(|(c, _)| c)
    }

    /// Number of movable tokens on the grid.
    pub fn token_count(&self) -> usize {
        self.cells.as_ref().iter().filter(|&&v| is_movable(v)).count()
    }

    /// First cell in priority order holding a value outside `{0, 1, >=2}`.
    pub fn first_undefined(&self) -> Option<(Coord, i32)> {
        self.cells().find(|&(_, v)| v < EMPTY)
    }

    /// Whether no token can move under the movement rule.
    ///
    /// Stronger than "each token rests on something": every in-bounds
    /// support cell of every token above row 0 must be occupied, because a
    /// single empty support is enough for the rule to move it.
    pub fn is_settled(&self) -> bool {
        self.movable_coords()
            .all(|c| self.support_cells(c).into_iter().all(|s| !is_empty(self.at(s))))
    }

    /// Copy into an owned grid with the same layout.
    pub fn to_owned_grid(&self) -> Grid<Vec<i32>> {
        Grid {
            cells: self.cells.as_ref().to_vec(),
            width: self.width,
            height: self.height,
            layout: self.layout,
        }
    }
}

impl<B: AsRef<[i32]> + AsMut<[i32]>> Grid<B> {
    /// Overwrite the value at `coord`.
    pub fn set(&mut self, coord: Coord, value: i32) -> Result<(), GridError> {
        let i = self.index_of(coord).ok_or(GridError::CoordOutOfBounds {
            coord,
            width: self.width,
            height: self.height,
        })?;
        self.cells.as_mut()[i] = value;
        Ok(())
    }

    /// Overwrite the value at an in-bounds coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    #[inline]
    pub fn put(&mut self, coord: Coord, value: i32) {
        debug_assert!(self.contains(coord), "{coord} outside {}x{}", self.width, self.height);
        let i = self.layout.index(coord, self.width, self.height);
        self.cells.as_mut()[i] = value;
    }

    /// Borrow as a [`GridMut`] so any grid can be handed to a settler.
    pub fn view_mut(&mut self) -> GridMut<'_> {
        Grid {
            cells: self.cells.as_mut(),
            width: self.width,
            height: self.height,
            layout: self.layout,
        }
    }
}
