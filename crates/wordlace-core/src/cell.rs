//! Grid cell coordinates.
//!
//! A [`Cell`] is a 0-indexed `(row, col)` pair. Cells also define the fixed
//! row-major mapping between 2D coordinates and the flattened 1D tile view:
//! `flat_index = row * size + col`. Any consumer of
//! [`LetterGrid::flatten`](crate::LetterGrid::flatten) must reproduce exactly
//! this mapping, so both conversions live here in one place.

use std::fmt::{self, Display};

use tinyvec::TinyVec;

/// An ordered run of cells, as occupied by one placed word.
///
/// Puzzle words are short, so runs are stored inline up to 12 cells and only
/// spill to the heap beyond that.
pub type CellRun = TinyVec<[Cell; 12]>;

/// A 0-indexed `(row, col)` coordinate on the board.
///
/// # Examples
///
/// ```
/// use wordlace_core::Cell;
///
/// let cell = Cell::new(2, 7);
/// assert_eq!(cell.row(), 2);
/// assert_eq!(cell.col(), 7);
///
/// // Row-major flat mapping, and its inverse
/// assert_eq!(cell.flat_index(10), 27);
/// assert_eq!(Cell::from_flat_index(27, 10), cell);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell from row and column indices.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row index.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column index.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Converts this cell into its row-major flat index for a grid of the
    /// given size.
    ///
    /// The mapping is `row * size + col`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Cell;
    ///
    /// assert_eq!(Cell::new(0, 0).flat_index(10), 0);
    /// assert_eq!(Cell::new(9, 9).flat_index(10), 99);
    /// ```
    #[must_use]
    pub const fn flat_index(self, size: u8) -> usize {
        self.row as usize * size as usize + self.col as usize
    }

    /// Converts a row-major flat index back into a cell for a grid of the
    /// given size.
    ///
    /// This is the exact inverse of [`Cell::flat_index`]:
    /// `row = index / size`, `col = index % size`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or the resulting row does not fit the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::Cell;
    ///
    /// assert_eq!(Cell::from_flat_index(27, 10), Cell::new(2, 7));
    /// ```
    #[must_use]
    pub fn from_flat_index(index: usize, size: u8) -> Self {
        assert!(size > 0, "grid size must be positive");
        let row = u8::try_from(index / size as usize).expect("flat index out of range");
        assert!(row < size, "flat index out of range");
        #[expect(clippy::cast_possible_truncation)]
        let col = (index % size as usize) as u8;
        Self { row, col }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
