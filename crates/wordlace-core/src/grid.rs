//! The letter grid.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::{Cell, Letter};

/// An error that occurs when parsing a [`LetterGrid`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseLetterGridError {
    /// The input contained a character that is neither a letter nor an
    /// unfilled-cell marker.
    #[display("invalid character in grid: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
    /// The number of cells was not a perfect square.
    #[display("cell count {_0} is not a perfect square")]
    NotSquare(#[error(not(source))] usize),
    /// The grid side length exceeds the supported maximum of 255.
    #[display("grid size {_0} is too large")]
    TooLarge(#[error(not(source))] usize),
}

/// A square matrix of letter cells.
///
/// Every cell starts unfilled (`None`) and is written exactly once during
/// board generation, first by word placement and then by the random filler
/// sweep. The grid itself does not police overwrites; the free-space check
/// belongs to the placement engine.
///
/// Construction is the reset operation: a new game discards the old grid and
/// builds a fresh one, there is no incremental update path.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Cell, Letter, LetterGrid};
///
/// let mut grid = LetterGrid::new(3);
/// assert!(!grid.is_complete());
///
/// for index in 0..grid.cell_count() {
///     grid.set(Cell::from_flat_index(index, 3), Letter::ALL[index % 26]);
/// }
/// assert!(grid.is_complete());
/// assert_eq!(grid.flatten(), vec!['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: u8,
    cells: Vec<Option<Letter>>,
}

impl LetterGrid {
    /// Creates a grid of the given side length with every cell unfilled.
    #[must_use]
    pub fn new(size: u8) -> Self {
        Self {
            size,
            cells: vec![None; usize::from(size) * usize::from(size)],
        }
    }

    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Returns the total number of cells (`size * size`).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the cell lies within the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row() < self.size && cell.col() < self.size
    }

    /// Returns the letter at the given cell, or `None` if the cell is still
    /// unfilled.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<Letter> {
        assert!(self.contains(cell), "cell {cell} outside {0}x{0} grid", self.size);
        self.cells[cell.flat_index(self.size)]
    }

    /// Writes a letter to the given cell.
    ///
    /// # Panics
    ///
    /// Panics if the cell lies outside the grid.
    pub fn set(&mut self, cell: Cell, letter: Letter) {
        assert!(self.contains(cell), "cell {cell} outside {0}x{0} grid", self.size);
        self.cells[cell.flat_index(self.size)] = Some(letter);
    }

    /// Returns `true` when no cell remains unfilled.
    ///
    /// This holds for every grid returned by board generation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the row-major 1D view of the grid, for renderers that lay the
    /// board out as a flat list of tiles.
    ///
    /// The mapping is fixed to [`Cell::flat_index`]; unfilled cells render as
    /// `'.'`, matching [`LetterGrid::to_string`].
    #[must_use]
    pub fn flatten(&self) -> Vec<char> {
        self.cells
            .iter()
            .map(|cell| cell.map_or('.', Letter::as_char))
            .collect()
    }
}

impl Display for LetterGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                let ch = self.get(Cell::new(row, col)).map_or('.', Letter::as_char);
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for LetterGrid {
    type Err = ParseLetterGridError;

    /// Parses a grid from a string of letters, ignoring whitespace.
    ///
    /// `.` and `_` mark unfilled cells. The number of non-whitespace
    /// characters must be a perfect square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::new();
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if ch == '.' || ch == '_' {
                cells.push(None);
            } else {
                let letter =
                    Letter::from_char(ch).ok_or(ParseLetterGridError::InvalidCharacter(ch))?;
                cells.push(Some(letter));
            }
        }

        let size = cells.len().isqrt();
        if size * size != cells.len() {
            return Err(ParseLetterGridError::NotSquare(cells.len()));
        }
        let size = u8::try_from(size).map_err(|_| ParseLetterGridError::TooLarge(size))?;
        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_unfilled() {
        let grid = LetterGrid::new(10);
        assert_eq!(grid.size(), 10);
        assert_eq!(grid.cell_count(), 100);
        assert!(!grid.is_complete());
        for index in 0..grid.cell_count() {
            assert!(grid.get(Cell::from_flat_index(index, 10)).is_none());
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = LetterGrid::new(4);
        let letter = Letter::from_char('W').unwrap();
        grid.set(Cell::new(2, 3), letter);
        assert_eq!(grid.get(Cell::new(2, 3)), Some(letter));
        assert!(grid.get(Cell::new(3, 2)).is_none());
    }

    #[test]
    #[should_panic(expected = "outside 4x4 grid")]
    fn test_get_out_of_range_panics() {
        let grid = LetterGrid::new(4);
        let _ = grid.get(Cell::new(4, 0));
    }

    #[test]
    fn test_flatten_matches_2d_view() {
        let grid: LetterGrid = "
            AB
            CD
        "
        .parse()
        .unwrap();
        let flat = grid.flatten();
        assert_eq!(flat, vec!['A', 'B', 'C', 'D']);
        for row in 0..grid.size() {
            for col in 0..grid.size() {
                let cell = Cell::new(row, col);
                let expected = grid.get(cell).map_or('.', Letter::as_char);
                assert_eq!(flat[cell.flat_index(grid.size())], expected);
            }
        }
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let grid: LetterGrid = "
            CAT
            .O.
            .G.
        "
        .parse()
        .unwrap();
        assert_eq!(grid.to_string(), "CAT\n.O.\n.G.");
        let reparsed: LetterGrid = grid.to_string().parse().unwrap();
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_from_str_rejects_bad_input() {
        assert_eq!(
            "AB3".repeat(3).parse::<LetterGrid>(),
            Err(ParseLetterGridError::InvalidCharacter('3'))
        );
        assert_eq!(
            "ABCDE".parse::<LetterGrid>(),
            Err(ParseLetterGridError::NotSquare(5))
        );
    }

    #[test]
    fn test_from_str_accepts_underscore_marker() {
        let grid: LetterGrid = "A_ _B".parse().unwrap();
        assert_eq!(grid.size(), 2);
        assert!(grid.get(Cell::new(0, 1)).is_none());
        assert!(grid.get(Cell::new(1, 0)).is_none());
    }
}
