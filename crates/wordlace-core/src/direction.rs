//! Word placement directions.

use std::fmt::{self, Display};

use crate::{Cell, CellRun};

/// A direction a word can be placed in on the board.
///
/// Reading order is always from the start cell outward: a word placed
/// [`Direction::Left`] has its first letter at the start cell and runs toward
/// column 0.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Cell, Direction};
///
/// assert_eq!(Direction::Right.delta(), (0, 1));
/// assert_eq!(Direction::Up.delta(), (-1, 0));
///
/// // A 4-letter span fits to the right of (0, 6) on a 10x10 board...
/// assert!(Direction::Right.run(Cell::new(0, 6), 4, 10).is_some());
/// // ...but not from (0, 7)
/// assert!(Direction::Right.run(Cell::new(0, 7), 4, 10).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward increasing columns.
    Right,
    /// Toward increasing rows.
    Down,
    /// Toward decreasing columns.
    Left,
    /// Toward decreasing rows.
    Up,
    /// Toward increasing rows and columns simultaneously.
    DiagonalDownRight,
}

impl Direction {
    /// Array containing all five placement directions.
    pub const ALL: [Self; 5] = [
        Self::Right,
        Self::Down,
        Self::Left,
        Self::Up,
        Self::DiagonalDownRight,
    ];

    /// Returns the per-step `(row, col)` delta of this direction.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
            Self::DiagonalDownRight => (1, 1),
        }
    }

    /// Computes the run of `len` cells starting at `start` in this direction
    /// on a board of the given size.
    ///
    /// Returns `None` when any cell of the run would fall outside
    /// `[0, size)` in either coordinate; no partial run is produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordlace_core::{Cell, Direction};
    ///
    /// let run = Direction::Down.run(Cell::new(7, 2), 3, 10).unwrap();
    /// assert_eq!(&run[..], &[Cell::new(7, 2), Cell::new(8, 2), Cell::new(9, 2)]);
    ///
    /// // Up runs toward row 0
    /// let run = Direction::Up.run(Cell::new(2, 0), 3, 10).unwrap();
    /// assert_eq!(&run[..], &[Cell::new(2, 0), Cell::new(1, 0), Cell::new(0, 0)]);
    /// ```
    #[must_use]
    pub fn run(self, start: Cell, len: usize, size: u8) -> Option<CellRun> {
        let (row_delta, col_delta) = self.delta();
        let mut row = i32::from(start.row());
        let mut col = i32::from(start.col());

        let mut cells = CellRun::new();
        for _ in 0..len {
            // try_from rejects negative coordinates
            let r = u8::try_from(row).ok()?;
            let c = u8::try_from(col).ok()?;
            if r >= size || c >= size {
                return None;
            }
            cells.push(Cell::new(r, c));
            row += i32::from(row_delta);
            col += i32::from(col_delta);
        }
        Some(cells)
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
            Self::Up => "up",
            Self::DiagonalDownRight => "diagonal",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas() {
        assert_eq!(Direction::Right.delta(), (0, 1));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::DiagonalDownRight.delta(), (1, 1));
    }

    #[test]
    fn test_run_bounds() {
        // L = 4, N = 10 boundary cases for every direction
        assert!(Direction::Right.run(Cell::new(0, 6), 4, 10).is_some());
        assert!(Direction::Right.run(Cell::new(0, 7), 4, 10).is_none());
        assert!(Direction::Left.run(Cell::new(0, 3), 4, 10).is_some());
        assert!(Direction::Left.run(Cell::new(0, 2), 4, 10).is_none());
        assert!(Direction::Down.run(Cell::new(6, 0), 4, 10).is_some());
        assert!(Direction::Down.run(Cell::new(7, 0), 4, 10).is_none());
        assert!(Direction::Up.run(Cell::new(3, 0), 4, 10).is_some());
        assert!(Direction::Up.run(Cell::new(2, 0), 4, 10).is_none());
        assert!(
            Direction::DiagonalDownRight
                .run(Cell::new(6, 6), 4, 10)
                .is_some()
        );
        assert!(
            Direction::DiagonalDownRight
                .run(Cell::new(6, 7), 4, 10)
                .is_none()
        );
        assert!(
            Direction::DiagonalDownRight
                .run(Cell::new(7, 6), 4, 10)
                .is_none()
        );
    }

    #[test]
    fn test_run_cells_follow_delta() {
        for direction in Direction::ALL {
            let start = Cell::new(4, 4);
            let run = direction.run(start, 3, 10).unwrap();
            assert_eq!(run.len(), 3);
            assert_eq!(run[0], start);
            let (row_delta, col_delta) = direction.delta();
            for pair in run.windows(2) {
                assert_eq!(
                    i16::from(pair[1].row()) - i16::from(pair[0].row()),
                    i16::from(row_delta)
                );
                assert_eq!(
                    i16::from(pair[1].col()) - i16::from(pair[0].col()),
                    i16::from(col_delta)
                );
            }
        }
    }

    #[test]
    fn test_full_length_run_has_single_valid_start() {
        // A word of length N only fits from one row/column per direction
        assert!(Direction::Down.run(Cell::new(0, 5), 10, 10).is_some());
        assert!(Direction::Down.run(Cell::new(1, 5), 10, 10).is_none());
        assert!(Direction::Up.run(Cell::new(9, 5), 10, 10).is_some());
        assert!(Direction::Up.run(Cell::new(8, 5), 10, 10).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Direction::Right.to_string(), "right");
        assert_eq!(Direction::DiagonalDownRight.to_string(), "diagonal");
    }
}
