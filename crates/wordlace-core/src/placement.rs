//! Word placements.

use crate::{Cell, CellRun, Direction};

/// One word's position on the board: a direction, a start cell, and the
/// ordered run of cells the word occupies.
///
/// Cell `i` always equals `start + i * delta(direction)`, which is guaranteed
/// by construction: the only way to build a placement is
/// [`Placement::from_start`], which computes the run itself and refuses runs
/// that leave the board.
///
/// The word text is bound to a placement at the answer-index level, not here.
///
/// # Examples
///
/// ```
/// use wordlace_core::{Cell, Direction, Placement};
///
/// let placement = Placement::from_start(Direction::Down, Cell::new(1, 4), 3, 10).unwrap();
/// assert_eq!(placement.len(), 3);
/// assert_eq!(placement.start(), Cell::new(1, 4));
/// assert_eq!(placement.cells()[2], Cell::new(3, 4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    direction: Direction,
    start: Cell,
    cells: CellRun,
}

impl Placement {
    /// Computes the placement of `len` cells from `start` in `direction` on a
    /// board of the given size.
    ///
    /// Returns `None` when the run would leave the board.
    #[must_use]
    pub fn from_start(direction: Direction, start: Cell, len: usize, size: u8) -> Option<Self> {
        let cells = direction.run(start, len, size)?;
        Some(Self {
            direction,
            start,
            cells,
        })
    }

    /// Returns the placement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the cell holding the word's first letter.
    #[must_use]
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Returns the occupied cells in reading order.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the number of occupied cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the placement occupies no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
