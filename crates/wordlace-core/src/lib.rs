//! Core data structures for word-search puzzles.
//!
//! This crate provides the data model shared by board generation and game
//! session management: letters, grid cells, placement directions, validated
//! words, the letter grid itself, and the answer index that maps each placed
//! word back to the cells it occupies.
//!
//! # Overview
//!
//! - [`letter`]: Type-safe representation of the uppercase letters A-Z
//! - [`cell`]: 0-indexed `(row, col)` grid coordinates and their row-major
//!   flat-index mapping
//! - [`direction`]: The five directions a word may be placed in, with their
//!   per-step deltas and bounded spans
//! - [`word`]: Validated, uppercase-normalized puzzle words
//! - [`grid`]: The N×N letter matrix, including the flattened 1D view used by
//!   tile-based renderers
//! - [`placement`]: One word's direction, start cell, and occupied cell run
//! - [`answers`]: The word → cell-list index and the selection resolver that
//!   answers "which word does this cell belong to?"
//!
//! # Examples
//!
//! ```
//! use wordlace_core::{Cell, Direction, Letter, LetterGrid, Placement};
//!
//! let mut grid = LetterGrid::new(10);
//! assert!(grid.get(Cell::new(0, 0)).is_none()); // unfilled
//!
//! // Spans are bounds-checked before any letter is written
//! let run = Placement::from_start(Direction::Right, Cell::new(0, 7), 3, 10);
//! assert!(run.is_some());
//! let run = Placement::from_start(Direction::Right, Cell::new(0, 8), 3, 10);
//! assert!(run.is_none()); // would leave the grid
//!
//! grid.set(Cell::new(0, 0), Letter::from_char('a').unwrap());
//! assert_eq!(grid.get(Cell::new(0, 0)).unwrap().as_char(), 'A');
//! ```

pub mod answers;
pub mod cell;
pub mod direction;
pub mod grid;
pub mod letter;
pub mod placement;
pub mod word;

// Re-export commonly used types
pub use self::{
    answers::{AnswerEntry, AnswerIndex},
    cell::{Cell, CellRun},
    direction::Direction,
    grid::{LetterGrid, ParseLetterGridError},
    letter::Letter,
    placement::Placement,
    word::{ParseWordError, Word},
};
