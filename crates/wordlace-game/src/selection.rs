//! Selection outcomes.

use wordlace_core::{CellRun, Word};

/// A word hit by a selection, with everything the UI needs to react.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundWord {
    /// The word the selected cell belongs to.
    pub word: Word,
    /// One-based position of the word in the input list, for addressing its
    /// label when striking it through.
    pub tag: usize,
    /// Every cell the word occupies, for highlighting.
    pub cells: CellRun,
}

/// The outcome of selecting a cell.
///
/// Selection never fails: a coordinate outside the board or on a filler cell
/// is simply a [`Selection::Miss`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Selection {
    /// The cell belongs to a word that had not been found yet; the word is
    /// now marked found.
    Found(FoundWord),
    /// The cell belongs to a word that was already found earlier.
    AlreadyFound(FoundWord),
    /// The cell belongs to no word.
    Miss,
}
