//! The answer index and selection resolver.
//!
//! The answer index records where every word ended up on a generated board.
//! Entries keep the input word-list order, because the surrounding UI
//! addresses its word labels by one-based list position (see
//! [`AnswerIndex::tag`]).
//!
//! Resolution is the read path: given a tapped cell, [`AnswerIndex::resolve`]
//! reports the word that cell belongs to, or `None` for filler. It never
//! mutates anything, so once generation has finished an index can be shared
//! freely between concurrent readers.

use crate::{Cell, Placement, Word};

/// One word's entry in the answer index: the word plus its placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerEntry {
    word: Word,
    placement: Placement,
}

impl AnswerEntry {
    /// Returns the placed word.
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    /// Returns the word's placement.
    #[must_use]
    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    /// Returns the cells the word occupies, in reading order.
    ///
    /// Grid letters read along these cells spell the word.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.placement.cells()
    }
}

/// Mapping from placed words to the cells they occupy.
///
/// Built once per generation and replaced wholesale on regeneration; there is
/// no partial-update path. Words are unique within an index (the generator
/// rejects duplicate input words before placing anything).
///
/// # Examples
///
/// ```
/// use wordlace_core::{AnswerIndex, Cell, Direction, Placement, Word};
///
/// let mut answers = AnswerIndex::new();
/// let word: Word = "cat".parse().unwrap();
/// let placement = Placement::from_start(Direction::Right, Cell::new(0, 0), 3, 10).unwrap();
/// answers.insert(word.clone(), placement);
///
/// let entry = answers.resolve(Cell::new(0, 1)).unwrap();
/// assert_eq!(entry.word(), &word);
/// assert!(answers.resolve(Cell::new(5, 5)).is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerIndex {
    entries: Vec<AnswerEntry>,
}

impl AnswerIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a word's placement to the index.
    ///
    /// Entries keep insertion order; the caller is responsible for inserting
    /// each word at most once.
    pub fn insert(&mut self, word: Word, placement: Placement) {
        self.entries.push(AnswerEntry { word, placement });
    }

    /// Returns the entry for the given word, if it was placed.
    #[must_use]
    pub fn get(&self, word: &Word) -> Option<&AnswerEntry> {
        self.entries.iter().find(|entry| &entry.word == word)
    }

    /// Returns the one-based position of the word in the input list.
    ///
    /// This is the tag the surrounding UI uses to address the word's label
    /// when striking it through.
    #[must_use]
    pub fn tag(&self, word: &Word) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.word == word)
            .map(|index| index + 1)
    }

    /// Resolves a cell to the word it belongs to.
    ///
    /// Scans entries in insertion order and returns the first whose cell list
    /// contains `cell`; placements never overlap, so at most one entry can
    /// match. Returns `None` for filler cells and for coordinates outside the
    /// board, which is an ordinary miss rather than an error.
    #[must_use]
    pub fn resolve(&self, cell: Cell) -> Option<&AnswerEntry> {
        self.entries
            .iter()
            .find(|entry| entry.cells().contains(&cell))
    }

    /// Returns all entries in input-list order.
    #[must_use]
    pub fn entries(&self) -> &[AnswerEntry] {
        &self.entries
    }

    /// Returns an iterator over the placed words in input-list order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.entries.iter().map(|entry| &entry.word)
    }

    /// Returns the number of placed words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no word has been placed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
