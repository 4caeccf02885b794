//! Game session state.

use wordlace_core::{AnswerEntry, Cell, Word};
use wordlace_generator::GeneratedBoard;

use crate::{FoundWord, Selection};

/// A word-search game session.
///
/// Wraps a generated board and tracks which words the player has found.
/// The session only does bookkeeping; deciding when the game is over (all
/// words found, time expired) is the caller's job, fed by
/// [`Game::all_found`] and friends.
///
/// # Example
///
/// ```
/// use wordlace_game::Game;
/// use wordlace_generator::{BoardGenerator, GeneratorConfig};
///
/// let words = ["cat", "dog"].iter().map(|word| word.parse().unwrap()).collect();
/// let generator = BoardGenerator::new(GeneratorConfig::new(10, words).unwrap());
/// let board = generator.generate().unwrap();
/// let mut game = Game::new(board);
///
/// assert_eq!(game.found_count(), 0);
/// assert_eq!(game.word_count(), 2);
/// assert!(!game.all_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: GeneratedBoard,
    found: Vec<bool>,
}

impl Game {
    /// Creates a new session over a generated board with no words found.
    #[must_use]
    pub fn new(board: GeneratedBoard) -> Self {
        let found = vec![false; board.answers.len()];
        Self { board, found }
    }

    /// Returns the underlying board.
    #[must_use]
    pub fn board(&self) -> &GeneratedBoard {
        &self.board
    }

    /// Resolves a cell to its answer entry without touching any session
    /// state.
    ///
    /// Returns `None` for filler cells and out-of-board coordinates.
    #[must_use]
    pub fn resolve(&self, cell: Cell) -> Option<&AnswerEntry> {
        self.board.answers.resolve(cell)
    }

    /// Selects a cell and updates the found-word bookkeeping.
    ///
    /// The first hit on a word marks it found and returns
    /// [`Selection::Found`] with the word's cells (for highlighting) and its
    /// one-based tag (for label strikethrough). Later hits on the same word
    /// return [`Selection::AlreadyFound`]. Filler cells and coordinates
    /// outside the board return [`Selection::Miss`]; selection never fails.
    ///
    /// # Example
    ///
    /// ```
    /// use wordlace_game::{Game, Selection};
    /// use wordlace_generator::{BoardGenerator, GeneratorConfig};
    ///
    /// let words = ["cat"].iter().map(|word| word.parse().unwrap()).collect();
    /// let generator = BoardGenerator::new(GeneratorConfig::new(10, words).unwrap());
    /// let board = generator.generate().unwrap();
    /// let cell = board.answers.entries()[0].cells()[0];
    /// let mut game = Game::new(board);
    ///
    /// let Selection::Found(hit) = game.select(cell) else {
    ///     panic!("first hit marks the word found");
    /// };
    /// assert_eq!(hit.word.as_str(), "CAT");
    /// assert_eq!(hit.tag, 1);
    /// assert!(game.all_found());
    /// ```
    pub fn select(&mut self, cell: Cell) -> Selection {
        let hit = self
            .board
            .answers
            .entries()
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.cells().contains(&cell))
            .map(|(index, entry)| {
                (
                    index,
                    FoundWord {
                        word: entry.word().clone(),
                        tag: index + 1,
                        cells: entry.cells().iter().copied().collect(),
                    },
                )
            });
        let Some((index, hit)) = hit else {
            return Selection::Miss;
        };
        let Some(found) = self.found.get_mut(index) else {
            return Selection::Miss;
        };

        if *found {
            Selection::AlreadyFound(hit)
        } else {
            *found = true;
            Selection::Found(hit)
        }
    }

    /// Returns the number of words found so far.
    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|&&found| found).count()
    }

    /// Returns the total number of placed words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.found.len()
    }

    /// Returns `true` once every word has been found.
    ///
    /// An empty word list counts as all found.
    #[must_use]
    pub fn all_found(&self) -> bool {
        self.found.iter().all(|&found| found)
    }

    /// Returns whether the given word has been found.
    ///
    /// Words that were never placed report `false`.
    #[must_use]
    pub fn is_found(&self, word: &Word) -> bool {
        self.board
            .answers
            .tag(word)
            .and_then(|tag| self.found.get(tag - 1))
            .copied()
            .unwrap_or(false)
    }

    /// Returns an iterator over the found words in input-list order.
    pub fn found_words(&self) -> impl Iterator<Item = &Word> {
        self.board
            .answers
            .words()
            .zip(&self.found)
            .filter_map(|(word, &found)| found.then_some(word))
    }
}
