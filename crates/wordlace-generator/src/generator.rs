//! Board generation.

use rand::seq::IndexedRandom as _;
use wordlace_core::{AnswerIndex, Cell, LetterGrid, Word};

use crate::{BoardSeed, GeneratorConfig, engine};

/// An error that occurs during board generation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// No free placement remains for a word, even by exhaustive scan.
    ///
    /// The board is saturated: earlier placements (or a small grid) left no
    /// run of unfilled cells long enough for this word.
    #[display("no placement left for {word} after {attempts} random attempts")]
    PlacementExhausted {
        /// The word that could not be placed.
        word: Word,
        /// The random attempt cap that was exhausted first.
        attempts: u32,
    },
}

/// A fully generated board: the completed grid, the answer index, and the
/// seed that produced them.
///
/// The grid is complete (every cell holds a letter) and the answer index has
/// exactly one entry per input word, in input-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBoard {
    /// The completed letter grid.
    pub grid: LetterGrid,
    /// Where every word ended up.
    pub answers: AnswerIndex,
    /// The seed that produced this board.
    pub seed: BoardSeed,
}

/// Word-search board generator.
///
/// Places every configured word into a fresh grid along one of five
/// directions with no cell sharing, then fills the leftover cells with random
/// letters from the configured alphabet. Each call builds a new grid and
/// answer index from scratch; nothing is reused between generations.
///
/// # Examples
///
/// ```
/// use wordlace_generator::{BoardGenerator, GeneratorConfig};
///
/// let words = ["swift", "kotlin", "java"]
///     .iter()
///     .map(|word| word.parse().unwrap())
///     .collect();
/// let generator = BoardGenerator::new(GeneratorConfig::new(10, words).unwrap());
/// let board = generator.generate().unwrap();
///
/// assert!(board.grid.is_complete());
/// assert_eq!(board.answers.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    config: GeneratorConfig,
}

impl BoardGenerator {
    /// Creates a generator from a validated configuration.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the generator's configuration.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates a board from a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::PlacementExhausted`] when a word cannot be
    /// placed on the saturated board. No partial board is returned.
    pub fn generate(&self) -> Result<GeneratedBoard, GenerateError> {
        self.generate_with_seed(BoardSeed::random())
    }

    /// Generates the board determined by the given seed.
    ///
    /// The same seed and configuration always produce the same board.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::PlacementExhausted`] when a word cannot be
    /// placed on the saturated board. No partial board is returned.
    pub fn generate_with_seed(&self, seed: BoardSeed) -> Result<GeneratedBoard, GenerateError> {
        let mut rng = seed.rng();
        let mut grid = LetterGrid::new(self.config.size());
        let mut answers = AnswerIndex::new();

        for word in self.config.words() {
            let placement =
                engine::place_word(word, &mut grid, &mut rng, self.config.max_attempts())
                    .ok_or_else(|| GenerateError::PlacementExhausted {
                        word: word.clone(),
                        attempts: self.config.max_attempts(),
                    })?;
            answers.insert(word.clone(), placement);
        }

        let alphabet = self.config.alphabet();
        for index in 0..grid.cell_count() {
            let cell = Cell::from_flat_index(index, grid.size());
            if grid.get(cell).is_none()
                // the config rejects empty alphabets, so choose always hits
                && let Some(&letter) = alphabet.choose(&mut rng)
            {
                grid.set(cell, letter);
            }
        }

        Ok(GeneratedBoard {
            grid,
            answers,
            seed,
        })
    }
}
