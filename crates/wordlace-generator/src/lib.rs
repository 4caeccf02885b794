//! Word-search board generation.
//!
//! This crate turns a validated word list into a finished board: every word
//! is placed into a fresh grid along one of five directions with no cell
//! sharing, the remaining cells are filled with random letters, and the
//! resulting answer index maps each word to the cells it occupies.
//!
//! Placement is randomized with bounded retries. Each attempt rolls a start
//! cell and one direction together; if the cap is exhausted the engine falls
//! back to an exhaustive scan of the remaining valid placements, so
//! generation always terminates: it either produces a board or reports
//! [`GenerateError::PlacementExhausted`].
//!
//! Generation is deterministic per [`BoardSeed`], which makes boards
//! reproducible across runs and platforms.
//!
//! # Examples
//!
//! ```
//! use wordlace_generator::{BoardGenerator, BoardSeed, GeneratorConfig};
//!
//! let words = ["swift", "kotlin", "objectivec", "variable", "java", "mobile"]
//!     .iter()
//!     .map(|word| word.parse().unwrap())
//!     .collect();
//! let config = GeneratorConfig::new(10, words).unwrap();
//! let generator = BoardGenerator::new(config);
//!
//! let board = generator.generate().unwrap();
//! assert!(board.grid.is_complete());
//!
//! // The same seed reproduces the same board
//! let again = generator.generate_with_seed(board.seed).unwrap();
//! assert_eq!(again, board);
//! ```

pub mod config;
mod engine;
pub mod generator;
pub mod seed;

// Re-export commonly used types
pub use self::{
    config::{ConfigError, DEFAULT_MAX_ATTEMPTS, GeneratorConfig},
    generator::{BoardGenerator, GenerateError, GeneratedBoard},
    seed::{BoardSeed, ParseBoardSeedError},
};
