//! Word-search game session management.
//!
//! This crate wraps a generated board in a [`Game`] session that resolves
//! cell selections to words and tracks which words have been found. It does
//! not render anything, run timers, or decide when the game ends; those
//! belong to the surrounding application, which reads the session's
//! aggregate progress (found count, all-found flag) to make that call.
//!
//! # Examples
//!
//! ```
//! use wordlace_game::{Game, Selection};
//! use wordlace_generator::{BoardGenerator, GeneratorConfig};
//!
//! let words = ["cat", "dog"].iter().map(|word| word.parse().unwrap()).collect();
//! let generator = BoardGenerator::new(GeneratorConfig::new(10, words).unwrap());
//! let board = generator.generate().unwrap();
//!
//! let cat_cell = board.answers.entries()[0].cells()[0];
//! let mut game = Game::new(board);
//!
//! match game.select(cat_cell) {
//!     Selection::Found(hit) => {
//!         assert_eq!(hit.word.as_str(), "CAT");
//!         assert_eq!(hit.tag, 1); // one-based label tag
//!     }
//!     other => panic!("expected Found, got {other:?}"),
//! }
//! assert_eq!(game.found_count(), 1);
//! assert!(!game.all_found());
//! ```

mod game;
mod selection;

pub use self::{
    game::Game,
    selection::{FoundWord, Selection},
};
