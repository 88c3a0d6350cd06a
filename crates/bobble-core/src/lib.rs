//! Bobble - a dice-based word-search game engine
//!
//! This crate provides the core logic for Bobble, including:
//! - Letter dice and the pooling rules used to roll a board
//! - The square letter grid and its board-string encoding
//! - The dictionary oracle interface and an in-memory word list
//! - A depth-first word finder that prunes on dictionary prefixes
//! - A game facade tying a board to its search results
//!
//! # Modules
//!
//! - [`dice`]: Dice catalog and dice pools
//! - [`grid`]: Cells, paths and the letter grid
//! - [`dictionary`]: Word membership and prefix queries
//! - [`finder`]: Word search over a grid
//! - [`game`]: Board plus lazily computed words
//!
//! # Example
//!
//! ```
//! use bobble_core::{Game, WordList};
//!
//! let words = WordList::new(["ABE", "FED"]);
//! let mut game = Game::from_board_string(3, "ABCDEFGHI", words).unwrap();
//!
//! let found = game.has_word("abe").unwrap();
//! assert_eq!(found.path.len(), 3);
//! assert_eq!(game.find_all_words().len(), 2);
//! ```

pub mod dice;
pub mod dictionary;
pub mod finder;
pub mod game;
pub mod grid;

// Re-export commonly used types
pub use dice::{Die, DicePool, CATALOG};
pub use dictionary::{Dictionary, DictionaryError, Lookup, WordList, MIN_WORD_LENGTH};
pub use finder::{SearchMode, SearchReport, Word, WordFinder};
pub use game::{Game, WordCache};
pub use grid::{Cell, Grid, GridError, GridJson, Path};
