//! Word-search puzzle engine.
//!
//! Places each word of a list into a square grid along one of eight
//! directions, letting words cross where they share a letter, then fills the
//! rest of the grid with random letters.
//!
//! ```
//! use wordsearch_core::{PuzzleBuilder, WordList};
//!
//! let words = WordList::parse("cat, dog; bird").unwrap();
//! let puzzle = PuzzleBuilder::with_seed(1).build_puzzle(6, &words).unwrap();
//! assert_eq!(puzzle.grid().empty_count(), 0);
//! ```

mod builder;
mod error;
mod grid;
mod placer;
mod puzzle;
mod types;
mod words;

pub use builder::PuzzleBuilder;
pub use error::{PuzzleError, Result};
pub use grid::{Grid, MAX_SIZE};
pub use placer::Placer;
pub use puzzle::Puzzle;
pub use types::{Direction, Placement, Position};
pub use words::{Word, WordList};
