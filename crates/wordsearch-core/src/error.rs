//! Error types for puzzle construction and word loading.

use crate::MAX_SIZE;

/// Everything that can abort a puzzle run.
///
/// None of these are recoverable inside the engine: the first error ends the
/// current build or load, and no partial result is returned.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    /// A token from the word source is empty or contains non-letters after uppercasing.
    #[error("Word '{token}' contains non-alphabetic characters")]
    InvalidWord { token: String },

    /// Requested grid size is outside `1..=MAX_SIZE`.
    #[error("Puzzle size {size} is out of range; must be between 1 and {max}", max = MAX_SIZE)]
    InvalidSize { size: usize },

    /// The word is longer than the grid side and cannot fit in any direction.
    #[error("Word '{word}' is too long for grid size {size}")]
    WordTooLong { word: String, size: usize },

    /// No line in the current grid can hold the word.
    #[error("Could not place word '{word}' in the grid")]
    PlacementImpossible { word: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PuzzleError>;
