//! Word placement.
//!
//! Placement is collect-then-choose: every valid line for the word is
//! gathered first and one is drawn uniformly, so no direction or corner of
//! the grid is favoured by scan order.

use crate::{Direction, Grid, Placement, Position, PuzzleError, Result, Word};
use rand::Rng;

/// Unit struct placer; all state lives in the grid and the caller's rng.
pub struct Placer;

impl Placer {
    /// Whether `word` can be written along `placement`: every cell must be in
    /// bounds and either empty or already holding the matching letter.
    pub fn fits(grid: &Grid, word: &Word, placement: Placement) -> bool {
        let mut cells = placement.cells(word.len());
        for letter in word.letters() {
            match cells.next() {
                Some(pos) if grid.contains(pos) => match grid.get(pos) {
                    None => {}
                    Some(existing) if existing == letter => {}
                    Some(_) => return false,
                },
                _ => return false,
            }
        }
        true
    }

    /// Every valid placement for `word`, in canonical order
    /// (direction, then row, then column).
    pub fn candidates(grid: &Grid, word: &Word) -> Vec<Placement> {
        let size = grid.size();
        let mut found = Vec::new();
        for direction in Direction::ALL {
            for row in 0..size {
                for col in 0..size {
                    let placement = Placement::new(Position::new(row, col), direction);
                    if Self::fits(grid, word, placement) {
                        found.push(placement);
                    }
                }
            }
        }
        found
    }

    /// Place `word` somewhere valid, chosen uniformly at random, and return
    /// the chosen line.
    pub fn place<R: Rng + ?Sized>(grid: &mut Grid, word: &Word, rng: &mut R) -> Result<Placement> {
        if word.len() > grid.size() {
            return Err(PuzzleError::WordTooLong {
                word: word.to_string(),
                size: grid.size(),
            });
        }

        let candidates = Self::candidates(grid, word);
        if candidates.is_empty() {
            return Err(PuzzleError::PlacementImpossible {
                word: word.to_string(),
            });
        }

        let choice = candidates[rng.gen_range(0..candidates.len())];
        Self::write(grid, word, choice);

        log::debug!(
            "Placed {} at {} ({} candidates)",
            word,
            choice,
            candidates.len()
        );
        Ok(choice)
    }

    /// Write the letters of `word` along `placement`. Overlap cells are
    /// rewritten with the same letter.
    fn write(grid: &mut Grid, word: &Word, placement: Placement) {
        for (pos, letter) in placement.cells(word.len()).zip(word.letters()) {
            grid.set(pos, letter);
        }
    }
}
