use crate::{Grid, Placer, Position, Puzzle, Result, WordList};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Word-search puzzle builder
///
/// Owns the random source used for both candidate selection and the fill
/// pass, so a seeded builder produces the same puzzle every run.
pub struct PuzzleBuilder<R: Rng = StdRng> {
    rng: R,
}

impl Default for PuzzleBuilder<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl PuzzleBuilder<StdRng> {
    /// Create a builder seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a builder with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> PuzzleBuilder<R> {
    /// Create a builder around any random source
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Build a filled grid containing every word in `words`
    pub fn build(&mut self, size: usize, words: &WordList) -> Result<Grid> {
        self.build_puzzle(size, words).map(Puzzle::into_grid)
    }

    /// Build a puzzle, keeping the word list and the chosen placements as
    /// an answer key.
    ///
    /// Words are placed in list order and the first failure aborts the
    /// build. There is no backtracking over earlier placements.
    pub fn build_puzzle(&mut self, size: usize, words: &WordList) -> Result<Puzzle> {
        let mut grid = Grid::new(size)?;

        let mut placements = Vec::with_capacity(words.len());
        for word in words {
            placements.push(Placer::place(&mut grid, word, &mut self.rng)?);
        }

        let filled = self.fill_empty(&mut grid);
        log::info!(
            "Built {size}x{size} puzzle with {} words ({filled} filler letters)",
            words.len()
        );

        Ok(Puzzle::new(grid, words.clone(), placements))
    }

    /// Assign an independent random letter to each empty cell. Returns how
    /// many cells were filled.
    fn fill_empty(&mut self, grid: &mut Grid) -> usize {
        let empty: Vec<Position> = grid.positions().filter(|&p| grid.is_empty(p)).collect();
        for &pos in &empty {
            grid.set(pos, random_letter(&mut self.rng));
        }
        empty.len()
    }
}

/// Uniform random letter in 'A'..='Z'
fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}
