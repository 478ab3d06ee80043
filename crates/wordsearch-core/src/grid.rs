use crate::{Position, PuzzleError, Result};

/// Largest supported grid side
pub const MAX_SIZE: usize = 40;

/// Square letter grid; `None` marks a cell no word or fill has claimed yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// How an empty cell is rendered
    pub const EMPTY_MARKER: char = '-';

    /// Create an empty `size` x `size` grid
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 || size > MAX_SIZE {
            return Err(PuzzleError::InvalidSize { size });
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether `pos` lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    fn index(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} out of bounds for grid of size {}",
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// Letter at `pos`, or `None` if the cell is still empty.
    ///
    /// Panics if `pos` is out of bounds.
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[self.index(pos)]
    }

    /// Write a letter into `pos`. Panics if `pos` is out of bounds.
    pub fn set(&mut self, pos: Position, ch: char) {
        debug_assert!(ch.is_ascii_uppercase(), "grid letters must be A-Z, got {ch:?}");
        let idx = self.index(pos);
        self.cells[idx] = Some(ch);
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Number of cells not yet holding a letter
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Iterate over every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Position::new(row, col)))
    }

    /// Iterate over rows, rendering empty cells with [`Grid::EMPTY_MARKER`]
    pub fn rows(&self) -> impl Iterator<Item = Vec<char>> + '_ {
        self.cells
            .chunks(self.size)
            .map(|row| row.iter().map(|c| c.unwrap_or(Self::EMPTY_MARKER)).collect())
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4).unwrap();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.empty_count(), 16);
        assert!(grid.positions().all(|p| grid.is_empty(p)));
    }

    #[test]
    fn test_size_limits() {
        assert!(matches!(Grid::new(0), Err(PuzzleError::InvalidSize { size: 0 })));
        assert!(matches!(Grid::new(41), Err(PuzzleError::InvalidSize { size: 41 })));
        assert!(Grid::new(1).is_ok());
        assert!(Grid::new(MAX_SIZE).is_ok());
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3).unwrap();
        let pos = Position::new(1, 2);
        grid.set(pos, 'Q');
        assert_eq!(grid.get(pos), Some('Q'));
        assert!(!grid.is_empty(pos));
        assert_eq!(grid.empty_count(), 8);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_out_of_bounds_panics() {
        let grid = Grid::new(3).unwrap();
        grid.get(Position::new(3, 0));
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(2).unwrap();
        grid.set(Position::new(0, 0), 'A');
        grid.set(Position::new(1, 1), 'B');
        assert_eq!(grid.to_string(), "A -\n- B\n");
    }
}
