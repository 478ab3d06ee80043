use serde::{Deserialize, Serialize};

/// A cell coordinate in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step once in `direction`, or `None` if that would leave the non-negative quadrant.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Position::new(row, col))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight compass directions a word can run in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// All directions in canonical scan order (row-major over the 3x3 neighbourhood).
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// Unit step as `(row delta, col delta)`
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::SouthWest => (1, -1),
            Direction::South => (1, 0),
            Direction::SouthEast => (1, 1),
        }
    }

    /// Short compass label
    pub fn abbrev(self) -> &'static str {
        match self {
            Direction::NorthWest => "NW",
            Direction::North => "N",
            Direction::NorthEast => "NE",
            Direction::West => "W",
            Direction::East => "E",
            Direction::SouthWest => "SW",
            Direction::South => "S",
            Direction::SouthEast => "SE",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.abbrev())
    }
}

/// A candidate line for a word: where it starts and which way it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub start: Position,
    pub direction: Direction,
}

impl Placement {
    pub const fn new(start: Position, direction: Direction) -> Self {
        Self { start, direction }
    }

    /// The `len` cells this placement covers, starting at `start`.
    ///
    /// Cells that would fall off the top or left edge end the iterator early;
    /// callers check the count (and the far edge) against the grid.
    pub fn cells(self, len: usize) -> impl Iterator<Item = Position> {
        std::iter::successors(Some(self.start), move |pos| pos.step(self.direction)).take(len)
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.start, self.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directions_are_distinct_unit_steps() {
        let mut deltas: Vec<_> = Direction::ALL.iter().map(|d| d.delta()).collect();
        deltas.sort();
        deltas.dedup();
        assert_eq!(deltas.len(), 8);
        assert!(!deltas.contains(&(0, 0)));
        for (dr, dc) in deltas {
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
        }
    }

    #[test]
    fn test_step_stops_at_top_left_edge() {
        assert_eq!(Position::new(0, 0).step(Direction::North), None);
        assert_eq!(Position::new(0, 0).step(Direction::West), None);
        assert_eq!(Position::new(1, 1).step(Direction::NorthWest), Some(Position::new(0, 0)));
        assert_eq!(Position::new(0, 0).step(Direction::SouthEast), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_placement_cells() {
        let placement = Placement::new(Position::new(2, 0), Direction::NorthEast);
        let cells: Vec<_> = placement.cells(3).collect();
        assert_eq!(
            cells,
            vec![Position::new(2, 0), Position::new(1, 1), Position::new(0, 2)]
        );

        // Runs off the top after two cells
        let placement = Placement::new(Position::new(1, 1), Direction::North);
        assert_eq!(placement.cells(3).count(), 2);
    }
}
