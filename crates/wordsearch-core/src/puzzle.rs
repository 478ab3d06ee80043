//! Finished puzzles and the formats they are written in.

use crate::{Grid, Placement, Position, Result, WordList};
use serde::Serialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// A completed puzzle: the filled grid, its words, and where each word went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    grid: Grid,
    words: WordList,
    placements: Vec<Placement>,
}

/// JSON shape of a puzzle
#[derive(Serialize)]
struct PuzzleExport<'a> {
    size: usize,
    grid: Vec<String>,
    words: &'a WordList,
    placements: Vec<PlacementExport<'a>>,
}

#[derive(Serialize)]
struct PlacementExport<'a> {
    word: &'a str,
    #[serde(flatten)]
    placement: Placement,
}

impl Puzzle {
    /// `placements[i]` is where `words[i]` was written.
    pub fn new(grid: Grid, words: WordList, placements: Vec<Placement>) -> Self {
        debug_assert_eq!(words.len(), placements.len());
        Self {
            grid,
            words,
            placements,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    pub fn words(&self) -> &WordList {
        &self.words
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Cells covered by some placed word
    pub fn answer_cells(&self) -> HashSet<Position> {
        self.words
            .iter()
            .zip(&self.placements)
            .flat_map(|(word, placement)| placement.cells(word.len()))
            .collect()
    }

    /// Grid as text, one row per line, letters optionally separated by a space
    pub fn render(&self, spaced: bool) -> String {
        let sep = if spaced { " " } else { "" };
        let mut out = String::with_capacity(self.grid.size() * (self.grid.size() * 2 + 1));
        for row in self.grid.rows() {
            let cells: Vec<String> = row.iter().map(char::to_string).collect();
            out.push_str(&cells.join(sep));
            out.push('\n');
        }
        out
    }

    /// Write the save format: unseparated rows, then the lowercase word list
    /// joined by `;`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.render(false).as_bytes())?;
        writeln!(writer, "{}", self.words.to_save_line())?;
        writer.flush()?;
        Ok(())
    }

    /// Save to `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        self.write_to(BufWriter::new(file))?;
        log::info!("Saved puzzle to {}", path.display());
        Ok(())
    }

    /// Pretty JSON with the grid rows, word list and answer key
    pub fn to_json(&self) -> Result<String> {
        let export = PuzzleExport {
            size: self.grid.size(),
            grid: self.grid.rows().map(|row| row.into_iter().collect()).collect(),
            words: &self.words,
            placements: self
                .words
                .iter()
                .zip(&self.placements)
                .map(|(word, &placement)| PlacementExport {
                    word: word.as_str(),
                    placement,
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&export)?)
    }
}

impl std::fmt::Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Direction, Word};

    /// 2x2 puzzle with AB written east along row 0 and a fixed fill
    fn ab_puzzle() -> Puzzle {
        let mut grid = Grid::new(2).unwrap();
        grid.set(Position::new(0, 0), 'A');
        grid.set(Position::new(0, 1), 'B');
        grid.set(Position::new(1, 0), 'Q');
        grid.set(Position::new(1, 1), 'Z');
        let words: WordList = vec![Word::parse("AB").unwrap()].into_iter().collect();
        let placement = Placement::new(Position::new(0, 0), Direction::East);
        Puzzle::new(grid, words, vec![placement])
    }

    #[test]
    fn test_save_format() {
        let mut buf = Vec::new();
        ab_puzzle().write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "AB\nQZ\nab\n");
    }

    #[test]
    fn test_render() {
        let puzzle = ab_puzzle();
        assert_eq!(puzzle.render(true), "A B\nQ Z\n");
        assert_eq!(puzzle.render(false), "AB\nQZ\n");
        assert_eq!(puzzle.to_string(), "A B\nQ Z\n");
    }

    #[test]
    fn test_answer_cells() {
        let cells = ab_puzzle().answer_cells();
        assert_eq!(cells.len(), 2);
        assert!(cells.contains(&Position::new(0, 0)));
        assert!(cells.contains(&Position::new(0, 1)));
    }

    #[test]
    fn test_json_export() {
        let json = ab_puzzle().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["size"], 2);
        assert_eq!(value["grid"][1], "QZ");
        assert_eq!(value["words"][0], "AB");
        assert_eq!(value["placements"][0]["word"], "AB");
        assert_eq!(value["placements"][0]["direction"], "East");
        assert_eq!(value["placements"][0]["start"]["row"], 0);
    }
}
