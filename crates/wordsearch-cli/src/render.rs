use crate::theme::Theme;
use crossterm::{
    queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use std::io::{self, Write};
use wordsearch_core::{Grid, Position, Puzzle};

/// How the grid is printed
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Separate letters with a space
    pub spaced: bool,
    /// Color the cells of placed words and list the answer key
    pub answers: bool,
}

/// Print `puzzle` to `out`
pub fn render<W: Write>(out: &mut W, puzzle: &Puzzle, options: RenderOptions) -> io::Result<()> {
    if !options.answers {
        out.write_all(puzzle.render(options.spaced).as_bytes())?;
        return out.flush();
    }
    render_highlighted(out, puzzle, options.spaced, &Theme::default())
}

fn render_highlighted<W: Write>(
    out: &mut W,
    puzzle: &Puzzle,
    spaced: bool,
    theme: &Theme,
) -> io::Result<()> {
    let answers = puzzle.answer_cells();
    let grid = puzzle.grid();

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            if spaced && col > 0 {
                queue!(out, Print(' '))?;
            }
            let pos = Position::new(row, col);
            let letter = grid.get(pos).unwrap_or(Grid::EMPTY_MARKER);
            if answers.contains(&pos) {
                queue!(
                    out,
                    SetBackgroundColor(theme.answer_bg),
                    SetForegroundColor(theme.answer),
                    Print(letter),
                    SetBackgroundColor(Color::Reset)
                )?;
            } else {
                queue!(out, SetForegroundColor(theme.filler), Print(letter))?;
            }
        }
        queue!(out, ResetColor, Print('\n'))?;
    }

    queue!(out, Print('\n'), SetForegroundColor(theme.info))?;
    for (word, placement) in puzzle.words().iter().zip(puzzle.placements()) {
        queue!(out, Print(format!("{:<12} {}\n", word.as_str(), placement)))?;
    }
    queue!(out, ResetColor)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordsearch_core::{PuzzleBuilder, WordList};

    fn puzzle() -> Puzzle {
        let words = WordList::parse("cat").unwrap();
        PuzzleBuilder::with_seed(9).build_puzzle(4, &words).unwrap()
    }

    #[test]
    fn test_plain_render_matches_core() {
        let puzzle = puzzle();
        let mut buf = Vec::new();
        render(&mut buf, &puzzle, RenderOptions { spaced: true, answers: false }).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), puzzle.render(true));
    }

    #[test]
    fn test_highlighted_render_lists_answers() {
        let puzzle = puzzle();
        let mut buf = Vec::new();
        render(&mut buf, &puzzle, RenderOptions { spaced: false, answers: true }).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains('\u{1b}'));
        assert!(text.contains("CAT"));
    }
}
