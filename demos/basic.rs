//! Basic example of using the word-search engine

use wordsearch_core::{PuzzleBuilder, WordList};

fn main() {
    let words = WordList::parse("rust, cargo; crate trait\nborrow lifetime").expect("valid words");

    // Seeded so the output is the same on every run
    println!("Generating a 10x10 puzzle...\n");
    let mut builder = PuzzleBuilder::with_seed(42);
    let puzzle = match builder.build_puzzle(10, &words) {
        Ok(puzzle) => puzzle,
        Err(e) => {
            eprintln!("Could not build puzzle: {e}");
            return;
        }
    };

    println!("{}", puzzle);

    println!("Answer key:");
    for (word, placement) in puzzle.words().iter().zip(puzzle.placements()) {
        println!("  {:<10} {}", word, placement);
    }

    println!("\nSave format:\n");
    let mut out = Vec::new();
    if puzzle.write_to(&mut out).is_ok() {
        print!("{}", String::from_utf8_lossy(&out));
    }
}
