mod logging;
mod render;
mod theme;

use clap::Parser;
use render::RenderOptions;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use wordsearch_core::{PuzzleBuilder, WordList, MAX_SIZE};

/// Generate a word-search puzzle from a word list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list file; words separated by commas, semicolons or whitespace
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// Grid side length (1-40)
    #[arg(short = 's', long = "size")]
    size: usize,

    /// Save the grid and word list to this file
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Seed for a reproducible puzzle
    #[arg(long)]
    seed: Option<u64>,

    /// Print letters without separating spaces
    #[arg(long)]
    compact: bool,

    /// Highlight the placed words and list where they are
    #[arg(long)]
    answers: bool,

    /// Print the puzzle as JSON instead of a grid
    #[arg(long, conflicts_with_all = ["compact", "answers"])]
    json: bool,

    /// Enable debug logging (also WORDSEARCH_DEBUG)
    #[arg(long)]
    debug: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var("WORDSEARCH_DEBUG").is_ok();
    logging::init_logger(debug_enabled);

    if cli.size > MAX_SIZE {
        println!("Error: maximum puzzle size is {MAX_SIZE}x{MAX_SIZE}");
        return ExitCode::FAILURE;
    }

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load words, build the puzzle, print it, and save it if asked.
fn try_main(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let words = WordList::load_from_path(&cli.input)?;
    if words.is_empty() {
        log::warn!("{} contains no words; the grid will be all filler", cli.input.display());
    }

    let mut builder = match cli.seed {
        Some(seed) => PuzzleBuilder::with_seed(seed),
        None => PuzzleBuilder::new(),
    };
    let puzzle = builder.build_puzzle(cli.size, &words)?;

    if cli.json {
        println!("{}", puzzle.to_json()?);
    } else {
        let options = RenderOptions {
            spaced: !cli.compact,
            answers: cli.answers,
        };
        render::render(&mut io::stdout().lock(), &puzzle, options)?;
    }

    if let Some(output) = &cli.output {
        puzzle.save(output)?;
    }

    Ok(())
}
