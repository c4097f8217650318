use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use crosswords::crossword::Crossword;
use crosswords::errors::ParseError;
use crosswords::placement_list::PlacementList;
use crosswords::render::{render, RenderConfig, DEFAULT_BACKGROUND};
use crosswords::word::Word;

/// Build a crossword board from word placements and print it
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Placements as x,y,orientation,content (e.g., "1,1,H,computer"); the first one seeds the board
    words: Vec<Word>,

    /// File with one placement per line, placed after the positional words
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Placements of a second board that is merged into the first one
    #[arg(short, long = "merge", num_args = 1..)]
    merge: Vec<Word>,

    /// Character printed for empty cells
    #[arg(short, long, default_value_t = DEFAULT_BACKGROUND)]
    background: char,
}

/// Entry point of the crossword CLI.
///
/// Delegates to [`try_main`], printing any error before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("CROSSWORDS_DEBUG").is_ok();
    crosswords::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(parse_err) = e.downcast_ref::<ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Offer `words` one by one to a board seeded with the first of them,
/// warning about every placement that does not fit.
fn build_board(words: &[Word], label: &str) -> Result<Crossword, ParseError> {
    let (seed, rest) = words.split_first().ok_or(ParseError::NoPlacements)?;
    let mut board = Crossword::new(seed.clone(), []);
    for word in rest {
        if let Err(collision) = board.try_insert_word(word) {
            log::warn!("{label}: skipped {word}: {}", collision.display_detailed());
        }
    }
    Ok(board)
}

fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut words = cli.words;
    if let Some(path) = &cli.file {
        let list = PlacementList::load_from_path(path)?;
        log::info!("Read {} placements from {}", list.words.len(), path.display());
        words.extend(list.words);
    }

    let mut board = build_board(&words, "board")?;

    if !cli.merge.is_empty() {
        let other = build_board(&cli.merge, "merged board")?;
        let placed = board.merge_from(&other);
        let offered = other.words().count();
        if placed < offered {
            log::warn!("{} of {} merged words did not fit", offered - placed, offered);
        }
    }

    println!("{}", render(&board, &RenderConfig::with_background(cli.background)));

    let (width, height) = board.size();
    let (across, down) = board.word_count();
    eprintln!("Board {width}x{height}; {across} across, {down} down.");

    Ok(())
}
