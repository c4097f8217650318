//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of board construction and rendering on *your* machine.
//! - Builds lattice boards of a few sizes, several times each, and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -r 5`
//! - Print the smallest board:       `cargo run --bin bench_local --release -- -p`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparable numbers.
//! - One warm-up run per case is done (not included in timing).

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;
use crosswords::crossword::Crossword;
use crosswords::position::{Orientation, Position};
use crosswords::render::{render, RenderConfig};
use crosswords::word::Word;

/// Time building and rendering lattice-shaped boards.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print the rendered board of the first case
    #[arg(short = 'p', long = "print")]
    print_board: bool,
}

/// Lines per direction for each case.
const CASES: [usize; 4] = [8, 32, 128, 256];

/// Spacing between parallel words; leaves one empty line between them.
const STRIDE: usize = 2;

/// Letter at a lattice cell; crossing words agree because both read it from here.
fn lattice_letter(x: usize, y: usize) -> char {
    char::from(b'A' + ((x + y) % 26) as u8)
}

/// `n` horizontal and `n` vertical words crossing on every even cell.
fn lattice_words(n: usize) -> Vec<Word> {
    let span = STRIDE * (n - 1) + 1;
    let mut words = Vec::with_capacity(2 * n);
    for i in 0..n {
        let line = STRIDE * i;
        let across: String = (0..span).map(|x| lattice_letter(x, line)).collect();
        let down: String = (0..span).map(|y| lattice_letter(line, y)).collect();
        words.push(Word::new(Position::new(0, line), Orientation::Horizontal, &across));
        words.push(Word::new(Position::new(line, 0), Orientation::Vertical, &down));
    }
    words
}

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    xs.sort_by(f64::total_cmp);
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

fn build(words: &[Word]) -> Crossword {
    let mut board = Crossword::new(words[0].clone(), []);
    for word in &words[1..] {
        board.insert_word(word);
    }
    board
}

fn main() {
    let cli = Cli::parse();
    crosswords::log::init_logger(false);

    let config = RenderConfig::default();
    // (lines, median build seconds, median render seconds, placed words)
    let mut summary: Vec<(usize, f64, f64, usize)> = Vec::with_capacity(CASES.len());

    for (idx, &n) in CASES.iter().enumerate() {
        let words = lattice_words(n);
        eprintln!("\n[{:02}] {n}x{n} lattice ({} words)", idx + 1, words.len());

        let warmup = build(&words);
        if idx == 0 && cli.print_board {
            println!("{}", render(&warmup, &config));
        }

        let mut build_times = Vec::with_capacity(cli.num_repeats);
        let mut render_times = Vec::with_capacity(cli.num_repeats);
        let mut placed = 0;

        for rep in 0..cli.num_repeats {
            let t_build = Instant::now();
            let board = build(black_box(&words));
            let build_secs = t_build.elapsed().as_secs_f64();

            let t_render = Instant::now();
            let text = render(&board, &config);
            let render_secs = t_render.elapsed().as_secs_f64();
            let _keep = black_box(text.len());

            let (across, down) = board.word_count();
            placed = across + down;
            build_times.push(build_secs);
            render_times.push(render_secs);

            eprintln!(
                "  run {:>2}/{:>2}: build {build_secs:.4}s, render {render_secs:.4}s",
                rep + 1,
                cli.num_repeats
            );
        }

        summary.push((n, median(build_times), median(render_times), placed));
    }

    eprintln!("\n==== Summary ====");
    eprintln!("{:>8} | {:>10} | {:>10} | {:>8}", "lines", "build (s)", "render (s)", "# words");
    eprintln!("{:-<8}-+-{:-<10}-+-{:-<10}-+-{:-<8}", "", "", "", "");
    for (n, build_s, render_s, placed) in &summary {
        eprintln!("{n:>8} | {build_s:>10.4} | {render_s:>10.4} | {placed:>8}");
    }
}
