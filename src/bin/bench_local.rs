//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! - Loads a puzzle and word list once, then solves repeatedly and reports the median.
//! - Runs every combination of direction set and sequential/parallel scan.
//! - One warm-up run per case is not included in timing.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:   `cargo run --bin bench_local --release`
//! - Multiple repeats:  `cargo run --bin bench_local --release -- -r 50`
//! - See all flags:     `cargo run --bin bench_local -- --help`

use clap::Parser;
use std::hint::black_box;
use std::path::PathBuf;
use std::time::Instant;
use wordsearch::{solve_with_options, DirectionSet, Grid, ScanOptions, WordList};

/// Simple local benchmark runner: load a puzzle once, time several scan configurations.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle file
    #[arg(
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/computer_terms/puzzle.txt")
    )]
    puzzle: PathBuf,

    /// Word file
    #[arg(
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/computer_terms/words.txt")
    )]
    words: PathBuf,

    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 20)]
    num_repeats: usize,
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

fn cases() -> Vec<(&'static str, ScanOptions)> {
    let mut cases = vec![
        ("all", ScanOptions::default()),
        ("legacy", ScanOptions::default().with_directions(DirectionSet::Legacy)),
    ];
    if cfg!(feature = "parallel") {
        cases.push(("all/parallel", ScanOptions::default().with_parallel(true)));
    }
    cases
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let t_load = Instant::now();
    let grid = Grid::load_from_path(&cli.puzzle)?;
    let words = WordList::load_from_path(&cli.words)?;
    eprintln!(
        "Loaded {}x{} puzzle and {} words in {:.3}ms",
        grid.height(),
        grid.width(),
        words.len(),
        t_load.elapsed().as_secs_f64() * 1000.0
    );

    eprintln!("\n{:<14} | {:>11} | {:>7}", "case", "median (µs)", "found");
    eprintln!("{:-<14}-+-{:-<11}-+-{:-<7}", "", "", "");
    for (name, options) in cases() {
        let _warmup = solve_with_options(&grid, &words, options);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut found = 0;
        for _ in 0..cli.num_repeats {
            let t_solve = Instant::now();
            let result = solve_with_options(black_box(&grid), &words, options);
            times.push(t_solve.elapsed().as_secs_f64() * 1e6);
            found = black_box(result.status.found_count());
        }

        eprintln!("{name:<14} | {:>11.1} | {found:>3}/{:<3}", median(times), words.len());
    }

    Ok(())
}
