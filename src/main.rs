use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wordsearch::render::{self, ColorMode};
use wordsearch::{DirectionSet, Grid, PuzzleError, ScanOptions, Scanner, WordList};

/// Word-search puzzle solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Puzzle file: one row per line, letters optionally separated by spaces
    puzzle: PathBuf,

    /// Word file: one target word per line
    words: PathBuf,

    /// Which directions to read along
    #[arg(short, long, value_enum, default_value_t = DirectionSet::All)]
    directions: DirectionSet,

    /// Shortest word that can be found (1 allows single letters)
    #[arg(short = 'm', long, default_value_t = wordsearch::solver::DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// List where each word was found
    #[arg(short, long)]
    locations: bool,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Skip echoing the puzzle and word list
    #[arg(short, long)]
    quiet: bool,

    /// Scan rows in parallel
    #[arg(short, long)]
    parallel: bool,
}

/// Entry point of the wordsearch CLI.
///
/// Delegates to [`try_main`], printing any error before exiting with code 1.
fn main() -> ExitCode {
    wordsearch::log::init_logger(wordsearch::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(puzzle_err) = e.downcast_ref::<PuzzleError>() {
            eprintln!("Error: {}", puzzle_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Steps:
/// 1. Parse CLI arguments.
/// 2. Load the puzzle and the word list.
/// 3. Scan.
/// 4. Print the result on stdout, timings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let grid = Grid::load_from_path(&cli.puzzle)?;
    let words = WordList::load_from_path(&cli.words)?;
    log::info!(
        "puzzle h: {} w: {}, {} words",
        grid.height(),
        grid.width(),
        words.len()
    );

    let options = ScanOptions::default()
        .with_directions(cli.directions)
        .with_min_length(cli.min_length)
        .with_parallel(cli.parallel);
    let result = Scanner::new(&grid, &words, options).scan();

    if cli.json {
        println!("{}", render::report_json(&result)?);
    } else {
        let mut stdout = cli.color.stdout();
        if !cli.quiet {
            render::print_intro(&mut stdout, &grid, &words)?;
        }
        render::print_solved_grid(&mut stdout, &grid, &result.matches)?;
        writeln!(stdout)?;
        render::print_status(&mut stdout, &result, cli.locations)?;
    }

    eprintln!(
        "Found {}/{} words in {:.3}ms.",
        result.status.found_count(),
        result.status.len(),
        result.elapsed.as_secs_f64() * 1000.0
    );

    Ok(())
}
