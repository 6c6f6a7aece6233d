//! Console and JSON rendering of puzzles and results.
//!
//! Everything writes to any [`WriteColor`], so the CLI hands in a
//! `StandardStream` and tests hand in a `termcolor::Buffer`.

use std::collections::{BTreeMap, HashSet};
use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::grid::Grid;
use crate::solver::{Match, ScanStats, SolveResult};
use crate::word_list::WordList;

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn color_choice(self) -> ColorChoice {
        match self {
            ColorMode::Auto => {
                if io::IsTerminal::is_terminal(&io::stdout()) {
                    ColorChoice::Auto
                } else {
                    ColorChoice::Never
                }
            }
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
        }
    }

    #[must_use]
    pub fn stdout(self) -> StandardStream {
        StandardStream::stdout(self.color_choice())
    }
}

fn found_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Green)).set_bold(true);
    spec
}

fn missing_spec() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Red));
    spec
}

fn heading<W: WriteColor>(out: &mut W, title: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "-".repeat(title.chars().count()))?;
    out.reset()?;
    writeln!(out)
}

/// Echo the puzzle and the words about to be searched for.
pub fn print_intro<W: WriteColor>(out: &mut W, grid: &Grid, words: &WordList) -> io::Result<()> {
    heading(out, "Solving puzzle:")?;
    write!(out, "{grid}")?;
    writeln!(out)?;
    heading(out, "Words to find:")?;
    for word in words {
        writeln!(out, "{word}")?;
    }
    writeln!(out)
}

/// The grid with every cell covered by a match highlighted.
pub fn print_solved_grid<W: WriteColor>(out: &mut W, grid: &Grid, matches: &[Match]) -> io::Result<()> {
    let covered: HashSet<(usize, usize)> = matches.iter().flat_map(Match::cells).collect();
    for (r, row) in grid.rows().enumerate() {
        for (c, symbol) in row.iter().enumerate() {
            if c > 0 {
                write!(out, " ")?;
            }
            if covered.contains(&(r, c)) {
                out.set_color(&found_spec())?;
                write!(out, "{symbol}")?;
                out.reset()?;
            } else {
                write!(out, "{symbol}")?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One `WORD: true|false` line per target word, in word-list order.
///
/// With `locations`, each occurrence is listed under its word.
pub fn print_status<W: WriteColor>(out: &mut W, result: &SolveResult, locations: bool) -> io::Result<()> {
    for (word, found) in result.status.iter() {
        write!(out, "{word}: ")?;
        out.set_color(&if found { found_spec() } else { missing_spec() })?;
        write!(out, "{found}")?;
        out.reset()?;
        writeln!(out)?;

        if locations {
            for m in result.matches_for(word) {
                writeln!(out, "  {}", describe_match(m))?;
            }
        }
    }
    Ok(())
}

/// `(row, col) -> (row, col) DIR`, zero-based.
#[must_use]
pub fn describe_match(m: &Match) -> String {
    let (end_r, end_c) = m.end();
    match m.direction {
        Some(direction) => format!(
            "({}, {}) -> ({end_r}, {end_c}) {}",
            m.row,
            m.col,
            direction.abbreviation()
        ),
        None => format!("({}, {})", m.row, m.col),
    }
}

#[derive(serde::Serialize)]
struct JsonReport<'a> {
    found: BTreeMap<String, bool>,
    matches: &'a [Match],
    stats: &'a ScanStats,
    elapsed_ms: f64,
}

/// Serialize a result as pretty JSON.
///
/// # Errors
///
/// Only if serialization itself fails.
pub fn report_json(result: &SolveResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        found: result.status.to_map(),
        matches: &result.matches,
        stats: &result.stats,
        elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
    })
}
