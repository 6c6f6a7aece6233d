//! The grid scanner: finds target words along every direction from every cell.
//!
//! For each cell the scanner steps into the [`PrefixIndex`] with the cell's
//! symbol, then walks outward one symbol at a time in each enabled
//! direction, following the matching trie edge. The walk stops as soon as an
//! edge is missing; by trie monotonicity no longer string along that ray can
//! be a target word. Every trie node reached that ends a word is a match.
//!
//! # Minimum length
//!
//! [`ScanOptions::min_length`] (default 3) is both a geometric pre-filter
//! (directions with fewer than `min_length - 1` cells of room are skipped)
//! and a floor on what counts as a match. Target words shorter than it are
//! never found, even when they are physically present.
//!
//! # Examples
//!
//! ```
//! use wordsearch::{solve, Grid, WordList};
//!
//! let grid = Grid::parse_from_str("F O D R\nP E O Z\nZ S E A\nY E P T")?;
//! let words = WordList::from_words(["FOD", "FEET", "ZA"]);
//! let result = solve(&grid, &words);
//!
//! assert_eq!(result.status.is_found("FOD"), Some(true));
//! assert_eq!(result.status.is_found("FEET"), Some(true));
//! assert_eq!(result.status.is_found("ZA"), Some(false));
//! # Ok::<(), wordsearch::PuzzleError>(())
//! ```
//!
//! ## Custom traversal order
//!
//! ```
//! use wordsearch::{Grid, ScanOptions, Scanner, WordList};
//! use wordsearch::solver::NoopObserver;
//!
//! let grid = Grid::parse_from_str("CAT")?;
//! let words = WordList::from_words(["CAT", "TAC"]);
//! let scanner = Scanner::new(&grid, &words, ScanOptions::default());
//!
//! let mut result = scanner.empty_result();
//! for (row, col) in grid.positions().collect::<Vec<_>>().into_iter().rev() {
//!     scanner.scan_cell(row, col, &mut result, &mut NoopObserver);
//! }
//! assert!(result.status.all_found());
//! # Ok::<(), wordsearch::PuzzleError>(())
//! ```

use std::ops::AddAssign;
use std::time::Duration;

use instant::Instant;
use log::{debug, info, trace};

use crate::direction::{Direction, DirectionSet};
use crate::found::FoundStatus;
#[cfg(feature = "parallel")]
use crate::found::SharedFoundStatus;
use crate::grid::Grid;
use crate::prefix_index::{PrefixIndex, WordId};
use crate::word_list::WordList;

/// Default floor on match length.
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Knobs for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Directions to read along.
    pub directions: DirectionSet,
    /// Shortest candidate that may count as a match. Values of 0 and 1 both
    /// allow single-cell matches.
    pub min_length: usize,
    /// Spread rows over the rayon pool. Ignored without the `parallel` feature.
    pub parallel: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            directions: DirectionSet::All,
            min_length: DEFAULT_MIN_LENGTH,
            parallel: false,
        }
    }
}

impl ScanOptions {
    #[must_use]
    pub fn with_directions(mut self, directions: DirectionSet) -> Self {
        self.directions = directions;
        self
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// One occurrence of a target word in the grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Match {
    pub word: String,
    pub word_id: WordId,
    pub row: usize,
    pub col: usize,
    /// `None` only for single-cell matches.
    pub direction: Option<Direction>,
    /// Length in symbols.
    pub len: usize,
}

impl Match {
    /// Coordinates covered by the match, start cell first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.len).filter_map(move |step| match self.direction {
            Some(direction) => direction.offset(self.row, self.col, step),
            None => (step == 0).then_some((self.row, self.col)),
        })
    }

    /// Coordinates of the last symbol.
    #[must_use]
    pub fn end(&self) -> (usize, usize) {
        self.cells().last().unwrap_or((self.row, self.col))
    }
}

/// Counters collected during a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct ScanStats {
    pub cells_visited: usize,
    /// Cells whose own symbol starts no target word.
    pub cells_pruned: usize,
    pub directions_scanned: usize,
    /// Directions skipped because the ray was too short.
    pub directions_skipped: usize,
    /// Trie edges followed, root edges included.
    pub trie_steps: usize,
    pub matches: usize,
}

impl AddAssign for ScanStats {
    fn add_assign(&mut self, rhs: ScanStats) {
        self.cells_visited += rhs.cells_visited;
        self.cells_pruned += rhs.cells_pruned;
        self.directions_scanned += rhs.directions_scanned;
        self.directions_skipped += rhs.directions_skipped;
        self.trie_steps += rhs.trie_steps;
        self.matches += rhs.matches;
    }
}

/// Hook for watching a scan. Both callbacks default to doing nothing.
pub trait ScanObserver {
    fn on_cell_visit(&mut self, _row: usize, _col: usize, _symbol: char) {}
    fn on_match(&mut self, _found: &Match) {}
}

/// Observer that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {}

/// Observer that traces cell visits and logs matches.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl ScanObserver for LogObserver {
    fn on_cell_visit(&mut self, row: usize, col: usize, symbol: char) {
        trace!("visiting ({row}, {col}) '{symbol}'");
    }

    fn on_match(&mut self, found: &Match) {
        log_match(found);
    }
}

fn log_match(found: &Match) {
    match found.direction {
        Some(direction) => debug!(
            "found {} at ({}, {}) going {direction}",
            found.word, found.row, found.col
        ),
        None => debug!("found {} at ({}, {})", found.word, found.row, found.col),
    }
}

/// Output of a scan.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// Found flag per target word.
    pub status: FoundStatus,
    /// Every occurrence seen, in scan order. A word may appear more than once.
    pub matches: Vec<Match>,
    pub stats: ScanStats,
    pub elapsed: Duration,
}

impl SolveResult {
    /// Occurrences of `word`.
    pub fn matches_for<'r>(&'r self, word: &'r str) -> impl Iterator<Item = &'r Match> + 'r {
        self.matches.iter().filter(move |m| m.word == word)
    }
}

/// Drives the scan over one grid for one word list.
///
/// The prefix index is built once in [`Scanner::new`] and only read after.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    grid: &'a Grid,
    words: &'a WordList,
    index: PrefixIndex,
    options: ScanOptions,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(grid: &'a Grid, words: &'a WordList, options: ScanOptions) -> Scanner<'a> {
        Scanner {
            grid,
            words,
            index: PrefixIndex::build(words),
            options,
        }
    }

    #[must_use]
    pub fn index(&self) -> &PrefixIndex {
        &self.index
    }

    #[must_use]
    pub fn options(&self) -> ScanOptions {
        self.options
    }

    /// A result with every word not found and zeroed counters.
    #[must_use]
    pub fn empty_result(&self) -> SolveResult {
        SolveResult {
            status: FoundStatus::new(self.words),
            matches: Vec::new(),
            stats: ScanStats::default(),
            elapsed: Duration::ZERO,
        }
    }

    /// Scan the whole grid row by row, logging through [`LogObserver`].
    ///
    /// Dispatches to [`Scanner::scan_parallel`] when [`ScanOptions::parallel`]
    /// is set and the `parallel` feature is enabled.
    #[must_use]
    pub fn scan(&self) -> SolveResult {
        #[cfg(feature = "parallel")]
        {
            if self.options.parallel {
                return self.scan_parallel();
            }
        }
        #[cfg(not(feature = "parallel"))]
        {
            if self.options.parallel {
                log::warn!("parallel scan requested but the `parallel` feature is disabled");
            }
        }
        self.scan_with(&mut LogObserver)
    }

    /// Scan the whole grid row by row, reporting to `observer`.
    pub fn scan_with<O: ScanObserver + ?Sized>(&self, observer: &mut O) -> SolveResult {
        let start = Instant::now();
        let mut result = self.empty_result();
        for (row, col) in self.grid.positions() {
            self.scan_cell(row, col, &mut result, observer);
        }
        result.elapsed = start.elapsed();
        self.log_summary(&result);
        result
    }

    /// Scan every direction out of one cell, folding matches into `result`.
    ///
    /// Cells may be scanned in any order; the final status doesn't depend on it.
    /// Coordinates outside the grid are ignored.
    pub fn scan_cell<O: ScanObserver + ?Sized>(
        &self,
        row: usize,
        col: usize,
        result: &mut SolveResult,
        observer: &mut O,
    ) {
        let Some(symbol) = self.grid.get(row, col) else {
            return;
        };
        observer.on_cell_visit(row, col, symbol);
        self.walk_cell(row, col, symbol, &mut result.stats, &mut |found: Match| {
            result.status.mark_found_id(found.word_id);
            observer.on_match(&found);
            result.matches.push(found);
        });
    }

    /// Rows spread over the rayon pool; found flags are flipped atomically.
    ///
    /// Produces the same status, matches and counters as [`Scanner::scan_with`].
    #[cfg(feature = "parallel")]
    #[must_use]
    pub fn scan_parallel(&self) -> SolveResult {
        use rayon::prelude::*;

        let start = Instant::now();
        let shared = SharedFoundStatus::new(self.words);
        let per_row: Vec<(Vec<Match>, ScanStats)> = (0..self.grid.height())
            .into_par_iter()
            .map(|row| {
                let mut stats = ScanStats::default();
                let mut matches = Vec::new();
                for col in 0..self.grid.width() {
                    let Some(symbol) = self.grid.get(row, col) else {
                        continue;
                    };
                    trace!("visiting ({row}, {col}) '{symbol}'");
                    self.walk_cell(row, col, symbol, &mut stats, &mut |found: Match| {
                        shared.mark(found.word_id);
                        log_match(&found);
                        matches.push(found);
                    });
                }
                (matches, stats)
            })
            .collect();

        let mut result = SolveResult {
            status: shared.into_found_status(),
            matches: Vec::new(),
            stats: ScanStats::default(),
            elapsed: Duration::ZERO,
        };
        for (matches, stats) in per_row {
            result.matches.extend(matches);
            result.stats += stats;
        }
        result.elapsed = start.elapsed();
        self.log_summary(&result);
        result
    }

    fn walk_cell<F: FnMut(Match)>(
        &self,
        row: usize,
        col: usize,
        symbol: char,
        stats: &mut ScanStats,
        on_match: &mut F,
    ) {
        stats.cells_visited += 1;
        let Some(start) = self.index.step(self.index.root(), symbol) else {
            stats.cells_pruned += 1;
            return;
        };
        stats.trie_steps += 1;

        let min_length = self.options.min_length;
        if min_length <= 1 {
            if let Some(id) = self.index.word_at(start) {
                stats.matches += 1;
                on_match(self.make_match(id, row, col, None, 1));
            }
        }

        // at least one more cell is needed to extend at all
        let needed = min_length.max(2) - 1;
        for &direction in self.options.directions.directions() {
            let room = self.grid.room(row, col, direction);
            if room < needed {
                stats.directions_skipped += 1;
                continue;
            }
            stats.directions_scanned += 1;

            let mut node = start;
            for step in 1..=room {
                let Some(next) = direction
                    .offset(row, col, step)
                    .and_then(|(r, c)| self.grid.get(r, c))
                    .and_then(|s| self.index.step(node, s))
                else {
                    break;
                };
                stats.trie_steps += 1;
                node = next;

                let len = step + 1;
                if len < min_length {
                    continue;
                }
                if let Some(id) = self.index.word_at(node) {
                    stats.matches += 1;
                    on_match(self.make_match(id, row, col, Some(direction), len));
                }
            }
        }
    }

    fn make_match(
        &self,
        word_id: WordId,
        row: usize,
        col: usize,
        direction: Option<Direction>,
        len: usize,
    ) -> Match {
        Match {
            // ids come from an index built over this very list
            word: self.words.words()[word_id.index()].clone(),
            word_id,
            row,
            col,
            direction,
            len,
        }
    }

    fn log_summary(&self, result: &SolveResult) {
        info!(
            "scanned {}x{} grid for {} words: {} found, {} matches in {:.3}ms",
            self.grid.height(),
            self.grid.width(),
            self.words.len(),
            result.status.found_count(),
            result.matches.len(),
            result.elapsed.as_secs_f64() * 1000.0
        );
        debug!("scan stats: {:?}", result.stats);
    }
}

/// Scan `grid` for `words` with default options.
#[must_use]
pub fn solve(grid: &Grid, words: &WordList) -> SolveResult {
    solve_with_options(grid, words, ScanOptions::default())
}

#[must_use]
pub fn solve_with_options(grid: &Grid, words: &WordList, options: ScanOptions) -> SolveResult {
    Scanner::new(grid, words, options).scan()
}
