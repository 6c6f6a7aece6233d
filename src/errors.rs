//! Error types for puzzle construction and loading, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! - W001: `NonRectangular` (Grid rows differ in length)
//! - W002: `MultiSymbolCell` (A grid token is not a single symbol)
//! - W003: `Read` (Puzzle or word file could not be read)
//!
//! The scan itself never fails; these errors only arise while turning raw input
//! into a [`Grid`](crate::grid::Grid) or a [`WordList`](crate::word_list::WordList).
//!
//! # Example
//!
//! ```
//! use wordsearch::grid::Grid;
//!
//! match Grid::parse_from_str("A B C\nD E") {
//!     Err(e) => {
//!         assert_eq!(e.code(), "W001");
//!         println!("{}", e.display_detailed());
//!     }
//!     Ok(_) => unreachable!("ragged rows are rejected"),
//! }
//! ```

use std::io;

/// Errors raised while building puzzle inputs.
#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("row {row} has {found} cells but row 0 has {expected}")]
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell \"{token}\" in row {row} is not a single symbol")]
    MultiSymbolCell { row: usize, token: String },

    #[error("failed to read {what} from '{path}': {source}")]
    Read {
        what: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
}

impl From<PuzzleError> for io::Error {
    fn from(pe: PuzzleError) -> Self {
        match pe {
            PuzzleError::Read { source, .. } => source,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

impl PuzzleError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            PuzzleError::NonRectangular { .. } => "W001",
            PuzzleError::MultiSymbolCell { .. } => "W002",
            PuzzleError::Read { .. } => "W003",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            PuzzleError::NonRectangular { .. } => "Grid rows differ in length",
            PuzzleError::MultiSymbolCell { .. } => "A grid token is not a single symbol",
            PuzzleError::Read { .. } => "Puzzle or word file could not be read",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            PuzzleError::NonRectangular { .. } => {
                Some("Every row of the puzzle must have the same number of letters")
            }
            PuzzleError::MultiSymbolCell { .. } => {
                Some("Separate letters with spaces (e.g. 'F O D R') or write the row without spaces ('FODR')")
            }
            PuzzleError::Read { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        let base_msg = self.to_string();
        let code = self.code();
        match self.help() {
            Some(help_text) => format!("{base_msg} ({code})\n{help_text}"),
            None => format!("{base_msg} ({code})"),
        }
    }
}
