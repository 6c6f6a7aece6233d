//! Rectangular grid of single-symbol cells.
//!
//! A [`Grid`] is validated once at construction and immutable afterwards, so
//! the scanner never has to worry about ragged rows.

use std::fmt;

use crate::direction::Direction;
use crate::errors::PuzzleError;

/// Row-major matrix of symbols. Every row has the same width.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Vec<char>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Build a grid from rows.
    ///
    /// An empty row list, or rows that are all empty, give an empty grid.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::NonRectangular`] if any row differs in length from row 0.
    pub fn new<R>(rows: Vec<R>) -> Result<Grid, PuzzleError>
    where
        R: AsRef<[char]>,
    {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, cols) in rows.iter().enumerate() {
            let cols = cols.as_ref();
            if cols.len() != width {
                return Err(PuzzleError::NonRectangular {
                    row,
                    expected: width,
                    found: cols.len(),
                });
            }
            cells.extend_from_slice(cols);
        }
        let height = if width == 0 { 0 } else { rows.len() };
        Ok(Grid {
            cells,
            height,
            width,
        })
    }

    /// Parse a puzzle from text, one row per line.
    ///
    /// Blank lines are skipped. A row containing whitespace is read as
    /// whitespace-separated tokens (`F O D R`), each of which must be one
    /// symbol; otherwise each character is a cell (`FODR`).
    ///
    /// # Errors
    ///
    /// [`PuzzleError::MultiSymbolCell`] for a token longer than one symbol,
    /// [`PuzzleError::NonRectangular`] for ragged rows.
    pub fn parse_from_str(contents: &str) -> Result<Grid, PuzzleError> {
        let mut rows: Vec<Vec<char>> = Vec::new();
        for line in contents.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let row_idx = rows.len();
            let row = if line.contains(char::is_whitespace) {
                line.split_whitespace()
                    .map(|token| {
                        let mut chars = token.chars();
                        match (chars.next(), chars.next()) {
                            (Some(symbol), None) => Ok(symbol),
                            _ => Err(PuzzleError::MultiSymbolCell {
                                row: row_idx,
                                token: token.to_string(),
                            }),
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?
            } else {
                line.chars().collect()
            };
            rows.push(row);
        }
        Grid::new(rows)
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// [`PuzzleError::Read`] if the file can't be read, otherwise whatever
    /// [`Grid::parse_from_str`] reports.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Grid, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::Read {
            what: "puzzle",
            path: path_ref.display().to_string(),
            source,
        })?;
        let grid = Self::parse_from_str(&data)?;
        log::debug!(
            "loaded {}x{} puzzle from {}",
            grid.height,
            grid.width,
            path_ref.display()
        );
        Ok(grid)
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Symbol at `(row, col)`, or `None` outside the grid.
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        (row < self.height).then(|| &self.cells[row * self.width..(row + 1) * self.width])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks_exact panics on 0
        self.cells.chunks_exact(self.width.max(1))
    }

    /// `(row, col)` of every cell in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let width = self.width;
        (0..self.height).flat_map(move |r| (0..width).map(move |c| (r, c)))
    }

    /// See [`Direction::room`].
    #[inline]
    #[must_use]
    pub fn room(&self, row: usize, col: usize, direction: Direction) -> usize {
        direction.room(row, col, self.height, self.width)
    }

    /// Symbols read from `(row, col)` along `direction`, start cell first,
    /// up to the edge of the grid.
    pub fn ray(&self, row: usize, col: usize, direction: Direction) -> impl Iterator<Item = char> + '_ {
        let len = if row < self.height && col < self.width {
            self.room(row, col, direction) + 1
        } else {
            0
        };
        (0..len).filter_map(move |step| {
            let (r, c) = direction.offset(row, col, step)?;
            self.get(r, c)
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: Vec<String> = row.iter().map(char::to_string).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "F O D R\nP E O Z\nZ S E A\nY E P T\n";

    #[test]
    fn test_parse_spaced_rows() {
        let grid = Grid::parse_from_str(SAMPLE).unwrap();
        assert_eq!((grid.height(), grid.width()), (4, 4));
        assert_eq!(grid.get(0, 0), Some('F'));
        assert_eq!(grid.get(3, 3), Some('T'));
        assert_eq!(grid.get(4, 0), None);
        assert_eq!(grid.row(1), Some(&['P', 'E', 'O', 'Z'][..]));
    }

    #[test]
    fn test_parse_compact_rows_matches_spaced() {
        let compact = Grid::parse_from_str("FODR\nPEOZ\nZSEA\nYEPT").unwrap();
        assert_eq!(compact, Grid::parse_from_str(SAMPLE).unwrap());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let grid = Grid::parse_from_str("\n\nC A T\n\n").unwrap();
        assert_eq!((grid.height(), grid.width()), (1, 3));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Grid::parse_from_str("A B C\nD E\nF G H").unwrap_err();
        match err {
            PuzzleError::NonRectangular { row, expected, found } => {
                assert_eq!((row, expected, found), (1, 3, 2));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_multi_symbol_token_rejected() {
        let err = Grid::parse_from_str("A B\nCD E").unwrap_err();
        assert_eq!(err.code(), "W002");
        assert!(err.to_string().contains("\"CD\""));
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::parse_from_str("").unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.positions().count(), 0);
        assert_eq!(grid.rows().count(), 0);

        let grid = Grid::new(vec![Vec::<char>::new(), Vec::new()]).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 0);
    }

    #[test]
    fn test_ray() {
        let grid = Grid::parse_from_str(SAMPLE).unwrap();
        assert_eq!(grid.ray(0, 0, Direction::East).collect::<String>(), "FODR");
        assert_eq!(grid.ray(0, 0, Direction::SouthEast).collect::<String>(), "FEET");
        assert_eq!(grid.ray(3, 3, Direction::NorthWest).collect::<String>(), "TEEF");
        assert_eq!(grid.ray(2, 3, Direction::North).collect::<String>(), "AZR");
        assert_eq!(grid.ray(0, 3, Direction::SouthWest).collect::<String>(), "ROSY");
        assert_eq!(grid.ray(9, 9, Direction::East).count(), 0);
    }

    #[test]
    fn test_positions_row_major() {
        let grid = Grid::parse_from_str("AB\nCD").unwrap();
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(positions, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_display_round_trips() {
        let grid = Grid::parse_from_str(SAMPLE).unwrap();
        assert_eq!(grid.to_string(), SAMPLE);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Grid::load_from_path("no/such/puzzle.txt").unwrap_err();
        assert_eq!(err.code(), "W003");
        assert!(err.to_string().contains("puzzle"));
    }
}
