//! Compass directions the scanner reads along.
//!
//! Each [`Direction`] is a unit `(row_delta, col_delta)` vector. A
//! [`DirectionSet`] selects which of them a scan uses.

use std::fmt;

/// One of the eight compass directions over (row, column) space.
///
/// Rows grow downward, so `South` is `(+1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    /// All eight directions, clockwise from East.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// The five directions of the legacy scan, in legacy order.
    pub const LEGACY: [Direction; 5] = [
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::North,
        Direction::SouthEast,
    ];

    /// `(row_delta, col_delta)`
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
        }
    }

    /// Number of cells reachable from `(row, col)` in this direction before
    /// leaving a `height` x `width` grid, not counting the start cell.
    #[must_use]
    pub fn room(self, row: usize, col: usize, height: usize, width: usize) -> usize {
        let (dr, dc) = self.delta();
        let vertical = match dr {
            1 => height.saturating_sub(row + 1),
            -1 => row,
            _ => usize::MAX,
        };
        let horizontal = match dc {
            1 => width.saturating_sub(col + 1),
            -1 => col,
            _ => usize::MAX,
        };
        vertical.min(horizontal)
    }

    /// The cell `steps` cells away from `(row, col)`, if it doesn't underflow.
    ///
    /// Upper bounds are the caller's concern; see [`Direction::room`].
    #[inline]
    #[must_use]
    pub fn offset(self, row: usize, col: usize, steps: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let r = row.checked_add_signed(dr * steps as isize)?;
        let c = col.checked_add_signed(dc * steps as isize)?;
        Some((r, c))
    }

    /// Short arrow-ish label used in reports ("E", "SW", ...).
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Direction::East => "E",
            Direction::SouthEast => "SE",
            Direction::South => "S",
            Direction::SouthWest => "SW",
            Direction::West => "W",
            Direction::NorthWest => "NW",
            Direction::North => "N",
            Direction::NorthEast => "NE",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Which directions a scan reads along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum DirectionSet {
    /// All eight compass directions.
    #[default]
    All,
    /// East, South, West, North and SouthEast only.
    Legacy,
}

impl DirectionSet {
    #[must_use]
    pub fn directions(self) -> &'static [Direction] {
        match self {
            DirectionSet::All => &Direction::ALL,
            DirectionSet::Legacy => &Direction::LEGACY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deltas_are_unit_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert!(dr.abs() <= 1 && dc.abs() <= 1);
            assert_ne!((dr, dc), (0, 0));
            assert!(seen.insert((dr, dc)), "duplicate delta for {d}");
        }
    }

    #[test]
    fn test_opposite_negates_delta() {
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert_eq!(d.opposite().delta(), (-dr, -dc));
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn test_room_on_4x4() {
        assert_eq!(Direction::East.room(0, 0, 4, 4), 3);
        assert_eq!(Direction::West.room(0, 0, 4, 4), 0);
        assert_eq!(Direction::SouthEast.room(0, 0, 4, 4), 3);
        assert_eq!(Direction::SouthEast.room(1, 2, 4, 4), 1);
        assert_eq!(Direction::NorthWest.room(3, 1, 4, 4), 1);
        assert_eq!(Direction::North.room(2, 3, 4, 4), 2);
        assert_eq!(Direction::SouthWest.room(0, 3, 4, 4), 3);
    }

    #[test]
    fn test_room_on_single_row() {
        assert_eq!(Direction::East.room(0, 0, 1, 3), 2);
        assert_eq!(Direction::West.room(0, 2, 1, 3), 2);
        assert_eq!(Direction::South.room(0, 1, 1, 3), 0);
        assert_eq!(Direction::NorthEast.room(0, 0, 1, 3), 0);
    }

    #[test]
    fn test_offset() {
        assert_eq!(Direction::East.offset(0, 0, 2), Some((0, 2)));
        assert_eq!(Direction::NorthWest.offset(2, 2, 2), Some((0, 0)));
        assert_eq!(Direction::North.offset(0, 0, 1), None);
    }

    #[test]
    fn test_legacy_set() {
        let legacy = DirectionSet::Legacy.directions();
        assert_eq!(legacy.len(), 5);
        assert!(!legacy.contains(&Direction::NorthEast));
        assert!(!legacy.contains(&Direction::NorthWest));
        assert!(!legacy.contains(&Direction::SouthWest));
        assert_eq!(DirectionSet::default().directions().len(), 8);
    }
}
