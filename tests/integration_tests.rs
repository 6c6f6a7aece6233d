//! Integration tests for the word-search solver.
//!
//! These run the full pipeline: text input → `Grid`/`WordList` → scan → found-status record.

use std::collections::{BTreeMap, HashSet};

use wordsearch::solver::NoopObserver;
use wordsearch::{
    solve, solve_with_options, Direction, DirectionSet, Grid, PrefixIndex, PuzzleError, ScanOptions, Scanner,
    WordList,
};

const SAMPLE: &str = "F O D R\nP E O Z\nZ S E A\nY E P T\n";

fn sample_grid() -> Grid {
    Grid::parse_from_str(SAMPLE).expect("sample grid is rectangular")
}

/// Load the fixture puzzle and its word list.
fn load_computer_terms() -> (Grid, WordList) {
    let grid = Grid::load_from_path("tests/fixtures/computer_terms/puzzle.txt")
        .expect("Failed to read fixture puzzle");
    let words = WordList::load_from_path("tests/fixtures/computer_terms/words.txt")
        .expect("Failed to read fixture words");
    (grid, words)
}

fn found_set(status: &wordsearch::FoundStatus) -> HashSet<String> {
    status
        .iter()
        .filter(|&(_, found)| found)
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_east_and_south_east() {
        let result = solve(&sample_grid(), &WordList::from_words(["FOD", "FEET"]));
        assert_eq!(result.status.is_found("FOD"), Some(true));
        assert_eq!(result.status.is_found("FEET"), Some(true));
    }

    #[test]
    fn test_word_exactly_fits_row() {
        let result = solve(&sample_grid(), &WordList::from_words(["FODR"]));
        assert_eq!(result.status.is_found("FODR"), Some(true));
    }

    #[test]
    fn test_two_letter_word_below_floor() {
        let result = solve(&sample_grid(), &WordList::from_words(["ZA"]));
        assert_eq!(result.status.is_found("ZA"), Some(false));
    }

    #[test]
    fn test_single_row_east_and_west() {
        let grid = Grid::parse_from_str("CAT").unwrap();
        let result = solve(&grid, &WordList::from_words(["CAT", "TAC"]));
        assert_eq!(result.status.is_found("CAT"), Some(true));
        assert_eq!(result.status.is_found("TAC"), Some(true));

        let tac = result.matches_for("TAC").next().unwrap();
        assert_eq!((tac.row, tac.col), (0, 2));
        assert_eq!(tac.direction, Some(Direction::West));
    }

    #[test]
    fn test_absent_word_terminates_cleanly() {
        let result = solve(&sample_grid(), &WordList::from_words(["ZZZ"]));
        assert_eq!(result.status.is_found("ZZZ"), Some(false));
        assert!(result.matches.is_empty());
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    #[test]
    fn test_directional_symmetry() {
        // every word found East from one end is found West from the other
        let grid = sample_grid();
        for row in 0..grid.height() {
            let line: String = grid.row(row).unwrap().iter().collect();
            let reversed: String = line.chars().rev().collect();
            let words = WordList::from_words([line.clone(), reversed.clone()]);
            let result = solve(&grid, &words);

            let east = result
                .matches_for(&line)
                .find(|m| m.direction == Some(Direction::East))
                .expect("row read east");
            let west = result
                .matches_for(&reversed)
                .find(|m| m.direction == Some(Direction::West))
                .expect("row read west");
            assert_eq!(east.end(), (west.row, west.col));
            assert_eq!(west.end(), (east.row, east.col));
        }
    }

    #[test]
    fn test_floor_applies_to_every_short_word() {
        // every adjacent pair of the sample grid, in every direction
        let grid = sample_grid();
        let mut pairs = Vec::new();
        for (r, c) in grid.positions() {
            for d in Direction::ALL {
                let pair: String = grid.ray(r, c, d).take(2).collect();
                if pair.chars().count() == 2 {
                    pairs.push(pair);
                }
            }
        }
        let words = WordList::from_words(pairs);
        let result = solve(&grid, &words);
        assert_eq!(result.status.found_count(), 0);

        let opted_out = solve_with_options(&grid, &words, ScanOptions::default().with_min_length(2));
        assert!(opted_out.status.all_found());
    }

    #[test]
    fn test_prefix_monotonicity_over_fixture_words() {
        let (_, words) = load_computer_terms();
        let index = PrefixIndex::build(&words);
        for candidate in ["Q", "KQ", "KERQ", "COMPILERS", "FIREWALLED"] {
            assert!(!index.has_prefix(candidate));
            for extra in 'A'..='Z' {
                assert!(!index.has_prefix(&format!("{candidate}{extra}")));
            }
        }
        for word in &words {
            for end in 1..=word.len() {
                assert!(index.has_prefix(&word[..end]));
            }
        }
    }

    #[test]
    fn test_order_independence_on_fixture() {
        let (grid, words) = load_computer_terms();
        let scanner = Scanner::new(&grid, &words, ScanOptions::default());
        let expected = scanner.scan_with(&mut NoopObserver).status;

        // a fixed but scrambled order: stride through the cells with a step coprime to 144
        let positions: Vec<_> = grid.positions().collect();
        let n = positions.len();
        let mut result = scanner.empty_result();
        for i in 0..n {
            let (r, c) = positions[(i * 35) % n];
            scanner.scan_cell(r, c, &mut result, &mut NoopObserver);
        }
        assert_eq!(result.status, expected);
        assert_eq!(result.stats.cells_visited, n);
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let words = WordList::from_words(["FOD", "FOD", "FEET", "FOD"]);
        let result = solve(&sample_grid(), &words);
        assert_eq!(result.status.len(), 2);
        assert_eq!(result.matches_for("FOD").count(), 1);
    }
}

#[cfg(test)]
mod fixture_puzzle {
    use super::*;

    #[test]
    fn test_all_directions() {
        let (grid, words) = load_computer_terms();
        assert_eq!((grid.height(), grid.width()), (12, 12));
        assert_eq!(words.len(), 15);

        let result = solve(&grid, &words);
        let missing: Vec<_> = result.status.missing().collect();
        assert_eq!(missing, vec!["MOUSE", "JAVA", "IP"]);
        assert_eq!(result.status.found_count(), 12);
        assert_eq!(result.matches.len(), 12);

        let directions: BTreeMap<&str, Direction> = result
            .matches
            .iter()
            .map(|m| (m.word.as_str(), m.direction.unwrap()))
            .collect();
        assert_eq!(directions["KERNEL"], Direction::East);
        assert_eq!(directions["COMPILER"], Direction::South);
        assert_eq!(directions["BYTE"], Direction::North);
        assert_eq!(directions["CACHE"], Direction::West);
        assert_eq!(directions["PIXEL"], Direction::SouthEast);
        assert_eq!(directions["LINUX"], Direction::NorthWest);
        assert_eq!(directions["MODEM"], Direction::NorthEast);
        assert_eq!(directions["ROUTER"], Direction::SouthWest);
    }

    #[test]
    fn test_legacy_directions() {
        let (grid, words) = load_computer_terms();
        let result = solve_with_options(
            &grid,
            &words,
            ScanOptions::default().with_directions(DirectionSet::Legacy),
        );
        let found = found_set(&result.status);
        assert_eq!(found.len(), 9);
        for word in ["LINUX", "MODEM", "ROUTER"] {
            assert!(!found.contains(word), "{word} needs an anti-diagonal or north-west read");
        }
        assert!(found.contains("PIXEL"));
    }

    #[test]
    fn test_short_word_needs_opt_out() {
        let (grid, words) = load_computer_terms();
        let default = solve(&grid, &words);
        assert_eq!(default.status.is_found("IP"), Some(false));

        let opted_out = solve_with_options(&grid, &words, ScanOptions::default().with_min_length(2));
        assert_eq!(opted_out.status.is_found("IP"), Some(true));
        assert_eq!(opted_out.status.found_count(), 13);
    }

    #[test]
    fn test_match_cells_spell_the_word() {
        let (grid, words) = load_computer_terms();
        let result = solve(&grid, &words);
        for m in &result.matches {
            let spelled: String = m
                .cells()
                .map(|(r, c)| grid.get(r, c).unwrap())
                .collect();
            assert_eq!(spelled, m.word);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_agrees() {
        let (grid, words) = load_computer_terms();
        let sequential = solve(&grid, &words);
        let parallel = solve_with_options(&grid, &words, ScanOptions::default().with_parallel(true));
        assert_eq!(parallel.status, sequential.status);
        assert_eq!(parallel.matches, sequential.matches);
    }
}

#[cfg(test)]
mod errors {
    use super::*;

    #[test]
    fn test_ragged_puzzle_rejected() {
        let err = Grid::parse_from_str("F O D R\nP E O\nZ S E A").unwrap_err();
        assert!(matches!(err, PuzzleError::NonRectangular { row: 1, expected: 4, found: 3 }));
        assert!(err.display_detailed().contains("W001"));
    }

    #[test]
    fn test_empty_grid_all_false() {
        let grid = Grid::parse_from_str("\n\n").unwrap();
        let result = solve(&grid, &WordList::from_words(["FOD", "FEET"]));
        assert_eq!(result.status.len(), 2);
        assert_eq!(result.status.found_count(), 0);
    }

    #[test]
    fn test_empty_word_list_empty_record() {
        let result = solve(&sample_grid(), &WordList::parse_from_str("\n \n"));
        assert!(result.status.is_empty());
        assert!(result.matches.is_empty());
    }
}
