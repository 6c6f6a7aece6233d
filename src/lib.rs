// Reusable library API — visible to both CLI and WASM builds
pub mod direction;
pub mod errors;
pub mod found;
pub mod grid;
pub mod log;
pub mod prefix_index;
pub mod render;
pub mod solver;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use direction::{Direction, DirectionSet};
pub use errors::PuzzleError;
pub use found::{FoundStatus, SharedFoundStatus};
pub use grid::Grid;
pub use prefix_index::{NodeId, PrefixIndex, WordId};
pub use solver::{solve, solve_with_options, Match, ScanObserver, ScanOptions, ScanStats, Scanner, SolveResult};
pub use word_list::WordList;
