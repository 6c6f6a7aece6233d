use std::collections::BTreeMap;

use crate::direction::DirectionSet;
use crate::errors::PuzzleError;
use crate::grid::Grid;
use crate::log::init_logger;
use crate::solver::{solve_with_options, Match, ScanOptions};
use crate::word_list::WordList;
use wasm_bindgen::prelude::*;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "W001", "WASM001")
    code: String,
    message: String,
    description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<PuzzleError> for WasmError {
    fn from(e: PuzzleError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);
        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }
        js_sys::Error::new(&msg).into()
    }
}

/// Initialize logging and the panic hook.
///
/// Must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

#[derive(serde::Serialize)]
struct WasmSolveResult {
    found: BTreeMap<String, bool>,
    matches: Vec<Match>,
    elapsed_ms: f64,
}

/// JS entry: (puzzle: string, words: string[], all_directions: boolean, min_length: number)
/// returns `{ found: {word: boolean}, matches: [...], elapsed_ms: number }`
#[wasm_bindgen]
pub fn solve_puzzle_wasm(
    puzzle: &str,
    words: JsValue,
    all_directions: bool,
    min_length: usize,
) -> Result<JsValue, JsValue> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be string[]: {e}"),
        description: "Invalid word-list format".to_string(),
        help: Some("Pass a string array, e.g. ['KERNEL', 'BYTE']".to_string()),
    })?;
    let words = WordList::from_words(words);
    let grid = Grid::parse_from_str(puzzle).map_err(WasmError::from)?;

    let directions = if all_directions {
        DirectionSet::All
    } else {
        DirectionSet::Legacy
    };
    let options = ScanOptions::default()
        .with_directions(directions)
        .with_min_length(min_length);
    let result = solve_with_options(&grid, &words, options);

    let wasm_result = WasmSolveResult {
        found: result.status.to_map(),
        elapsed_ms: result.elapsed.as_secs_f64() * 1000.0,
        matches: result.matches,
    };

    serde_wasm_bindgen::to_value(&wasm_result).map_err(|e| {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            help: None,
        }
        .into()
    })
}

/// Parse a newline-separated word list, returning the deduplicated words.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let list = WordList::parse_from_str(text);
    serde_wasm_bindgen::to_value(list.words()).map_err(|e| {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize word list".to_string(),
            help: None,
        }
        .into()
    })
}
