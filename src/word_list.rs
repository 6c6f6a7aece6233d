//! `word_list` — the set of target words to look for.
//!
//! A word list can be read from a file or from an in-memory string; the latter is what
//! WebAssembly builds use, since direct file I/O isn't available in the browser.
//!
//! The parsing logic:
//! - One word per line.
//! - Surrounding whitespace is trimmed and blank lines are skipped.
//! - Duplicates collapse onto their first occurrence, so positions are stable.
//! - Case is left exactly as written; the grid has to use the same case.

use crate::errors::PuzzleError;

/// Deduplicated, insertion-ordered target words.
///
/// The position of a word in `words` is its [`WordId`](crate::prefix_index::WordId).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Collect words, dropping empty strings and later duplicates.
    pub fn from_words<I, S>(words: I) -> WordList
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        WordList { words }
    }

    /// Parse a word list from an in-memory string, one word per line.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        WordList::from_words(contents.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// Native-only convenience method: read from a file path and parse.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Read`] if the file can't be read as UTF-8 text.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, PuzzleError> {
        let path_ref = path.as_ref();
        let data = std::fs::read_to_string(path_ref).map_err(|source| PuzzleError::Read {
            what: "word list",
            path: path_ref.display().to_string(),
            source,
        })?;
        let list = Self::parse_from_str(&data);
        log::debug!("loaded {} words from {}", list.len(), path_ref.display());
        Ok(list)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word, in symbols.
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.words.iter().map(|w| w.chars().count()).max().unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
