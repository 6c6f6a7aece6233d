//! The found-status record: which target words a scan has seen.
//!
//! Flags only ever go from `false` to `true`. [`FoundStatus`] is the plain
//! single-owner record; [`SharedFoundStatus`] is the same thing over atomics
//! for parallel scans.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::prefix_index::WordId;
use crate::word_list::WordList;

/// Word → found flag, in word-list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundStatus {
    words: Vec<String>,
    found: Vec<bool>,
    positions: HashMap<String, WordId>,
}

impl FoundStatus {
    /// Every word of `words`, not found.
    #[must_use]
    pub fn new(words: &WordList) -> FoundStatus {
        let words: Vec<String> = words.words().to_vec();
        let positions = words
            .iter()
            .enumerate()
            .map(|(i, w)| (w.clone(), WordId(i as u32)))
            .collect();
        FoundStatus {
            found: vec![false; words.len()],
            words,
            positions,
        }
    }

    /// Mark `word` found. Returns true only if this call flipped the flag;
    /// unknown words and already-found words are no-ops.
    pub fn mark_found(&mut self, word: &str) -> bool {
        match self.positions.get(word) {
            Some(&id) => self.mark_found_id(id),
            None => false,
        }
    }

    /// Like [`FoundStatus::mark_found`], by id.
    pub fn mark_found_id(&mut self, id: WordId) -> bool {
        match self.found.get_mut(id.index()) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// `None` if `word` isn't a target word.
    #[must_use]
    pub fn is_found(&self, word: &str) -> Option<bool> {
        self.positions.get(word).map(|id| self.found[id.index()])
    }

    #[must_use]
    pub fn word(&self, id: WordId) -> Option<&str> {
        self.words.get(id.index()).map(String::as_str)
    }

    /// `(word, found)` pairs in word-list order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.words.iter().map(String::as_str).zip(self.found.iter().copied())
    }

    /// Words not found, in word-list order.
    pub fn missing(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|&(_, found)| !found).map(|(word, _)| word)
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.iter().filter(|&&f| f).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn all_found(&self) -> bool {
        self.found.iter().all(|&f| f)
    }

    /// OR `other` into `self`. Words `self` doesn't track are ignored.
    pub fn merge(&mut self, other: &FoundStatus) {
        for (word, found) in other.iter() {
            if found {
                self.mark_found(word);
            }
        }
    }

    /// Sorted snapshot, handy for comparisons and serialization.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.iter().map(|(w, f)| (w.to_string(), f)).collect()
    }
}

/// Thread-safe found flags, indexed by [`WordId`].
///
/// Races between writers are benign: the only transition is `false → true`,
/// so the final state is the OR of every write.
#[derive(Debug)]
pub struct SharedFoundStatus {
    words: WordList,
    flags: Vec<AtomicBool>,
}

impl SharedFoundStatus {
    #[must_use]
    pub fn new(words: &WordList) -> SharedFoundStatus {
        SharedFoundStatus {
            flags: (0..words.len()).map(|_| AtomicBool::new(false)).collect(),
            words: words.clone(),
        }
    }

    /// Returns true only for the writer that flipped the flag.
    pub fn mark(&self, id: WordId) -> bool {
        self.flags
            .get(id.index())
            .is_some_and(|flag| !flag.swap(true, Ordering::Relaxed))
    }

    #[must_use]
    pub fn is_marked(&self, id: WordId) -> bool {
        self.flags
            .get(id.index())
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    #[must_use]
    pub fn into_found_status(self) -> FoundStatus {
        let mut status = FoundStatus::new(&self.words);
        for (i, flag) in self.flags.into_iter().enumerate() {
            if flag.into_inner() {
                status.mark_found_id(WordId(i as u32));
            }
        }
        status
    }
}
