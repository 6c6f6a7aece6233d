//! Prefix tree over the target words.
//!
//! Nodes live in a flat arena and refer to each other by [`NodeId`], so the
//! whole tree is one allocation that can be shared read-only across threads.
//! The root (`NodeId(0)`) is the empty prefix.
//!
//! ```
//! use wordsearch::prefix_index::PrefixIndex;
//!
//! let index = PrefixIndex::build(["FOD", "FEET"]);
//! assert!(index.has_prefix("FE"));
//! assert!(index.has_prefix("FEET"));
//! assert!(!index.has_prefix("FEETS"));
//! assert!(!index.contains("FE"));
//! ```

/// Index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Position of a word in the target word set (first-seen order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct WordId(pub u32);

impl WordId {
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Default)]
struct PrefixNode {
    /// Outgoing edges, sorted by symbol.
    children: Vec<(char, NodeId)>,
    /// Set when a word ends here.
    terminal: Option<WordId>,
}

impl PrefixNode {
    #[inline]
    fn child(&self, symbol: char) -> Option<NodeId> {
        // Most nodes have one or two children; a linear scan beats bisecting those.
        if self.children.len() <= 4 {
            return self
                .children
                .iter()
                .find(|&&(c, _)| c == symbol)
                .map(|&(_, id)| id);
        }
        self.children
            .binary_search_by_key(&symbol, |&(c, _)| c)
            .ok()
            .map(|pos| self.children[pos].1)
    }
}

/// Arena-backed trie answering prefix and membership queries in O(length).
#[derive(Debug, Clone)]
pub struct PrefixIndex {
    nodes: Vec<PrefixNode>,
    word_count: usize,
}

impl Default for PrefixIndex {
    fn default() -> Self {
        PrefixIndex {
            nodes: vec![PrefixNode::default()],
            word_count: 0,
        }
    }
}

impl PrefixIndex {
    /// Build the tree from `words`.
    ///
    /// Empty strings are ignored and duplicates collapse onto the first
    /// occurrence. Word ids are handed out in first-seen order of the
    /// remaining words, which matches [`WordList`](crate::word_list::WordList)
    /// positions when built from one.
    pub fn build<I, S>(words: I) -> PrefixIndex
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = PrefixIndex::default();
        for word in words {
            index.insert(word.as_ref());
        }
        log::debug!(
            "prefix index built: {} words, {} nodes",
            index.word_count,
            index.nodes.len()
        );
        index
    }

    fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut node = self.root();
        for symbol in word.chars() {
            node = match self.step(node, symbol) {
                Some(next) => next,
                None => self.push_child(node, symbol),
            };
        }
        let slot = &mut self.nodes[node.0 as usize].terminal;
        if slot.is_none() {
            *slot = Some(WordId(self.word_count as u32));
            self.word_count += 1;
        }
    }

    fn push_child(&mut self, parent: NodeId, symbol: char) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(PrefixNode::default());
        let children = &mut self.nodes[parent.0 as usize].children;
        let pos = children.partition_point(|&(c, _)| c < symbol);
        children.insert(pos, (symbol, id));
        id
    }

    /// The empty prefix.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Follow the edge labelled `symbol` out of `node`.
    #[inline]
    #[must_use]
    pub fn step(&self, node: NodeId, symbol: char) -> Option<NodeId> {
        self.nodes[node.0 as usize].child(symbol)
    }

    /// The word ending at `node`, if any.
    #[inline]
    #[must_use]
    pub fn word_at(&self, node: NodeId) -> Option<WordId> {
        self.nodes[node.0 as usize].terminal
    }

    /// True if some word ends at `node`.
    #[inline]
    #[must_use]
    pub fn is_word(&self, node: NodeId) -> bool {
        self.word_at(node).is_some()
    }

    /// Walk `symbols` from the root; `None` as soon as an edge is missing.
    #[must_use]
    pub fn walk<I: IntoIterator<Item = char>>(&self, symbols: I) -> Option<NodeId> {
        symbols
            .into_iter()
            .try_fold(self.root(), |node, symbol| self.step(node, symbol))
    }

    /// True if `candidate` is a prefix of at least one word, whether or not it
    /// is itself a complete word. The empty string is a prefix of everything.
    #[must_use]
    pub fn has_prefix(&self, candidate: &str) -> bool {
        self.walk(candidate.chars()).is_some()
    }

    /// Exact membership.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word.chars()).is_some_and(|node| self.is_word(node))
    }

    /// Number of distinct words inserted.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}
