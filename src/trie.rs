//! The immutable prefix tree used for matching.

use crate::{
    builder::TrieBuilder,
    node::{Nodes, Reference},
};

/// A read-only prefix tree of banned keywords.
///
/// A `Trie` is produced by a [`TrieBuilder`] (or [`Trie::build()`]) and is never mutated
/// afterwards. It is `Send + Sync`, so one instance may be shared behind an `Arc` by any number of
/// threads filtering concurrently. Refreshing the keyword list means building a new `Trie`.
#[derive(Debug)]
pub struct Trie {
    nodes: Nodes,
}

impl Trie {
    pub(crate) fn from_nodes(nodes: Nodes) -> Self {
        Self { nodes }
    }

    /// Build a `Trie` from a sequence of keywords.
    ///
    /// Empty keywords are skipped. The order of `words` does not affect the result.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::Trie;
    ///
    /// let trie = Trie::build(&["foo", "bar"]);
    ///
    /// assert!(trie.contains("foo"));
    /// assert!(!trie.contains("fo"));
    /// ```
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = TrieBuilder::new();
        builder.extend(words);
        builder.build()
    }

    /// Returns whether `word` is stored as a complete keyword.
    pub fn contains(&self, word: &str) -> bool {
        let mut reference = Reference::ROOT;
        for c in word.chars() {
            reference = match self.nodes.child(reference, c) {
                Some(child) => child,
                None => return false,
            };
        }
        self.is_terminal(reference)
    }

    /// Returns whether no keyword has been stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// The number of nodes, root included.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn child(&self, reference: Reference, c: char) -> Option<Reference> {
        self.nodes.child(reference, c)
    }

    #[inline]
    pub(crate) fn is_terminal(&self, reference: Reference) -> bool {
        self.nodes.get(reference).terminal
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::from_nodes(Nodes::new())
    }
}
