use crate::{
    loader,
    node::{Nodes, Reference},
    symbol::SymbolClassifier,
    KeywordFilter, Trie, DEFAULT_REPLACEMENT,
};
use std::path::Path;

/// Incrementally constructs a [`Trie`].
///
/// Keywords are inserted character-for-character, including any separators they contain. Once
/// [`build()`] is called the result is read-only.
///
/// [`build()`]: TrieBuilder::build()
#[derive(Debug)]
pub struct TrieBuilder {
    nodes: Nodes,
}

impl TrieBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Nodes::new(),
        }
    }

    /// Insert a single keyword.
    ///
    /// Creates one node per character that does not exist yet and marks the final node as
    /// terminal. An empty `word` is skipped. Inserting the same keyword twice leaves the tree
    /// unchanged.
    pub fn insert(&mut self, word: &str) -> &mut Self {
        if word.is_empty() {
            return self;
        }
        let mut reference = Reference::ROOT;
        for c in word.chars() {
            reference = self.nodes.child_or_insert(reference, c);
        }
        self.nodes.mark_terminal(reference);
        self
    }

    /// Insert every keyword in `words`.
    pub fn extend<I, S>(&mut self, words: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Trie {
        tracing::debug!(nodes = self.nodes.len(), "built keyword trie");
        Trie::from_nodes(self.nodes)
    }
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A builder for a [`KeywordFilter`].
///
/// # Example
/// ```
/// use keyword_filter::KeywordFilterBuilder;
///
/// let filter = KeywordFilterBuilder::new()
///     .words(&["foo", "bar"])
///     .replacement("<censored>")
///     .build();
///
/// assert_eq!(filter.filter("foo and baz").unwrap(), "<censored> and baz");
/// ```
#[derive(Debug)]
pub struct KeywordFilterBuilder {
    trie: TrieBuilder,
    replacement: String,
    classifier: SymbolClassifier,
}

impl KeywordFilterBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            trie: TrieBuilder::new(),
            replacement: DEFAULT_REPLACEMENT.to_owned(),
            classifier: SymbolClassifier::default(),
        }
    }

    #[inline]
    pub fn word(mut self, word: &str) -> Self {
        self.trie.insert(word);
        self
    }

    #[inline]
    pub fn words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trie.extend(words);
        self
    }

    /// Add every keyword listed in the file at `path`.
    ///
    /// Keywords are inserted as they are read, and invalid UTF-8 is decoded lossily. If the file
    /// cannot be opened or reading fails partway through, the error is logged and every keyword
    /// read before it is kept. Use [`loader::load_words()`] directly if the failure needs to be
    /// handled.
    ///
    /// [`loader::load_words()`]: crate::loader::load_words()
    pub fn word_list<P>(mut self, path: P) -> Self
    where
        P: AsRef<Path>,
    {
        let trie = &mut self.trie;
        if let Err(error) = loader::visit_file_words_lossy(path.as_ref(), |word| {
            trie.insert(word);
        }) {
            tracing::error!(%error, "failed to load keyword list, continuing with what was read");
        }
        self
    }

    /// Set the token substituted for every matched span.
    ///
    /// An empty token is rejected the same way [`FilterConfig::validate()`] rejects it: a warning
    /// is logged and the current token is kept.
    ///
    /// [`FilterConfig::validate()`]: crate::FilterConfig::validate()
    pub fn replacement<S>(mut self, replacement: S) -> Self
    where
        S: Into<String>,
    {
        let replacement = replacement.into();
        if replacement.is_empty() {
            tracing::warn!(current = %self.replacement, "ignoring empty replacement token");
            return self;
        }
        self.replacement = replacement;
        self
    }

    #[inline]
    pub fn classifier(mut self, classifier: SymbolClassifier) -> Self {
        self.classifier = classifier;
        self
    }

    #[must_use]
    pub fn build(self) -> KeywordFilter {
        KeywordFilter::new(self.trie.build(), self.replacement, self.classifier)
    }
}

impl Default for KeywordFilterBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::{builder::TrieBuilder, KeywordFilterBuilder, SymbolClassifier};
    use std::io::Write;

    #[test]
    fn insert() {
        let mut builder = TrieBuilder::new();
        builder.insert("foo");
        let trie = builder.build();

        assert!(trie.contains("foo"));
        assert_eq!(trie.node_count(), 4);
    }

    #[test]
    fn insert_empty_is_skipped() {
        let mut builder = TrieBuilder::new();
        builder.insert("");
        let trie = builder.build();

        assert!(trie.is_empty());
        assert!(!trie.contains(""));
    }

    #[test]
    fn insert_twice_is_idempotent() {
        let mut once = TrieBuilder::new();
        once.insert("foo");
        let mut twice = TrieBuilder::new();
        twice.insert("foo").insert("foo");

        assert_eq!(once.build().node_count(), twice.build().node_count());
    }

    #[test]
    fn insert_prefix_of_existing_word() {
        let mut builder = TrieBuilder::new();
        builder.insert("foobar").insert("foo");
        let trie = builder.build();

        assert!(trie.contains("foo"));
        assert!(trie.contains("foobar"));
        assert!(!trie.contains("foob"));
        assert_eq!(trie.node_count(), 7);
    }

    #[test]
    fn insert_keeps_embedded_separators() {
        let mut builder = TrieBuilder::new();
        builder.insert("a b");
        let trie = builder.build();

        assert!(trie.contains("a b"));
        assert!(!trie.contains("ab"));
    }

    #[test]
    fn extend() {
        let mut builder = TrieBuilder::new();
        builder.extend(vec!["foo".to_owned(), String::new(), "bar".to_owned()]);
        let trie = builder.build();

        assert!(trie.contains("foo"));
        assert!(trie.contains("bar"));
    }

    #[test]
    fn filter_builder_defaults() {
        let filter = KeywordFilterBuilder::new().word("foo").build();

        assert_eq!(filter.replacement(), "***");
        assert_eq!(filter.classifier(), &SymbolClassifier::default());
        assert_eq!(filter.filter("foo").unwrap(), "***");
    }

    #[test]
    fn filter_builder_word_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "foo\n\nbar").unwrap();

        let filter = KeywordFilterBuilder::new()
            .word("baz")
            .word_list(file.path())
            .build();

        assert!(filter.trie().contains("foo"));
        assert!(filter.trie().contains("bar"));
        assert!(filter.trie().contains("baz"));
    }

    #[test]
    fn filter_builder_word_list_keeps_words_around_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"bad\n\xff\nevil\n").unwrap();

        let filter = KeywordFilterBuilder::new().word_list(file.path()).build();

        assert!(!filter.trie().is_empty());
        assert_eq!(filter.filter("bad").unwrap(), "***");
        assert_eq!(filter.filter("evil").unwrap(), "***");
    }

    #[test]
    fn filter_builder_empty_replacement_is_ignored() {
        let filter = KeywordFilterBuilder::new()
            .word("foo")
            .replacement("#")
            .replacement("")
            .build();

        assert_eq!(filter.replacement(), "#");
        assert_eq!(filter.filter("foo bar").unwrap(), "# bar");
    }

    #[test]
    fn filter_builder_missing_word_list_fails_open() {
        let directory = tempfile::tempdir().unwrap();

        let filter = KeywordFilterBuilder::new()
            .word("foo")
            .word_list(directory.path().join("missing.txt"))
            .build();

        assert!(filter.trie().contains("foo"));
        assert_eq!(filter.filter("foo bar").unwrap(), "*** bar");
    }
}
