//! A trie-based keyword filter for masking banned words in user-submitted text.
//!
//! A [`KeywordFilter`] is built once from a list of keywords and then masks every occurrence of
//! those keywords in the text handed to [`filter()`]. Matching tolerates separators (punctuation,
//! whitespace, and anything else outside the matchable alphabet) inside a keyword, so `"b.a.d"`
//! is caught just like `"bad"`.
//!
//! # Example
//! ```
//! use keyword_filter::KeywordFilterBuilder;
//!
//! let filter = KeywordFilterBuilder::new().words(&["bad", "evil"]).build();
//!
//! assert_eq!(filter.filter("this is b-a-d and evil").unwrap(), "this is *** and ***");
//! ```
//!
//! A filter is immutable once built. To refresh the keyword list at runtime, build a new filter
//! and publish it through a [`SharedFilter`].
//!
//! [`filter()`]: KeywordFilter::filter()

mod builder;
pub mod config;
pub mod error;
pub mod loader;
mod node;
mod shared;
mod symbol;
mod trie;
mod walker;

pub use builder::{KeywordFilterBuilder, TrieBuilder};
pub use config::FilterConfig;
pub use shared::SharedFilter;
pub use symbol::{SymbolClassifier, DEFAULT_WIDE_SCRIPT_END, DEFAULT_WIDE_SCRIPT_START};
pub use trie::Trie;

use walker::Walker;

/// Returns whether `c` counts as blank when deciding if a whole input is blank.
///
/// This is Unicode whitespace minus the no-break spaces (`U+00A0`, `U+2007`, `U+202F`) and
/// `U+0085`, plus the information separators `U+001C..=U+001F`.
#[inline]
fn is_blank_char(c: char) -> bool {
    (c.is_whitespace() && !matches!(c, '\u{A0}' | '\u{2007}' | '\u{202F}' | '\u{85}'))
        || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// The token substituted for a matched span unless configured otherwise.
pub const DEFAULT_REPLACEMENT: &str = "***";

/// Masks banned keywords in text.
///
/// A `KeywordFilter` holds an immutable [`Trie`] along with the replacement token and the
/// [`SymbolClassifier`] deciding which characters are skipped during matching. It can be shared
/// freely between threads.
#[derive(Debug)]
pub struct KeywordFilter {
    trie: Trie,
    replacement: String,
    classifier: SymbolClassifier,
}

impl KeywordFilter {
    pub fn new(trie: Trie, replacement: String, classifier: SymbolClassifier) -> Self {
        Self {
            trie,
            replacement,
            classifier,
        }
    }

    /// Build a filter from `config`.
    ///
    /// A configured word list that cannot be read is logged and the filter is built without it,
    /// letting all text through unchanged.
    pub fn from_config(config: &FilterConfig) -> Self {
        let mut builder = KeywordFilterBuilder::new()
            .replacement(config.replacement.as_str())
            .classifier(config.wide_script);
        if let Some(word_list) = &config.word_list {
            builder = builder.word_list(word_list);
        }
        builder.build()
    }

    /// Mask every keyword found in `text`.
    ///
    /// Returns `None` if `text` is empty or contains only blank characters (whitespace other than
    /// no-break spaces, or the `U+001C..=U+001F` separators). Otherwise, every matched
    /// span (including any separators inside it) is replaced by the replacement token, and all
    /// other characters are kept as-is. A keyword cut off by the end of `text` is not masked.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::KeywordFilterBuilder;
    ///
    /// let filter = KeywordFilterBuilder::new().word("abc").build();
    ///
    /// assert_eq!(filter.filter("xxabcyy").unwrap(), "xx***yy");
    /// assert_eq!(filter.filter("a.b.c").unwrap(), "***");
    /// assert_eq!(filter.filter("xab").unwrap(), "xab");
    /// assert_eq!(filter.filter("   "), None);
    /// ```
    pub fn filter(&self, text: &str) -> Option<String> {
        if text.chars().all(is_blank_char) {
            return None;
        }
        Some(Walker::new(&self.trie, &self.classifier, text).censor(&self.replacement))
    }

    #[inline]
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    #[inline]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    #[inline]
    pub fn classifier(&self) -> &SymbolClassifier {
        &self.classifier
    }
}

impl Default for KeywordFilter {
    fn default() -> Self {
        KeywordFilterBuilder::new().build()
    }
}
