//! Classification of separator characters.
//!
//! A character either takes part in matching or is a separator which the matcher steps over. The
//! matchable alphabet is ASCII letters and digits plus one inclusive range of code points reserved
//! for wide-script text, by default the East Asian block `U+2E80..=U+9FFF`.

use serde::{Deserialize, Serialize};

/// First code point of the default wide-script range.
pub const DEFAULT_WIDE_SCRIPT_START: u32 = 0x2E80;
/// Last code point of the default wide-script range.
pub const DEFAULT_WIDE_SCRIPT_END: u32 = 0x9FFF;

/// Decides whether a character is a separator.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SymbolClassifier {
    /// First code point (inclusive) of the wide-script range.
    pub start: u32,
    /// Last code point (inclusive) of the wide-script range.
    pub end: u32,
}

impl SymbolClassifier {
    #[inline]
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Returns whether `c` is a separator.
    ///
    /// # Example
    /// ```
    /// use keyword_filter::SymbolClassifier;
    ///
    /// let classifier = SymbolClassifier::default();
    ///
    /// assert!(classifier.is_symbol('.'));
    /// assert!(classifier.is_symbol(' '));
    /// assert!(!classifier.is_symbol('a'));
    /// assert!(!classifier.is_symbol('敏'));
    /// ```
    #[inline]
    pub fn is_symbol(&self, c: char) -> bool {
        let code = u32::from(c);
        !c.is_ascii_alphanumeric() && (code < self.start || code > self.end)
    }
}

impl Default for SymbolClassifier {
    fn default() -> Self {
        Self::new(DEFAULT_WIDE_SCRIPT_START, DEFAULT_WIDE_SCRIPT_END)
    }
}
