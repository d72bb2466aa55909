//! Walker for [`KeywordFilter`] internal searching.
//!
//! A [`Walker`] scans its input once from left to right, carrying a single candidate match. The
//! candidate is described by where it `begin`s, the scan `position`, and the trie node reached by
//! consuming `input[begin..position]` with separators skipped.
//!
//! Separators seen while a candidate is in progress are consumed without moving the trie cursor,
//! so a keyword split up by punctuation or whitespace is still matched as one span. When a
//! candidate fails, the scan restarts one character to the right of where it began. Partial
//! progress is not reused, which makes pathological inputs quadratic in the worst case.
//!
//! [`KeywordFilter`]: crate::KeywordFilter

use crate::{node::Reference, symbol::SymbolClassifier, Trie};

/// Returns the character starting at byte offset `index`, or `None` at the end of `input`.
#[inline]
fn char_at(input: &str, index: usize) -> Option<char> {
    input.get(index..).and_then(|rest| rest.chars().next())
}

/// Single-pass matching state over one input string.
///
/// Offsets are byte offsets into `input` and always lie on character boundaries.
#[derive(Debug)]
pub(crate) struct Walker<'a> {
    trie: &'a Trie,
    classifier: &'a SymbolClassifier,
    input: &'a str,

    begin: usize,
    position: usize,
    node: Reference,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(trie: &'a Trie, classifier: &'a SymbolClassifier, input: &'a str) -> Self {
        Self {
            trie,
            classifier,
            input,

            begin: 0,
            position: 0,
            node: Reference::ROOT,
        }
    }

    #[inline]
    fn reset(&mut self) {
        self.node = Reference::ROOT;
    }

    /// Walk the whole input, writing every matched span as `replacement`.
    pub(crate) fn censor(mut self, replacement: &str) -> String {
        let mut output = String::with_capacity(self.input.len());

        while let Some(c) = char_at(self.input, self.position) {
            if self.classifier.is_symbol(c) {
                // Outside of a candidate the separator is copied through. Inside one it is
                // swallowed, to be emitted later either as part of a replacement or on restart.
                if self.node == Reference::ROOT {
                    output.push(c);
                    self.begin += c.len_utf8();
                }
                self.position += c.len_utf8();
                continue;
            }

            match self.trie.child(self.node, c) {
                None => {
                    // Nothing starting at `begin` is a keyword.
                    if let Some(first) = char_at(self.input, self.begin) {
                        output.push(first);
                        self.begin += first.len_utf8();
                    }
                    self.position = self.begin;
                    self.reset();
                }
                Some(child) if self.trie.is_terminal(child) => {
                    output.push_str(replacement);
                    self.position += c.len_utf8();
                    self.begin = self.position;
                    self.reset();
                }
                Some(child) => {
                    self.node = child;
                    self.position += c.len_utf8();
                }
            }
        }

        // A candidate cut off by the end of input is never masked.
        output.push_str(&self.input[self.begin..]);
        output
    }
}
