//! Hot-swappable access to a [`KeywordFilter`].
//!
//! A [`SharedFilter`] publishes one filter at a time. Replacing it is a single pointer swap: every
//! call that already captured the previous filter finishes with it, and every later call sees the
//! new one. Nothing is ever mutated in place.

use crate::{error::LoadError, loader, KeywordFilter, KeywordFilterBuilder};
use parking_lot::RwLock;
use std::{path::Path, sync::Arc};

/// A thread-safe handle to the currently published [`KeywordFilter`].
///
/// # Example
/// ```
/// use keyword_filter::{KeywordFilterBuilder, SharedFilter};
///
/// let shared = SharedFilter::new(KeywordFilterBuilder::new().word("foo").build());
/// assert_eq!(shared.filter("foo bar").unwrap(), "*** bar");
///
/// shared.replace(KeywordFilterBuilder::new().word("bar").build());
/// assert_eq!(shared.filter("foo bar").unwrap(), "foo ***");
/// ```
#[derive(Debug)]
pub struct SharedFilter {
    current: RwLock<Arc<KeywordFilter>>,
}

impl SharedFilter {
    pub fn new(filter: KeywordFilter) -> Self {
        Self {
            current: RwLock::new(Arc::new(filter)),
        }
    }

    /// The filter published at the time of the call.
    #[inline]
    pub fn current(&self) -> Arc<KeywordFilter> {
        Arc::clone(&*self.current.read())
    }

    /// Filter `text` with the currently published filter.
    ///
    /// The lock is only held long enough to clone the `Arc`; the scan itself runs unlocked.
    pub fn filter(&self, text: &str) -> Option<String> {
        self.current().filter(text)
    }

    /// Publish `filter`, returning the one it replaces.
    pub fn replace(&self, filter: KeywordFilter) -> Arc<KeywordFilter> {
        let nodes = filter.trie().node_count();
        let previous = std::mem::replace(&mut *self.current.write(), Arc::new(filter));
        tracing::info!(nodes, "published new keyword filter");
        previous
    }

    /// Rebuild the filter from the keyword list at `path` and publish it.
    ///
    /// The replacement token and classifier of the current filter are kept. If the list cannot be
    /// read, the current filter stays published and the error is returned.
    pub fn reload(&self, path: &Path) -> Result<(), LoadError> {
        let words = match loader::load_words(path) {
            Ok(words) => words,
            Err(error) => {
                tracing::warn!(%error, "keeping current keyword filter");
                return Err(error);
            }
        };
        let current = self.current();
        let filter = KeywordFilterBuilder::new()
            .words(words)
            .replacement(current.replacement())
            .classifier(*current.classifier())
            .build();
        self.replace(filter);
        Ok(())
    }
}

impl From<KeywordFilter> for SharedFilter {
    fn from(filter: KeywordFilter) -> Self {
        Self::new(filter)
    }
}

#[cfg(test)]
mod tests {
    use crate::{KeywordFilterBuilder, SharedFilter};
    use std::{io::Write, sync::Arc, thread};

    #[test]
    fn replace_returns_previous() {
        let shared = SharedFilter::new(KeywordFilterBuilder::new().word("foo").build());

        let previous = shared.replace(KeywordFilterBuilder::new().word("bar").build());

        assert!(previous.trie().contains("foo"));
        assert!(shared.current().trie().contains("bar"));
        assert!(!shared.current().trie().contains("foo"));
    }

    #[test]
    fn captured_filter_survives_replace() {
        let shared = SharedFilter::new(KeywordFilterBuilder::new().word("foo").build());
        let captured = shared.current();

        shared.replace(KeywordFilterBuilder::new().word("bar").build());

        assert_eq!(captured.filter("foo bar").unwrap(), "*** bar");
        assert_eq!(shared.filter("foo bar").unwrap(), "foo ***");
    }

    #[test]
    fn reload() {
        let shared = SharedFilter::new(
            KeywordFilterBuilder::new()
                .word("foo")
                .replacement("#")
                .build(),
        );
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "bar").unwrap();

        shared.reload(file.path()).unwrap();

        assert_eq!(shared.filter("foo bar").unwrap(), "foo #");
    }

    #[test]
    fn failed_reload_keeps_current() {
        let shared = SharedFilter::new(KeywordFilterBuilder::new().word("foo").build());
        let directory = tempfile::tempdir().unwrap();

        assert!(shared.reload(&directory.path().join("missing.txt")).is_err());
        assert_eq!(shared.filter("foo").unwrap(), "***");
    }

    #[test]
    fn concurrent_filter_and_replace() {
        let shared = Arc::new(SharedFilter::new(
            KeywordFilterBuilder::new().words(&["foo", "bar"]).build(),
        ));

        let readers = (0..4)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || {
                    for _ in 0..1000 {
                        let output = shared.filter("foo bar").unwrap();
                        assert!(output == "*** ***" || output == "*** bar", "{}", output);
                    }
                })
            })
            .collect::<Vec<_>>();
        for _ in 0..100 {
            shared.replace(KeywordFilterBuilder::new().word("foo").build());
            shared.replace(KeywordFilterBuilder::new().words(&["foo", "bar"]).build());
        }

        for reader in readers {
            reader.join().unwrap();
        }
    }
}
