//! Reading keyword lists.
//!
//! A keyword list is UTF-8 text with one keyword per line. Surrounding whitespace is trimmed and
//! blank lines are skipped, so no empty keyword ever reaches the [`TrieBuilder`].
//!
//! [`TrieBuilder`]: crate::TrieBuilder

use crate::error::LoadError;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// Read keywords from `reader`, one per line.
///
/// # Example
/// ```
/// use keyword_filter::loader::read_words;
///
/// let words = read_words("foo\n\n  bar \r\n".as_bytes()).unwrap();
///
/// assert_eq!(words, vec!["foo", "bar"]);
/// ```
pub fn read_words<R>(reader: R) -> Result<Vec<String>, LoadError>
where
    R: BufRead,
{
    let mut words = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            line: index + 1,
            source,
        })?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_owned());
        }
    }
    Ok(words)
}

/// Pass each keyword in `reader` to `visit` as soon as its line is read.
///
/// Invalid UTF-8 is decoded lossily instead of failing. If reading stops on an I/O error, every
/// keyword before the failed line has already been visited. Returns the number of keywords
/// visited.
pub fn visit_words_lossy<R, F>(reader: R, mut visit: F) -> Result<usize, LoadError>
where
    R: BufRead,
    F: FnMut(&str),
{
    let mut count = 0;
    for (index, line) in reader.split(b'\n').enumerate() {
        let line = line.map_err(|source| LoadError::Read {
            line: index + 1,
            source,
        })?;
        let line = String::from_utf8_lossy(&line);
        let word = line.trim();
        if !word.is_empty() {
            visit(word);
            count += 1;
        }
    }
    Ok(count)
}

/// Open the file at `path` and pass each of its keywords to `visit`.
///
/// See [`visit_words_lossy()`] for how partial reads are handled.
pub fn visit_file_words_lossy<F>(path: &Path, visit: F) -> Result<usize, LoadError>
where
    F: FnMut(&str),
{
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let count = visit_words_lossy(BufReader::new(file), visit)?;
    tracing::debug!(path = %path.display(), words = count, "loaded keyword list");
    Ok(count)
}

/// Read keywords from the file at `path`.
///
/// The file is closed before this function returns, whether or not reading succeeded.
pub fn load_words(path: &Path) -> Result<Vec<String>, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_owned(),
        source,
    })?;
    let words = read_words(BufReader::new(file)).map_err(|error| match error {
        LoadError::Read { source, .. } => LoadError::Io {
            path: path.to_owned(),
            source,
        },
        error => error,
    })?;
    tracing::debug!(path = %path.display(), words = words.len(), "loaded keyword list");
    Ok(words)
}
