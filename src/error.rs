//! Error types.
//!
//! Filtering itself never fails. Errors only arise when reading a keyword list or a configuration
//! file.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors that can occur while reading a keyword list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The keyword list file could not be opened or read.
    #[error("failed to read keyword list {path}: {source}")]
    Io {
        /// Location of the keyword list.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A line could not be read from the keyword source.
    #[error("failed to read keyword line {line}: {source}")]
    Read {
        /// One-based line number of the failed read.
        line: usize,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Errors that can occur while loading a [`FilterConfig`].
///
/// [`FilterConfig`]: crate::config::FilterConfig
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// Location of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid TOML or does not have the expected shape.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// A configuration value is out of range.
    #[error("invalid configuration value for {key}: {message}")]
    Invalid {
        /// Dotted path of the offending key.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}
