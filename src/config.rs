//! Configuration for a [`KeywordFilter`].
//!
//! Configuration is read from TOML. Every field is optional:
//!
//! ```toml
//! replacement = "***"
//! word_list = "sensitive-words.txt"
//!
//! [wide_script]
//! start = 0x2E80
//! end = 0x9FFF
//! ```
//!
//! [`KeywordFilter`]: crate::KeywordFilter

use crate::{error::ConfigError, symbol::SymbolClassifier, DEFAULT_REPLACEMENT};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings used to build a [`KeywordFilter`].
///
/// [`KeywordFilter`]: crate::KeywordFilter
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// Token substituted for every matched span.
    pub replacement: String,
    /// File to read keywords from, one per line.
    pub word_list: Option<PathBuf>,
    /// Code point range treated as matchable in addition to ASCII letters and digits.
    pub wide_script: SymbolClassifier,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            replacement: DEFAULT_REPLACEMENT.to_owned(),
            word_list: None,
            wide_script: SymbolClassifier::default(),
        }
    }
}

impl FilterConfig {
    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the configuration file at `path`.
    ///
    /// A relative `word_list` is resolved against the directory containing `path`.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let mut config = Self::from_toml_str(&contents)?;
        if let (Some(word_list), Some(parent)) = (config.word_list.as_mut(), path.parent()) {
            if word_list.is_relative() {
                *word_list = parent.join(&*word_list);
            }
        }
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.replacement.is_empty() {
            return Err(ConfigError::Invalid {
                key: "replacement",
                message: "must not be empty".to_owned(),
            });
        }
        if self.wide_script.start > self.wide_script.end {
            return Err(ConfigError::Invalid {
                key: "wide_script",
                message: format!(
                    "start {:#X} is greater than end {:#X}",
                    self.wide_script.start, self.wide_script.end
                ),
            });
        }
        if self.wide_script.end > u32::from(char::MAX) {
            return Err(ConfigError::Invalid {
                key: "wide_script.end",
                message: format!("{:#X} is not a valid code point", self.wide_script.end),
            });
        }
        Ok(())
    }
}
