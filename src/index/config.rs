//! Word index configuration.
//!
//! Configuration is resolved once at startup from environment variables with
//! defaults. The command-line front end overlays its own flags on top.
//!
//! # Environment Variables
//!
//! - `WORD_INDEX_INPUT`: input text file (required unless given otherwise)
//! - `WORD_INDEX_OUTPUT`: output file (optional, default: `output.txt`)
//! - `WORD_INDEX_CASE`: `lowercase` or `preserve` (optional, default: `lowercase`)
//! - `WORD_INDEX_PATTERN`: word regular expression (optional, default: `[A-Za-z0-9]+`)

use std::env;
use std::path::PathBuf;

use super::error::ConfigError;
use super::tokenizer::{CaseFolding, DEFAULT_WORD_PATTERN};

/// Environment variable naming the input file.
pub const INPUT_VARIABLE: &str = "WORD_INDEX_INPUT";
/// Environment variable naming the output file.
pub const OUTPUT_VARIABLE: &str = "WORD_INDEX_OUTPUT";
/// Environment variable selecting the case folding.
pub const CASE_VARIABLE: &str = "WORD_INDEX_CASE";
/// Environment variable overriding the word pattern.
pub const PATTERN_VARIABLE: &str = "WORD_INDEX_PATTERN";

/// Output path used when none is configured.
pub const DEFAULT_OUTPUT: &str = "output.txt";

/// Settings for one run of the word index pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexConfig {
    /// Text file to read.
    pub input: PathBuf,
    /// File the sorted words are written to, one per line.
    pub output: PathBuf,
    /// Normalization applied to each word.
    pub case_folding: CaseFolding,
    /// Regular expression matching one word.
    pub pattern: String,
}

impl IndexConfig {
    /// Creates a configuration for `input` with every other setting at its default.
    #[must_use]
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            case_folding: CaseFolding::default(),
            pattern: DEFAULT_WORD_PATTERN.to_owned(),
        }
    }

    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// See [`from_lookup`](Self::from_lookup).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration from a key lookup, falling back to defaults.
    ///
    /// `input` takes precedence over `WORD_INDEX_INPUT`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingInput`] if no input path is available and
    /// [`ConfigError::InvalidValue`] if `WORD_INDEX_CASE` is not recognized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::collections::HashMap;
    /// use wordtree::index::{CaseFolding, IndexConfig};
    ///
    /// let variables = HashMap::from([
    ///     ("WORD_INDEX_INPUT", "book.txt"),
    ///     ("WORD_INDEX_CASE", "preserve"),
    /// ]);
    /// let config =
    ///     IndexConfig::from_lookup(|key| variables.get(key).map(ToString::to_string)).unwrap();
    /// assert_eq!(config.input.to_str(), Some("book.txt"));
    /// assert_eq!(config.output.to_str(), Some("output.txt"));
    /// assert_eq!(config.case_folding, CaseFolding::Preserve);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = lookup(INPUT_VARIABLE)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingInput {
                variable: INPUT_VARIABLE,
            })?;

        let mut config = Self::new(input);

        if let Some(output) = lookup(OUTPUT_VARIABLE).filter(|value| !value.trim().is_empty()) {
            config.output = PathBuf::from(output);
        }

        if let Some(case) = lookup(CASE_VARIABLE).filter(|value| !value.trim().is_empty()) {
            config.case_folding =
                case.parse()
                    .map_err(|message| ConfigError::InvalidValue {
                        key: CASE_VARIABLE.to_owned(),
                        message,
                    })?;
        }

        if let Some(pattern) = lookup(PATTERN_VARIABLE).filter(|value| !value.is_empty()) {
            config.pattern = pattern;
        }

        Ok(config)
    }
}
