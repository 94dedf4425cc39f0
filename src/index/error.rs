//! Error types for the word index pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading [`IndexConfig`](super::IndexConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No input file was given on the command line or in the environment.
    #[error("no input file given (set {variable} or pass a path)")]
    MissingInput {
        /// The environment variable that would have supplied it.
        variable: &'static str,
    },
    /// A configuration value could not be parsed.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// The configuration key.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Errors raised by the word index pipeline.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The input file could not be read.
    #[error("failed to read {}", .path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The output file could not be written.
    #[error("failed to write {}", .path.display())]
    Write {
        /// The output path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The input file contains no lines.
    #[error("input file is empty: {}", .path.display())]
    EmptyInput {
        /// The input path.
        path: PathBuf,
    },
    /// The word pattern is not a valid regular expression.
    #[error("invalid word pattern")]
    InvalidPattern(#[from] regex::Error),
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
