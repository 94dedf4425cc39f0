//! Sorted unique word index.
//!
//! The pipeline reads a text file line by line, extracts words with a
//! regular expression, folds case, inserts every word into a
//! [`PersistentRedBlackTree`](crate::persistent::PersistentRedBlackTree)
//! and writes the in-order traversal one word per line.
//!
//! ```text
//! file -> lines -> words -> fold(insert) -> in_order -> file
//! ```
//!
//! # Examples
//!
//! ```rust
//! use wordtree::index::{index_lines, Tokenizer};
//!
//! let lines = vec!["It was the best of times,", "it was the worst of times."];
//! let tree = index_lines(lines, &Tokenizer::default());
//! assert_eq!(
//!     tree.in_order(),
//!     vec!["best", "it", "of", "the", "times", "was", "worst"]
//! );
//! ```

mod config;
mod error;
mod files;
mod pipeline;
mod tokenizer;

pub use config::{
    CASE_VARIABLE, DEFAULT_OUTPUT, INPUT_VARIABLE, IndexConfig, OUTPUT_VARIABLE, PATTERN_VARIABLE,
};
pub use error::{ConfigError, IndexError};
pub use files::{read_lines, write_lines};
pub use pipeline::{IndexReport, build_index, index_lines, run};
pub use tokenizer::{CaseFolding, DEFAULT_WORD_PATTERN, Tokenizer};
