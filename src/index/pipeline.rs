//! Folding tokens into a tree and running the whole read-index-write job.

use tracing::{debug, info, instrument};

use super::config::IndexConfig;
use super::error::IndexError;
use super::files::{read_lines, write_lines};
use super::tokenizer::Tokenizer;
use crate::persistent::PersistentRedBlackTree;
use crate::typeclass::Foldable;

/// Folds `insert` over `tokens`, left to right, starting from the empty tree.
///
/// No normalization happens here: callers that want case-insensitive
/// de-duplication fold case before calling.
///
/// # Examples
///
/// ```rust
/// use wordtree::index::build_index;
///
/// let tree = build_index(vec!["the", "quick", "fox", "the", "Fox"]);
/// assert_eq!(tree.in_order(), vec!["Fox", "fox", "quick", "the"]);
/// ```
pub fn build_index<F>(tokens: F) -> PersistentRedBlackTree<F::Inner>
where
    F: Foldable,
    F::Inner: Clone + Ord,
{
    tokens.fold_left(PersistentRedBlackTree::new(), |tree, token| tree.insert(token))
}

/// Tokenizes every line and folds all of their words into one tree.
///
/// # Examples
///
/// ```rust
/// use wordtree::index::{index_lines, CaseFolding, Tokenizer};
///
/// let lines = vec!["The fox.".to_string(), "the FOX, again".to_string()];
/// let tree = index_lines(lines, &Tokenizer::new(CaseFolding::Lowercase));
/// assert_eq!(tree.in_order(), vec!["again", "fox", "the"]);
/// ```
pub fn index_lines<F>(lines: F, tokenizer: &Tokenizer) -> PersistentRedBlackTree<String>
where
    F: Foldable,
    F::Inner: AsRef<str>,
{
    lines
        .fold_left((PersistentRedBlackTree::new(), 0), |accumulator, line| {
            insert_line(accumulator, line.as_ref(), tokenizer)
        })
        .0
}

/// Inserts every word of `line`, adding the number of words matched to the count.
fn insert_line(
    (tree, tokens): (PersistentRedBlackTree<String>, usize),
    line: &str,
    tokenizer: &Tokenizer,
) -> (PersistentRedBlackTree<String>, usize) {
    let words = tokenizer.tokenize(line);
    let count = words.len();
    (
        words.fold_left(tree, |current, word| current.insert(word)),
        tokens + count,
    )
}

/// Counts gathered by [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexReport {
    /// Lines read from the input.
    pub lines: usize,
    /// Words matched across all lines, duplicates included.
    pub tokens: usize,
    /// Distinct words written to the output.
    pub distinct_words: usize,
}

/// Reads the input file, indexes its words and writes them sorted, one per line.
///
/// # Errors
///
/// - [`IndexError::InvalidPattern`] if the configured pattern does not compile
/// - [`IndexError::Read`] if the input cannot be read
/// - [`IndexError::EmptyInput`] if the input has no lines
/// - [`IndexError::Write`] if the output cannot be written
#[instrument(skip_all, fields(input = %config.input.display(), output = %config.output.display()))]
pub fn run(config: &IndexConfig) -> Result<IndexReport, IndexError> {
    let tokenizer = Tokenizer::with_pattern(&config.pattern, config.case_folding)?;

    let lines = read_lines(&config.input)?;
    if lines.is_empty() {
        return Err(IndexError::EmptyInput {
            path: config.input.clone(),
        });
    }
    debug!(lines = lines.len(), "read input");

    let line_count = lines.len();
    let (tree, tokens) = lines.fold_left(
        (PersistentRedBlackTree::new(), 0),
        |accumulator, line| insert_line(accumulator, &line, &tokenizer),
    );
    debug!(tokens, distinct = tree.len(), height = tree.height(), "built index");

    let words = tree.in_order();
    write_lines(&config.output, &words)?;

    let report = IndexReport {
        lines: line_count,
        tokens,
        distinct_words: words.len(),
    };
    info!(
        lines = report.lines,
        tokens = report.tokens,
        distinct_words = report.distinct_words,
        "wrote word index"
    );
    Ok(report)
}
