//! Splitting text lines into normalized words.

use std::sync::LazyLock;

use regex::Regex;

use super::error::IndexError;

/// The default word pattern: maximal runs of ASCII letters and digits.
pub const DEFAULT_WORD_PATTERN: &str = r"[A-Za-z0-9]+";

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_WORD_PATTERN).expect("Invalid word regex pattern"));

/// How words are normalized before they are indexed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaseFolding {
    /// Lowercase every word, so `Fox` and `fox` are the same entry.
    #[default]
    Lowercase,
    /// Keep words exactly as written.
    Preserve,
}

impl CaseFolding {
    /// Applies this normalization to a word.
    #[must_use]
    pub fn apply(self, word: &str) -> String {
        match self {
            Self::Lowercase => word.to_lowercase(),
            Self::Preserve => word.to_owned(),
        }
    }
}

impl std::str::FromStr for CaseFolding {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "lowercase" | "lower" | "insensitive" => Ok(Self::Lowercase),
            "preserve" | "sensitive" => Ok(Self::Preserve),
            other => Err(format!(
                "expected `lowercase` or `preserve`, found `{other}`"
            )),
        }
    }
}

/// Extracts words from text lines.
///
/// # Examples
///
/// ```rust
/// use wordtree::index::{CaseFolding, Tokenizer};
///
/// let tokenizer = Tokenizer::new(CaseFolding::Lowercase);
/// assert_eq!(tokenizer.tokenize("The quick, brown Fox!"), vec!["the", "quick", "brown", "fox"]);
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
    case_folding: CaseFolding,
}

impl Tokenizer {
    /// Creates a tokenizer using [`DEFAULT_WORD_PATTERN`].
    #[must_use]
    pub fn new(case_folding: CaseFolding) -> Self {
        Self {
            pattern: WORD_PATTERN.clone(),
            case_folding,
        }
    }

    /// Creates a tokenizer matching words with a custom regular expression.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError::InvalidPattern`] if `pattern` does not compile.
    pub fn with_pattern(pattern: &str, case_folding: CaseFolding) -> Result<Self, IndexError> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            case_folding,
        })
    }

    /// Returns the normalization applied to each word.
    #[must_use]
    pub const fn case_folding(&self) -> CaseFolding {
        self.case_folding
    }

    /// Returns every non-empty match in `line`, normalized, in order of appearance.
    #[must_use]
    pub fn tokenize(&self, line: &str) -> Vec<String> {
        self.pattern
            .find_iter(line)
            .filter(|found| !found.is_empty())
            .map(|found| self.case_folding.apply(found.as_str()))
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(CaseFolding::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", vec![])]
    #[case("   ,;  ", vec![])]
    #[case("hello", vec!["hello"])]
    #[case("don't stop", vec!["don", "t", "stop"])]
    #[case("route66 and 42", vec!["route66", "and", "42"])]
    #[case("naïve café", vec!["na", "ve", "caf"])]
    fn test_default_pattern_preserve(#[case] line: &str, #[case] expected: Vec<&str>) {
        let tokenizer = Tokenizer::new(CaseFolding::Preserve);
        assert_eq!(tokenizer.tokenize(line), expected);
    }

    #[rstest]
    fn test_lowercase_folds_words() {
        let tokenizer = Tokenizer::new(CaseFolding::Lowercase);
        assert_eq!(tokenizer.tokenize("Fox FOX fox"), vec!["fox", "fox", "fox"]);
    }

    #[rstest]
    fn test_custom_pattern() {
        let tokenizer = Tokenizer::with_pattern(r"\w+(?:'\w+)?", CaseFolding::Preserve).unwrap();
        assert_eq!(tokenizer.tokenize("don't stop"), vec!["don't", "stop"]);
    }

    #[rstest]
    fn test_invalid_pattern_is_rejected() {
        let result = Tokenizer::with_pattern("[a-z", CaseFolding::Preserve);
        assert!(matches!(result, Err(IndexError::InvalidPattern(_))));
    }

    #[rstest]
    fn test_empty_matches_are_skipped() {
        let tokenizer = Tokenizer::with_pattern(r"[a-z]*", CaseFolding::Preserve).unwrap();
        assert_eq!(tokenizer.tokenize("ab 12 cd"), vec!["ab", "cd"]);
    }

    #[rstest]
    #[case("lowercase", Ok(CaseFolding::Lowercase))]
    #[case("LOWER", Ok(CaseFolding::Lowercase))]
    #[case("preserve", Ok(CaseFolding::Preserve))]
    #[case("sensitive", Ok(CaseFolding::Preserve))]
    fn test_case_folding_from_str(
        #[case] value: &str,
        #[case] expected: Result<CaseFolding, String>,
    ) {
        assert_eq!(value.parse::<CaseFolding>(), expected);
    }

    #[rstest]
    fn test_case_folding_from_str_rejects_unknown() {
        assert!("upper".parse::<CaseFolding>().is_err());
    }
}
