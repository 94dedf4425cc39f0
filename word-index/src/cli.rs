//! Command-line arguments and their resolution into an [`IndexConfig`].

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use wordtree::index::{
    CASE_VARIABLE, CaseFolding, ConfigError, INPUT_VARIABLE, IndexConfig, OUTPUT_VARIABLE,
    PATTERN_VARIABLE,
};

#[derive(Parser, Debug)]
#[command(name = "word-index")]
#[command(about = "Writes the sorted distinct words of a text file, one per line")]
pub struct Cli {
    /// Text file to index (falls back to WORD_INDEX_INPUT)
    pub input: Option<PathBuf>,

    /// File to write the sorted words to (falls back to WORD_INDEX_OUTPUT)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Case folding applied before de-duplication (falls back to WORD_INDEX_CASE)
    #[arg(long, value_enum)]
    pub case: Option<CaseArgument>,

    /// Regular expression matching one word (falls back to WORD_INDEX_PATTERN)
    #[arg(long)]
    pub pattern: Option<String>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaseArgument {
    /// Lowercase every word
    Lowercase,
    /// Keep words as written
    Preserve,
}

impl From<CaseArgument> for CaseFolding {
    fn from(argument: CaseArgument) -> Self {
        match argument {
            CaseArgument::Lowercase => Self::Lowercase,
            CaseArgument::Preserve => Self::Preserve,
        }
    }
}

impl Cli {
    /// Overlays the given flags on the configuration found through `lookup`.
    ///
    /// A variable whose flag was given is never looked up, so a malformed
    /// environment value cannot fail a run that overrides it.
    pub fn resolve<F>(self, lookup: F) -> Result<IndexConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = IndexConfig::from_lookup(|key| match key {
            INPUT_VARIABLE => self
                .input
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned())
                .or_else(|| lookup(key)),
            OUTPUT_VARIABLE if self.output.is_some() => None,
            CASE_VARIABLE if self.case.is_some() => None,
            PATTERN_VARIABLE if self.pattern.is_some() => None,
            _ => lookup(key),
        })?;

        if let Some(output) = self.output {
            config.output = output;
        }
        if let Some(case) = self.case {
            config.case_folding = case.into();
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        Ok(config)
    }
}
