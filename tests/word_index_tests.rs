#![cfg(feature = "index")]
//! End-to-end tests for the word index pipeline.

use rstest::{fixture, rstest};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use wordtree::index::{CaseFolding, IndexConfig, IndexError, IndexReport, run};

struct Workspace {
    directory: TempDir,
}

impl Workspace {
    fn input(&self, contents: &str) -> PathBuf {
        let path = self.directory.path().join("input.txt");
        fs::write(&path, contents).unwrap();
        path
    }

    fn output(&self) -> PathBuf {
        self.directory.path().join("output.txt")
    }

    fn config(&self, contents: &str) -> IndexConfig {
        IndexConfig {
            output: self.output(),
            ..IndexConfig::new(self.input(contents))
        }
    }

    fn written(&self) -> String {
        fs::read_to_string(self.output()).unwrap()
    }
}

#[fixture]
fn workspace() -> Workspace {
    Workspace {
        directory: TempDir::new().unwrap(),
    }
}

// =============================================================================
// Successful Runs
// =============================================================================

#[rstest]
fn test_run_lowercases_and_sorts(workspace: Workspace) {
    let config = workspace.config("The quick brown fox\njumps over the lazy dog.\nThe END\n");

    let report = run(&config).unwrap();

    assert_eq!(
        workspace.written(),
        "brown\ndog\nend\nfox\njumps\nlazy\nover\nquick\nthe\n"
    );
    assert_eq!(
        report,
        IndexReport {
            lines: 3,
            tokens: 11,
            distinct_words: 9,
        }
    );
}

#[rstest]
fn test_run_preserve_case(workspace: Workspace) {
    let config = IndexConfig {
        case_folding: CaseFolding::Preserve,
        ..workspace.config("the quick fox the Fox")
    };

    run(&config).unwrap();

    assert_eq!(workspace.written(), "Fox\nfox\nquick\nthe\n");
}

#[rstest]
fn test_run_with_custom_pattern(workspace: Workspace) {
    let config = IndexConfig {
        pattern: r"[a-z]+(?:'[a-z]+)?".to_string(),
        ..workspace.config("don't stop, won't stop")
    };

    let report = run(&config).unwrap();

    assert_eq!(workspace.written(), "don't\nstop\nwon't\n");
    assert_eq!(report.distinct_words, 3);
}

#[rstest]
fn test_run_lines_without_words_write_empty_output(workspace: Workspace) {
    let config = workspace.config("...\n!!!\n");

    let report = run(&config).unwrap();

    assert_eq!(workspace.written(), "");
    assert_eq!(report.lines, 2);
    assert_eq!(report.distinct_words, 0);
}

#[rstest]
fn test_run_overwrites_existing_output(workspace: Workspace) {
    fs::write(workspace.output(), "stale\ncontent\nfrom\nbefore\n").unwrap();
    let config = workspace.config("fresh");

    run(&config).unwrap();

    assert_eq!(workspace.written(), "fresh\n");
}

// =============================================================================
// Failures
// =============================================================================

#[rstest]
fn test_run_empty_input_is_error(workspace: Workspace) {
    let config = workspace.config("");

    let error = run(&config).unwrap_err();

    assert!(matches!(error, IndexError::EmptyInput { ref path } if *path == config.input));
    assert!(!workspace.output().exists());
}

#[rstest]
fn test_run_missing_input_is_read_error(workspace: Workspace) {
    let config = IndexConfig {
        output: workspace.output(),
        ..IndexConfig::new(workspace.directory.path().join("missing.txt"))
    };

    let error = run(&config).unwrap_err();

    assert!(matches!(error, IndexError::Read { .. }));
    assert!(error.to_string().contains("missing.txt"));
}

#[rstest]
fn test_run_invalid_pattern_is_rejected_before_reading(workspace: Workspace) {
    let config = IndexConfig {
        pattern: "[unclosed".to_string(),
        output: workspace.output(),
        ..IndexConfig::new(workspace.directory.path().join("missing.txt"))
    };

    let error = run(&config).unwrap_err();

    assert!(matches!(error, IndexError::InvalidPattern(_)));
}

#[rstest]
fn test_run_unwritable_output_is_write_error(workspace: Workspace) {
    let config = IndexConfig {
        output: workspace.directory.path().join("no-such-dir").join("out.txt"),
        ..workspace.config("word")
    };

    let error = run(&config).unwrap_err();

    assert!(matches!(error, IndexError::Write { .. }));
}
