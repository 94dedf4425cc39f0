//! Reading input lines and writing the sorted word list.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use super::error::IndexError;

/// Reads a text file into its lines, without line terminators.
///
/// # Errors
///
/// Returns [`IndexError::Read`] if the file cannot be opened or is not valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Vec<String>, IndexError> {
    let read_error = |source| IndexError::Read {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(read_error)?;
    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)
}

/// Writes each word on its own line, terminated by `\n`.
///
/// The file is created or truncated.
///
/// # Errors
///
/// Returns [`IndexError::Write`] if the file cannot be created or written.
pub fn write_lines<I>(path: &Path, words: I) -> Result<(), IndexError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let write_error = |source| IndexError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);
    for word in words {
        writeln!(writer, "{}", word.as_ref()).map_err(write_error)?;
    }
    writer.flush().map_err(write_error)
}
