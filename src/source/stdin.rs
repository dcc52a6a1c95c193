//! Stdin transcript source, selected with `-`.

use crate::model::error::LoadError;
use std::io::Read;
use std::path::PathBuf;

/// Path reported in errors for stdin reads.
pub const STDIN_PATH: &str = "-";

/// Read the whole transcript from stdin.
///
/// # Errors
///
/// Returns `LoadError::Io` if stdin cannot be read.
pub fn read_stdin() -> Result<String, LoadError> {
    read_all(std::io::stdin().lock())
}

/// Read a transcript from any reader until EOF, replacing invalid UTF-8.
pub(crate) fn read_all<R: Read>(mut reader: R) -> Result<String, LoadError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|source| LoadError::Io {
            path: PathBuf::from(STDIN_PATH),
            source,
        })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
