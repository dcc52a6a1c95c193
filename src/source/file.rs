//! Filesystem transcript source.

use crate::model::error::LoadError;
use std::io::ErrorKind;
use std::path::Path;

/// Read a transcript file into memory.
///
/// Invalid UTF-8 is replaced rather than rejected, so a corrupt line only
/// fails its own decode.
///
/// # Errors
///
/// Returns `LoadError::NotFound` if the file does not exist.
/// Returns `LoadError::Io` for other read failures.
pub fn read_file(path: &Path) -> Result<String, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_existing_file() {
        let test_file = std::env::temp_dir().join("stepper_read_file_existing.jsonl");
        fs::write(&test_file, "{\"message\":{\"role\":\"user\",\"content\":\"hi\"}}\n").unwrap();

        let result = read_file(&test_file);

        // Cleanup
        let _ = fs::remove_file(&test_file);

        assert!(result.unwrap().contains("\"hi\""));
    }

    #[test]
    fn invalid_utf8_line_is_replaced_not_fatal() {
        let test_file = std::env::temp_dir().join("stepper_read_file_invalid_utf8.jsonl");
        let mut data = b"{\"message\":{\"role\":\"user\",\"content\":\"hi\"}}\n".to_vec();
        data.extend_from_slice(&[0xff, 0xfe]);
        data.extend_from_slice(b" garbage\n{\"message\":{\"role\":\"assistant\",\"content\":\"yo\"}}\n");
        fs::write(&test_file, &data).unwrap();

        let result = read_file(&test_file);

        // Cleanup
        let _ = fs::remove_file(&test_file);

        let text = result.expect("invalid UTF-8 must not fail the read");
        assert!(text.contains("\u{fffd}\u{fffd} garbage"));
        let parsed = crate::parser::parse_transcript(&text);
        assert_eq!(parsed.report.kept, 2);
        assert_eq!(parsed.report.malformed, 1);
    }

    #[test]
    fn missing_file_is_not_found() {
        let missing = std::env::temp_dir().join("stepper_nonexistent_12345.jsonl");

        let result = read_file(&missing);

        assert!(
            matches!(&result, Err(LoadError::NotFound { path }) if path == &missing),
            "Should return NotFound for missing file, got: {:?}",
            result
        );
    }
}
