//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read file contents with standardized error handling.
///
/// Wraps `fs::read_to_string` with consistent `Error::internal_io` formatting.
pub fn read_file(path: &Path, operation: &str) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::internal_io(e.to_string(), Some(operation.to_string())))
}

/// Read a file the operator pointed us at.
///
/// A missing file is the operator's mistake and maps to `InputFileNotFound`;
/// anything else (permissions, invalid UTF-8) stays an internal IO error.
pub fn read_input_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::input_file_not_found(path.display().to_string()),
        _ => Error::internal_io(e.to_string(), Some(format!("read {}", path.display()))),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path(), "test read").unwrap();
        assert!(content.contains("test content"));
    }

    #[test]
    fn read_file_returns_error_for_missing_file() {
        let result = read_file(Path::new("/nonexistent/path.txt"), "test read");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }

    #[test]
    fn read_input_file_maps_missing_to_not_found() {
        let err = read_input_file(Path::new("/nonexistent/values.txt")).unwrap_err();
        assert_eq!(err.code.as_str(), "input.file_not_found");
        assert_eq!(err.details["path"], "/nonexistent/values.txt");
    }

    #[test]
    fn read_input_file_rejects_invalid_utf8_as_io_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0xff, 0xfe, b'\n']).unwrap();

        let err = read_input_file(temp.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "internal.io_error");
    }
}
