//! Output file write: full overwrite, UTF-8.
//!
//! The parent directory is assumed to exist; nothing here creates it. The
//! write is not atomic, so an interrupted run may leave a partial file.

use std::fs;
use std::path::Path;

use crate::SummaryError;

/// Writes the rendered document to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`SummaryError::Write`] when the path cannot be written, for
/// example on a missing parent directory or insufficient permissions.
pub fn write_report(path: &Path, markdown: &str) -> Result<(), SummaryError> {
    fs::write(path, markdown).map_err(|source| SummaryError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn writes_document_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        write_report(&path, "# Ladder Summary\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Ladder Summary\n");
    }

    #[test]
    fn overwrites_existing_file_completely() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.md");
        fs::write(&path, "stale content, much longer than the replacement\n").unwrap();
        write_report(&path, "fresh\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn missing_parent_directory_is_a_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("summary.md");
        let err = write_report(&path, "x\n").unwrap_err();
        assert!(matches!(err, SummaryError::Write { .. }));
        assert!(err.to_string().contains("summary.md"));
    }
}
