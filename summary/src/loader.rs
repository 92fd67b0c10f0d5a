//! Input resolution: existence check, UTF-8 read, JSON parse.
//!
//! The existence check runs before any read so that a missing input file
//! surfaces as its own error kind, distinct from an unreadable one.

use std::fs;
use std::path::Path;

use crate::record::ResultRecord;
use crate::SummaryError;

/// Loads the result set from `path`.
///
/// # Errors
///
/// Returns [`SummaryError::MissingInput`] if `path` does not exist,
/// [`SummaryError::Read`] if it exists but cannot be read as UTF-8 text,
/// and [`SummaryError::Parse`] if the content is not a JSON array of
/// record objects.
pub fn load_results(path: &Path) -> Result<Vec<ResultRecord>, SummaryError> {
    if !path.exists() {
        return Err(SummaryError::MissingInput {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path).map_err(|source| SummaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SummaryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
