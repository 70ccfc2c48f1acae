//! Content loading and writing
//!
//! Files are decoded and encoded as UTF-8 explicitly (using the
//! `encoding_rs` crate) so that malformed input is surfaced as a per-task
//! failure instead of silently corrupting content.

use std::fs;
use std::path::Path;

use encoding_rs::UTF_8;

use crate::errors::{file_operation_error, invalid_encoding_error, Result};

/// Read the full text of a file as UTF-8
///
/// A nonexistent or unreadable file, or one that is not valid UTF-8, is a
/// per-task failure; the caller reports it and moves on to the next task.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes =
        fs::read(path).map_err(|e| file_operation_error(e, path.to_path_buf(), "read"))?;

    let (decoded, _, had_errors) = UTF_8.decode(&bytes);
    if had_errors {
        return Err(invalid_encoding_error(path.to_path_buf(), "UTF-8"));
    }

    Ok(decoded.into_owned())
}

/// Write text to a file as UTF-8, creating parent directories
///
/// Destructive for in-place tasks: the previous content is not backed up.
pub fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
        }
    }

    fs::write(path, text).map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))
}
