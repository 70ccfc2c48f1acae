//! Path enumeration
//!
//! Candidate files are discovered with glob patterns and returned in
//! lexicographic order so repeated runs report files in a stable order.

use std::path::{Path, PathBuf};

use glob::glob;
use log::debug;

use crate::constants::{MARKDOWN_GLOB, MARKDOWN_GLOB_RECURSIVE};
use crate::errors::{
    directory_not_found_error, glob_pattern_error, invalid_encoding_error, Result,
};

/// Require a directory to exist before a batch starts
///
/// Missing required roots abort the whole run; nothing is processed.
pub fn require_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(directory_not_found_error(path.to_path_buf()))
    }
}

/// Find files matching a glob pattern within one directory
///
/// A directory that does not exist yields an empty list, not an error.
/// Entries that are not regular files are filtered out.
pub fn find_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!("Directory does not exist, skipping: {}", dir.display());
        return Ok(Vec::new());
    }

    let full_pattern = dir.join(pattern);
    let pattern_str = full_pattern
        .to_str()
        .ok_or_else(|| invalid_encoding_error(full_pattern.clone(), "Unicode"))?;

    let mut files: Vec<PathBuf> = glob(pattern_str)
        .map_err(|e| glob_pattern_error(e, pattern_str))?
        .filter_map(std::result::Result::ok)
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    debug!("Found {} files for pattern {}", files.len(), pattern_str);

    Ok(files)
}

/// Find Markdown files under a root directory
pub fn find_markdown_files(root: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    let pattern = if recursive {
        MARKDOWN_GLOB_RECURSIVE
    } else {
        MARKDOWN_GLOB
    };
    find_files(root, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_require_directory() {
        let temp_dir = tempdir().unwrap();
        assert!(require_directory(temp_dir.path()).is_ok());

        let missing = temp_dir.path().join("missing");
        let result = require_directory(&missing);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Directory not found"));
    }

    #[test]
    fn test_find_files_missing_directory_is_empty() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("missing");
        let files = find_files(&missing, MARKDOWN_GLOB).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_find_markdown_files_sorted() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("b.md"), "b").unwrap();
        fs::write(temp_dir.path().join("a.md"), "a").unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        let files = find_markdown_files(temp_dir.path(), false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn test_find_markdown_files_recursive() {
        let temp_dir = tempdir().unwrap();
        let sub = temp_dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(temp_dir.path().join("top.md"), "top").unwrap();
        fs::write(sub.join("nested.md"), "nested").unwrap();

        let flat = find_markdown_files(temp_dir.path(), false).unwrap();
        assert_eq!(flat.len(), 1);

        let recursive = find_markdown_files(temp_dir.path(), true).unwrap();
        assert_eq!(recursive.len(), 2);
    }
}
