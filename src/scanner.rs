// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Non-recursive directory scanning

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{CueSortError, Result};

/// List the regular files directly inside `root`, sorted by file name.
///
/// Subdirectories are never entered, so files already sorted into
/// `root/<entity>/<action>/` are invisible to later runs.
pub fn scan_dir(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(CueSortError::RootNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(CueSortError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping non-file entry: {:?}", path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

/// Check if a file is worth classifying at all
pub fn should_process(path: &Path, skip_hidden: bool) -> bool {
    let filename = match path.file_name().and_then(|n| n.to_str()) {
        Some(n) => n,
        None => return false,
    };

    if skip_hidden && filename.starts_with('.') {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_is_flat_and_sorted() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.ogg"), b"b").unwrap();
        fs::write(dir.path().join("a.ogg"), b"a").unwrap();
        fs::create_dir_all(dir.path().join("dog/Idle")).unwrap();
        fs::write(dir.path().join("dog/Idle/c.ogg"), b"c").unwrap();

        let files = scan_dir(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ogg", "b.ogg"]);
    }

    #[test]
    fn test_missing_root() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        assert!(matches!(scan_dir(&missing), Err(CueSortError::RootNotFound(_))));
    }

    #[test]
    fn test_root_is_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.ogg");
        fs::write(&file, b"x").unwrap();
        assert!(matches!(scan_dir(&file), Err(CueSortError::NotADirectory(_))));
    }

    #[test]
    fn test_should_process_hidden() {
        assert!(!should_process(Path::new("/sfx/.MADDOGAA001.ogg"), true));
        assert!(should_process(Path::new("/sfx/.MADDOGAA001.ogg"), false));
        assert!(should_process(Path::new("/sfx/MADDOGAA001.ogg"), true));
    }
}
