// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Directory creation and file relocation

use std::path::Path;
use tracing::info;

use crate::{CueSortError, Result};

/// Make sure `dir` exists, creating missing parents. No-op if it already does.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    info!("Ensuring directory exists: {:?}", dir);
    if !dir.is_dir() {
        std::fs::create_dir_all(dir).map_err(|source| CueSortError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Rename `from` to `to`. An existing file at `to` is handled however the
/// platform's rename handles it.
pub fn move_file(from: &Path, to: &Path) -> Result<()> {
    info!("Moving {:?} to {:?}", from, to);
    std::fs::rename(from, to).map_err(|source| CueSortError::Move {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_log::capture;
    use std::fs;
    use tempfile::tempdir;
    use tracing::Level;

    #[test]
    fn test_ensure_dir_nested_and_idempotent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("dog").join("Idle");

        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_dir_over_file_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("dog");
        fs::write(&blocker, b"x").unwrap();

        let err = ensure_dir(&blocker.join("Idle")).unwrap_err();
        assert!(matches!(err, CueSortError::CreateDir { .. }));
    }

    #[test]
    fn test_move_preserves_content() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("MADDOGAA001.ogg");
        let to = dir.path().join("moved.ogg");
        fs::write(&from, b"woof").unwrap();

        move_file(&from, &to).unwrap();
        assert!(!from.exists());
        assert_eq!(fs::read(&to).unwrap(), b"woof");
    }

    #[test]
    fn test_move_missing_source() {
        let dir = tempdir().unwrap();
        let err = move_file(&dir.path().join("gone.ogg"), &dir.path().join("x.ogg")).unwrap_err();
        assert!(matches!(err, CueSortError::Move { .. }));
    }

    #[test]
    fn test_ensure_dir_logs_even_when_present() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("dog");
        fs::create_dir(&target).unwrap();

        let (result, logs) = capture(Level::INFO, || ensure_dir(&target));
        result.unwrap();
        assert_eq!(logs.matches("Ensuring directory exists").count(), 1);
        assert!(logs.contains("dog"));
    }

    #[test]
    fn test_move_logs_both_paths() {
        let dir = tempdir().unwrap();
        let from = dir.path().join("MASCRPZA999.ogg");
        let to = dir.path().join("moved.ogg");
        fs::write(&from, b"click").unwrap();

        let (result, logs) = capture(Level::INFO, || move_file(&from, &to));
        result.unwrap();
        let line = logs.lines().find(|l| l.contains("Moving")).unwrap();
        assert!(line.contains("MASCRPZA999.ogg"));
        assert!(line.contains("moved.ogg"));
    }
}
