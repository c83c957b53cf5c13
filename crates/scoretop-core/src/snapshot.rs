//! Scoped temporary copy of a source file.
//!
//! The scoreboard file can be rewritten by a live server at any moment, so
//! reads go through a private copy. The copy is removed when the snapshot
//! drops, on success and failure alike.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::Result;

pub struct SourceSnapshot {
    /// Owns the temporary directory; dropping it removes the copy.
    _dir: TempDir,
    path: PathBuf,
}

impl SourceSnapshot {
    /// Copies `source` into a fresh temporary directory.
    pub fn create<P: AsRef<Path>>(source: P) -> Result<Self> {
        let source = source.as_ref();
        let dir = TempDir::new()?;
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "source.dat".to_string());
        let path = dir.path().join(format!("{}.copy", file_name));
        fs::copy(source, &path)?;
        Ok(Self { _dir: dir, path })
    }

    /// Path of the private copy.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_copies_and_cleans_up() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("scoreboard.dat");
        fs::write(&source, b"payload").unwrap();

        let copy_path;
        {
            let snapshot = SourceSnapshot::create(&source).unwrap();
            copy_path = snapshot.path().to_path_buf();
            assert_eq!(fs::read(snapshot.path()).unwrap(), b"payload");
            assert_ne!(snapshot.path(), source.as_path());
        }
        assert!(!copy_path.exists());
        // The original is left alone.
        assert!(source.exists());
    }

    #[test]
    fn test_snapshot_missing_source_is_an_error() {
        assert!(SourceSnapshot::create("/nonexistent/scoreboard.dat").is_err());
    }
}
