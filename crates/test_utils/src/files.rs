//! Temporary CSV Files
//!
//! The loader and the HTTP server read from a path, so tests materialise
//! fixture text into a temp directory that is removed on drop.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A CSV file living in its own temporary directory
pub struct TempCsv {
    _dir: TempDir,
    path: PathBuf,
}

impl TempCsv {
    /// Writes `contents` to `claims.csv` in a fresh temp directory
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("claims.csv");
        fs::write(&path, contents).expect("write temp csv");
        Self { _dir: dir, path }
    }

    /// Path of the CSV file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a file that does not exist, next to the CSV
    pub fn missing_sibling(&self) -> PathBuf {
        self.path.with_file_name("does_not_exist.csv")
    }
}
