//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::entry::DirectoryEntry;
use crate::core::listing::{DirectoryLister, ListingError};

/// An in-memory filesystem. Any path not registered lists as `PermissionDenied`.
#[derive(Default)]
pub struct FakeLister {
    dirs: HashMap<PathBuf, Vec<DirectoryEntry>>,
    calls: Cell<usize>,
}

impl FakeLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: Vec<DirectoryEntry>) -> Self {
        self.dirs.insert(path.into(), entries);
        self
    }

    /// Number of `list` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DirectoryLister for FakeLister {
    fn list(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ListingError> {
        self.calls.set(self.calls.get() + 1);
        self.dirs
            .get(path)
            .cloned()
            .ok_or(ListingError::PermissionDenied)
    }
}
