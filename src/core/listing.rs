//! # Directory Listing
//!
//! The only place the core touches storage. `DirectoryLister` is the seam:
//! `FsLister` reads the real filesystem, tests swap in an in-memory fake.
//!
//! Native `read_dir` order is platform-defined, so `FsLister` always sorts:
//!
//! ```text
//! by name:           Makefile, a.txt, docs/, src/
//! directories first: docs/, src/, a.txt, Makefile
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::core::entry::DirectoryEntry;

/// Why a directory could not be listed.
#[derive(Debug)]
pub enum ListingError {
    NotFound,
    PermissionDenied,
    NotADirectory,
    /// Anything else the OS reported.
    Io(io::Error),
}

impl From<io::Error> for ListingError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ListingError::NotFound,
            io::ErrorKind::PermissionDenied => ListingError::PermissionDenied,
            io::ErrorKind::NotADirectory => ListingError::NotADirectory,
            _ => ListingError::Io(err),
        }
    }
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::NotFound => write!(f, "no such directory"),
            ListingError::PermissionDenied => write!(f, "permission denied"),
            ListingError::NotADirectory => write!(f, "not a directory"),
            ListingError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for ListingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ListingError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Produces the children of a directory, in display order.
pub trait DirectoryLister {
    fn list(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ListingError>;
}

/// Explicit ordering applied after every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Plain byte-wise name order.
    #[default]
    Name,
    /// Directories before files, then case-insensitive name.
    DirectoriesFirst,
}

impl SortOrder {
    pub fn sort(self, entries: &mut [DirectoryEntry]) {
        match self {
            SortOrder::Name => entries.sort_by(|a, b| a.name.cmp(&b.name)),
            SortOrder::DirectoriesFirst => entries.sort_by(|a, b| {
                if a.is_dir != b.is_dir {
                    return b.is_dir.cmp(&a.is_dir);
                }
                match a.name.to_lowercase().cmp(&b.name.to_lowercase()) {
                    Ordering::Equal => a.name.cmp(&b.name),
                    other => other,
                }
            }),
        }
    }
}

/// Lists directories with `std::fs::read_dir`.
#[derive(Debug, Clone, Default)]
pub struct FsLister {
    pub show_hidden: bool,
    pub order: SortOrder,
}

impl FsLister {
    pub fn new(show_hidden: bool, order: SortOrder) -> Self {
        Self { show_hidden, order }
    }
}

impl DirectoryLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<DirectoryEntry>, ListingError> {
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(path)? {
            let dir_entry = dir_entry?;
            let name = dir_entry.file_name().to_string_lossy().into_owned();
            // file_type() does not follow symlinks: a link is listed as a file.
            let is_dir = dir_entry.file_type()?.is_dir();
            let entry = DirectoryEntry { name, is_dir };
            if !self.show_hidden && entry.is_hidden() {
                continue;
            }
            entries.push(entry);
        }
        self.order.sort(&mut entries);
        debug!("Listed {} entries in {}", entries.len(), path.display());
        Ok(entries)
    }
}
