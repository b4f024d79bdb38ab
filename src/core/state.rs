//! # Navigator State
//!
//! Everything the browser knows, in one explicitly passed value.
//!
//! ```text
//! Navigator
//! ├── current_path: PathBuf           // directory being shown
//! ├── entries: Vec<DirectoryEntry>    // its listing, replaced wholesale
//! └── cursor: usize                   // highlighted entry, 0 when empty
//! ```
//!
//! State changes only happen through `update(state, lister, action)` in
//! action.rs. The one exception is construction.

use std::path::PathBuf;

use log::info;

use crate::core::entry::DirectoryEntry;
use crate::core::error::NavError;
use crate::core::listing::DirectoryLister;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    pub current_path: PathBuf,
    pub entries: Vec<DirectoryEntry>,
    pub cursor: usize,
}

impl Navigator {
    /// Builds the initial state for `path`. A failed listing is a startup error.
    pub fn open(path: PathBuf, lister: &dyn DirectoryLister) -> Result<Self, NavError> {
        let entries = lister
            .list(&path)
            .map_err(|e| NavError::Startup(format!("cannot list {}: {e}", path.display())))?;
        info!("Opened {} ({} entries)", path.display(), entries.len());
        Ok(Self {
            current_path: path,
            entries,
            cursor: 0,
        })
    }

    /// Starts in the process working directory.
    pub fn from_current_dir(lister: &dyn DirectoryLister) -> Result<Self, NavError> {
        let cwd = std::env::current_dir()
            .map_err(|e| NavError::Startup(format!("cannot determine working directory: {e}")))?;
        Self::open(cwd, lister)
    }

    /// The highlighted entry, if the listing is non-empty.
    pub fn selected(&self) -> Option<&DirectoryEntry> {
        self.entries.get(self.cursor)
    }

    pub fn has_selection(&self) -> bool {
        self.selected().is_some()
    }

    /// Swaps in a new directory and its listing, resetting the cursor.
    pub(crate) fn replace_listing(&mut self, path: PathBuf, entries: Vec<DirectoryEntry>) {
        self.current_path = path;
        self.entries = entries;
        self.cursor = 0;
    }
}
