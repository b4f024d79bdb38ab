//! # Navigation Errors
//!
//! `Startup` is the only fatal variant. Everything else is raised by a single
//! transition, leaves the `Navigator` untouched, and ends up in the status line.

use std::fmt;
use std::path::PathBuf;

use crate::core::listing::ListingError;

#[derive(Debug)]
pub enum NavError {
    /// Working directory unknown or unreadable. Exits the process.
    Startup(String),
    /// A directory read during Enter/GoToParent failed.
    Listing { path: PathBuf, source: ListingError },
    /// EnterSelection on something that is not a directory.
    UnsupportedOperation(String),
    /// EnterSelection with nothing selected.
    InvalidSelection,
}

impl NavError {
    /// True if the interactive session must stop.
    pub fn is_fatal(&self) -> bool {
        matches!(self, NavError::Startup(_))
    }
}

impl fmt::Display for NavError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavError::Startup(msg) => write!(f, "startup failed: {msg}"),
            NavError::Listing { path, source } => {
                write!(f, "cannot list {}: {source}", path.display())
            }
            NavError::UnsupportedOperation(name) => {
                write!(f, "{name}: opening files is not supported")
            }
            NavError::InvalidSelection => write!(f, "nothing selected"),
        }
    }
}

impl std::error::Error for NavError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NavError::Listing { source, .. } => Some(source),
            _ => None,
        }
    }
}
