//! # Directory Entries
//!
//! One child of the current directory, as the listing collaborator saw it.
//! Entries are plain values: a new listing replaces the whole vector, nothing
//! is ever patched in place.

/// A single file or subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Final path component only, never contains a separator.
    pub name: String,
    pub is_dir: bool,
}

impl DirectoryEntry {
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    /// Dotfiles are hidden by convention on every platform we run on.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert!(DirectoryEntry::dir("docs").is_dir);
        assert!(!DirectoryEntry::file("a.txt").is_dir);
    }

    #[test]
    fn test_is_hidden() {
        assert!(DirectoryEntry::file(".bashrc").is_hidden());
        assert!(!DirectoryEntry::file("bashrc").is_hidden());
    }
}
