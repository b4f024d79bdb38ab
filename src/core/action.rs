//! # Actions
//!
//! Everything the user can do becomes an `Action`.
//! Pressing `j`? That's `Action::MoveDown`.
//! Pressing `l` on a directory? That's `Action::EnterSelection`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns what the caller should do next.
//!
//! ```text
//! Navigator + Action  →  update()  →  Navigator' + Effect
//!                                 └→  NavError (Navigator untouched)
//! ```
//!
//! Directory reads go through the `DirectoryLister` passed in, so every
//! transition is testable with an in-memory fake.

use std::path::PathBuf;

use log::{debug, warn};

use crate::core::error::NavError;
use crate::core::listing::DirectoryLister;
use crate::core::state::Navigator;

/// The complete set of commands the navigator understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    EnterSelection,
    GoToParent,
    Quit,
}

/// What the event loop should do after a successful transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(
    nav: &mut Navigator,
    lister: &dyn DirectoryLister,
    action: Action,
) -> Result<Effect, NavError> {
    debug!("update: {:?} at {} (cursor={})", action, nav.current_path.display(), nav.cursor);
    match action {
        Action::MoveUp => {
            nav.cursor = nav.cursor.saturating_sub(1);
            Ok(Effect::None)
        }
        Action::MoveDown => {
            if nav.cursor + 1 < nav.entries.len() {
                nav.cursor += 1;
            }
            Ok(Effect::None)
        }
        Action::EnterSelection => {
            let Some(entry) = nav.selected() else {
                warn!("EnterSelection with empty listing at {}", nav.current_path.display());
                return Err(NavError::InvalidSelection);
            };
            if !entry.is_dir {
                return Err(NavError::UnsupportedOperation(entry.name.clone()));
            }
            let target = nav.current_path.join(&entry.name);
            navigate(nav, lister, target)?;
            Ok(Effect::None)
        }
        Action::GoToParent => {
            // Path::parent is None only at the root, whose parent is itself.
            let target = nav
                .current_path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| nav.current_path.clone());
            navigate(nav, lister, target)?;
            Ok(Effect::None)
        }
        Action::Quit => Ok(Effect::Quit),
    }
}

/// Lists `target` first and only then commits, so a failed read changes nothing.
fn navigate(
    nav: &mut Navigator,
    lister: &dyn DirectoryLister,
    target: PathBuf,
) -> Result<(), NavError> {
    match lister.list(&target) {
        Ok(entries) => {
            debug!("Navigated to {} ({} entries)", target.display(), entries.len());
            nav.replace_listing(target, entries);
            Ok(())
        }
        Err(source) => {
            warn!("Listing {} failed: {}", target.display(), source);
            Err(NavError::Listing {
                path: target,
                source,
            })
        }
    }
}
