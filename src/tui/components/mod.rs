//! # TUI Components
//!
//! Components follow two patterns, both taking their data as props:
//!
//! - `StatusBar`: stateless, everything comes from the `View` and the
//!   current error message.
//! - `FileList`: a transient wrapper over persistent `FileListState`, so the
//!   scroll offset survives between frames.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── file_list.rs     (header + scrolling entry list)
//! └── status_bar.rs    (path, selection, names, status line)
//! ```

pub mod file_list;
pub mod status_bar;

pub use file_list::{FileList, FileListState};
pub use status_bar::StatusBar;
