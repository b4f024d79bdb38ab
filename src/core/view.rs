//! # View
//!
//! Pure projection of a `Navigator` into the lines the user sees.
//! `render()` never touches the filesystem and never fails: an empty listing
//! renders a placeholder instead of a selected name.
//!
//! ```text
//! Current files
//! > docs
//!   a.txt
//! Current path: /home/u
//! Selected path: docs
//! Files: docs, a.txt
//! ```
//!
//! The TUI draws a `View` with styling; `Display` gives the plain text form.

use std::fmt;

use crate::core::state::Navigator;

pub const HEADER: &str = "Current files";
pub const CURSOR_MARKER: &str = ">";
pub const BLANK_MARKER: &str = " ";
pub const NAME_SEPARATOR: &str = ", ";
pub const NO_SELECTION: &str = "(none)";

/// One listing line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub name: String,
    pub is_dir: bool,
    pub selected: bool,
}

impl Row {
    pub fn marker(&self) -> &'static str {
        if self.selected { CURSOR_MARKER } else { BLANK_MARKER }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.marker(), self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub rows: Vec<Row>,
    /// Index into `rows` of the cursor, `None` when the listing is empty.
    pub selected: Option<usize>,
    pub current_path: String,
    pub selected_name: Option<String>,
}

impl View {
    pub fn header(&self) -> &'static str {
        HEADER
    }

    pub fn path_line(&self) -> String {
        format!("Current path: {}", self.current_path)
    }

    pub fn selected_line(&self) -> String {
        format!(
            "Selected path: {}",
            self.selected_name.as_deref().unwrap_or(NO_SELECTION)
        )
    }

    pub fn files_line(&self) -> String {
        let names: Vec<&str> = self.rows.iter().map(|r| r.name.as_str()).collect();
        format!("Files: {}", names.join(NAME_SEPARATOR))
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        writeln!(f, "{}", self.path_line())?;
        writeln!(f, "{}", self.selected_line())?;
        writeln!(f, "{}", self.files_line())
    }
}

pub fn render(nav: &Navigator) -> View {
    let rows = nav
        .entries
        .iter()
        .enumerate()
        .map(|(i, entry)| Row {
            name: entry.name.clone(),
            is_dir: entry.is_dir,
            selected: i == nav.cursor,
        })
        .collect();

    View {
        rows,
        selected: nav.selected().map(|_| nav.cursor),
        current_path: nav.current_path.display().to_string(),
        selected_name: nav.selected().map(|e| e.name.clone()),
    }
}
