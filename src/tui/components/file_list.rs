//! # FileList Component
//!
//! The header line plus one row per directory entry, with the cursor row
//! highlighted and kept in view when the listing is taller than the screen.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FileListState` lives in `TuiState` (scroll offset survives frames)
//! - `FileList` is created each frame with the borrowed `View`

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::view::{Row, View};
use crate::tui::component::Component;

/// Persistent state for the file list.
#[derive(Default)]
pub struct FileListState {
    pub list_state: ListState,
}

impl FileListState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Transient render wrapper for the file list.
pub struct FileList<'a> {
    view: &'a View,
    state: &'a mut FileListState,
}

impl<'a> FileList<'a> {
    pub fn new(view: &'a View, state: &'a mut FileListState) -> Self {
        Self { view, state }
    }
}

impl Component for FileList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        let header = Span::styled(
            self.view.header(),
            Style::default().add_modifier(Modifier::BOLD),
        );
        frame.render_widget(header, header_area);

        if self.view.rows.is_empty() {
            let empty = Span::styled("  (empty directory)", Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, list_area);
            self.state.list_state.select(None);
            return;
        }

        let width = list_area.width as usize;
        let items: Vec<ListItem> = self
            .view
            .rows
            .iter()
            .map(|row| ListItem::new(row_line(row, width)))
            .collect();

        self.state.list_state.select(self.view.selected);
        let list = List::new(items)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, list_area, &mut self.state.list_state);
    }
}

fn row_line(row: &Row, width: usize) -> Line<'static> {
    let marker = format!("{} ", row.marker());
    let name_width = width.saturating_sub(marker.width());
    let name_style = if row.is_dir {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::raw(marker),
        Span::styled(truncate_to_width(&row.name, name_width), name_style),
    ])
}

/// Cut `s` to at most `max_width` terminal columns, ending in "…" if cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entry::DirectoryEntry;
    use crate::core::state::Navigator;
    use crate::core::view::render;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::path::PathBuf;

    fn buffer_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect()
    }

    fn nav(count: usize, cursor: usize) -> Navigator {
        Navigator {
            current_path: PathBuf::from("/tmp"),
            entries: (0..count)
                .map(|i| DirectoryEntry::file(format!("file{i:02}")))
                .collect(),
            cursor,
        }
    }

    #[test]
    fn test_renders_header_and_marked_rows() {
        let mut terminal = Terminal::new(TestBackend::new(30, 5)).unwrap();
        let view = render(&nav(2, 1));
        let mut state = FileListState::new();
        terminal
            .draw(|f| FileList::new(&view, &mut state).render(f, f.area()))
            .unwrap();

        let lines = buffer_lines(&terminal);
        assert!(lines[0].starts_with("Current files"));
        assert!(lines[1].starts_with("  file00"));
        assert!(lines[2].starts_with("> file01"));
    }

    #[test]
    fn test_cursor_row_stays_visible_in_long_listing() {
        let mut terminal = Terminal::new(TestBackend::new(30, 4)).unwrap();
        let view = render(&nav(20, 15));
        let mut state = FileListState::new();
        terminal
            .draw(|f| FileList::new(&view, &mut state).render(f, f.area()))
            .unwrap();

        let lines = buffer_lines(&terminal);
        assert!(lines.iter().any(|l| l.starts_with("> file15")));
    }

    #[test]
    fn test_empty_listing_shows_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(30, 3)).unwrap();
        let view = render(&nav(0, 0));
        let mut state = FileListState::new();
        terminal
            .draw(|f| FileList::new(&view, &mut state).render(f, f.area()))
            .unwrap();

        let lines = buffer_lines(&terminal);
        assert!(lines[1].contains("(empty directory)"));
        assert_eq!(state.list_state.selected(), None);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_to_width("much-too-long-name", 8), "much-to…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Wide chars take two columns each
        assert_eq!(truncate_to_width("日本語のファイル", 5), "日本…");
    }
}
