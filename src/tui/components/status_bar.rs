//! # StatusBar Component
//!
//! Footer below the file list: current path, selected entry, every entry
//! name, and one status line.
//!
//! The status line shows the last recoverable error (red) when there is one,
//! otherwise the key hints. Errors never replace the listing, they sit
//! alongside it until the next successful transition clears them.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::view::View;
use crate::tui::component::Component;

pub const KEY_HINTS: &str = "↑/k up  ↓/j down  →/l open dir  ←/h parent  q quit";

/// Number of terminal rows the status bar needs.
pub const STATUS_BAR_HEIGHT: u16 = 4;

pub struct StatusBar<'a> {
    pub view: &'a View,
    /// Last recoverable error, if any.
    pub error: Option<&'a str>,
}

impl<'a> StatusBar<'a> {
    pub fn new(view: &'a View, error: Option<&'a str>) -> Self {
        Self { view, error }
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let status = match self.error {
            Some(msg) => Line::from(Span::styled(
                format!("Error: {msg}"),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray))),
        };

        let lines = vec![
            Line::from(self.view.path_line()),
            Line::from(self.view.selected_line()),
            Line::from(self.view.files_line()),
            status,
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }
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

    fn draw(view: &View, error: Option<&str>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, STATUS_BAR_HEIGHT)).unwrap();
        terminal
            .draw(|f| StatusBar::new(view, error).render(f, f.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    fn home_view() -> View {
        render(&Navigator {
            current_path: PathBuf::from("/home/u"),
            entries: vec![DirectoryEntry::dir("docs"), DirectoryEntry::file("a.txt")],
            cursor: 1,
        })
    }

    #[test]
    fn test_footer_lines() {
        let text = draw(&home_view(), None);
        assert!(text.contains("Current path: /home/u"));
        assert!(text.contains("Selected path: a.txt"));
        assert!(text.contains("Files: docs, a.txt"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_error_replaces_hints() {
        let text = draw(&home_view(), Some("a.txt: opening files is not supported"));
        assert!(text.contains("Error: a.txt: opening files is not supported"));
        assert!(!text.contains("q quit"));
        // The listing footer stays visible alongside the error
        assert!(text.contains("Current path: /home/u"));
    }
}
