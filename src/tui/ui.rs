use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::view::View;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::status_bar::STATUS_BAR_HEIGHT;
use crate::tui::components::{FileList, StatusBar};

pub fn draw_ui(frame: &mut Frame, view: &View, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Min(0), Length(STATUS_BAR_HEIGHT)]);
    let [list_area, status_area] = layout.areas(frame.area());

    FileList::new(view, &mut tui.file_list).render(frame, list_area);
    StatusBar::new(view, tui.error.as_deref()).render(frame, status_area);
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

    fn screen(nav: &Navigator, tui: &mut TuiState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        let view = render(nav);
        terminal.draw(|f| draw_ui(f, &view, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_draw_ui_shows_listing_and_footer() {
        let nav = Navigator {
            current_path: PathBuf::from("/home/u"),
            entries: vec![DirectoryEntry::dir("docs"), DirectoryEntry::file("a.txt")],
            cursor: 0,
        };
        let mut tui = TuiState::new();
        let text = screen(&nav, &mut tui);
        assert!(text.contains("Current files"));
        assert!(text.contains("> docs"));
        assert!(text.contains("Current path: /home/u"));
        assert!(text.contains("Selected path: docs"));
    }

    #[test]
    fn test_draw_ui_with_error_and_empty_listing() {
        let nav = Navigator {
            current_path: PathBuf::from("/empty"),
            entries: vec![],
            cursor: 0,
        };
        let mut tui = TuiState::new();
        tui.error = Some("nothing selected".to_string());
        let text = screen(&nav, &mut tui);
        assert!(text.contains("Selected path: (none)"));
        assert!(text.contains("Error: nothing selected"));
    }

    #[test]
    fn test_draw_ui_tiny_terminal_does_not_panic() {
        let nav = Navigator {
            current_path: PathBuf::from("/"),
            entries: vec![DirectoryEntry::dir("a-very-long-directory-name")],
            cursor: 0,
        };
        let view = render(&nav);
        let mut tui = TuiState::new();
        let mut terminal = Terminal::new(TestBackend::new(5, 2)).unwrap();
        terminal.draw(|f| draw_ui(f, &view, &mut tui)).unwrap();
    }
}
