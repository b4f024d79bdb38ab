use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::action::Action;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// A recognized key, already mapped to a core action.
    Command(Action),
    /// Terminal was resized, only needs a redraw.
    Resize,
}

/// Maps a key press to a navigator command. Unrecognized keys yield `None`.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Up | KeyCode::Char('k')) => Some(Action::MoveUp),
        (_, KeyCode::Down | KeyCode::Char('j')) => Some(Action::MoveDown),
        (_, KeyCode::Right | KeyCode::Char('l')) => Some(Action::EnterSelection),
        (_, KeyCode::Left | KeyCode::Char('h')) => Some(Action::GoToParent),
        _ => None,
    }
}

/// Block until the next meaningful event, or `timeout` passes.
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    let event = match event::read()? {
        // Releases and repeats are reported on some terminals; act on presses only.
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
            log::debug!("Key event: {:?} with modifiers {:?}", key_event.code, key_event.modifiers);
            map_key(key_event).map(TuiEvent::Command)
        }
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    };
    Ok(event)
}
