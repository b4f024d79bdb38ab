//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, draws the core `View`,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly one event at a time: read a key, run `update()` to completion
//! (including any directory read), then redraw. Nothing runs in the
//! background, so the loop idles in `poll` and only redraws after an event.
//!
//! Recoverable errors from `update()` land in `TuiState::error` and show up
//! in the status line. The session only ends on `Effect::Quit` or a terminal
//! I/O failure.

mod component;
mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::listing::DirectoryLister;
use crate::core::state::Navigator;
use crate::core::view::render;
use crate::tui::components::FileListState;
use crate::tui::event::{TuiEvent, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core navigation state)
#[derive(Default)]
pub struct TuiState {
    pub file_list: FileListState,
    /// Last recoverable error, cleared by the next successful transition.
    pub error: Option<String>,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Applies one input event. Returns `true` when the session should end.
pub fn handle_event(
    nav: &mut Navigator,
    lister: &dyn DirectoryLister,
    tui: &mut TuiState,
    event: TuiEvent,
) -> bool {
    let action = match event {
        TuiEvent::Resize => return false,
        TuiEvent::Command(action) => action,
    };

    // Enter is disabled while nothing is selected.
    if action == Action::EnterSelection && !nav.has_selection() {
        debug!("Ignoring EnterSelection on empty listing");
        return false;
    }

    match update(nav, lister, action) {
        Ok(Effect::Quit) => true,
        Ok(Effect::None) => {
            tui.error = None;
            false
        }
        Err(err) => {
            warn!("{:?} failed: {}", action, err);
            tui.error = Some(err.to_string());
            false
        }
    }
}

pub fn run(mut nav: Navigator, lister: &dyn DirectoryLister) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();
    let mut tui = TuiState::new();

    let result = event_loop(&mut terminal, &mut nav, lister, &mut tui);

    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    nav: &mut Navigator,
    lister: &dyn DirectoryLister,
    tui: &mut TuiState,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame
    loop {
        if needs_redraw {
            let view = render(nav);
            terminal.draw(|f| ui::draw_ui(f, &view, tui))?;
            needs_redraw = false;
        }

        let Some(event) = poll_event_timeout(IDLE_POLL)? else {
            continue;
        };
        needs_redraw = true;
        if handle_event(nav, lister, tui, event) {
            info!("Quit requested at {}", nav.current_path.display());
            return Ok(());
        }
    }
}
