//! Keyboard event handling for the chart viewer.
//!
//! Vim-style keys:
//! - `j` / `Down`: scroll down one bar
//! - `k` / `Up`: scroll up one bar
//! - `PageDown` / `Ctrl-f`: scroll down one page
//! - `PageUp` / `Ctrl-b`: scroll up one page
//! - `g` / `Home`: first bar
//! - `G` / `End`: last bar
//! - `q`, `Esc`, `Enter` or `Ctrl-C`: close the viewer

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::model::ChartView;

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Close the viewer
    Quit,
    /// Scroll one bar up
    ScrollUp,
    /// Scroll one bar down
    ScrollDown,
    /// Scroll one page up
    PageUp,
    /// Scroll one page down
    PageDown,
    /// Jump to the first bar
    GoToFirst,
    /// Jump to the last bar
    GoToLast,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for an event with a timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a terminal event into an action.
pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

fn handle_key_event(key: KeyEvent) -> Action {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            KeyCode::Char('f') => Action::PageDown,
            KeyCode::Char('b') => Action::PageUp,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        KeyCode::PageDown | KeyCode::Char(' ') => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('g') | KeyCode::Home => Action::GoToFirst,
        KeyCode::Char('G') | KeyCode::End => Action::GoToLast,
        _ => Action::None,
    }
}

/// Applies an action to the view. Returns true if the viewer should close.
///
/// Resizes are handled by the controller, which knows the terminal size.
pub fn apply_action(view: &mut ChartView, action: Action) -> bool {
    match action {
        Action::Quit => return true,
        Action::ScrollUp => view.scroll_up(1),
        Action::ScrollDown => view.scroll_down(1),
        Action::PageUp => view.page_up(),
        Action::PageDown => view.page_down(),
        Action::GoToFirst => view.go_to_first(),
        Action::GoToLast => view.go_to_last(),
        Action::Resize(_, _) | Action::None => {}
    }
    false
}
