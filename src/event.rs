//! Keyboard event handling.
//!
//! Insert mode (default) edits the sequence input:
//! - printable characters: append to the input
//! - `Backspace`: delete the last character
//! - `Enter`: analyse the input
//! - `Ctrl+L`: clear the input
//! - `:` or `Esc`: enter command mode
//!
//! Command mode:
//! - `:q` or `:quit`: quit the application
//! - `:e <file>` or `:open <file>`: load and analyse a sequence file
//! - `:c` or `:clear`: clear input and results
//! - `:h` or `:help`: show help
//!
//! `Ctrl+C` quits from any mode.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::model::{AppMode, AppState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Add character to the sequence input
    InputChar(char),
    /// Add pasted text to the sequence input
    InputText(String),
    /// Delete the last input character
    InputBackspace,
    /// Clear the sequence input
    ClearInput,
    /// Analyse the sequence input
    Analyze,
    /// Enter command mode
    EnterCommandMode,
    /// Add character to command buffer
    CommandChar(char),
    /// Execute current command
    ExecuteCommand,
    /// Cancel command mode
    CancelCommand,
    /// Backspace in command mode
    CommandBackspace,
    /// Dismiss the help overlay
    DismissHelp,
    /// Resize event (terminal resized)
    Resize(u16, u16),
}

/// Polls for keyboard events with a timeout.
///
/// Returns `None` if no event occurred within the timeout.
pub fn poll_event(timeout: Duration) -> Option<Event> {
    if event::poll(timeout).ok()? {
        event::read().ok()
    } else {
        None
    }
}

/// Converts a crossterm event to an Action based on current app mode.
pub fn handle_event(event: Event, mode: &AppMode, show_help: bool) -> Action {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key_event(key_event, mode, show_help)
        }
        Event::Paste(text) if !show_help => match mode {
            AppMode::Insert => Action::InputText(text),
            AppMode::Command(_) => Action::None,
        },
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode, show_help: bool) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    // If help is shown, any key dismisses it
    if show_help {
        return Action::DismissHelp;
    }

    match mode {
        AppMode::Insert => handle_insert_mode(key),
        AppMode::Command(_) => handle_command_mode(key),
    }
}

/// Handles key events while typing a sequence.
fn handle_insert_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('l') => Action::ClearInput,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Enter => Action::Analyze,
        KeyCode::Backspace => Action::InputBackspace,
        KeyCode::Esc | KeyCode::Char(':') => Action::EnterCommandMode,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

/// Handles key events in command mode.
fn handle_command_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::ExecuteCommand,
        KeyCode::Esc => Action::CancelCommand,
        KeyCode::Backspace => Action::CommandBackspace,
        KeyCode::Char(c) => Action::CommandChar(c),
        _ => Action::None,
    }
}

/// Applies an action to the application state.
pub fn apply_action(state: &mut AppState, action: Action) {
    match action {
        Action::None | Action::Resize(_, _) => {}
        Action::Quit => state.should_quit = true,
        Action::InputChar(c) => state.insert_char(c),
        Action::InputText(text) => {
            for c in text.chars().filter(|c| !c.is_control()) {
                state.insert_char(c);
            }
        }
        Action::InputBackspace => state.backspace(),
        Action::ClearInput => state.clear_input(),
        Action::Analyze => state.analyze_input(),
        Action::EnterCommandMode => state.enter_command_mode(),
        Action::CommandChar(c) => state.command_input(c),
        Action::ExecuteCommand => state.execute_command(),
        Action::CancelCommand => state.cancel_command(),
        Action::CommandBackspace => state.command_backspace(),
        Action::DismissHelp => state.dismiss_help(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_insert_mode_keys() {
        let mode = AppMode::Insert;
        assert_eq!(handle_event(key(KeyCode::Char('a')), &mode, false), Action::InputChar('a'));
        assert_eq!(handle_event(key(KeyCode::Enter), &mode, false), Action::Analyze);
        assert_eq!(handle_event(key(KeyCode::Backspace), &mode, false), Action::InputBackspace);
        assert_eq!(handle_event(key(KeyCode::Char(':')), &mode, false), Action::EnterCommandMode);
        assert_eq!(handle_event(key(KeyCode::Esc), &mode, false), Action::EnterCommandMode);
        assert_eq!(handle_event(ctrl('l'), &mode, false), Action::ClearInput);
    }

    #[test]
    fn test_command_mode_keys() {
        let mode = AppMode::Command("q".to_string());
        assert_eq!(handle_event(key(KeyCode::Char('x')), &mode, false), Action::CommandChar('x'));
        assert_eq!(handle_event(key(KeyCode::Enter), &mode, false), Action::ExecuteCommand);
        assert_eq!(handle_event(key(KeyCode::Esc), &mode, false), Action::CancelCommand);
        assert_eq!(handle_event(key(KeyCode::Backspace), &mode, false), Action::CommandBackspace);
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        assert_eq!(handle_event(ctrl('c'), &AppMode::Insert, false), Action::Quit);
        assert_eq!(handle_event(ctrl('c'), &AppMode::Command(String::new()), false), Action::Quit);
        assert_eq!(handle_event(ctrl('c'), &AppMode::Insert, true), Action::Quit);
    }

    #[test]
    fn test_help_dismissed_by_any_key() {
        assert_eq!(handle_event(key(KeyCode::Char('x')), &AppMode::Insert, true), Action::DismissHelp);
    }

    #[test]
    fn test_paste_skips_line_breaks() {
        let action = handle_event(Event::Paste("ACGT\nTTGG\r\n".to_string()), &AppMode::Insert, false);
        assert_eq!(action, Action::InputText("ACGT\nTTGG\r\n".to_string()));

        let mut state = AppState::new();
        apply_action(&mut state, action);
        assert_eq!(state.input, "ACGTTTGG");
    }

    #[test]
    fn test_resize() {
        assert_eq!(handle_event(Event::Resize(80, 24), &AppMode::Insert, false), Action::Resize(80, 24));
    }

    #[test]
    fn test_typing_and_analyzing() {
        let mut state = AppState::new();
        for c in "gcat".chars() {
            apply_action(&mut state, Action::InputChar(c));
        }
        apply_action(&mut state, Action::Analyze);
        let view = state.result.as_ref().unwrap();
        assert_eq!(view.analysis.length, 4);
        assert!((view.analysis.gc_content - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_command_round_trip() {
        let mut state = AppState::new();
        apply_action(&mut state, Action::EnterCommandMode);
        apply_action(&mut state, Action::CommandChar('q'));
        apply_action(&mut state, Action::ExecuteCommand);
        assert!(state.should_quit);
    }
}
