//! Keyboard event handling.
//!
//! This module manages keyboard input for the three shell modes:
//! - Menus: `j`/`k` or arrows to move, `Enter` to activate, `1`-`9` to pick
//!   an item directly, `q`/`Esc` to back out
//! - Prompts: free text entry, `Enter` to submit, `Esc` to cancel
//! - Results: `j`/`k` or arrows to scroll, any other key returns
//!
//! `Ctrl+C` quits from anywhere.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::session::{AppMode, AppState};

/// Actions that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No action (key not recognized)
    None,
    /// Quit the application
    Quit,
    /// Move the menu cursor up
    MenuUp,
    /// Move the menu cursor down
    MenuDown,
    /// Activate the selected menu item
    MenuActivate,
    /// Jump to a menu item by zero-based index and activate it
    MenuChoose(usize),
    /// Back out of the current menu
    MenuBack,
    /// Add a character to the prompt buffer
    PromptChar(char),
    /// Backspace in the prompt buffer
    PromptBackspace,
    /// Submit the prompt
    PromptSubmit,
    /// Cancel the prompt
    PromptCancel,
    /// Scroll the result view up
    ScrollUp,
    /// Scroll the result view down
    ScrollDown,
    /// Dismiss the result view
    DismissResults,
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

/// Converts a crossterm event to an Action based on the current app mode.
pub fn handle_event(event: Event, mode: &AppMode) -> Action {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, mode),
        Event::Resize(width, height) => Action::Resize(width, height),
        _ => Action::None,
    }
}

/// Handles a key event based on the current application mode.
fn handle_key_event(key: KeyEvent, mode: &AppMode) -> Action {
    // Emergency quit from any mode.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match mode {
        AppMode::Menu(_) => handle_menu_mode(key),
        AppMode::Prompt(_, _) => handle_prompt_mode(key),
        AppMode::Results => handle_results_mode(key),
    }
}

/// Handles key events while a menu is active.
fn handle_menu_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::MenuDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MenuUp,
        KeyCode::Enter => Action::MenuActivate,

        // Number keys pick an item directly.
        KeyCode::Char(c @ '1'..='9') => Action::MenuChoose((c as u8 - b'1') as usize),

        KeyCode::Char('q') | KeyCode::Esc => Action::MenuBack,

        _ => Action::None,
    }
}

/// Handles key events while a prompt is active.
fn handle_prompt_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => Action::PromptSubmit,
        KeyCode::Esc => Action::PromptCancel,
        KeyCode::Backspace => Action::PromptBackspace,
        KeyCode::Char(c) => Action::PromptChar(c),
        _ => Action::None,
    }
}

/// Handles key events while the result view is shown.
fn handle_results_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => Action::ScrollDown,
        KeyCode::Char('k') | KeyCode::Up => Action::ScrollUp,
        _ => Action::DismissResults,
    }
}

/// Applies an action to the application state.
///
/// Returns `true` if the application should continue, `false` if it should
/// quit.
pub fn apply_action(state: &mut AppState, action: Action) -> bool {
    match action {
        Action::None => {}
        Action::Quit => {
            state.should_quit = true;
        }
        Action::MenuUp => {
            state.menu_up();
        }
        Action::MenuDown => {
            state.menu_down();
        }
        Action::MenuActivate => {
            state.menu_activate();
        }
        Action::MenuChoose(index) => {
            state.menu_choose(index);
        }
        Action::MenuBack => {
            state.menu_back();
        }
        Action::PromptChar(c) => {
            state.prompt_input(c);
        }
        Action::PromptBackspace => {
            state.prompt_backspace();
        }
        Action::PromptSubmit => {
            state.prompt_submit();
        }
        Action::PromptCancel => {
            state.prompt_cancel();
        }
        Action::ScrollUp => {
            state.scroll_up();
        }
        Action::ScrollDown => {
            state.scroll_down();
        }
        Action::DismissResults => {
            state.dismiss_results();
        }
        Action::Resize(_, _) => {
            // Rendering picks up the new dimensions on the next draw.
        }
    }

    !state.should_quit
}
