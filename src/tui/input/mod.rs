pub mod forms;
pub mod line;
mod menu;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

#[allow(unused_imports)]
use menu::*;

/// Navigation actions the menus understand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
}

/// Map a key press to a menu action
pub fn action_for(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Cancel)
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Esc | KeyCode::Char('q') => Some(Action::Cancel),
        _ => None,
    }
}

/// Handle a key event in the current view. Menus navigate; any key
/// dismisses a modal.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    if app.router.state().is_menu() {
        if let Some(action) = action_for(key) {
            handle_menu(app, action);
        }
    } else {
        app.router.finish();
    }
}
