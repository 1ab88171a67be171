use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::ui::screen::ScreenIntent;

/// Map a key event to a screen intent.
///
/// Only key presses count; repeats and releases are ignored so terminals
/// reporting them do not fire actions twice.
pub fn key_intent(key: KeyEvent) -> Option<ScreenIntent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(ScreenIntent::Quit),
        KeyCode::Char('r') => Some(ScreenIntent::Reload),
        KeyCode::Right => Some(ScreenIntent::NextUser),
        KeyCode::Left => Some(ScreenIntent::PrevUser),
        _ => None,
    }
}
