//! Key events to intents.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::entities::Direction;
use crate::session::Intent;

/// Map one key event to an intent. Releases and unbound keys map to `None`.
pub fn intent_for(key: &KeyEvent) -> Option<Intent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Intent::Quit),
        KeyCode::Left | KeyCode::Char('a') => Some(Intent::Move(Direction::Left)),
        KeyCode::Right | KeyCode::Char('d') => Some(Intent::Move(Direction::Right)),
        KeyCode::Char(' ') | KeyCode::Up | KeyCode::Char('w') => Some(Intent::Fire),
        KeyCode::Char('r') => Some(Intent::Restart),
        KeyCode::Char('q') => Some(Intent::Quit),
        _ => None,
    }
}
