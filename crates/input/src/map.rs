//! Key mapping from terminal events to input events.

use crate::types::InputEvent;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map one key press to a game input. Letters are case-insensitive.
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if should_quit(key) {
        return Some(InputEvent::Quit);
    }

    let code = match key.code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(InputEvent::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(InputEvent::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(InputEvent::SoftDrop),

        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') | KeyCode::Char('x') => {
            Some(InputEvent::RotateCw)
        }
        KeyCode::Char('z') | KeyCode::Char('y') => Some(InputEvent::RotateCcw),

        KeyCode::Char(' ') => Some(InputEvent::HardDrop),
        KeyCode::Char('c') => Some(InputEvent::Hold),

        _ => None,
    }
}

/// Map any terminal event. Only key presses count; releases, repeats, resizes
/// and mouse events map to nothing.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')
    ) || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL))
}
