//! Mapping from crossterm key events to session keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use folio_types::input::Key;

/// Result of mapping a native key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mapped {
    /// Forward to the session.
    Key(Key),
    /// Quit the frontend (Esc or Ctrl+C).
    Quit,
    /// Not relevant to the session.
    Ignored,
}

/// Map a crossterm key event to a session key.
pub fn map_key(event: &KeyEvent) -> Mapped {
    // Windows terminals report both press and release events.
    if event.kind == KeyEventKind::Release {
        return Mapped::Ignored;
    }
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        if let KeyCode::Char('c') = event.code {
            return Mapped::Quit;
        }
        return Mapped::Ignored;
    }
    match event.code {
        KeyCode::Esc => Mapped::Quit,
        KeyCode::Enter => Mapped::Key(Key::Enter),
        KeyCode::Backspace => Mapped::Key(Key::Backspace),
        KeyCode::Up => Mapped::Key(Key::Up),
        KeyCode::Down => Mapped::Key(Key::Down),
        KeyCode::Tab => Mapped::Key(Key::Tab),
        KeyCode::Char(ch) => Mapped::Key(Key::Char(ch)),
        _ => Mapped::Ignored,
    }
}
