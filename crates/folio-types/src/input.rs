//! Host-agnostic key-input events.
//!
//! Every frontend maps its native key events to this enum. The session
//! controller never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A key event driving the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Printable character typed into the input buffer.
    Char(char),
    /// Delete the character before the end of the buffer.
    Backspace,
    /// Submit the current buffer.
    Enter,
    /// Recall the previous (older) history entry.
    Up,
    /// Recall the next (newer) history entry.
    Down,
    /// Autocomplete the buffer against registered command names.
    Tab,
}
