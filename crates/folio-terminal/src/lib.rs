//! Command interpreter and session controller for the folio terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The `Session` owns the
//! transcript and input history, parses submitted lines, resolves the
//! command name, dispatches `execute()`, and interprets effect signals
//! (transcript clear, host navigation).

pub mod clock;
mod commands;
mod interpreter;
pub mod output;
mod session;

/// Clock abstraction for time queries, with the system implementation.
pub use clock::{Clock, SystemClock};
/// Register all built-in portfolio commands into a registry.
pub use commands::register_builtins;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, rich tree, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch and completion.
pub use interpreter::CommandRegistry;
/// Read-only environment passed to every command.
pub use interpreter::Environment;
/// Renderable output tree crossing into the presentation layer.
pub use output::{Fragment, Span, Tone};
/// Session controller: transcript, history, line editing.
pub use session::{HostSignal, Session, TranscriptEntry};
