//! Terminal session controller.
//!
//! Owns the transcript (everything displayed), the input history (raw
//! submitted lines), the live input buffer, and the history-recall cursor.
//! All state transitions happen synchronously inside [`Session::handle_key`];
//! the embedding host only renders the transcript and performs navigation
//! signals.

use folio_types::error::FolioError;
use folio_types::input::Key;

use crate::clock::Clock;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::output::Fragment;

/// One displayed interaction: a submitted line or a rendered result.
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEntry {
    /// A raw line the user submitted, echoed with the prompt.
    Input(String),
    /// A rendered command result.
    Output(Fragment),
}

/// Side effect a submission asks the embedding host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostSignal {
    /// Navigate the hosting view to the given path.
    Navigate { path: String },
}

/// Terminal session: transcript, history, and line editing over a registry.
pub struct Session {
    registry: CommandRegistry,
    clock: Box<dyn Clock>,
    transcript: Vec<TranscriptEntry>,
    history: Vec<String>,
    /// Recall cursor: `Some(k)` addresses `history[len - 1 - k]`,
    /// `None` means not browsing.
    recall: Option<usize>,
    input: String,
}

impl Session {
    /// Create a session over a populated registry.
    ///
    /// The transcript starts with a single synthesized welcome entry.
    pub fn new(registry: CommandRegistry, clock: Box<dyn Clock>) -> Self {
        Self {
            registry,
            clock,
            transcript: vec![TranscriptEntry::Output(welcome_banner())],
            history: Vec::new(),
            recall: None,
            input: String::new(),
        }
    }

    /// The ordered transcript of everything displayed.
    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    /// The ordered history of raw submitted lines, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// The live input buffer.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The command registry backing this session.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Apply one key event and return any signal for the host.
    pub fn handle_key(&mut self, key: Key) -> Option<HostSignal> {
        match key {
            Key::Char(ch) => {
                self.input.push(ch);
                None
            },
            Key::Backspace => {
                self.input.pop();
                None
            },
            Key::Enter => self.submit(),
            Key::Up => {
                self.recall_previous();
                None
            },
            Key::Down => {
                self.recall_next();
                None
            },
            Key::Tab => {
                self.autocomplete();
                None
            },
        }
    }

    /// Run the submission pipeline on the current buffer.
    ///
    /// An empty or whitespace-only buffer aborts with no state change.
    /// Otherwise the trimmed line is appended to history and the
    /// transcript, the recall cursor resets, the command dispatches, and
    /// the buffer clears. Unknown names append a "command not found"
    /// output; they never reach a handler.
    pub fn submit(&mut self) -> Option<HostSignal> {
        let line = self.input.trim().to_string();
        if line.is_empty() {
            return None;
        }

        self.history.push(line.clone());
        self.recall = None;
        self.transcript.push(TranscriptEntry::Input(line.clone()));

        let env = Environment {
            clock: self.clock.as_ref(),
        };
        let result = self.registry.execute(&line, &env);

        let mut signal = None;
        match result {
            Ok(CommandOutput::None) => {},
            Ok(CommandOutput::Text(text)) => self.push_output(text_fragment(&text)),
            Ok(CommandOutput::Rich(frag)) => self.push_output(frag),
            Ok(CommandOutput::Clear) => {
                log::debug!("transcript cleared");
                self.transcript.clear();
            },
            Ok(CommandOutput::Navigate { path, notice }) => {
                log::info!("navigation requested: {path}");
                self.push_output(Fragment::muted(notice));
                signal = Some(HostSignal::Navigate { path });
            },
            Err(FolioError::CommandNotFound(name)) => self.push_output(not_found(&name)),
            Err(e) => self.push_output(Fragment::error(format!("{e}"))),
        }

        self.input.clear();
        signal
    }

    /// Recall the previous (older) history entry into the buffer.
    ///
    /// Clamps at the oldest entry; no-op on an empty history.
    fn recall_previous(&mut self) {
        if self.history.is_empty() {
            return;
        }
        let next = self.recall.map_or(0, |k| k + 1);
        if next < self.history.len() {
            self.recall = Some(next);
            self.input = self.history[self.history.len() - 1 - next].clone();
        }
    }

    /// Recall the next (newer) history entry into the buffer.
    ///
    /// One step past the newest recalled entry returns to an empty buffer;
    /// no-op when no recall is in progress.
    fn recall_next(&mut self) {
        match self.recall {
            Some(0) => {
                self.recall = None;
                self.input.clear();
            },
            Some(k) => {
                self.recall = Some(k - 1);
                self.input = self.history[self.history.len() - k].clone();
            },
            None => {},
        }
    }

    /// Replace the buffer with the unique command-name completion, if any.
    ///
    /// Zero or multiple prefix matches leave the buffer unchanged.
    fn autocomplete(&mut self) {
        let matches = self.registry.complete(&self.input);
        if let [unique] = matches.as_slice() {
            self.input = unique.clone();
        }
    }

    fn push_output(&mut self, frag: Fragment) {
        self.transcript.push(TranscriptEntry::Output(frag));
    }
}

/// Convert plain command text into a fragment, one line per row.
fn text_fragment(text: &str) -> Fragment {
    if text.contains('\n') {
        Fragment::block(text.lines().map(Fragment::plain).collect())
    } else {
        Fragment::plain(text)
    }
}

/// Standardized notice for an unregistered command name.
fn not_found(name: &str) -> Fragment {
    Fragment::block(vec![
        Fragment::error(format!("command not found: {name}")),
        Fragment::muted("Type 'help' for available commands"),
    ])
}

/// The welcome entry synthesized when a session is created.
fn welcome_banner() -> Fragment {
    Fragment::block(vec![
        Fragment::heading("╔═══════════════════════════════════════════════════════╗"),
        Fragment::heading("        Welcome to Sridatta's Portfolio Terminal"),
        Fragment::heading("╚═══════════════════════════════════════════════════════╝"),
        Fragment::plain(""),
        Fragment::line(vec![
            Fragment::muted("Type "),
            Fragment::accent("'help'"),
            Fragment::muted(" to see available commands"),
        ]),
        Fragment::muted("Tip: Use arrow keys to navigate command history"),
    ])
}
