//! Command trait, registry, and dispatch logic.

use std::collections::HashMap;

use folio_types::error::{FolioError, Result};

use crate::clock::Clock;
use crate::output::Fragment;

/// Output produced by a command.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Plain text lines.
    Text(String),
    /// Structured renderable tree.
    Rich(Fragment),
    /// Command produced no visible output.
    None,
    /// Signal to reset the transcript. No output entry is appended.
    Clear,
    /// Signal to the host to navigate to a page, with a transient notice
    /// appended to the transcript before the navigation happens.
    Navigate { path: String, notice: String },
}

/// Read-only environment passed to every command.
pub struct Environment<'a> {
    /// Clock for time queries.
    pub clock: &'a dyn Clock,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "echo [text...]").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    fn execute(&self, args: &[&str], env: &Environment<'_>) -> Result<CommandOutput>;
}

/// Registry of available commands with dispatch.
///
/// Built once at startup; names are compared case-sensitively on dispatch
/// and case-insensitively for prefix completion.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Look up a command by exact name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|cmd| cmd.as_ref())
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Registered names matching `prefix` case-insensitively, sorted.
    pub fn complete(&self, prefix: &str) -> Vec<String> {
        let prefix = prefix.to_lowercase();
        let mut matches: Vec<String> = self
            .commands
            .keys()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .cloned()
            .collect();
        matches.sort();
        matches
    }

    /// Parse and execute a command line.
    ///
    /// The line is split on whitespace; the first token is the command
    /// name, the rest are its arguments. Unknown names return
    /// [`FolioError::CommandNotFound`].
    pub fn execute(&self, line: &str, env: &Environment<'_>) -> Result<CommandOutput> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = parts.split_first() else {
            return Ok(CommandOutput::None);
        };

        // `help` is answered by the registry itself so the listing can
        // enumerate every registered command, including `help`.
        if name == "help" && self.commands.contains_key("help") {
            return Ok(CommandOutput::Rich(self.render_help()));
        }

        match self.commands.get(name) {
            Some(cmd) => {
                log::debug!("dispatching '{name}' with {} args", args.len());
                cmd.execute(args, env)
            },
            None => Err(FolioError::CommandNotFound(name.to_string())),
        }
    }

    /// Render the `help` listing from the registry contents.
    fn render_help(&self) -> Fragment {
        let mut rows = vec![Fragment::heading("Available Commands:")];
        for (name, desc) in self.list_commands() {
            rows.push(Fragment::line(vec![
                Fragment::accent(format!("  {name}")),
                Fragment::muted(format!(" - {desc}")),
            ]));
        }
        Fragment::block(rows)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
