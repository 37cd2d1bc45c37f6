//! Ordered command registry and dispatch.
//!
//! Registration order is dispatch order: the first registered command
//! whose anchored pattern matches the line wins. Names are not required
//! to be unique; ordering is the only tie-break.

use tracing::debug;

use crate::command::Command;
use crate::sink::ConsoleSink;

/// Outcome of dispatching one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// A command matched and its handler ran.
    Handled {
        /// Name of the command that handled the line.
        command: String,
    },
    /// No registered pattern matched; the caller surfaces a
    /// user-visible "invalid arguments" message.
    NoMatch,
}

impl Dispatch {
    /// Whether a handler ran.
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled { .. })
    }
}

/// Ordered collection of registered commands.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
}

impl CommandRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command. Insertion order is dispatch precedence.
    pub fn register(&mut self, command: Command) {
        debug!(command = command.name(), pattern = command.pattern(), "command registered");
        self.commands.push(command);
    }

    /// Dispatch one line to the first matching command.
    pub fn dispatch(&self, line: &str, out: &mut dyn ConsoleSink) -> Dispatch {
        for command in &self.commands {
            if let Some(args) = command.try_match(line) {
                debug!(command = command.name(), "dispatching");
                command.execute(&args, out);
                return Dispatch::Handled {
                    command: command.name().to_string(),
                };
            }
        }
        Dispatch::NoMatch
    }

    /// Registered commands in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
