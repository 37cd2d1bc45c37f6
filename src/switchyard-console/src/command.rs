//! The command type: an immutable (name, pattern, handler) triple.

use std::fmt;

use crate::pattern::{Arguments, CommandPattern, PatternError};
use crate::sink::ConsoleSink;

/// Dispatch target invoked with the extracted arguments.
pub type Handler = Box<dyn Fn(&Arguments, &mut dyn ConsoleSink) + Send + Sync>;

/// A registered console command.
pub struct Command {
    name: String,
    pattern: CommandPattern,
    handler: Handler,
}

impl Command {
    /// Create a command from a pattern in the anchored-grammar syntax.
    ///
    /// The name is a stable identifier for logging and registration; it
    /// is the pattern that decides whether a line matches.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        handler: impl Fn(&Arguments, &mut dyn ConsoleSink) + Send + Sync + 'static,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            name: name.into(),
            pattern: CommandPattern::new(pattern)?,
            handler: Box::new(handler),
        })
    }

    /// The command's registration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The unanchored pattern text.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Match a whole line against this command's grammar.
    pub fn try_match(&self, line: &str) -> Option<Arguments> {
        self.pattern.try_match(line)
    }

    /// Run the handler with already-extracted arguments.
    pub fn execute(&self, args: &Arguments, out: &mut dyn ConsoleSink) {
        (self.handler)(args, out);
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}
