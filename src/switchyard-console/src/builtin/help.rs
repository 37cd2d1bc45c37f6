//! The `help` command: list registered command names.

use crate::command::Command;
use crate::pattern::PatternError;

/// Build the `help` command over a snapshot of the registered names.
/// Taken once at console construction; the command set never changes
/// afterwards.
pub(crate) fn help_command(mut names: Vec<String>) -> Result<Command, PatternError> {
    names.push("help".to_string());
    Command::new("help", "help", move |_args, out| {
        for name in &names {
            out.line(name, "help");
        }
    })
}
