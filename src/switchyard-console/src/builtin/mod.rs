//! Builtin command set.
//!
//! One module per command shape, mirroring the console's user-facing
//! grammar:
//!
//! - `<feature> on|off` — toggle a feature
//! - `status` — report every known feature's state
//! - `list( <filter>)?` — grouped view of the live world
//! - `track <value>` / `untrack <value>` — tracked-set delegation
//! - `load` / `save` — configuration round-trip
//! - `dump` — write scene objects to a timestamped folder
//! - `help` — list registered commands
//!
//! Construction happens in [`crate::console::ConsoleBuilder::build`];
//! commands whose collaborator is absent are simply never built.

mod config_cmd;
mod dump_cmd;
mod help;
mod list;
mod status;
mod toggle;
mod track;

pub(crate) use config_cmd::{load_command, save_command};
pub(crate) use dump_cmd::dump_command;
pub(crate) use help::help_command;
pub(crate) use list::list_command;
pub(crate) use status::status_command;
pub(crate) use toggle::toggle_command;
pub(crate) use track::{track_command, untrack_command};
