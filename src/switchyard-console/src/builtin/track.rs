//! The `track`/`untrack` commands.
//!
//! The tracked-set semantics belong to the host's tracking
//! collaborator; these commands only confirm the group participated and
//! delegate the captured value as-is, empty strings included.

use std::sync::Arc;

use switchyard_features::Tracker;

use crate::command::Command;
use crate::pattern::{OPTIONAL_ARGUMENT, PatternError, VALUE_GROUP};

/// Build the `track <value>` command.
pub(crate) fn track_command(tracker: Arc<dyn Tracker>) -> Result<Command, PatternError> {
    Command::new(
        "track",
        &format!("track {OPTIONAL_ARGUMENT}"),
        move |args, _out| {
            let Some(value) = args.group(VALUE_GROUP) else {
                return;
            };
            tracker.track(value);
        },
    )
}

/// Build the `untrack <value>` command.
pub(crate) fn untrack_command(tracker: Arc<dyn Tracker>) -> Result<Command, PatternError> {
    Command::new(
        "untrack",
        &format!("untrack {OPTIONAL_ARGUMENT}"),
        move |args, _out| {
            let Some(value) = args.group(VALUE_GROUP) else {
                return;
            };
            tracker.untrack(value);
        },
    )
}
