//! The `dump` command: write the scene collaborator's objects to disk.

use std::sync::Arc;

use tracing::warn;

use switchyard_config::{UserPaths, dump};
use switchyard_features::SceneSource;

use crate::command::Command;
use crate::pattern::PatternError;

/// Build the `dump` command.
pub(crate) fn dump_command(
    scenes: Arc<dyn SceneSource>,
    paths: UserPaths,
) -> Result<Command, PatternError> {
    Command::new("dump", "dump", move |_args, out| {
        out.line("dumping objects...", "dump");
        match dump::write_dump(&paths, &scenes.objects()) {
            Ok(report) => {
                out.line(&format!("dump created in {}", report.dir.display()), "dump");
            }
            Err(err) => {
                warn!(%err, "dump failed");
                out.line(&format!("dump failed: {err}"), "dump");
            }
        }
    })
}
