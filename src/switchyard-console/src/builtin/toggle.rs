//! Per-feature on/off toggle commands.

use std::sync::Arc;

use switchyard_features::{Feature, FeatureRegistry};

use crate::command::Command;
use crate::pattern::PatternError;

/// Build the `<name> on|off` command for one feature name.
///
/// A name that fails to resolve at dispatch time (feature not installed
/// on this host) is a silent no-op.
pub(crate) fn toggle_command(
    name: &str,
    features: Arc<FeatureRegistry>,
) -> Result<Command, PatternError> {
    let feature_name = name.to_string();
    Command::new(
        name,
        &format!("{name} (?<value>(on)|(off))"),
        move |args, _out| {
            let Some(token) = args.value() else {
                return;
            };
            let Some(feature) = features.resolve(&feature_name) else {
                return;
            };
            match token {
                "on" => feature.set_enabled(true),
                "off" => feature.set_enabled(false),
                // Unreachable given the grammar; leave the state alone.
                _ => {}
            }
        },
    )
}
