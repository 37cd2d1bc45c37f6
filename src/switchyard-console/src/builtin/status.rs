//! The `status` command: one line per known feature.

use std::sync::Arc;

use switchyard_features::{Feature, FeatureRegistry};

use crate::command::Command;
use crate::pattern::PatternError;

/// Build the `status` command.
///
/// Enumerates known names in registration order. Names with no live
/// instance on this host produce no line; the enumeration continues
/// past them.
pub(crate) fn status_command(features: Arc<FeatureRegistry>) -> Result<Command, PatternError> {
    Command::new("status", "status", move |_args, out| {
        for name in features.names() {
            let Some(feature) = features.resolve(name) else {
                continue;
            };
            let state = if feature.enabled() { "on" } else { "off" };
            out.line(&format!("{name} is {state}"), "status");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandRegistry;
    use crate::sink::MemorySink;
    use pretty_assertions::assert_eq;
    use switchyard_features::{Feature, FeatureState};

    #[test]
    fn test_status_reports_in_registration_order() {
        let mut features = FeatureRegistry::new();
        features.install("wallhack", Arc::new(FeatureState::builder().build()));
        let hud = Arc::new(FeatureState::builder().build());
        hud.set_enabled(true);
        features.install("hud", hud);

        let mut commands = CommandRegistry::new();
        commands.register(status_command(Arc::new(features)).unwrap());

        let mut sink = MemorySink::new();
        commands.dispatch("status", &mut sink);

        assert_eq!(sink.texts(), vec!["wallhack is off", "hud is on"]);
    }

    #[test]
    fn test_unresolved_name_does_not_truncate_enumeration() {
        let mut features = FeatureRegistry::new();
        features.install("wallhack", Arc::new(FeatureState::builder().build()));
        features.declare("quest");
        features.install("hud", Arc::new(FeatureState::builder().build()));

        let mut commands = CommandRegistry::new();
        commands.register(status_command(Arc::new(features)).unwrap());

        let mut sink = MemorySink::new();
        commands.dispatch("status", &mut sink);

        assert_eq!(sink.texts(), vec!["wallhack is off", "hud is off"]);
    }
}
