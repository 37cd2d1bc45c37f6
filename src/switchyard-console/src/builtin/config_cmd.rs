//! The `load`/`save` commands over the configuration codec.

use std::sync::Arc;

use tracing::warn;

use switchyard_config::{ConfigError, UserPaths, codec};
use switchyard_features::FeatureRegistry;

use crate::command::Command;
use crate::pattern::PatternError;

/// Build the user-invoked `load` command (strict: a missing file is
/// reported to the user).
pub(crate) fn load_command(
    features: Arc<FeatureRegistry>,
    paths: UserPaths,
) -> Result<Command, PatternError> {
    Command::new("load", "load", move |_args, out| {
        match codec::load(&paths.config_file, &features, true) {
            Ok(report) => out.line(
                &format!(
                    "loaded {} value(s) from {}",
                    report.applied,
                    paths.config_file.display()
                ),
                "load",
            ),
            Err(ConfigError::MissingFile(path)) => {
                out.line(&format!("{} not found", path.display()), "load");
            }
            Err(err) => {
                warn!(%err, "configuration load failed");
                out.line(&format!("load failed: {err}"), "load");
            }
        }
    })
}

/// Build the `save` command.
pub(crate) fn save_command(
    features: Arc<FeatureRegistry>,
    paths: UserPaths,
) -> Result<Command, PatternError> {
    Command::new("save", "save", move |_args, out| {
        match codec::save(&paths.config_file, &features) {
            Ok(()) => out.line(
                &format!("configuration saved to {}", paths.config_file.display()),
                "save",
            ),
            Err(err) => {
                warn!(%err, "configuration save failed");
                out.line(&format!("save failed: {err}"), "save");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::CommandRegistry;
    use crate::sink::MemorySink;
    use switchyard_features::{Feature, FeatureState, PropertyValue};
    use tempfile::TempDir;

    fn registry() -> Arc<FeatureRegistry> {
        let mut features = FeatureRegistry::new();
        features.install(
            "hud",
            Arc::new(FeatureState::builder().flag("ShowCompass", true).build()),
        );
        Arc::new(features)
    }

    fn commands(features: &Arc<FeatureRegistry>, paths: &UserPaths) -> CommandRegistry {
        let mut commands = CommandRegistry::new();
        commands.register(load_command(Arc::clone(features), paths.clone()).unwrap());
        commands.register(save_command(Arc::clone(features), paths.clone()).unwrap());
        commands
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let tmp = TempDir::new().unwrap();
        let paths = UserPaths::from_root(tmp.path());
        let features = registry();
        let commands = commands(&features, &paths);
        let mut sink = MemorySink::new();

        let hud = features.resolve("hud").unwrap();
        hud.set("ShowCompass", PropertyValue::Flag(false)).unwrap();
        commands.dispatch("save", &mut sink);
        assert!(paths.config_file.exists());

        hud.set("ShowCompass", PropertyValue::Flag(true)).unwrap();
        commands.dispatch("load", &mut sink);
        assert_eq!(hud.get("ShowCompass"), Some(PropertyValue::Flag(false)));
    }

    #[test]
    fn test_explicit_load_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let paths = UserPaths::from_root(tmp.path());
        let features = registry();
        let commands = commands(&features, &paths);

        let mut sink = MemorySink::new();
        commands.dispatch("load", &mut sink);

        assert_eq!(sink.lines().len(), 1);
        assert!(sink.texts()[0].ends_with("not found"));
    }
}
