//! The console facade: one-time command registration plus line handling.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use switchyard_config::{ConfigError, UserPaths, codec};
use switchyard_features::{FeatureRegistry, SceneSource, Tracker, WorldSource};

use crate::builtin;
use crate::command::Command;
use crate::pattern::PatternError;
use crate::registry::{CommandRegistry, Dispatch};
use crate::sink::ConsoleSink;

/// Errors from building a console.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// A command pattern failed to compile.
    #[error(transparent)]
    Pattern(#[from] PatternError),

    /// Per-user paths could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// An embedded feature-toggle console.
///
/// Built exactly once per host through [`ConsoleBuilder`]; the builder
/// is consumed, so the command set cannot be registered twice. The host
/// then feeds it one already-tokenized text line at a time.
pub struct Console {
    commands: CommandRegistry,
}

impl Console {
    /// Start building a console over a feature registry.
    pub fn builder(features: Arc<FeatureRegistry>) -> ConsoleBuilder {
        ConsoleBuilder::new(features)
    }

    /// Handle one input line: dispatch to the first matching command,
    /// surfacing `invalid arguments` through the sink when nothing
    /// matches.
    pub fn handle_line(&self, line: &str, out: &mut dyn ConsoleSink) -> Dispatch {
        let outcome = self.commands.dispatch(line, out);
        if outcome == Dispatch::NoMatch {
            debug!(line, "no command pattern matched");
            out.line("invalid arguments", "console");
        }
        outcome
    }

    /// Registered command names, in registration order.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.iter().map(Command::name).collect()
    }
}

/// One-shot builder for [`Console`].
///
/// Collaborator-gated commands (`list`, `track`/`untrack`, `dump`) are
/// registered only when the corresponding collaborator is supplied.
pub struct ConsoleBuilder {
    features: Arc<FeatureRegistry>,
    world: Option<Arc<dyn WorldSource>>,
    tracker: Option<Arc<dyn Tracker>>,
    scenes: Option<Arc<dyn SceneSource>>,
    paths: Option<UserPaths>,
    load_defaults: bool,
    custom: Vec<Command>,
}

impl ConsoleBuilder {
    fn new(features: Arc<FeatureRegistry>) -> Self {
        Self {
            features,
            world: None,
            tracker: None,
            scenes: None,
            paths: None,
            load_defaults: true,
            custom: Vec::new(),
        }
    }

    /// Provide the live-world collaborator; enables `list`.
    pub fn world_source(mut self, world: Arc<dyn WorldSource>) -> Self {
        self.world = Some(world);
        self
    }

    /// Provide the tracking collaborator; enables `track`/`untrack`.
    pub fn tracker(mut self, tracker: Arc<dyn Tracker>) -> Self {
        self.tracker = Some(tracker);
        self
    }

    /// Provide the scene collaborator; enables `dump`.
    pub fn scene_source(mut self, scenes: Arc<dyn SceneSource>) -> Self {
        self.scenes = Some(scenes);
        self
    }

    /// Override the per-user paths (tests, unusual hosts). Defaults to
    /// [`UserPaths::new`].
    pub fn paths(mut self, paths: UserPaths) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Whether to perform the implicit non-strict configuration load at
    /// build time. On by default; a missing file keeps defaults.
    pub fn load_defaults(mut self, load: bool) -> Self {
        self.load_defaults = load;
        self
    }

    /// Register an additional host-specific command after the builtins.
    pub fn command(mut self, command: Command) -> Self {
        self.custom.push(command);
        self
    }

    /// Register the command set and build the console.
    pub fn build(self) -> Result<Console, ConsoleError> {
        let paths = match self.paths {
            Some(paths) => paths,
            None => UserPaths::new()?,
        };

        let mut commands = CommandRegistry::new();

        let names: Vec<String> = self.features.names().map(str::to_string).collect();
        for name in &names {
            commands.register(builtin::toggle_command(name, Arc::clone(&self.features))?);
        }

        if let Some(scenes) = self.scenes {
            commands.register(builtin::dump_command(scenes, paths.clone())?);
        }

        commands.register(builtin::status_command(Arc::clone(&self.features))?);

        if let Some(world) = self.world {
            commands.register(builtin::list_command(world)?);
        }

        if let Some(tracker) = self.tracker {
            commands.register(builtin::track_command(Arc::clone(&tracker))?);
            commands.register(builtin::untrack_command(tracker)?);
        }

        commands.register(builtin::load_command(
            Arc::clone(&self.features),
            paths.clone(),
        )?);
        commands.register(builtin::save_command(
            Arc::clone(&self.features),
            paths.clone(),
        )?);

        for command in self.custom {
            commands.register(command);
        }

        let registered: Vec<String> = commands.iter().map(|c| c.name().to_string()).collect();
        commands.register(builtin::help_command(registered)?);

        if self.load_defaults {
            // Boot-time load keeps defaults when the file is absent and
            // must never prevent the console from coming up.
            if let Err(err) = codec::load(&paths.config_file, &self.features, false) {
                warn!(%err, "default configuration load failed");
            }
        }

        debug!(commands = commands.len(), "console ready");
        Ok(Console { commands })
    }
}
