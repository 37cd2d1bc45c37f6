//! Switchyard: an embedded command console for toggling and configuring
//! live features of a long-running host process.
//!
//! Users type free-text lines; the console matches each line against
//! registered anchored regex patterns, extracts named argument groups,
//! and invokes the matching handler. Handlers flip feature flags, report
//! status, query read-only world snapshots, and round-trip feature
//! configuration through a per-user file.
//!
//! # Wiring a console
//!
//! ```no_run
//! use std::sync::Arc;
//! use switchyard_console::{Console, MemorySink};
//! use switchyard_features::{FeatureRegistry, FeatureState, Rgba};
//!
//! # fn main() -> Result<(), switchyard_console::ConsoleError> {
//! let mut features = FeatureRegistry::new();
//! features.install("wallhack", Arc::new(FeatureState::builder().build()));
//! features.install(
//!     "hud",
//!     Arc::new(
//!         FeatureState::builder()
//!             .color("Color", Rgba::WHITE)
//!             .flag("ShowCompass", true)
//!             .build(),
//!     ),
//! );
//!
//! let console = Console::builder(Arc::new(features)).build()?;
//!
//! let mut out = MemorySink::new();
//! console.handle_line("hud on", &mut out);
//! console.handle_line("status", &mut out);
//! # Ok(())
//! # }
//! ```
//!
//! # Command grammar
//!
//! Patterns are ordinary regexes, anchored `^…$` by the dispatcher, with
//! named capture groups for arguments (canonically `value` and `extra`).
//! The builtin set: `<feature> on|off`, `status`, `list( <filter>)?`,
//! `track <value>` / `untrack <value>`, `load`, `save`, `dump`, `help`.
//! Commands whose external collaborator (world source, tracker, scene
//! source) is absent are never registered.

mod builtin;
mod command;
mod console;
mod pattern;
mod registry;
mod sink;

pub use command::{Command, Handler};
pub use console::{Console, ConsoleBuilder, ConsoleError};
pub use pattern::{
    Arguments, CommandPattern, EXTRA_GROUP, OPTIONAL_ARGUMENT, PatternError, REQUIRED_ARGUMENT,
    VALUE_GROUP,
};
pub use registry::{CommandRegistry, Dispatch};
pub use sink::{ConsoleSink, MemorySink, SinkLine, TracingSink};

/// Re-export common types for convenience.
pub mod prelude {
    pub use crate::{
        Command, CommandRegistry, Console, ConsoleBuilder, ConsoleError, ConsoleSink, Dispatch,
        MemorySink,
    };
    pub use switchyard_features::prelude::*;
}
