//! Configuration persistence for the Switchyard console.
//!
//! Saves and restores feature properties through a flat sectioned text
//! file under the user's documents root, and writes `dump` output to
//! timestamped folders next to it.
//!
//! ```no_run
//! use std::sync::Arc;
//! use switchyard_config::{UserPaths, codec};
//! use switchyard_features::{FeatureRegistry, FeatureState};
//!
//! # fn main() -> Result<(), switchyard_config::ConfigError> {
//! let mut features = FeatureRegistry::new();
//! features.install(
//!     "hud",
//!     Arc::new(FeatureState::builder().flag("ShowCompass", true).build()),
//! );
//!
//! let paths = UserPaths::new()?;
//! codec::save(&paths.config_file, &features)?;
//! codec::load(&paths.config_file, &features, false)?;
//! # Ok(())
//! # }
//! ```

mod atomic;
pub mod codec;
pub mod dump;
mod error;
mod paths;

pub use atomic::{AtomicWriteError, AtomicWriter, atomic_write_str};
pub use codec::LoadReport;
pub use dump::DumpReport;
pub use error::{ConfigError, Result};
pub use paths::{APP_DIR, CONFIG_FILE, DUMPS_DIR, UserPaths, safe_filename};
