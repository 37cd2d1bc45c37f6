//! Feature capability surface for the Switchyard console.
//!
//! This crate defines what a controllable "feature" looks like from the
//! console's point of view: an enabled flag, a statically declared table
//! of typed tunable properties, and an ordered name registry used to
//! resolve the feature a command refers to. It also hosts the trait
//! seams behind which all engine-specific collaborators live.
//!
//! # Declaring a feature
//!
//! ```
//! use std::sync::Arc;
//! use switchyard_features::{FeatureRegistry, FeatureState, Rgba};
//!
//! let hud = Arc::new(
//!     FeatureState::builder()
//!         .color("Color", Rgba::WHITE)
//!         .flag("ShowCompass", true)
//!         .build(),
//! );
//!
//! let mut registry = FeatureRegistry::new();
//! registry.install("hud", hud);
//! registry.declare("exfil"); // known name, not installed on this host
//!
//! assert!(registry.resolve("hud").is_some());
//! assert!(registry.resolve("exfil").is_none());
//! ```

mod feature;
mod registry;
mod value;
mod world;

pub use feature::{
    ENABLED_PROPERTY, Feature, FeatureState, FeatureStateBuilder, PropertyError, PropertySpec,
};
pub use registry::FeatureRegistry;
pub use value::{PropertyKind, PropertyValue, Rgba, ValueError};
pub use world::{SceneObject, SceneSource, Tracker, WorldItem, WorldSource};

/// Re-export common types for convenience.
pub mod prelude {
    pub use crate::{
        Feature, FeatureRegistry, FeatureState, PropertyKind, PropertyValue, Rgba, SceneSource,
        Tracker, WorldSource,
    };
}
