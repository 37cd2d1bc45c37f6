//! Ordered symbolic-name registry for features.
//!
//! The registry maps the names users type (`wallhack`, `hud`, ...) to
//! live feature handles. A name may also be *declared* without a handle:
//! the command grammar then knows the name, but resolution fails at
//! dispatch time, which toggle and status handlers treat as a quiet
//! no-op. That models optional features the host did not install.

use std::sync::Arc;

use indexmap::IndexMap;
use tracing::debug;

use crate::feature::Feature;

/// Ordered mapping from symbolic feature name to handle.
///
/// Insertion order (first `declare` or `install` of a name) is the
/// enumeration order used by `status` and by configuration sections.
#[derive(Default)]
pub struct FeatureRegistry {
    entries: IndexMap<String, Option<Arc<dyn Feature>>>,
}

impl FeatureRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a name without a live instance. Resolution will fail
    /// until a handle is installed.
    pub fn declare(&mut self, name: impl Into<String>) {
        self.entries.entry(name.into()).or_insert(None);
    }

    /// Install a live feature under a name, replacing any previous
    /// handle. The name keeps its original position if already known.
    pub fn install(&mut self, name: impl Into<String>, feature: Arc<dyn Feature>) {
        let name = name.into();
        debug!(feature = %name, "feature installed");
        *self.entries.entry(name).or_insert(None) = Some(feature);
    }

    /// Resolve a name to its live handle, if one is installed.
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn Feature>> {
        self.entries.get(name).and_then(Clone::clone)
    }

    /// Whether the name is known at all (declared or installed).
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All known names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// (name, handle) pairs for the names that resolve, in registration
    /// order.
    pub fn resolved(&self) -> impl Iterator<Item = (&str, &Arc<dyn Feature>)> {
        self.entries
            .iter()
            .filter_map(|(name, handle)| Some((name.as_str(), handle.as_ref()?)))
    }

    /// Number of known names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
