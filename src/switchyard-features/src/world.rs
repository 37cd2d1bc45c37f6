//! Collaborator seams toward the host engine.
//!
//! The console never walks the host's world or scene graph itself; it
//! pulls read-only snapshots through these traits. Hosts without a
//! given capability simply don't provide the collaborator, and the
//! corresponding commands are never registered.

/// One item from the live world, as the `list` command sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldItem {
    /// Display name items are grouped by.
    pub name: String,
    /// Opaque per-item annotation (rarity, category, ...). `None` or
    /// empty means "not meaningfully set" and prints nothing.
    pub label: Option<String>,
}

impl WorldItem {
    /// Item without an annotation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }

    /// Item with an annotation.
    pub fn with_label(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: Some(label.into()),
        }
    }
}

/// Read-only source of live-world items.
pub trait WorldSource: Send + Sync {
    /// Snapshot of the current items. Potentially large; taken once per
    /// `list` invocation.
    fn items(&self) -> Vec<WorldItem>;
}

/// Owner of the tracked-value set behind `track`/`untrack`.
///
/// Values are delegated exactly as captured, empty strings included;
/// their semantics belong to the implementor.
pub trait Tracker: Send + Sync {
    fn track(&self, value: &str);
    fn untrack(&self, value: &str);
}

/// One pre-rendered object for the `dump` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneObject {
    /// Object name; sanitized before use as a filename.
    pub name: String,
    /// Human-readable structured text, written verbatim.
    pub body: String,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: body.into(),
        }
    }
}

/// Source of pre-rendered scene/object dumps. Graph walking and
/// serialization stay on the host side of this seam.
pub trait SceneSource: Send + Sync {
    fn objects(&self) -> Vec<SceneObject>;
}
