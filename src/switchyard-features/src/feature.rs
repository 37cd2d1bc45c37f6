//! The feature capability surface.
//!
//! A feature is a unit of controllable host behavior: an enabled flag
//! plus a statically declared table of tunable properties. The console
//! and the configuration codec only ever see this trait; everything the
//! feature actually *does* when enabled lives in the host.
//!
//! Properties are declared once at construction as an ordered descriptor
//! table (name, kind, persisted) rather than discovered by runtime
//! introspection. [`FeatureState`] is a ready-made implementation backed
//! by an atomic flag and lock-guarded value slots, suitable for sharing
//! with the host's own update loop.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use thiserror::Error;

use crate::value::{PropertyKind, PropertyValue, Rgba};

/// Descriptor row for one tunable property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertySpec {
    /// Property name, unique within the feature.
    pub name: &'static str,
    /// Semantic kind of the stored value.
    pub kind: PropertyKind,
    /// Whether the configuration codec saves and restores this property.
    pub persisted: bool,
}

/// Errors from assigning a property value.
#[derive(Debug, Error)]
pub enum PropertyError {
    /// No property with this name in the descriptor table.
    #[error("unknown property '{0}'")]
    Unknown(String),

    /// The supplied value has a different kind than the slot.
    #[error("property '{name}' expects a {expected} value")]
    KindMismatch {
        name: String,
        expected: PropertyKind,
    },

    /// The choice token is not in the allowed set.
    #[error("'{value}' is not an allowed choice for '{name}'")]
    InvalidChoice { name: String, value: String },
}

/// Capability surface a controllable feature exposes to the console.
///
/// Implementations must tolerate the host update loop reading `enabled`
/// concurrently with a toggle; a single atomic flag write suffices.
pub trait Feature: Send + Sync {
    /// Current enabled state.
    fn enabled(&self) -> bool;

    /// Set the enabled state. This is the toggle command's single write.
    fn set_enabled(&self, on: bool);

    /// The descriptor table, in declaration order.
    fn properties(&self) -> &[PropertySpec];

    /// Read a property value by name.
    fn get(&self, property: &str) -> Option<PropertyValue>;

    /// Assign a property value by name, validating kind and choice set.
    fn set(&self, property: &str, value: PropertyValue) -> Result<(), PropertyError>;
}

/// Name of the synthetic descriptor row features use to opt their
/// enabled flag into persistence.
pub const ENABLED_PROPERTY: &str = "Enabled";

struct Slot {
    spec: PropertySpec,
    allowed: Option<&'static [&'static str]>,
    value: RwLock<PropertyValue>,
}

/// A state-backed [`Feature`] implementation.
///
/// Hosts construct one per feature at startup:
///
/// ```
/// use switchyard_features::{Feature, FeatureState, Rgba};
///
/// let hud = FeatureState::builder()
///     .color("Color", Rgba::WHITE)
///     .flag("ShowCompass", true)
///     .flag("ShowCoordinates", false)
///     .build();
/// assert!(!hud.enabled());
/// ```
pub struct FeatureState {
    enabled: AtomicBool,
    persist_enabled: bool,
    // Descriptor table as handed out by `properties()`; when the enabled
    // flag is persisted its synthetic row comes first.
    specs: Vec<PropertySpec>,
    slots: Vec<Slot>,
}

impl FeatureState {
    /// Start building a feature state.
    pub fn builder() -> FeatureStateBuilder {
        FeatureStateBuilder::default()
    }

    fn slot(&self, property: &str) -> Option<&Slot> {
        self.slots.iter().find(|s| s.spec.name == property)
    }
}

impl Feature for FeatureState {
    fn enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    fn set_enabled(&self, on: bool) {
        self.enabled.store(on, Ordering::Relaxed);
    }

    fn properties(&self) -> &[PropertySpec] {
        &self.specs
    }

    fn get(&self, property: &str) -> Option<PropertyValue> {
        if self.persist_enabled && property == ENABLED_PROPERTY {
            return Some(PropertyValue::Flag(self.enabled()));
        }
        self.slot(property).map(|s| s.value.read().clone())
    }

    fn set(&self, property: &str, value: PropertyValue) -> Result<(), PropertyError> {
        if self.persist_enabled && property == ENABLED_PROPERTY {
            return match value {
                PropertyValue::Flag(on) => {
                    self.set_enabled(on);
                    Ok(())
                }
                _ => Err(PropertyError::KindMismatch {
                    name: property.to_string(),
                    expected: PropertyKind::Flag,
                }),
            };
        }

        let slot = self
            .slot(property)
            .ok_or_else(|| PropertyError::Unknown(property.to_string()))?;

        if value.kind() != slot.spec.kind {
            return Err(PropertyError::KindMismatch {
                name: property.to_string(),
                expected: slot.spec.kind,
            });
        }

        if let (PropertyValue::Choice(token), Some(allowed)) = (&value, slot.allowed) {
            if !allowed.contains(&token.as_str()) {
                return Err(PropertyError::InvalidChoice {
                    name: property.to_string(),
                    value: token.clone(),
                });
            }
        }

        *slot.value.write() = value;
        Ok(())
    }
}

/// Builder for [`FeatureState`]. Declaration order is descriptor order.
#[derive(Default)]
pub struct FeatureStateBuilder {
    enabled: bool,
    persist_enabled: bool,
    slots: Vec<Slot>,
}

impl FeatureStateBuilder {
    /// Initial enabled state (defaults to off).
    pub fn enabled(mut self, on: bool) -> Self {
        self.enabled = on;
        self
    }

    /// Opt the enabled flag itself into configuration persistence. Adds
    /// a synthetic `Enabled` row at the head of the descriptor table.
    pub fn persist_enabled(mut self) -> Self {
        self.persist_enabled = true;
        self
    }

    /// Declare a boolean property.
    pub fn flag(self, name: &'static str, default: bool) -> Self {
        self.push(name, PropertyKind::Flag, PropertyValue::Flag(default), None)
    }

    /// Declare a numeric property.
    pub fn number(self, name: &'static str, default: f64) -> Self {
        self.push(
            name,
            PropertyKind::Number,
            PropertyValue::Number(default),
            None,
        )
    }

    /// Declare a color property.
    pub fn color(self, name: &'static str, default: Rgba) -> Self {
        self.push(
            name,
            PropertyKind::Color,
            PropertyValue::Color(default),
            None,
        )
    }

    /// Declare an enumerated property with its allowed tokens.
    pub fn choice(
        self,
        name: &'static str,
        default: &str,
        allowed: &'static [&'static str],
    ) -> Self {
        self.push(
            name,
            PropertyKind::Choice,
            PropertyValue::Choice(default.to_string()),
            Some(allowed),
        )
    }

    /// Exclude an already-declared property from the configuration file.
    /// It stays visible on the descriptor table.
    pub fn not_persisted(mut self, name: &'static str) -> Self {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.spec.name == name) {
            slot.spec.persisted = false;
        }
        self
    }

    fn push(
        mut self,
        name: &'static str,
        kind: PropertyKind,
        default: PropertyValue,
        allowed: Option<&'static [&'static str]>,
    ) -> Self {
        self.slots.push(Slot {
            spec: PropertySpec {
                name,
                kind,
                persisted: true,
            },
            allowed,
            value: RwLock::new(default),
        });
        self
    }

    /// Finish building.
    pub fn build(self) -> FeatureState {
        let mut specs = Vec::with_capacity(self.slots.len() + 1);
        if self.persist_enabled {
            specs.push(PropertySpec {
                name: ENABLED_PROPERTY,
                kind: PropertyKind::Flag,
                persisted: true,
            });
        }
        specs.extend(self.slots.iter().map(|s| s.spec));

        FeatureState {
            enabled: AtomicBool::new(self.enabled),
            persist_enabled: self.persist_enabled,
            specs,
            slots: self.slots,
        }
    }
}
