//! The configuration codec: feature properties to and from the
//! persisted sectioned file.
//!
//! One `[section]` per feature, one `key = "value"` line per persistable
//! property, every value stored as the kind's stringified text form.
//! Sections follow feature registration order and keys follow descriptor
//! declaration order, so saving an unchanged feature set is
//! byte-identical.
//!
//! Loading is lenient by design: unknown sections and keys are ignored,
//! and a value that fails to parse or validate is skipped with a warning
//! while the rest of the file still applies.

use std::fs;
use std::path::Path;

use toml_edit::{DocumentMut, Item, Table};
use tracing::{debug, warn};

use switchyard_features::{Feature, FeatureRegistry, PropertyValue};

use crate::atomic::atomic_write_str;
use crate::error::{ConfigError, Result};

/// Counters from one [`load`] invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Values parsed and assigned.
    pub applied: usize,
    /// Values present but skipped (malformed or rejected).
    pub skipped: usize,
}

/// Save every resolvable feature's persistable properties to `path`.
///
/// The file is replaced atomically; on failure the previous contents
/// survive untouched.
pub fn save(path: &Path, features: &FeatureRegistry) -> Result<()> {
    let mut doc = DocumentMut::new();

    for (name, feature) in features.resolved() {
        let mut table = Table::new();
        for spec in feature.properties().iter().filter(|s| s.persisted) {
            if let Some(value) = feature.get(spec.name) {
                table.insert(spec.name, toml_edit::value(value.to_string()));
            }
        }
        if !table.is_empty() {
            doc.insert(name, Item::Table(table));
        }
    }

    atomic_write_str(path, &doc.to_string())?;
    debug!(path = %path.display(), "configuration saved");
    Ok(())
}

/// Load `path` and assign every known, well-formed value onto the
/// matching features.
///
/// With `strict = false` (the implicit boot-time load) a missing file is
/// a quiet no-op. With `strict = true` (the user `load` command) a
/// missing file is reported as [`ConfigError::MissingFile`] so the
/// caller can surface it.
pub fn load(path: &Path, features: &FeatureRegistry, strict: bool) -> Result<LoadReport> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            if strict {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            debug!(path = %path.display(), "no configuration file, keeping defaults");
            return Ok(LoadReport::default());
        }
        Err(err) => return Err(err.into()),
    };

    let doc: DocumentMut = content.parse()?;
    let mut report = LoadReport::default();

    for (section, item) in doc.iter() {
        // Unknown sections and sections for features absent on this
        // host are ignored.
        let Some(feature) = features.resolve(section) else {
            continue;
        };
        let Some(table) = item.as_table() else {
            continue;
        };

        for spec in feature.properties().iter().filter(|s| s.persisted) {
            let Some(entry) = table.get(spec.name) else {
                continue; // missing key keeps the in-memory default
            };
            let Some(raw) = entry.as_str() else {
                warn!(
                    section,
                    key = spec.name,
                    "skipping non-string configuration value"
                );
                report.skipped += 1;
                continue;
            };

            match PropertyValue::parse(spec.kind, raw) {
                Ok(value) => match feature.set(spec.name, value) {
                    Ok(()) => report.applied += 1,
                    Err(err) => {
                        warn!(section, key = spec.name, %err, "skipping rejected value");
                        report.skipped += 1;
                    }
                },
                Err(err) => {
                    warn!(section, key = spec.name, %err, "skipping malformed value");
                    report.skipped += 1;
                }
            }
        }
    }

    debug!(
        path = %path.display(),
        applied = report.applied,
        skipped = report.skipped,
        "configuration loaded"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use switchyard_features::{FeatureState, PropertyValue, Rgba};
    use tempfile::TempDir;

    fn hud() -> FeatureState {
        FeatureState::builder()
            .color("Color", Rgba::WHITE)
            .flag("ShowCompass", true)
            .build()
    }

    fn registry_with_hud() -> FeatureRegistry {
        let mut registry = FeatureRegistry::new();
        registry.install("hud", Arc::new(hud()));
        registry
    }

    #[test]
    fn test_save_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");

        save(&path, &registry_with_hud()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "[hud]\nColor = \"1.000,1.000,1.000,1.000\"\nShowCompass = \"true\"\n"
        );
    }

    #[test]
    fn test_round_trip_into_fresh_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");

        let saved = registry_with_hud();
        let hud_before = saved.resolve("hud").unwrap();
        hud_before
            .set("Color", PropertyValue::Color(Rgba::new(0.25, 0.5, 0.75, 1.0)))
            .unwrap();
        hud_before
            .set("ShowCompass", PropertyValue::Flag(false))
            .unwrap();
        save(&path, &saved).unwrap();

        let fresh = registry_with_hud();
        let report = load(&path, &fresh, true).unwrap();
        assert_eq!(report, LoadReport { applied: 2, skipped: 0 });

        let hud_after = fresh.resolve("hud").unwrap();
        assert_eq!(
            hud_after.get("Color"),
            Some(PropertyValue::Color(Rgba::new(0.25, 0.5, 0.75, 1.0)))
        );
        assert_eq!(hud_after.get("ShowCompass"), Some(PropertyValue::Flag(false)));
    }

    #[test]
    fn test_load_then_save_is_byte_stable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");

        save(&path, &registry_with_hud()).unwrap();
        let first = fs::read_to_string(&path).unwrap();

        let fresh = registry_with_hud();
        load(&path, &fresh, true).unwrap();
        save(&path, &fresh).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_save_twice_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");
        let registry = registry_with_hud();

        save(&path, &registry).unwrap();
        let first = fs::read_to_string(&path).unwrap();
        save(&path, &registry).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), first);
    }

    #[test]
    fn test_unknown_sections_and_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");
        fs::write(
            &path,
            "[ghost]\nwhatever = \"1\"\n\n[hud]\nbogus = \"2\"\nShowCompass = \"false\"\n",
        )
        .unwrap();

        let registry = registry_with_hud();
        let report = load(&path, &registry, true).unwrap();
        assert_eq!(report, LoadReport { applied: 1, skipped: 0 });

        let hud = registry.resolve("hud").unwrap();
        assert_eq!(hud.get("ShowCompass"), Some(PropertyValue::Flag(false)));
        // Untouched by the unknown key.
        assert_eq!(hud.get("Color"), Some(PropertyValue::Color(Rgba::WHITE)));
    }

    #[test]
    fn test_malformed_value_is_skipped_not_fatal() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");
        fs::write(
            &path,
            "[hud]\nColor = \"not-a-color\"\nShowCompass = \"false\"\n",
        )
        .unwrap();

        let registry = registry_with_hud();
        let report = load(&path, &registry, true).unwrap();
        assert_eq!(report, LoadReport { applied: 1, skipped: 1 });

        let hud = registry.resolve("hud").unwrap();
        assert_eq!(hud.get("Color"), Some(PropertyValue::Color(Rgba::WHITE)));
        assert_eq!(hud.get("ShowCompass"), Some(PropertyValue::Flag(false)));
    }

    #[test]
    fn test_missing_file_policies() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");
        let registry = registry_with_hud();

        // Boot-time load: quiet no-op.
        let report = load(&path, &registry, false).unwrap();
        assert_eq!(report, LoadReport::default());

        // User-invoked load: reported.
        let err = load(&path, &registry, true).unwrap_err();
        assert!(matches!(err, ConfigError::MissingFile(_)));
    }

    #[test]
    fn test_declared_but_absent_feature_section_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");
        fs::write(&path, "[exfil]\nEnabled = \"true\"\n").unwrap();

        let mut registry = registry_with_hud();
        registry.declare("exfil");

        let report = load(&path, &registry, true).unwrap();
        assert_eq!(report, LoadReport::default());
    }
}
