//! Per-user paths for the configuration file and dump output.
//!
//! Everything lives under `<user documents root>/Switchyard/`:
//!
//! - `switchyard.ini` — persisted feature configuration
//! - `Dumps/<yyyyMMdd-HHmmss>/` — one folder per dump invocation
//!
//! Hosts without a documents directory (headless users, containers)
//! fall back to the platform data directory.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::error::{ConfigError, Result};

/// Application directory name under the user documents root.
pub const APP_DIR: &str = "Switchyard";

/// Configuration file name.
pub const CONFIG_FILE: &str = "switchyard.ini";

/// Dump output directory name, sibling to the configuration file.
pub const DUMPS_DIR: &str = "Dumps";

/// Paths container for one user.
#[derive(Debug, Clone)]
pub struct UserPaths {
    /// Application root directory.
    pub root: PathBuf,
    /// Persisted configuration file.
    pub config_file: PathBuf,
    /// Parent directory for timestamped dump folders.
    pub dumps_dir: PathBuf,
}

impl UserPaths {
    /// Detect the per-user root automatically.
    pub fn new() -> Result<Self> {
        let base = dirs::document_dir()
            .or_else(dirs::data_dir)
            .ok_or(ConfigError::UserDirNotFound)?;
        Ok(Self::from_root(base.join(APP_DIR)))
    }

    /// Build paths under an explicit root (tests, embedded hosts).
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_file: root.join(CONFIG_FILE),
            dumps_dir: root.join(DUMPS_DIR),
            root,
        }
    }

    /// Create the root directory if missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        Ok(())
    }

    /// Directory for one dump invocation at the given instant.
    pub fn dump_dir(&self, at: DateTime<Local>) -> PathBuf {
        self.dumps_dir.join(at.format("%Y%m%d-%H%M%S").to_string())
    }
}

/// Replace characters that are invalid in filenames on common
/// filesystems (`/ \ : * ? " < > |` and control characters) with `_`.
pub fn safe_filename(name: &str) -> Cow<'_, str> {
    let invalid =
        |c: char| matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') || c.is_control();

    if !name.chars().any(invalid) {
        return Cow::Borrowed(name);
    }

    Cow::Owned(
        name.chars()
            .map(|c| if invalid(c) { '_' } else { c })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_layout_under_root() {
        let paths = UserPaths::from_root("/home/user/Documents/Switchyard");
        assert_eq!(
            paths.config_file,
            PathBuf::from("/home/user/Documents/Switchyard/switchyard.ini")
        );
        assert_eq!(
            paths.dumps_dir,
            PathBuf::from("/home/user/Documents/Switchyard/Dumps")
        );
    }

    #[test]
    fn test_dump_dir_timestamp_format() {
        let paths = UserPaths::from_root("/tmp/sy");
        let at = Local.with_ymd_and_hms(2024, 3, 7, 16, 5, 9).unwrap();
        assert_eq!(
            paths.dump_dir(at),
            PathBuf::from("/tmp/sy/Dumps/20240307-160509")
        );
    }

    #[test]
    fn test_safe_filename_passthrough_borrows() {
        assert!(matches!(
            safe_filename("plain-name.txt"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn test_safe_filename_replaces_invalid_chars() {
        assert_eq!(
            safe_filename("@scene - world: day/1"),
            "@scene - world_ day_1"
        );
        assert_eq!(safe_filename("a::b"), "a__b");
        assert_eq!(safe_filename("tab\there"), "tab_here");
    }
}
