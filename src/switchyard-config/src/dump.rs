//! Dump writer: opaque pre-rendered objects to per-object text files.
//!
//! The host's scene collaborator renders each object to text; this
//! module only owns the filesystem contract: a fresh timestamped folder
//! under `Dumps/`, created before any write, and filenames sanitized for
//! the host filesystem. Object names are expected to be unique within
//! one dump; a later duplicate overwrites the earlier file.

use std::fs;
use std::path::PathBuf;

use chrono::Local;
use tracing::debug;

use switchyard_features::SceneObject;

use crate::error::Result;
use crate::paths::{UserPaths, safe_filename};

/// Where a dump landed and how much was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpReport {
    /// The timestamped folder holding this dump.
    pub dir: PathBuf,
    /// Number of object files written.
    pub written: usize,
}

/// Write one file per object under a new timestamped dump folder.
pub fn write_dump(paths: &UserPaths, objects: &[SceneObject]) -> Result<DumpReport> {
    let dir = paths.dump_dir(Local::now());
    fs::create_dir_all(&dir)?;

    let mut written = 0;
    for object in objects {
        let file = dir.join(format!("{}.txt", safe_filename(&object.name)));
        fs::write(file, &object.body)?;
        written += 1;
    }

    debug!(dir = %dir.display(), written, "dump written");
    Ok(DumpReport { dir, written })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_dump_creates_folder_and_files() {
        let tmp = TempDir::new().unwrap();
        let paths = UserPaths::from_root(tmp.path());

        let objects = vec![
            SceneObject::new("@scene - world: day", "{ \"root\": true }"),
            SceneObject::new("player-1", "{}"),
        ];
        let report = write_dump(&paths, &objects).unwrap();

        assert_eq!(report.written, 2);
        assert!(report.dir.starts_with(&paths.dumps_dir));
        assert!(report.dir.join("@scene - world_ day.txt").exists());
        assert_eq!(
            fs::read_to_string(report.dir.join("player-1.txt")).unwrap(),
            "{}"
        );
    }

    #[test]
    fn test_empty_dump_still_creates_folder() {
        let tmp = TempDir::new().unwrap();
        let paths = UserPaths::from_root(tmp.path());

        let report = write_dump(&paths, &[]).unwrap();
        assert_eq!(report.written, 0);
        assert!(report.dir.is_dir());
    }
}
