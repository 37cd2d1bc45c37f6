//! Atomic file writing for the configuration save path.
//!
//! Writes go to a temporary file in the destination directory, are
//! synced, and are renamed over the target. A failed or abandoned save
//! leaves the previous file untouched.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur during an atomic write.
#[derive(Debug, Error)]
pub enum AtomicWriteError {
    /// Failed to create the parent directory.
    #[error("failed to create directory '{dir}': {source}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to create the temporary file.
    #[error("failed to create temporary file in '{dir}': {source}")]
    CreateTemp {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write or sync the temporary file.
    #[error("failed to write temporary file: {0}")]
    Write(#[source] io::Error),

    /// Failed to rename the temporary file over the target.
    #[error("failed to rename '{from}' to '{to}': {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Target path has no parent directory.
    #[error("target path has no parent directory: {0}")]
    NoParent(PathBuf),
}

/// Write-to-temp-then-rename writer. Dropping without [`commit`]
/// removes the temporary file and leaves the target unchanged.
///
/// [`commit`]: AtomicWriter::commit
pub struct AtomicWriter {
    target: PathBuf,
    temp: PathBuf,
    file: Option<File>,
    committed: bool,
}

impl AtomicWriter {
    /// Create a writer for the target path, creating parent directories
    /// as needed.
    pub fn new(target: impl AsRef<Path>) -> Result<Self, AtomicWriteError> {
        let target = target.as_ref().to_path_buf();
        let parent = target
            .parent()
            .ok_or_else(|| AtomicWriteError::NoParent(target.clone()))?;

        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|source| AtomicWriteError::CreateDir {
                dir: parent.to_path_buf(),
                source,
            })?;
        }

        let stamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let temp = parent.join(format!(
            ".{}.{stamp}.tmp",
            target.file_name().and_then(|n| n.to_str()).unwrap_or("file"),
        ));

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp)
            .map_err(|source| AtomicWriteError::CreateTemp {
                dir: parent.to_path_buf(),
                source,
            })?;

        Ok(Self {
            target,
            temp,
            file: Some(file),
            committed: false,
        })
    }

    /// Append a string to the pending write.
    pub fn write_str(&mut self, data: &str) -> Result<(), AtomicWriteError> {
        match self.file {
            Some(ref mut file) => file
                .write_all(data.as_bytes())
                .map_err(AtomicWriteError::Write),
            None => Err(AtomicWriteError::Write(io::Error::other(
                "file handle already consumed",
            ))),
        }
    }

    /// Sync and rename over the target.
    pub fn commit(mut self) -> Result<(), AtomicWriteError> {
        if let Some(file) = self.file.take() {
            file.sync_all().map_err(AtomicWriteError::Write)?;
        }

        rename_over(&self.temp, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

impl Drop for AtomicWriter {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.temp);
        }
    }
}

// `rename()` is atomic on POSIX; Windows needs remove-then-rename when
// the target already exists.
#[cfg(unix)]
fn rename_over(from: &Path, to: &Path) -> Result<(), AtomicWriteError> {
    fs::rename(from, to).map_err(|source| AtomicWriteError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
fn rename_over(from: &Path, to: &Path) -> Result<(), AtomicWriteError> {
    if to.exists() {
        fs::remove_file(to).map_err(|source| AtomicWriteError::Rename {
            from: from.to_path_buf(),
            to: to.to_path_buf(),
            source,
        })?;
    }
    fs::rename(from, to).map_err(|source| AtomicWriteError::Rename {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    })
}

/// Atomically replace the file at `path` with `content`.
pub fn atomic_write_str(path: impl AsRef<Path>, content: &str) -> Result<(), AtomicWriteError> {
    let mut writer = AtomicWriter::new(path)?;
    writer.write_str(content)?;
    writer.commit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_new_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");

        atomic_write_str(&path, "[hud]\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[hud]\n");
    }

    #[test]
    fn test_overwrite_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");
        fs::write(&path, "old").unwrap();

        atomic_write_str(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    }

    #[test]
    fn test_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a/b/switchyard.ini");

        atomic_write_str(&path, "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_uncommitted_write_preserves_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("switchyard.ini");
        fs::write(&path, "original").unwrap();

        {
            let mut writer = AtomicWriter::new(&path).unwrap();
            writer.write_str("half-written").unwrap();
            // dropped without commit
        }

        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "switchyard.ini")
            .collect();
        assert!(leftovers.is_empty());
    }
}
