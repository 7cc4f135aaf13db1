//! Output backends for generated artifacts
//!
//! The generator never touches the filesystem directly; it hands each
//! rendered document to an [`ArtifactWriter`]. [`FsWriter`] is used by the
//! CLI, [`MemoryWriter`] by dry runs and tests.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ScaffoldResult};

/// Destination for rendered artifacts
#[cfg_attr(test, mockall::automock)]
pub trait ArtifactWriter {
    /// Write `contents` to `path`, creating parent directories and
    /// replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Filesystem`] if a directory cannot be
    /// created or the file cannot be written.
    fn write(&mut self, path: &Path, contents: &str) -> ScaffoldResult<()>;
}

/// Writes artifacts to the local filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsWriter;

impl ArtifactWriter for FsWriter {
    fn write(&mut self, path: &Path, contents: &str) -> ScaffoldResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::filesystem(parent, e))?;
        }

        fs::write(path, contents).map_err(|e| ScaffoldError::filesystem(path, e))
    }
}

/// Keeps artifacts in memory, keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    /// Create an empty writer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Contents written to `path`, if any
    #[must_use]
    pub fn get(&self, path: &Path) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    /// All written paths in sorted order
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.files.keys().map(PathBuf::as_path)
    }

    /// Number of files written
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether nothing has been written
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl ArtifactWriter for MemoryWriter {
    fn write(&mut self, path: &Path, contents: &str) -> ScaffoldResult<()> {
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fs_writer_creates_parents() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("cart/content-types/cart/schema.json");

        FsWriter.write(&path, "{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_fs_writer_overwrites() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("routes/cart.js");

        FsWriter.write(&path, "first").unwrap();
        FsWriter.write(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_fs_writer_reports_path_on_failure() {
        let temp_dir = tempdir().unwrap();
        let blocker = temp_dir.path().join("cart");
        fs::write(&blocker, "not a directory").unwrap();

        let err = FsWriter
            .write(&blocker.join("routes/cart.js"), "x")
            .unwrap_err();

        assert!(err.is_filesystem());
        assert!(err.to_string().contains("cart"));
    }

    #[test]
    fn test_memory_writer() {
        let mut writer = MemoryWriter::new();
        assert!(writer.is_empty());

        writer.write(Path::new("b.js"), "b").unwrap();
        writer.write(Path::new("a.js"), "a").unwrap();
        writer.write(Path::new("a.js"), "a2").unwrap();

        assert_eq!(writer.len(), 2);
        assert_eq!(writer.get(Path::new("a.js")), Some("a2"));
        let paths: Vec<_> = writer.paths().collect();
        assert_eq!(paths, vec![Path::new("a.js"), Path::new("b.js")]);
    }
}
