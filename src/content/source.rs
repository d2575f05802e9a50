//! Content source abstraction
//!
//! The store reads through a capability handed to it at construction rather
//! than ambient process state, so tests and embedders can substitute an
//! in-memory tree. Missing directories and files are normal absences here,
//! not errors; only real I/O faults surface as `Err`.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Read capability over a content tree
pub trait ContentSource {
    /// File names directly inside `dir`. A missing directory is an empty
    /// listing.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Contents of `path`, or `None` if the file does not exist.
    fn read_file(&self, path: &Path) -> io::Result<Option<String>>;
}

/// Disk-backed source
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl ContentSource for FsSource {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// In-memory source for tests and embedding
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: BTreeMap<PathBuf, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at `path`
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }
}

impl ContentSource for MemorySource {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for path in self.files.keys() {
            if path.parent() == Some(dir) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    fn read_file(&self, path: &Path) -> io::Result<Option<String>> {
        Ok(self.files.get(path).cloned())
    }
}
