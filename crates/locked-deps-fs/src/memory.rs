//! In-memory filesystem implementation.

use crate::FileSystem;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// In-memory filesystem holding pre-loaded file contents.
///
/// Useful when the host already has the lockfile text, and in tests.
/// Clones share the same file table.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
    project_root: PathBuf,
    files: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryFileSystem {
    /// Create an empty filesystem with a virtual project root (e.g. "/project").
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            project_root: normalize(project_root.as_ref()),
            files: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Builder-style [`MemoryFileSystem::insert`].
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<String>) -> Self {
        self.insert(path, contents);
        self
    }

    /// Add or replace a file. Relative paths are placed under the project root.
    pub fn insert(&self, path: impl AsRef<Path>, contents: impl Into<String>) {
        let path = self.resolve(path.as_ref());
        self.files.write().insert(path, contents.into());
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            normalize(path)
        } else {
            normalize(&self.project_root.join(path))
        }
    }
}

/// Syntactic normalization: drops `.` and folds `..` without touching disk.
fn normalize(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            other => result.push(other.as_os_str()),
        }
    }
    result
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.files.read().contains_key(&self.resolve(path)))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let resolved = self.resolve(path);
        self.files.read().get(&resolved).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", resolved.display()),
            )
        })
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }
}
