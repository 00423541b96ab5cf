//! Native filesystem implementation using std::fs.

use crate::FileSystem;
use std::io;
use std::path::{Path, PathBuf};

/// Native filesystem rooted at a project directory.
#[derive(Debug, Clone)]
pub struct NativeFileSystem {
    project_root: PathBuf,
}

impl NativeFileSystem {
    /// Create a new native filesystem scoped to a project root.
    ///
    /// # Errors
    ///
    /// Returns an error if the root doesn't exist or isn't a directory.
    pub fn new(project_root: impl AsRef<Path>) -> io::Result<Self> {
        let project_root = project_root.as_ref().canonicalize().map_err(|e| {
            io::Error::new(
                e.kind(),
                format!(
                    "Project root does not exist: {}",
                    project_root.as_ref().display()
                ),
            )
        })?;

        if !project_root.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Project root is not a directory: {}", project_root.display()),
            ));
        }

        Ok(Self { project_root })
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        self.resolve(path).try_exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let resolved = self.resolve(path);
        std::fs::read_to_string(&resolved).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("Failed to read {}: {}", resolved.display(), e),
            )
        })
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }
}
