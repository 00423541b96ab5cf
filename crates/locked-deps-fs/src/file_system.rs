//! FileSystem trait for reading lockfiles.

use std::io;
use std::path::Path;

/// Read-only filesystem access scoped to a project root.
///
/// Relative paths are resolved against [`FileSystem::project_root`].
///
/// # Error Handling
///
/// Uses `std::io::Result<T>` so implementations map directly onto
/// `std::fs` errors:
/// - missing files are `io::ErrorKind::NotFound`
/// - non UTF-8 contents are `io::ErrorKind::InvalidData`
pub trait FileSystem: Send + Sync {
    /// Check if a path exists.
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Read file contents as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Get the project root this filesystem is scoped to.
    fn project_root(&self) -> &Path;
}
