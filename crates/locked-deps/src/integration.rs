//! Glue between lockfile discovery, parsing and the host build

use crate::format::select;
use crate::lockfile::parse_lockfile;
use crate::{Dependency, Format, ParseOptions, Result};
use locked_deps_fs::FileSystem;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Everything the host build knows about the project and its hook settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockRequest {
    /// Project root directory
    pub root: PathBuf,
    /// Lockfile path, relative to `root` unless absolute
    pub lock_file: Option<PathBuf>,
    /// Explicit lockfile format
    pub format: Option<Format>,
    /// Optional-dependency groups to include
    pub include_extras: Vec<String>,
    /// Package names to drop from the output (case-insensitive)
    pub exclude: Vec<String>,
    /// The project's own name
    pub project_name: String,
}

impl LockRequest {
    /// Request with defaults for the project rooted at `root`
    pub fn new(root: impl Into<PathBuf>, project_name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions::new(self.project_name.clone()).with_extras(self.include_extras.iter().cloned())
    }
}

/// Drop the project itself and any excluded names, comparing case-insensitively
pub fn filter_dependencies(
    deps: Vec<Dependency>,
    project_name: &str,
    exclude: &[String],
) -> Vec<Dependency> {
    let mut skip: BTreeSet<String> = exclude.iter().map(|n| n.to_lowercase()).collect();
    skip.insert(project_name.to_lowercase());

    deps.into_iter()
        .filter(|dep| {
            let keep = !skip.contains(&dep.name.to_lowercase());
            if !keep {
                tracing::debug!(package = %dep.name, "excluded from locked dependencies");
            }
            keep
        })
        .collect()
}

/// Render dependencies as specifier strings, preserving order
pub fn render(deps: &[Dependency]) -> Vec<String> {
    deps.iter().map(ToString::to_string).collect()
}

/// Read, parse and filter the project's lockfile
///
/// # Errors
/// Returns an error if no lockfile can be selected or read, or if its
/// contents are malformed.
pub fn resolve_dependencies<F: FileSystem + ?Sized>(
    fs: &F,
    request: &LockRequest,
) -> Result<Vec<Dependency>> {
    let (format, path) = select(
        fs,
        &request.root,
        request.lock_file.as_deref(),
        request.format,
    )?;
    tracing::debug!(format = %format, path = %path.display(), "reading lockfile");

    let content = fs.read_to_string(&path)?;
    let deps = parse_lockfile(format, &content, &request.parse_options())?;

    Ok(filter_dependencies(deps, &request.project_name, &request.exclude))
}

/// Specifier strings for the host build's dependency metadata
///
/// # Example
/// ```rust,no_run
/// use locked_deps::{locked_dependencies, LockRequest};
/// use locked_deps_fs::NativeFileSystem;
///
/// # fn example() -> anyhow::Result<()> {
/// let fs = NativeFileSystem::new(".")?;
/// let request = LockRequest::new(".", "myproject");
///
/// for spec in locked_dependencies(&fs, &request)? {
///     println!("{spec}");
/// }
/// # Ok(())
/// # }
/// ```
pub fn locked_dependencies<F: FileSystem + ?Sized>(
    fs: &F,
    request: &LockRequest,
) -> Result<Vec<String>> {
    resolve_dependencies(fs, request).map(|deps| render(&deps))
}
