//! Lockfile resolution orchestration for the command line.

use crate::formatters::{Formatter, HumanFormatter, JsonFormatter};
use anyhow::{Context, Result};
use locked_deps::{resolve_dependencies, Format, LockRequest};
use locked_deps_config::{ConfigError, ConfigManager};
use locked_deps_fs::{FileSystem, NativeFileSystem};
use std::path::PathBuf;

/// Output format for results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Options collected from the command line.
#[derive(Debug, Clone)]
pub struct ResolveRunOptions {
    pub root: PathBuf,
    pub lock_file: Option<PathBuf>,
    pub format: Option<Format>,
    pub extras: Vec<String>,
    pub exclude: Vec<String>,
    pub project_name: Option<String>,
    pub output: OutputFormat,
}

/// Layer command-line options over the `pyproject.toml` request.
///
/// Scalar settings from the command line win; extras and exclusions from
/// both sources are merged, keeping first occurrence order.
pub fn merge_request(base: Option<LockRequest>, options: &ResolveRunOptions) -> Result<LockRequest> {
    let project_name = match (&options.project_name, &base) {
        (Some(name), _) => name.clone(),
        (None, Some(base)) => base.project_name.clone(),
        (None, None) => anyhow::bail!(
            "No pyproject.toml found in {}; pass --project-name",
            options.root.display()
        ),
    };

    let mut request = base.unwrap_or_else(|| LockRequest::new(&options.root, project_name.clone()));
    request.project_name = project_name;

    if options.lock_file.is_some() {
        request.lock_file = options.lock_file.clone();
    }
    if options.format.is_some() {
        request.format = options.format;
    }

    for extra in &options.extras {
        if !request.include_extras.contains(extra) {
            request.include_extras.push(extra.clone());
        }
    }
    for name in &options.exclude {
        if !request.exclude.contains(name) {
            request.exclude.push(name.clone());
        }
    }

    Ok(request)
}

/// Resolve the project's locked dependencies and print them.
pub fn run_resolve(options: &ResolveRunOptions) -> Result<()> {
    let fs = NativeFileSystem::new(&options.root)
        .with_context(|| format!("Failed to open project root {}", options.root.display()))?;

    let base = match ConfigManager::load_with_filesystem(fs.clone()) {
        Ok(manager) => match manager.lock_request() {
            Ok(request) => Some(request),
            // --project-name stands in for a missing [project] name
            Err(ConfigError::MissingProjectName(_)) if options.project_name.is_some() => {
                Some(manager.lock_request_named(""))
            }
            Err(e) => return Err(e).context("Invalid pyproject.toml"),
        },
        Err(ConfigError::ConfigNotFound(path)) => {
            tracing::debug!(path = %path.display(), "no pyproject.toml, using command-line settings only");
            None
        }
        Err(e) => return Err(e).context("Failed to load pyproject.toml"),
    };

    let options = ResolveRunOptions {
        root: fs.project_root().to_path_buf(),
        ..options.clone()
    };
    let request = merge_request(base, &options)?;
    let deps = resolve_dependencies(&fs, &request).context("Failed to read locked dependencies")?;
    tracing::info!(count = deps.len(), project = %request.project_name, "resolved locked dependencies");

    let formatter: Box<dyn Formatter> = match options.output {
        OutputFormat::Human => Box::new(HumanFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    };
    formatter.format(&deps);

    Ok(())
}
