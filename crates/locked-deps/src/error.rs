//! Error types for locked-deps

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using locked-deps Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while locating or interpreting a lockfile
#[derive(Debug, Error)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error (pylock.toml, uv.lock)
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A requirements.txt line is not of the form `name[extras]==version ; marker`
    #[error("Invalid requirements.txt line: {line}")]
    InvalidRequirement {
        /// The offending line after comments, continuations and hashes were stripped
        line: String,
    },

    /// The project's own package is missing from uv.lock
    #[error("Root package '{project}' not found in uv.lock")]
    RootNotFound {
        /// Project name that was looked up
        project: String,
    },

    /// Auto-detection found none of the known lockfiles
    #[error("No lock file found in {}. Expected one of: {}", root.display(), expected.join(", "))]
    NoLockfile {
        /// Directory that was searched
        root: PathBuf,
        /// File names that were probed, in priority order
        expected: Vec<&'static str>,
    },

    /// The lockfile name does not identify a format
    #[error("Cannot infer format for '{name}'. Set 'format' in [tool.hatch.build.hooks.locked-deps]")]
    CannotInferFormat {
        /// Base name of the lockfile
        name: String,
    },

    /// The configured format name is not one of the supported formats
    #[error("Unknown lockfile format '{0}'. Expected one of: pylock, uv, requirements")]
    UnknownFormat(String),
}
