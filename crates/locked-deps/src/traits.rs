//! Core traits for lockfile interpretation

use crate::types::Dependency;
use crate::Result;

/// Options passed explicitly to every parser call
///
/// Extras are opt-in: an empty `include_extras` means no optional
/// dependency group is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Name of the project being built; locates the root package in uv.lock
    pub project_name: String,
    /// Optional-dependency groups to include, in the order they are emitted
    pub include_extras: Vec<String>,
}

impl ParseOptions {
    /// Options for the given project with no extras
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            include_extras: Vec::new(),
        }
    }

    /// Request the given extras
    pub fn with_extras<I, S>(mut self, extras: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_extras = extras.into_iter().map(Into::into).collect();
        self
    }
}

/// Trait for turning lockfile text into pinned dependencies
///
/// Implementations are pure: the same text and options always produce the
/// same records in the same order.
pub trait LockfileParser: Send + Sync {
    /// Parse lockfile contents
    ///
    /// # Errors
    /// Returns an error if the text is malformed for this format
    fn parse(&self, content: &str, options: &ParseOptions) -> Result<Vec<Dependency>>;
}
