//! Core types for locked dependencies

use serde::Serialize;
use std::fmt;

/// A single pinned dependency read from a lockfile
///
/// Renders as `name==version`, or `name==version ; markers` when the
/// dependency only applies in some environments. Markers are carried as
/// opaque text and never evaluated.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Dependency {
    /// Package name (may include a bracketed extras suffix for requirements.txt)
    pub name: String,
    /// Exact pinned version
    pub version: String,
    /// Environment marker expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markers: Option<String>,
}

impl Dependency {
    /// Create an unconditional dependency
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            markers: None,
        }
    }

    /// Attach an environment marker
    pub fn with_markers(mut self, markers: impl Into<String>) -> Self {
        self.markers = Some(markers.into());
        self
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}=={}", self.name, self.version)?;
        match self.markers.as_deref() {
            Some(markers) if !markers.is_empty() => write!(f, " ; {}", markers),
            _ => Ok(()),
        }
    }
}
