//! Typed view of the `pyproject.toml` tables the hook reads.

use locked_deps::Format;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The parts of `pyproject.toml` the hook reads
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PyProject {
    /// `[project]` table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectTable>,

    /// `[tool]` table
    #[serde(default)]
    pub tool: ToolTable,
}

impl PyProject {
    /// The `[tool.hatch.build.hooks.locked-deps]` table, if present
    pub fn hook(&self) -> Option<&HookConfig> {
        self.tool.hatch.build.hooks.locked_deps.as_ref()
    }

    /// `[project].name`, if declared
    pub fn project_name(&self) -> Option<&str> {
        self.project.as_ref().and_then(|p| p.name.as_deref())
    }
}

/// `[project]` metadata
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectTable {
    /// Distribution name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `[tool]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ToolTable {
    /// `[tool.hatch]`
    #[serde(default)]
    pub hatch: HatchTable,
}

/// `[tool.hatch]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HatchTable {
    /// `[tool.hatch.build]`
    #[serde(default)]
    pub build: BuildTable,
}

/// `[tool.hatch.build]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BuildTable {
    /// `[tool.hatch.build.hooks]`
    #[serde(default)]
    pub hooks: HooksTable,
}

/// `[tool.hatch.build.hooks]`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HooksTable {
    /// `[tool.hatch.build.hooks.locked-deps]`
    #[serde(rename = "locked-deps", skip_serializing_if = "Option::is_none")]
    pub locked_deps: Option<HookConfig>,
}

/// Settings for the locked-deps build hook
///
/// Keys the host reserves for every hook (`dependencies`,
/// `enable-by-default`, ...) share this table and are ignored here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct HookConfig {
    /// Lockfile path relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lock_file: Option<PathBuf>,

    /// Lockfile format; inferred from the file name when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,

    /// Extras to include
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub include_extras: Vec<String>,

    /// Package names to leave out
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}
