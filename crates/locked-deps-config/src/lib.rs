//! Build-hook configuration for locked-deps, read from `pyproject.toml`.

pub mod manager;
pub mod types;

pub use manager::{ConfigError, ConfigManager, PYPROJECT};
pub use types::{HookConfig, ProjectTable, PyProject};
