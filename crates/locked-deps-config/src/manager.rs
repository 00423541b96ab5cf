use crate::types::{HookConfig, PyProject};
use locked_deps::LockRequest;
use locked_deps_fs::{FileSystem, NativeFileSystem};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File the hook configuration is read from
pub const PYPROJECT: &str = "pyproject.toml";

/// Errors that can occur while reading hook configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("No [project] name declared in {0}")]
    MissingProjectName(PathBuf),

    #[error("Invalid setting '{key}': {message}")]
    InvalidSetting { key: &'static str, message: String },
}

/// Loaded `pyproject.toml` for one project root
pub struct ConfigManager<F: FileSystem = NativeFileSystem> {
    fs: F,
    config_path: PathBuf,
    pyproject: PyProject,
}

impl ConfigManager {
    /// Load `pyproject.toml` from a project directory on disk
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let fs = NativeFileSystem::new(root)?;
        Self::load_with_filesystem(fs)
    }
}

impl<F: FileSystem> ConfigManager<F> {
    /// Load `pyproject.toml` from the root of a custom FileSystem
    pub fn load_with_filesystem(fs: F) -> Result<Self, ConfigError> {
        let config_path = fs.project_root().join(PYPROJECT);

        if !fs.exists(&config_path)? {
            return Err(ConfigError::ConfigNotFound(config_path));
        }

        let contents = fs.read_to_string(&config_path)?;
        let pyproject: PyProject = toml::from_str(&contents)?;
        if let Some(hook) = pyproject.hook() {
            validate_hook(hook)?;
        }

        tracing::debug!(path = %config_path.display(), "loaded project configuration");

        Ok(Self {
            fs,
            config_path,
            pyproject,
        })
    }

    /// The filesystem the configuration was read through
    pub fn filesystem(&self) -> &F {
        &self.fs
    }

    /// Hook settings, defaulted when the hook table is absent
    pub fn hook(&self) -> HookConfig {
        self.pyproject.hook().cloned().unwrap_or_default()
    }

    /// `[project].name`
    pub fn project_name(&self) -> Result<&str, ConfigError> {
        self.pyproject
            .project_name()
            .ok_or_else(|| ConfigError::MissingProjectName(self.config_path.clone()))
    }

    /// Build the request the host hands to the lockfile layer
    pub fn lock_request(&self) -> Result<LockRequest, ConfigError> {
        let name = self.project_name()?;
        Ok(self.lock_request_named(name))
    }

    /// Hook settings as a request for an explicitly named project
    pub fn lock_request_named(&self, project_name: &str) -> LockRequest {
        let hook = self.hook();
        LockRequest {
            root: self.fs.project_root().to_path_buf(),
            lock_file: hook.lock_file,
            format: hook.format,
            include_extras: hook.include_extras,
            exclude: hook.exclude,
            project_name: project_name.to_string(),
        }
    }
}

fn validate_hook(hook: &HookConfig) -> Result<(), ConfigError> {
    let lists = [
        ("include-extras", &hook.include_extras),
        ("exclude", &hook.exclude),
    ];
    for (key, values) in lists {
        if values.iter().any(|v| v.trim().is_empty()) {
            return Err(ConfigError::InvalidSetting {
                key,
                message: "entries must be non-empty names".to_string(),
            });
        }
    }

    if hook
        .lock_file
        .as_deref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        return Err(ConfigError::InvalidSetting {
            key: "lock-file",
            message: "path must not be empty".to_string(),
        });
    }

    Ok(())
}
