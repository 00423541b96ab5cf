//! Lockfile formats and lockfile discovery

use crate::lockfile::{PylockParser, RequirementsParser, UvLockParser};
use crate::{Error, LockfileParser, Result};
use locked_deps_fs::FileSystem;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported lockfile formats, in auto-detection priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Format {
    /// PEP 751 `pylock.toml`
    Pylock,
    /// `uv.lock`
    Uv,
    /// Pinned `requirements.txt`
    Requirements,
}

impl Format {
    /// All formats, most structured first
    pub const ALL: [Format; 3] = [Format::Pylock, Format::Uv, Format::Requirements];

    /// Canonical configuration name
    pub fn as_str(self) -> &'static str {
        match self {
            Format::Pylock => "pylock",
            Format::Uv => "uv",
            Format::Requirements => "requirements",
        }
    }

    /// Conventional file name for this format
    pub fn filename(self) -> &'static str {
        match self {
            Format::Pylock => "pylock.toml",
            Format::Uv => "uv.lock",
            Format::Requirements => "requirements.txt",
        }
    }

    /// Parser implementation for this format
    pub fn parser(self) -> Box<dyn LockfileParser> {
        match self {
            Format::Pylock => Box::new(PylockParser::new()),
            Format::Uv => Box::new(UvLockParser::new()),
            Format::Requirements => Box::new(RequirementsParser::new()),
        }
    }

    /// Infer the format from a lockfile's base name
    ///
    /// # Errors
    /// Returns [`Error::CannotInferFormat`] for any name other than the three
    /// conventional file names.
    pub fn infer(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::ALL
            .into_iter()
            .find(|fmt| fmt.filename() == name)
            .ok_or(Error::CannotInferFormat { name })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|fmt| fmt.as_str() == s)
            .ok_or_else(|| Error::UnknownFormat(s.to_string()))
    }
}

/// Probe `root` for a known lockfile, preferring pylock.toml > uv.lock > requirements.txt
///
/// # Errors
/// Returns [`Error::NoLockfile`] naming every expected file when none exists.
pub fn auto_detect<F: FileSystem + ?Sized>(fs: &F, root: &Path) -> Result<(Format, PathBuf)> {
    for fmt in Format::ALL {
        let path = root.join(fmt.filename());
        if fs.exists(&path)? {
            tracing::debug!(format = %fmt, path = %path.display(), "detected lockfile");
            return Ok((fmt, path));
        }
    }

    Err(Error::NoLockfile {
        root: root.to_path_buf(),
        expected: Format::ALL.iter().map(|fmt| fmt.filename()).collect(),
    })
}

/// Decide which lockfile to read and how to interpret it
///
/// - explicit path and format: used as given
/// - explicit path only: format inferred from the file name
/// - no path: [`auto_detect`]; an explicit format only applies to an explicit path
///
/// Relative lockfile paths are resolved against `root`.
pub fn select<F: FileSystem + ?Sized>(
    fs: &F,
    root: &Path,
    lock_file: Option<&Path>,
    format: Option<Format>,
) -> Result<(Format, PathBuf)> {
    match (lock_file, format) {
        (Some(lock_file), Some(fmt)) => Ok((fmt, root.join(lock_file))),
        (Some(lock_file), None) => {
            let fmt = Format::infer(lock_file)?;
            Ok((fmt, root.join(lock_file)))
        }
        (None, Some(fmt)) => {
            tracing::debug!(format = %fmt, "format is ignored without lock-file, auto-detecting");
            auto_detect(fs, root)
        }
        (None, None) => auto_detect(fs, root),
    }
}
