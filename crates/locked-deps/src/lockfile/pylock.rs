//! PEP 751 pylock.toml parser

use crate::{Dependency, LockfileParser, ParseOptions, Result};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;

// Only the first `extra == "..."` clause is inspected; the rest of the
// marker grammar is opaque.
static EXTRA_MARKER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"extra\s*==\s*["']([^"']+)["']"#).expect("extra marker pattern is valid")
});

#[derive(Debug, Deserialize)]
struct PyLock {
    #[serde(default)]
    packages: Vec<PyLockPackage>,
}

#[derive(Debug, Deserialize)]
struct PyLockPackage {
    name: String,
    version: String,
    marker: Option<String>,
}

/// pylock.toml parser
///
/// The package list is already flat, so there is no graph to walk. Packages
/// gated on an extra are dropped unless that extra was requested.
pub struct PylockParser;

impl PylockParser {
    /// Create a new pylock.toml parser
    pub fn new() -> Self {
        Self
    }
}

/// Name of the extra a marker is conditioned on, if any
pub fn marker_extra(marker: &str) -> Option<&str> {
    EXTRA_MARKER_RE
        .captures(marker)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

impl LockfileParser for PylockParser {
    fn parse(&self, content: &str, options: &ParseOptions) -> Result<Vec<Dependency>> {
        let lock: PyLock = toml::from_str(content)?;

        let deps = lock
            .packages
            .into_iter()
            .filter(|pkg| match pkg.marker.as_deref().and_then(marker_extra) {
                Some(extra) => {
                    let wanted = options.include_extras.iter().any(|e| e == extra);
                    if !wanted {
                        tracing::debug!(package = %pkg.name, extra, "skipping package for unrequested extra");
                    }
                    wanted
                }
                None => true,
            })
            .map(|pkg| Dependency {
                name: pkg.name,
                version: pkg.version,
                markers: pkg.marker,
            })
            .collect();

        Ok(deps)
    }
}

impl Default for PylockParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn parse(content: &str, extras: &[&str]) -> Result<Vec<Dependency>> {
        PylockParser::new().parse(
            content,
            &ParseOptions::new("myapp").with_extras(extras.iter().copied()),
        )
    }

    #[test]
    fn test_simple() {
        let deps = parse(
            r#"
lock-version = "1.0"

[[packages]]
name = "requests"
version = "2.31.0"

[[packages]]
name = "urllib3"
version = "2.1.0"
"#,
            &[],
        )
        .unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("requests", "2.31.0"),
                Dependency::new("urllib3", "2.1.0"),
            ]
        );
    }

    #[test]
    fn test_markers_passed_through() {
        let deps = parse(
            r#"
lock-version = "1.0"

[[packages]]
name = "cffi"
version = "1.16.0"
marker = "platform_system != 'Windows'"

[[packages]]
name = "pywin32"
version = "306"
marker = "sys_platform == 'win32'"
"#,
            &[],
        )
        .unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("cffi", "1.16.0").with_markers("platform_system != 'Windows'"),
                Dependency::new("pywin32", "306").with_markers("sys_platform == 'win32'"),
            ]
        );
    }

    const EXTRAS_LOCK: &str = r#"
lock-version = "1.0"

[[packages]]
name = "flask"
version = "3.0.0"

[[packages]]
name = "psycopg2"
version = "2.9.9"
marker = "extra == 'postgres'"

[[packages]]
name = "redis"
version = "5.0.1"
marker = 'extra == "redis" and python_version >= "3.9"'
"#;

    #[test]
    fn test_extras_excluded_by_default() {
        let deps = parse(EXTRAS_LOCK, &[]).unwrap();
        assert_eq!(deps, vec![Dependency::new("flask", "3.0.0")]);
    }

    #[test]
    fn test_include_extras_keeps_full_marker() {
        let deps = parse(EXTRAS_LOCK, &["postgres"]).unwrap();
        assert_eq!(
            deps,
            vec![
                Dependency::new("flask", "3.0.0"),
                Dependency::new("psycopg2", "2.9.9").with_markers("extra == 'postgres'"),
            ]
        );

        let deps = parse(EXTRAS_LOCK, &["redis"]).unwrap();
        assert_eq!(
            deps[1],
            Dependency::new("redis", "5.0.1")
                .with_markers(r#"extra == "redis" and python_version >= "3.9""#)
        );
    }

    #[test]
    fn test_empty_packages() {
        assert!(parse("lock-version = \"1.0\"\n", &[]).unwrap().is_empty());
    }

    #[test]
    fn test_missing_version_is_error() {
        let err = parse("[[packages]]\nname = \"broken\"\n", &[]).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_marker_extra() {
        assert_eq!(marker_extra("extra == 'dev'"), Some("dev"));
        assert_eq!(marker_extra(r#"python_version < "3.12" and extra=="docs""#), Some("docs"));
        assert_eq!(marker_extra("sys_platform == 'win32'"), None);
    }
}
