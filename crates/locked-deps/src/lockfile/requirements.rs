//! requirements.txt parser (pip-compile / pip-tools / `uv export` output)

use crate::{Dependency, Error, LockfileParser, ParseOptions, Result};
use regex::Regex;
use std::sync::LazyLock;

static HASH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*--hash=\S+").expect("hash pattern is valid")
});

static REQUIREMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-zA-Z0-9_.-]+(?:\[[a-zA-Z0-9_,.-]+\])?)==(\S+?)(\s*;.*)?$")
        .expect("requirement pattern is valid")
});

/// Parser for fully pinned requirements files
///
/// Hashes are stripped, environment markers are kept. Extras in brackets
/// stay part of the name (`urllib3[socks]`).
pub struct RequirementsParser;

impl RequirementsParser {
    /// Create a new requirements.txt parser
    pub fn new() -> Self {
        Self
    }

    fn parse_line(line: &str) -> Result<Dependency> {
        let cleaned = HASH_RE.replace_all(line, "");
        let cleaned = cleaned.trim();

        let captures = REQUIREMENT_RE
            .captures(cleaned)
            .ok_or_else(|| Error::InvalidRequirement {
                line: cleaned.to_string(),
            })?;

        let markers = captures
            .get(3)
            .map(|m| m.as_str().trim().trim_start_matches([';', ' ']).trim())
            .filter(|m| !m.is_empty())
            .map(String::from);

        Ok(Dependency {
            name: captures[1].to_string(),
            version: captures[2].to_string(),
            markers,
        })
    }
}

impl LockfileParser for RequirementsParser {
    fn parse(&self, content: &str, _options: &ParseOptions) -> Result<Vec<Dependency>> {
        let mut deps = Vec::new();

        for raw_line in content.lines() {
            let line = raw_line.split('#').next().unwrap_or_default();
            let line = line.split('\\').next().unwrap_or_default().trim();

            // Blank lines and option lines (--index-url, -e ., --hash continuations)
            if line.is_empty() || line.starts_with('-') {
                continue;
            }

            deps.push(Self::parse_line(line)?);
        }

        Ok(deps)
    }
}

impl Default for RequirementsParser {
    fn default() -> Self {
        Self::new()
    }
}
