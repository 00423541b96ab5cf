//! Lockfile parsers, one per supported format

pub mod pylock;
pub mod requirements;
pub mod uv;

pub use pylock::PylockParser;
pub use requirements::RequirementsParser;
pub use uv::UvLockParser;

use crate::{Dependency, Format, ParseOptions, Result};

/// Parse lockfile text in the given format
///
/// This is the pure core of the crate: no filesystem access, no filtering.
pub fn parse_lockfile(format: Format, content: &str, options: &ParseOptions) -> Result<Vec<Dependency>> {
    format.parser().parse(content, options)
}
