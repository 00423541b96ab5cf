//! # locked-deps
//!
//! Turn a Python lockfile into pinned dependency specifiers for build metadata.
//!
//! This crate provides functionality to:
//! - Parse `pylock.toml` (PEP 751), `uv.lock` and pinned `requirements.txt`
//! - Walk the `uv.lock` dependency graph from the project root, leaving out
//!   dev-only packages
//! - Include optional-dependency groups (extras) on request, conditioned on
//!   `extra == "<name>"` markers
//! - Auto-detect which lockfile a project uses
//! - Drop the project itself and excluded names from the result
//!
//! ## Architecture
//!
//! - [`Dependency`]: one pinned `name==version ; marker` record
//! - [`LockfileParser`]: one implementation per [`Format`]; parsing is a pure
//!   function of `(text, ParseOptions)`
//! - [`format::select`]: decides which file to read and in which format
//! - [`locked_dependencies`]: read, parse, filter and render in one call
//!
//! ## Example
//!
//! ```rust
//! use locked_deps::{parse_lockfile, Format, ParseOptions};
//!
//! # fn example() -> locked_deps::Result<()> {
//! let lock = r#"
//! [[package]]
//! name = "myapp"
//! version = "1.0.0"
//! source = { editable = "." }
//! dependencies = [{ name = "requests" }]
//!
//! [[package]]
//! name = "requests"
//! version = "2.31.0"
//! source = { registry = "https://pypi.org/simple" }
//! "#;
//!
//! let deps = parse_lockfile(Format::Uv, lock, &ParseOptions::new("myapp"))?;
//! assert_eq!(deps[0].to_string(), "requests==2.31.0");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod format;
pub mod integration;
pub mod lockfile;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use error::{Error, Result};
pub use format::{auto_detect, Format};
pub use traits::{LockfileParser, ParseOptions};
pub use types::Dependency;

// Re-export parsers
pub use lockfile::{parse_lockfile, PylockParser, RequirementsParser, UvLockParser};

// Re-export integration entry points
pub use integration::{
    filter_dependencies, locked_dependencies, render, resolve_dependencies, LockRequest,
};
