//! Filesystem abstraction for locked-deps.
//!
//! Lockfile interpretation only ever needs two things from the outside
//! world: "does this file exist" and "give me its text". This crate puts
//! those behind the [`FileSystem`] trait, with a disk-backed
//! [`NativeFileSystem`] and an in-memory [`MemoryFileSystem`] for tests and
//! embedders that already hold the lockfile contents.
//!
//! # Example
//!
//! ```no_run
//! use locked_deps_fs::{FileSystem, NativeFileSystem};
//! use std::path::Path;
//!
//! # fn main() -> std::io::Result<()> {
//! let fs = NativeFileSystem::new(".")?;
//! if fs.exists(Path::new("uv.lock"))? {
//!     let contents = fs.read_to_string(Path::new("uv.lock"))?;
//!     println!("{}", contents);
//! }
//! # Ok(())
//! # }
//! ```

mod file_system;
pub use file_system::FileSystem;

pub mod memory;
pub use memory::MemoryFileSystem;

pub mod native;
pub use native::NativeFileSystem;
