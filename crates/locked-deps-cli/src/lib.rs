//! locked-deps CLI library components.
//!
//! The main binary is in `main.rs`.

pub mod cli;
pub mod formatters;
pub mod tracing;
