//! Command implementations.

pub mod resolve;
