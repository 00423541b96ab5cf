//! Diagnostic logging for the `locked-deps` binary.
//!
//! Logs go to stderr so stdout carries only the specifier list.

use std::io;
pub use tracing::Level;
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Map the `-v` count to a level; warnings are shown by default
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn default_directives(level: Level) -> String {
    let level_str = level.as_str().to_lowercase();
    format!("locked_deps={level_str},locked_deps_config={level_str},locked_deps_fs={level_str},locked_deps_cli={level_str}")
}

/// Initialize tracing; `RUST_LOG` takes precedence over the verbosity flag
pub fn init_tracing(verbose: u8) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives(level_for_verbosity(verbose))))
        .map_err(|e| anyhow::anyhow!("Failed to create tracing filter: {e}"))?;

    let layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "tracing initialized");
    Ok(())
}
