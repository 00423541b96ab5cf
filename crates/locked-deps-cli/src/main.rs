//! locked-deps CLI - pinned dependency specifiers from a Python lockfile.

use anyhow::Result;
use clap::Parser;
use locked_deps::Format;
use locked_deps_cli::cli::resolve::{self, ResolveRunOptions};
use locked_deps_cli::tracing::init_tracing;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "locked-deps")]
#[command(about = "Print the pinned dependencies a wheel built from this project would declare", long_about = None)]
struct Cli {
    /// Project root containing pyproject.toml and the lockfile
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Lockfile path, relative to ROOT unless absolute
    #[arg(long, value_name = "PATH")]
    lock_file: Option<PathBuf>,

    /// Lockfile format (pylock, uv, requirements)
    #[arg(long, value_name = "FORMAT")]
    format: Option<Format>,

    /// Optional-dependency group to include (can be specified multiple times)
    #[arg(long = "extra", value_name = "NAME")]
    extras: Vec<String>,

    /// Package name to leave out (can be specified multiple times)
    #[arg(long, value_name = "NAME")]
    exclude: Vec<String>,

    /// Project name, required when pyproject.toml has none
    #[arg(long)]
    project_name: Option<String>,

    /// Output format
    #[arg(short, long = "output", value_enum, default_value = "human")]
    output: OutputFormat,

    /// Verbose output
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    resolve::run_resolve(&ResolveRunOptions {
        root: cli.root,
        lock_file: cli.lock_file,
        format: cli.format,
        extras: cli.extras,
        exclude: cli.exclude,
        project_name: cli.project_name,
        output: match cli.output {
            OutputFormat::Human => resolve::OutputFormat::Human,
            OutputFormat::Json => resolve::OutputFormat::Json,
        },
    })
}
