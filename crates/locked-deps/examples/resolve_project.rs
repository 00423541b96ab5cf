//! Example: Print the locked dependencies of a project
//!
//! Run with: cargo run --package locked-deps --example resolve_project -- <root> <project-name>

use locked_deps::{locked_dependencies, LockRequest};
use locked_deps_fs::{FileSystem, NativeFileSystem};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let root = args.next().unwrap_or_else(|| ".".to_string());
    let Some(project_name) = args.next() else {
        println!("usage: resolve_project <root> <project-name>");
        return Ok(());
    };

    let fs = NativeFileSystem::new(&root)?;
    let request = LockRequest::new(fs.project_root(), project_name);

    for spec in locked_dependencies(&fs, &request)? {
        println!("{spec}");
    }
    Ok(())
}
