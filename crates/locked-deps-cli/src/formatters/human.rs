//! Plain text output, one specifier per line.

use locked_deps::{render, Dependency};

pub struct HumanFormatter;

pub fn render_lines(deps: &[Dependency]) -> String {
    render(deps).join("\n")
}

pub fn print_results(deps: &[Dependency]) {
    if deps.is_empty() {
        tracing::warn!("no locked dependencies found");
        return;
    }
    println!("{}", render_lines(deps));
}
