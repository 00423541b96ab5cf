//! Output formatters for resolved dependencies.

pub mod human;
pub mod json;

pub use human::HumanFormatter;
pub use json::JsonFormatter;

use locked_deps::Dependency;

/// Trait for formatting resolved dependencies
pub trait Formatter {
    /// Format and print the dependency list
    fn format(&self, deps: &[Dependency]);
}

impl Formatter for HumanFormatter {
    fn format(&self, deps: &[Dependency]) {
        human::print_results(deps);
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, deps: &[Dependency]) {
        json::print_json(deps);
    }
}
