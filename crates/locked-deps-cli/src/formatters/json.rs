//! JSON formatter for resolved dependencies.

use locked_deps::{render, Dependency};

pub struct JsonFormatter;

/// Pretty JSON array of specifier strings
pub fn to_json(deps: &[Dependency]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&render(deps))
}

pub fn print_json(deps: &[Dependency]) {
    match to_json(deps) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }
}
