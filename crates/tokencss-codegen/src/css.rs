//! CSS serialization.
//!
//! Wraps declaration units in a selector block, indenting every physical line.

use crate::alias::custom_property_name;
use crate::Selector;

/// A single custom-property declaration, e.g. `--space-s: 4px;`.
pub fn declaration(key: &str, value: &str) -> String {
    format!("--{}: {value};", custom_property_name(key))
}

/// Join declaration units into `<selector> { ... }`.
///
/// Units may span several lines (blank separator, comment, declaration).
/// Blank lines are kept and left unindented.
pub fn serialize(units: &[String], selector: &Selector, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let body: Vec<String> = units
        .iter()
        .flat_map(|unit| unit.split('\n'))
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{pad}{line}")
            }
        })
        .collect();
    format!("{selector} {{\n{}\n}}", body.join("\n"))
}
