//! Alias detection and custom-property naming.
//!
//! Flattened keys (`Color/Base/Red-10`) and alias paths (`{Color.Base.Red-10}`)
//! go through the same [`custom_property_name`] so a `var()` reference always
//! matches the declared property.

/// Whether a string token value is an alias such as `{Color.Base.Red-10}`.
///
/// Detection is purely syntactic: any value wrapped in braces counts, so a
/// literal string that happens to be brace-wrapped is treated as an alias too.
pub fn is_alias(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('{') && value.ends_with('}')
}

/// Normalize a key or alias path into a custom-property name (without `--`).
pub fn custom_property_name(path: &str) -> String {
    path.chars()
        .filter(|c| !matches!(c, '{' | '}' | '(' | ')'))
        .map(|c| {
            if c == '.' || c == '/' || c.is_whitespace() {
                '-'
            } else {
                c
            }
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve an alias into a `var(--name)` reference, or `None` for literals.
pub fn resolve(value: &str) -> Option<String> {
    if !is_alias(value) {
        return None;
    }
    let inner = &value[1..value.len() - 1];
    Some(format!("var(--{})", custom_property_name(inner)))
}
