//! Token value stringification.
//!
//! Dispatch order: composite sentinel, alias, color, string, boolean, number.

use crate::alias;
use crate::color::parse_color;
use crate::ColorFormat;
use tokencss_tree::{Token, TokenValue};

/// Emitted in place of composite values, which are not supported.
pub const COMPOSITE_SENTINEL: &str = "\"composite_type_not_supported_error\"";

/// Produce the CSS text for a token's value.
///
/// `key` is the flattened key, used only for diagnostics.
pub fn stringify(key: &str, token: &Token, color: ColorFormat) -> String {
    match &token.value {
        TokenValue::Composite(_) => {
            tracing::warn!(key, "composite token values are not supported yet");
            COMPOSITE_SENTINEL.to_string()
        }
        TokenValue::String(s) => {
            if let Some(reference) = alias::resolve(s) {
                reference
            } else if token.is_color() {
                format_color(key, s, color)
            } else {
                quote_string(s)
            }
        }
        TokenValue::Boolean(b) => b.to_string(),
        TokenValue::Number(n) => format!("{}px", format_number(*n)),
    }
}

fn format_color(key: &str, value: &str, color: ColorFormat) -> String {
    match color {
        ColorFormat::Raw => value.to_string(),
        ColorFormat::Rgb => match parse_color(value) {
            Ok(rgba) => rgba.to_css(),
            Err(e) => {
                tracing::warn!(key, "{e}, writing it unchanged");
                value.to_string()
            }
        },
    }
}

/// Wrap strings containing whitespace in single quotes.
///
/// Newlines become the CSS escape `\A ` so the value stays on one line.
pub fn quote_string(s: &str) -> String {
    if s.chars().any(char::is_whitespace) {
        let escaped = s
            .replace('\\', "\\\\")
            .replace('\'', "\\'")
            .replace('\n', "\\A ");
        format!("'{escaped}'")
    } else {
        s.to_string()
    }
}

/// Round to at most 4 decimal places, half away from zero.
pub fn round_decimals(n: f64) -> f64 {
    // Beyond this magnitude f64 has no fractional digits left to round.
    if !n.is_finite() || n.abs() >= 1e15 {
        return n;
    }
    let rounded = (n * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Format a number in plain decimal notation, rounded to 4 places.
pub fn format_number(n: f64) -> String {
    format!("{}", round_decimals(n))
}
