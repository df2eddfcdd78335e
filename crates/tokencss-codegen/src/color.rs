//! Color parsing for the `rgb` color output mode.
//!
//! Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`) and functional
//! `rgb()` / `rgba()` notation. Channels are normalized to `0.0..=1.0`.

use crate::value::round_decimals;

/// A color with every channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Color parse error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid color `{0}`")]
pub struct ColorError(pub String);

impl Rgba {
    /// Format as `rgb(r, g, b)`, or `rgba(r, g, b, a)` when translucent.
    pub fn to_css(&self) -> String {
        let r = channel_255(self.r);
        let g = channel_255(self.g);
        let b = channel_255(self.b);
        if self.a < 1.0 {
            format!("rgba({r}, {g}, {b}, {})", round_decimals(self.a))
        } else {
            format!("rgb({r}, {g}, {b})")
        }
    }
}

fn channel_255(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Parse a serialized color.
pub fn parse_color(input: &str) -> Result<Rgba, ColorError> {
    let s = input.trim();
    let invalid = || ColorError(input.to_string());

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(invalid);
    }

    let lower = s.to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(invalid)?;
    parse_rgb_args(args).ok_or_else(invalid)
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits: Vec<u8> = match hex.len() {
        // Short forms repeat each digit: `f` → `ff`.
        3 | 4 => hex
            .chars()
            .map(|c| u8::from_str_radix(&format!("{c}{c}"), 16).ok())
            .collect::<Option<Vec<u8>>>()?,
        6 | 8 => (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
            .collect::<Option<Vec<u8>>>()?,
        _ => return None,
    };
    let unit = |v: u8| f64::from(v) / 255.0;
    Some(Rgba {
        r: unit(digits[0]),
        g: unit(digits[1]),
        b: unit(digits[2]),
        a: digits.get(3).copied().map(unit).unwrap_or(1.0),
    })
}

fn parse_rgb_args(args: &str) -> Option<Rgba> {
    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let mut channels = [0.0; 3];
    for (slot, part) in channels.iter_mut().zip(&parts) {
        let v = match part.strip_suffix('%') {
            Some(pct) => pct.parse::<f64>().ok()? / 100.0,
            None => part.parse::<f64>().ok()? / 255.0,
        };
        *slot = v.clamp(0.0, 1.0);
    }

    let a = match parts.get(3) {
        Some(part) => match part.strip_suffix('%') {
            Some(pct) => pct.parse::<f64>().ok()? / 100.0,
            None => part.parse::<f64>().ok()?,
        },
        None => 1.0,
    };

    Some(Rgba {
        r: channels[0],
        g: channels[1],
        b: channels[2],
        a: a.clamp(0.0, 1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: f64, g: f64, b: f64, a: f64) -> Rgba {
        Rgba { r, g, b, a }
    }

    #[test]
    fn test_hex_long() {
        assert_eq!(parse_color("#ff0000"), Ok(rgba(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_color("#FFFFFF"), Ok(rgba(1.0, 1.0, 1.0, 1.0)));
    }

    #[test]
    fn test_hex_short() {
        assert_eq!(parse_color("#f00"), Ok(rgba(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_color("#0f0f"), Ok(rgba(0.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_hex_alpha() {
        let c = parse_color("#00000080").unwrap();
        assert_eq!(c.to_css(), "rgba(0, 0, 0, 0.502)");
    }

    #[test]
    fn test_hex_invalid() {
        assert!(parse_color("#ff00").is_ok());
        assert!(parse_color("#ff000").is_err());
        assert!(parse_color("#gg0000").is_err());
        assert!(parse_color("#").is_err());
    }

    #[test]
    fn test_rgb_function() {
        assert_eq!(parse_color("rgb(255, 0, 0)"), Ok(rgba(1.0, 0.0, 0.0, 1.0)));
        assert_eq!(parse_color(" RGB(0 255 0) "), Ok(rgba(0.0, 1.0, 0.0, 1.0)));
    }

    #[test]
    fn test_rgba_function() {
        assert_eq!(
            parse_color("rgba(0, 0, 255, 0.25)"),
            Ok(rgba(0.0, 0.0, 1.0, 0.25))
        );
        assert_eq!(
            parse_color("rgb(0 0 255 / 50%)"),
            Ok(rgba(0.0, 0.0, 1.0, 0.5))
        );
    }

    #[test]
    fn test_function_invalid() {
        assert!(parse_color("rgb(1, 2)").is_err());
        assert!(parse_color("rgb(a, b, c)").is_err());
        assert!(parse_color("hsl(0, 100%, 50%)").is_err());
        assert!(parse_color("red").is_err());
    }

    #[test]
    fn test_to_css() {
        assert_eq!(rgba(1.0, 0.0, 0.0, 1.0).to_css(), "rgb(255, 0, 0)");
        assert_eq!(rgba(0.0, 0.5, 1.0, 0.5).to_css(), "rgba(0, 128, 255, 0.5)");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            parse_color("nope").unwrap_err().to_string(),
            "invalid color `nope`"
        );
    }
}
