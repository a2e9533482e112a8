//! Hex color parsing and foreground contrast.

use regex::Regex;
use std::sync::LazyLock;

/// Accepted hex color syntax for configured values (#rgb through #rrggbbaa).
static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9A-Fa-f]{3,8}$").expect("valid color regex"));

/// Check a string against the hex color pattern.
#[inline]
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value.trim())
}

/// Parse a 3- or 6-digit hex color into RGB components.
///
/// Longer forms (#rgba, #rrggbbaa) pass the config pattern but carry an
/// alpha channel the contrast math cannot use, so they parse to `None`.
pub fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.trim().strip_prefix('#').unwrap_or_else(|| value.trim());

    match digits.len() {
        3 => {
            let mut bytes = [0u8; 3];
            for (i, c) in digits.chars().enumerate() {
                let d = c.to_digit(16)? as u8;
                bytes[i] = d * 16 + d;
            }
            Some((bytes[0], bytes[1], bytes[2]))
        }
        6 => {
            let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
            let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
            let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

/// Normalize a parseable hex color to lowercase `#rrggbb` form.
pub fn normalize_hex(value: &str) -> Option<String> {
    let (r, g, b) = parse_hex(value)?;
    Some(format!("#{r:02x}{g:02x}{b:02x}"))
}

/// YIQ luma threshold below which the background counts as dark.
const LUMA_THRESHOLD: f64 = 140.0;

/// Pick a readable foreground for the given background color.
///
/// Standard YIQ weighting: `(299R + 587G + 114B) / 1000`. Dark backgrounds
/// get white, light backgrounds get black. Unparseable input falls back to
/// black rather than failing.
pub fn contrast_foreground(background: &str) -> &'static str {
    let Some((r, g, b)) = parse_hex(background) else {
        return "#000000";
    };

    let luma = (299.0 * f64::from(r) + 587.0 * f64::from(g) + 114.0 * f64::from(b)) / 1000.0;
    if luma >= LUMA_THRESHOLD { "#000000" } else { "#ffffff" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hex_color() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#FF5555"));
        assert!(is_hex_color("#ff5555aa"));
        assert!(!is_hex_color("ff5555"));
        assert!(!is_hex_color("#ff"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_parse_hex_six_digit() {
        assert_eq!(parse_hex("#ff5555"), Some((0xff, 0x55, 0x55)));
        assert_eq!(parse_hex("#000000"), Some((0, 0, 0)));
        assert_eq!(parse_hex("2a9d8f"), Some((0x2a, 0x9d, 0x8f)));
    }

    #[test]
    fn test_parse_hex_three_digit() {
        assert_eq!(parse_hex("#abc"), Some((0xaa, 0xbb, 0xcc)));
        assert_eq!(parse_hex("#fff"), Some((0xff, 0xff, 0xff)));
    }

    #[test]
    fn test_parse_hex_rejects_alpha_forms() {
        assert_eq!(parse_hex("#ff5555aa"), None);
        assert_eq!(parse_hex("#abcd"), None);
        assert_eq!(parse_hex("not-a-color"), None);
    }

    #[test]
    fn test_normalize_hex() {
        assert_eq!(normalize_hex("#ABC").as_deref(), Some("#aabbcc"));
        assert_eq!(normalize_hex("#FF5555").as_deref(), Some("#ff5555"));
        assert_eq!(normalize_hex("bogus"), None);
    }

    #[test]
    fn test_contrast_extremes() {
        assert_eq!(contrast_foreground("#000000"), "#ffffff");
        assert_eq!(contrast_foreground("#ffffff"), "#000000");
    }

    #[test]
    fn test_contrast_threshold() {
        // Luma 140 exactly is treated as light.
        assert_eq!(contrast_foreground("#8c8c8c"), "#000000"); // luma 140
        assert_eq!(contrast_foreground("#8b8b8b"), "#ffffff"); // luma 139
    }

    #[test]
    fn test_contrast_invalid_defaults_black() {
        assert_eq!(contrast_foreground("#zzzzzz"), "#000000");
        assert_eq!(contrast_foreground(""), "#000000");
    }
}
