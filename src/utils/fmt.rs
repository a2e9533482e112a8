//! Compact numeric formatting for markup output.

/// Format a float rounded to 3 decimal places, trimming trailing zeros.
///
/// Keeps SVG attributes compact while staying byte-stable across renders:
/// `38.4` stays `"38.4"`, `12.0` becomes `"12"`, `0.0484999...` becomes
/// `"0.048"`.
pub fn fmt3(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let mut s = format!("{rounded:.3}");
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_lose_the_point() {
        assert_eq!(fmt3(12.0), "12");
        assert_eq!(fmt3(0.0), "0");
        assert_eq!(fmt3(-3.0), "-3");
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(fmt3(38.4), "38.4");
        assert_eq!(fmt3(1.250), "1.25");
        assert_eq!(fmt3(0.100), "0.1");
    }

    #[test]
    fn test_rounds_to_three_places() {
        assert_eq!(fmt3(1.23456), "1.235");
        assert_eq!(fmt3(0.0484999), "0.048");
        assert_eq!(fmt3(47.999999), "48");
    }

    #[test]
    fn test_negative_zero_normalized() {
        assert_eq!(fmt3(-0.0001), "0");
    }
}
