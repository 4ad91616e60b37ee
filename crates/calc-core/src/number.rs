//! Conversion between display text and numbers
//!
//! The display is the only place numbers become visible, and whatever
//! [`format_number`] produces is what later digit presses append to. Both
//! directions therefore follow the ECMAScript rules exactly:
//!
//! - [`format_number`] is Number-to-String: shortest round-trip digits,
//!   plain notation for decimal exponents in `-6..=21`, exponent notation
//!   (`1e+21`, `1.5e-7`) outside it, and `NaN` / `Infinity` / `-Infinity`
//!   for non-finite values.
//! - [`parse_number`] is `parseFloat`: the longest leading decimal literal
//!   wins and anything unparseable is NaN, so in-progress entries such as
//!   `"3."` read as `3`.
//!
//! # Example
//!
//! ```
//! use calc_core::number::{format_number, parse_number};
//!
//! assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
//! assert_eq!(format_number(1e21), "1e+21");
//! assert_eq!(parse_number("3."), 3.0);
//! assert!(parse_number("NaN").is_nan());
//! ```

/// Largest decimal exponent still printed without exponent notation
const MAX_PLAIN_EXPONENT: i32 = 21;

/// Smallest decimal exponent still printed without exponent notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Format a number the way the display shows it
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    // Covers -0 as well
    if value == 0.0 {
        return "0".to_string();
    }

    let Some((digits, exponent)) = decompose(value.abs()) else {
        return value.to_string();
    };

    let body = layout_digits(&digits, exponent);
    if value.is_sign_negative() {
        format!("-{}", body)
    } else {
        body
    }
}

/// Split a positive finite number into its shortest significant digits and
/// the decimal exponent `n` such that value = 0.d1d2..dk * 10^n.
fn decompose(value: f64) -> Option<(String, i32)> {
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = scientific.split_once('e')?;
    let exponent: i32 = exponent.parse().ok()?;
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    Some((digits, exponent + 1))
}

fn layout_digits(digits: &str, n: i32) -> String {
    let k = digits.len() as i32;

    if k <= n && n <= MAX_PLAIN_EXPONENT {
        let mut out = digits.to_string();
        out.extend(std::iter::repeat('0').take((n - k) as usize));
        return out;
    }

    if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        return format!("{}.{}", int_part, frac_part);
    }

    if MIN_PLAIN_EXPONENT < n && n <= 0 {
        let zeros = "0".repeat((-n) as usize);
        return format!("0.{}{}", zeros, digits);
    }

    let e = n - 1;
    let sign = if e >= 0 { '+' } else { '-' };
    let (lead, rest) = digits.split_at(1);
    if rest.is_empty() {
        format!("{}e{}{}", lead, sign, e.abs())
    } else {
        format!("{}.{}e{}{}", lead, rest, sign, e.abs())
    }
}

/// Parse display text into a number
///
/// Leading whitespace is skipped and the longest prefix forming a decimal
/// literal is used; trailing garbage is ignored. Text with no numeric
/// prefix parses as NaN.
pub fn parse_number(text: &str) -> f64 {
    let text = text.trim_start();
    numeric_prefix(text)
        .and_then(|prefix| prefix.parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Find the longest prefix of `text` that is a decimal literal:
/// `[+-]? (Infinity | digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i = 1;
    }

    if text[i..].starts_with("Infinity") {
        return Some(&text[..i + "Infinity".len()]);
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut mantissa_digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // A lone "." is not a number, but "5." and ".5" are
        if mantissa_digits + (j - frac_start) > 0 {
            mantissa_digits += j - frac_start;
            i = j;
        }
    }

    if mantissa_digits == 0 {
        return None;
    }

    if i < len && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < len && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    Some(&text[..i])
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Formatting Tests
    // ==========================================================================

    #[test]
    fn test_format_integers() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(8.0), "8");
        assert_eq!(format_number(20.0), "20");
        assert_eq!(format_number(-42.0), "-42");
        assert_eq!(format_number(1_000_000.0), "1000000");
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_fractions() {
        assert_eq!(format_number(0.5), "0.5");
        assert_eq!(format_number(123.456), "123.456");
        assert_eq!(format_number(-0.25), "-0.25");
        assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
        assert_eq!(format_number(1.0 / 3.0), "0.3333333333333333");
    }

    #[test]
    fn test_format_small_numbers() {
        assert_eq!(format_number(0.000001), "0.000001");
        assert_eq!(format_number(0.0000015), "0.0000015");
        assert_eq!(format_number(1e-7), "1e-7");
        assert_eq!(format_number(1.5e-7), "1.5e-7");
        assert_eq!(format_number(-2.5e-10), "-2.5e-10");
    }

    #[test]
    fn test_format_large_numbers() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(123e18), "123000000000000000000");
        assert_eq!(format_number(1e21), "1e+21");
        assert_eq!(format_number(1.5e300), "1.5e+300");
        assert_eq!(format_number(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
    }

    // ==========================================================================
    // Parsing Tests
    // ==========================================================================

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_number("0"), 0.0);
        assert_eq!(parse_number("42"), 42.0);
        assert_eq!(parse_number("-7"), -7.0);
        assert_eq!(parse_number("0.5"), 0.5);
        assert_eq!(parse_number("  12"), 12.0);
    }

    #[test]
    fn test_parse_entry_in_progress() {
        assert_eq!(parse_number("3."), 3.0);
        assert_eq!(parse_number("0."), 0.0);
        assert_eq!(parse_number(".5"), 0.5);
    }

    #[test]
    fn test_parse_exponent_forms() {
        assert_eq!(parse_number("1e+21"), 1e21);
        assert_eq!(parse_number("1e-7"), 1e-7);
        assert_eq!(parse_number("1.5e-75"), 1.5e-75);
        // Dangling exponent marker is ignored
        assert_eq!(parse_number("2e"), 2.0);
        assert_eq!(parse_number("2e+"), 2.0);
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert_eq!(parse_number("1.5.2"), 1.5);
        assert_eq!(parse_number("12abc"), 12.0);
    }

    #[test]
    fn test_parse_non_finite() {
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
        assert_eq!(parse_number("-Infinity5"), f64::NEG_INFINITY);
        assert!(parse_number("NaN").is_nan());
        assert!(parse_number("NaN5").is_nan());
    }

    #[test]
    fn test_parse_rejects_non_numbers() {
        assert!(parse_number("").is_nan());
        assert!(parse_number(".").is_nan());
        assert!(parse_number("-").is_nan());
        assert!(parse_number("inf").is_nan());
    }

    #[test]
    fn test_format_then_parse_is_exact() {
        for value in [0.1, 2.0 / 3.0, 1e-7, 9.87654321e22, -5e-324, 123456789.125] {
            assert_eq!(parse_number(&format_number(value)), value);
        }
    }
}
