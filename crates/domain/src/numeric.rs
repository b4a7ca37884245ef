//! Numeric coercion of query-string and path text.
//!
//! Clients of this API have always been lenient JavaScript front-ends, and the
//! accepted inputs are defined in terms of two JavaScript conversions:
//!
//! - [`parse_leading_int`] behaves like `parseInt(text, 10)`: leading
//!   whitespace, an optional sign, then the longest run of decimal digits.
//!   Anything after the digits is ignored.
//! - [`coerce_number`] behaves like `Number(text)`: the whole trimmed text must
//!   be a numeric literal, the empty string is zero, and `0x`/`0o`/`0b`
//!   prefixes are honoured.
//!
//! Both return `None` where JavaScript would produce `NaN`.

/// From here on JavaScript prints numbers in exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

/// Whitespace as understood by JavaScript's `String.prototype.trim`.
///
/// Unicode `White_Space` minus NEL (U+0085), plus the byte-order mark.
fn is_js_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim JavaScript whitespace from both ends.
pub fn trim_js(text: &str) -> &str {
    text.trim_matches(is_js_whitespace)
}

/// Whether `text` is empty once JavaScript whitespace is removed.
pub fn is_blank(text: &str) -> bool {
    trim_js(text).is_empty()
}

/// Parse the leading base-10 integer of `text`.
///
/// ```
/// use paper_registry_domain::numeric::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  42abc"), Some(42.0));
/// assert_eq!(parse_leading_int("10.5"), Some(10.0));
/// assert_eq!(parse_leading_int("-7"), Some(-7.0));
/// assert_eq!(parse_leading_int("abc"), None);
/// assert_eq!(parse_leading_int("0x10"), Some(0.0));
/// ```
pub fn parse_leading_int(text: &str) -> Option<f64> {
    let rest = text.trim_start_matches(is_js_whitespace);

    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: f64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Convert the whole of `text` to a number.
///
/// ```
/// use paper_registry_domain::numeric::coerce_number;
///
/// assert_eq!(coerce_number(" 20 "), Some(20.0));
/// assert_eq!(coerce_number(""), Some(0.0));
/// assert_eq!(coerce_number("1e3"), Some(1000.0));
/// assert_eq!(coerce_number("0x1A"), Some(26.0));
/// assert_eq!(coerce_number("10abc"), None);
/// ```
pub fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = trim_js(text);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    if let Some(value) = parse_prefixed_radix(trimmed) {
        return value;
    }

    if !is_decimal_literal(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Handle `0x`, `0o` and `0b` literals. Returns `None` when `text` carries no
/// radix prefix, `Some(None)` when it does but the digits are invalid.
fn parse_prefixed_radix(text: &str) -> Option<Option<f64>> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }

    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(None);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(None),
        }
    }
    Some(Some(value))
}

/// `[+-]? (digits [. digits?] | . digits) ([eE] [+-]? digits)?`
fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    let int_digits = count_digits(&bytes[i..]);
    i += int_digits;

    let mut frac_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        frac_digits = count_digits(&bytes[i..]);
        i += frac_digits;
    }

    if int_digits == 0 && frac_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+') | Some(b'-')) {
            i += 1;
        }
        let exp_digits = count_digits(&bytes[i..]);
        if exp_digits == 0 {
            return false;
        }
        i += exp_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Decimal text JavaScript's `String(value)` gives for a whole number.
///
/// `None` for values it would print with a fraction or an exponent.
///
/// ```
/// use paper_registry_domain::numeric::js_integer_text;
///
/// assert_eq!(js_integer_text(2005.0).as_deref(), Some("2005"));
/// assert_eq!(js_integer_text(-0.0).as_deref(), Some("0"));
/// assert_eq!(js_integer_text(1.5), None);
/// ```
pub fn js_integer_text(value: f64) -> Option<String> {
    if !value.is_finite() || value.fract() != 0.0 || value.abs() >= EXPONENT_THRESHOLD {
        return None;
    }
    if value == 0.0 {
        return Some("0".to_string());
    }
    Some(format!("{}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_leading_int_prefixes() {
        assert_eq!(parse_leading_int("2020"), Some(2020.0));
        assert_eq!(parse_leading_int("2020abc"), Some(2020.0));
        assert_eq!(parse_leading_int("\t 15"), Some(15.0));
        assert_eq!(parse_leading_int("+5"), Some(5.0));
        assert_eq!(parse_leading_int("1e5"), Some(1.0));
    }

    #[test]
    fn test_parse_leading_int_rejects_non_numeric() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("   "), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(".5"), None);
        assert_eq!(parse_leading_int("- 5"), None);
    }

    #[test]
    fn test_parse_leading_int_negative_zero() {
        let value = parse_leading_int("-0").unwrap();
        assert_eq!(value, 0.0);
        assert!(value.is_sign_negative());
    }

    #[test]
    fn test_coerce_number_decimal_forms() {
        assert_eq!(coerce_number("10"), Some(10.0));
        assert_eq!(coerce_number("10.0"), Some(10.0));
        assert_eq!(coerce_number("10.5"), Some(10.5));
        assert_eq!(coerce_number(".5"), Some(0.5));
        assert_eq!(coerce_number("5."), Some(5.0));
        assert_eq!(coerce_number("-3"), Some(-3.0));
        assert_eq!(coerce_number("2E2"), Some(200.0));
        assert_eq!(coerce_number("010"), Some(10.0));
    }

    #[test]
    fn test_coerce_number_rejects_garbage() {
        assert_eq!(coerce_number("abc"), None);
        assert_eq!(coerce_number("."), None);
        assert_eq!(coerce_number("1e"), None);
        assert_eq!(coerce_number("e5"), None);
        assert_eq!(coerce_number("1 2"), None);
        assert_eq!(coerce_number("inf"), None);
        assert_eq!(coerce_number("NaN"), None);
        assert_eq!(coerce_number("0x"), None);
        assert_eq!(coerce_number("0xZZ"), None);
        assert_eq!(coerce_number("-0x10"), None);
    }

    #[test]
    fn test_coerce_number_special_values() {
        assert_eq!(coerce_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(coerce_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(coerce_number("0b101"), Some(5.0));
        assert_eq!(coerce_number("0o17"), Some(15.0));
        assert_eq!(coerce_number("   "), Some(0.0));
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(is_blank("\u{feff}"));
        assert!(!is_blank(" a "));
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert!(!is_blank("\u{85}"));
        assert_eq!(trim_js("\u{85} a \u{a0}"), "\u{85} a");
        assert_eq!(coerce_number("\u{85}5"), None);
        assert_eq!(parse_leading_int("\u{85}5"), None);
    }

    #[test]
    fn test_js_integer_text() {
        assert_eq!(js_integer_text(9_007_199_254_740_993.0).as_deref(), Some("9007199254740992"));
        assert_eq!(js_integer_text(1e20).as_deref(), Some("100000000000000000000"));
        assert_eq!(js_integer_text(1e21), None);
        assert_eq!(js_integer_text(f64::INFINITY), None);
    }
}
