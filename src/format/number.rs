//! Numeric coercions used by `%d`, `%i` and `%f`.
//!
//! These follow the JavaScript conversions a developer console applies:
//! `Number(x)` for `%d`, `parseInt(x)` for `%i` and `parseFloat(x)` for `%f`.

use std::borrow::Cow;

use serde_json::Value as Json;

use crate::value::Value;

/// Strict conversion of the whole value, like `Number(x)`.
pub(crate) fn to_number(value: &Value) -> f64 {
    match value {
        Value::Text(text) | Value::Data(Json::String(text)) => number_from_str(text),
        Value::Data(Json::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Value::Data(Json::Bool(b)) => f64::from(u8::from(*b)),
        Value::Data(Json::Null) => 0.0,
        _ => f64::NAN,
    }
}

/// Leading integer of the value's text form, like `parseInt(x)`.
pub(crate) fn parse_int(value: &Value) -> f64 {
    let Some(text) = text_form(value) else {
        return f64::NAN;
    };
    let (negative, rest) = split_sign(text.trim_start());
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut parsed = None;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        parsed = Some(parsed.unwrap_or(0.0) * f64::from(radix) + f64::from(digit));
    }

    match parsed {
        Some(n) if negative => -n,
        Some(n) => n,
        None => f64::NAN,
    }
}

/// Leading decimal literal of the value's text form, like `parseFloat(x)`.
pub(crate) fn parse_float(value: &Value) -> f64 {
    let Some(text) = text_form(value) else {
        return f64::NAN;
    };
    let text = text.trim_start();
    let (negative, rest) = split_sign(text);
    if rest.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let sign_len = text.len() - rest.len();
    let literal = decimal_prefix(rest);
    if literal == 0 {
        return f64::NAN;
    }
    text[..sign_len + literal].parse().unwrap_or(f64::NAN)
}

/// Renders a number the way a JavaScript console prints it.
pub(crate) fn js_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}

fn number_from_str(text: &str) -> f64 {
    let text = text.trim();
    match text {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits.chars().try_fold(0.0, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN);
    }

    // Rust also accepts "inf" and "nan", which are not numeric literals here.
    if text.chars().all(|c| c.is_ascii_digit() || "+-.eE".contains(c)) {
        text.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

fn text_form(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Text(text) | Value::Data(Json::String(text)) => Some(Cow::Borrowed(text.as_str())),
        Value::Data(Json::Number(n)) => n.as_f64().map(|n| Cow::Owned(js_number(n))),
        Value::Data(Json::Bool(b)) => Some(Cow::Owned(b.to_string())),
        Value::Data(Json::Null) => Some(Cow::Borrowed("null")),
        _ => None,
    }
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else {
        (false, text.strip_prefix('+').unwrap_or(text))
    }
}

/// Byte length of the longest `digits[.digits][e[+-]digits]` prefix, or 0.
fn decimal_prefix(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int = digits_from(0);
    let mut end = int;
    let mut frac = 0;
    if bytes.get(end) == Some(&b'.') {
        frac = digits_from(end + 1);
        end += 1 + frac;
    }
    if int + frac == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn text(s: &str) -> Value {
        Value::from(s)
    }

    #[test]
    fn test_to_number_blank_text_is_zero() {
        assert_eq!(to_number(&text("")), 0.0);
        assert_eq!(to_number(&text("  ")), 0.0);
    }

    #[test]
    fn test_to_number_is_strict() {
        assert_eq!(to_number(&text(" 12.5 ")), 12.5);
        assert_eq!(to_number(&text("0x1f")), 31.0);
        assert_eq!(to_number(&text("-Infinity")), f64::NEG_INFINITY);
        assert!(to_number(&text("42px")).is_nan());
        assert!(to_number(&text("inf")).is_nan());
        assert!(to_number(&text("nan")).is_nan());
        assert!(to_number(&Value::from(json!([1]))).is_nan());
    }

    #[test]
    fn test_parse_int_takes_leading_digits() {
        assert_eq!(parse_int(&text("42px")), 42.0);
        assert_eq!(parse_int(&text("  -7.9")), -7.0);
        assert_eq!(parse_int(&text("0xff")), 255.0);
        assert_eq!(parse_int(&Value::from(42.9)), 42.0);
        assert!(parse_int(&text("px")).is_nan());
        assert!(parse_int(&text("")).is_nan());
        assert!(parse_int(&Value::from(true)).is_nan());
    }

    #[test]
    fn test_parse_float_takes_leading_literal() {
        assert_eq!(parse_float(&text("1.5rem")), 1.5);
        assert_eq!(parse_float(&text(".5")), 0.5);
        assert_eq!(parse_float(&text("-2e3x")), -2000.0);
        assert_eq!(parse_float(&text("3e")), 3.0);
        assert_eq!(parse_float(&text("Infinityx")), f64::INFINITY);
        assert!(parse_float(&text(".")).is_nan());
        assert!(parse_float(&Value::opaque("handle")).is_nan());
    }

    #[test]
    fn test_js_number() {
        assert_eq!(js_number(f64::NAN), "NaN");
        assert_eq!(js_number(-f64::INFINITY), "-Infinity");
        assert_eq!(js_number(10.0), "10");
        assert_eq!(js_number(0.25), "0.25");
    }
}
