//! Options-aware formatting of argument lists.
//!
//! This module provides:
//!
//! - [`format_with_options`]: printf-style formatting of a whole argument list
//! - [`inspect`]: rendering of a single value
//! - [`FormatOptions`]: the options both accept, loadable from JSON or YAML
//!
//! When the first argument is text it is treated as a format string. The
//! supported directives are:
//!
//! | Directive | Output |
//! |-----------|--------|
//! | `%s` | text verbatim, other values shallowly inspected |
//! | `%d`, `%i`, `%f` | number, leading integer, leading float (never colored) |
//! | `%j` | JSON |
//! | `%o`, `%O` | inspected value |
//! | `%c` | nothing; consumes a CSS argument |
//! | `%%` | a literal `%` |
//!
//! Arguments left over after substitution are appended, separated by spaces.

mod error;
mod inspect;
mod number;
mod options;

pub use error::ConfigError;
pub use inspect::inspect;
pub use options::{FormatOptions, DEFAULT_BREAK_LENGTH, DEFAULT_DEPTH, DEFAULT_FORMAT_OPTIONS};

use std::slice;

use inspect::Inspector;
use number::{js_number, parse_float, parse_int, to_number};

use crate::value::Value;

/// Formats an argument list into a single string.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stylog::{format_with_options, FormatOptions, Value};
///
/// let options = FormatOptions::new();
/// let args = [Value::from("%s:%s"), Value::from("foo"), Value::from("bar"), Value::from("baz")];
/// assert_eq!(format_with_options(&options, &args), "foo:bar baz");
///
/// let args = [Value::from("See object %O"), Value::from(json!({"foo": 42}))];
/// assert_eq!(format_with_options(&options, &args), "See object { foo: 42 }");
/// ```
pub fn format_with_options(options: &FormatOptions, args: &[Value]) -> String {
    let inspector = Inspector::new(options);
    let mut pieces = Vec::with_capacity(args.len());
    let mut rest = args.iter();

    if let Some((Value::Text(template), tail)) = args.split_first() {
        if tail.is_empty() {
            return template.clone();
        }
        let mut remaining = tail.iter();
        pieces.push(substitute(template, &mut remaining, &inspector));
        rest = remaining;
    }

    for value in rest {
        match value {
            Value::Text(text) => pieces.push(text.clone()),
            other => pieces.push(inspector.value(other)),
        }
    }

    pieces.join(" ")
}

fn substitute(template: &str, args: &mut slice::Iter<'_, Value>, inspector: &Inspector<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        let Some(&directive) = chars.peek() else {
            out.push('%');
            continue;
        };
        match directive {
            '%' => {
                chars.next();
                out.push('%');
            }
            's' | 'd' | 'i' | 'f' | 'j' | 'o' | 'O' | 'c' => {
                chars.next();
                match args.next() {
                    Some(value) => out.push_str(&expand(directive, value, inspector)),
                    None => {
                        out.push('%');
                        out.push(directive);
                    }
                }
            }
            _ => out.push('%'),
        }
    }

    out
}

fn expand(directive: char, value: &Value, inspector: &Inspector<'_>) -> String {
    match directive {
        's' => match value {
            Value::Text(text) => text.clone(),
            Value::Data(serde_json::Value::String(text)) => text.clone(),
            Value::Data(data @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => {
                let shallow = FormatOptions::new().depth(0);
                inspect(&Value::Data(data.clone()), &shallow)
            }
            Value::Data(scalar) => scalar.to_string(),
            Value::Opaque(object) => format!("{:?}", object),
        },
        'd' => js_number(to_number(value)),
        'i' => js_number(parse_int(value)),
        'f' => js_number(parse_float(value)),
        'j' => match value {
            Value::Text(text) => serde_json::Value::String(text.clone()).to_string(),
            Value::Data(data) => data.to_string(),
            Value::Opaque(object) => format!("{:?}", object),
        },
        'o' | 'O' => inspector.value(value),
        _ => String::new(),
    }
}
