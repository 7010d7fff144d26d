//! Value inspection.
//!
//! Renders payload values the way a developer console shows them: strings
//! quoted, objects as `{ key: value }`, arrays as `[ a, b ]`, with optional
//! ANSI colors for scalars.

use console::{measure_text_width, Style};
use serde_json::Value as Json;

use super::options::FormatOptions;
use crate::value::Value;

const INDENT: &str = "  ";

/// Inspects a single value.
///
/// # Example
///
/// ```rust
/// use serde_json::json;
/// use stylog::format::inspect;
/// use stylog::{FormatOptions, Value};
///
/// let plain = FormatOptions::new();
/// assert_eq!(inspect(&Value::from(json!({"foo": 42})), &plain), "{ foo: 42 }");
/// assert_eq!(inspect(&Value::from("hi"), &plain), "'hi'");
/// ```
pub fn inspect(value: &Value, options: &FormatOptions) -> String {
    Inspector::new(options).value(value)
}

pub(crate) struct Inspector<'a> {
    options: &'a FormatOptions,
}

impl<'a> Inspector<'a> {
    pub(crate) fn new(options: &'a FormatOptions) -> Self {
        Self { options }
    }

    pub(crate) fn value(&self, value: &Value) -> String {
        match value {
            Value::Text(text) => self.string(text),
            Value::Data(data) => self.data(data, 0),
            Value::Opaque(object) => format!("{:?}", object),
        }
    }

    pub(crate) fn number(&self, text: &str) -> String {
        self.paint(Style::new().yellow(), text)
    }

    fn data(&self, data: &Json, level: usize) -> String {
        match data {
            Json::Null => self.paint(Style::new().bold(), "null"),
            Json::Bool(b) => self.paint(Style::new().yellow(), &b.to_string()),
            Json::Number(n) => self.number(&n.to_string()),
            Json::String(s) => self.string(s),
            Json::Array(items) => {
                if items.is_empty() {
                    return "[]".to_string();
                }
                if level > self.options.max_depth() {
                    return self.paint(Style::new().cyan(), "[Array]");
                }
                let parts = items
                    .iter()
                    .map(|item| self.data(item, level + 1))
                    .collect();
                self.container("[", "]", parts, level)
            }
            Json::Object(map) => {
                if map.is_empty() {
                    return "{}".to_string();
                }
                if level > self.options.max_depth() {
                    return self.paint(Style::new().cyan(), "[Object]");
                }
                let mut entries: Vec<_> = map.iter().collect();
                if self.options.sort_keys() {
                    entries.sort_by(|a, b| a.0.cmp(b.0));
                }
                let parts = entries
                    .into_iter()
                    .map(|(key, value)| format!("{}: {}", object_key(key), self.data(value, level + 1)))
                    .collect();
                self.container("{", "}", parts, level)
            }
        }
    }

    fn string(&self, text: &str) -> String {
        self.paint(Style::new().green(), &quote(text))
    }

    fn container(&self, open: &str, close: &str, parts: Vec<String>, level: usize) -> String {
        let indent = INDENT.repeat(level);
        let single = format!("{} {} {}", open, parts.join(", "), close);
        let fits = indent.len() + measure_text_width(&single) <= self.options.max_line();

        if fits && !self.options.always_break() && !parts.iter().any(|p| p.contains('\n')) {
            return single;
        }

        let inner = INDENT.repeat(level + 1);
        let body = parts
            .iter()
            .map(|part| format!("{}{}", inner, part))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{}\n{}\n{}{}", open, body, indent, close)
    }

    fn paint(&self, style: Style, text: &str) -> String {
        if self.options.use_colors() {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Quotes a string with `'`, switching to `"` or `` ` `` when that avoids
/// escaping. The chosen quote is escaped only if all three occur.
fn quote(text: &str) -> String {
    let quote = if !text.contains('\'') {
        '\''
    } else if !text.contains('"') {
        '"'
    } else if !text.contains('`') && !text.contains("${") {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push(quote);
    out
}

fn object_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        key.to_string()
    } else {
        quote(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn plain(value: Json) -> String {
        inspect(&Value::Data(value), &FormatOptions::new())
    }

    fn plain_key(key: &str) -> String {
        let mut map = serde_json::Map::new();
        map.insert(key.to_string(), json!(1));
        plain(Json::Object(map))
    }

    #[test]
    fn test_inspect_scalars() {
        assert_eq!(plain(json!(42)), "42");
        assert_eq!(plain(json!(4.5)), "4.5");
        assert_eq!(plain(json!(true)), "true");
        assert_eq!(plain(json!(null)), "null");
    }

    #[test]
    fn test_inspect_containers() {
        assert_eq!(plain(json!([1, 2, 3])), "[ 1, 2, 3 ]");
        assert_eq!(plain(json!({"foo": 42})), "{ foo: 42 }");
        assert_eq!(plain(json!({"a": [1, {"b": "x"}]})), "{ a: [ 1, { b: 'x' } ] }");
        assert_eq!(plain(json!([])), "[]");
        assert_eq!(plain(json!({})), "{}");
    }

    #[test]
    fn test_inspect_quotes_non_identifier_keys() {
        assert_eq!(plain(json!({"font-size": 1})), "{ 'font-size': 1 }");
    }

    #[test]
    fn test_inspect_escapes_strings() {
        let text = inspect(&Value::from("a\\b\n"), &FormatOptions::new());
        assert_eq!(text, "'a\\\\b\\n'");
    }

    #[test]
    fn test_inspect_picks_quote_that_avoids_escaping() {
        let options = FormatOptions::new();
        assert_eq!(inspect(&Value::from("it's"), &options), "\"it's\"");
        assert_eq!(inspect(&Value::from("it's \"ok\""), &options), "`it's \"ok\"`");
        assert_eq!(inspect(&Value::from("'\"`"), &options), "'\\'\"`'");
        assert_eq!(plain_key("it's"), "{ \"it's\": 1 }");
    }

    #[test]
    fn test_inspect_depth_limit() {
        let value = json!({"a": {"b": {"c": {"d": 1}}}});
        assert_eq!(plain(value.clone()), "{ a: { b: { c: [Object] } } }");

        let shallow = inspect(&Value::Data(value), &FormatOptions::new().depth(0));
        assert_eq!(shallow, "{ a: [Object] }");
    }

    #[test]
    fn test_inspect_breaks_long_containers() {
        let options = FormatOptions::new().break_length(2);
        let text = inspect(&Value::Data(json!({"foo": 42})), &options);
        assert_eq!(text, "{\n  foo: 42\n}");
    }

    #[test]
    fn test_inspect_breaks_nested_with_indentation() {
        let options = FormatOptions::new().compact(false);
        let text = inspect(&Value::Data(json!({"a": [1, 2]})), &options);
        assert_eq!(text, "{\n  a: [\n    1,\n    2\n  ]\n}");
    }

    #[test]
    fn test_inspect_sorted_keys() {
        let options = FormatOptions::new().sorted(true);
        let text = inspect(&Value::Data(json!({"b": 1, "a": 2})), &options);
        assert_eq!(text, "{ a: 2, b: 1 }");
    }

    #[test]
    fn test_inspect_colors() {
        let options = FormatOptions::new().colors(true);
        let text = inspect(&Value::Data(json!({"foo": 42})), &options);
        assert!(text.contains("\x1b[33m42"));
        assert!(text.starts_with("{ foo: "));
    }

    #[test]
    fn test_inspect_opaque_uses_debug() {
        let text = inspect(&Value::opaque(vec![1, 2]), &FormatOptions::new());
        assert_eq!(text, "[1, 2]");
    }
}
