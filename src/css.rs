//! CSS declaration support for browser-like consoles.
//!
//! Declarations are collected as groups: each call to
//! [`Console::css`](crate::Console::css) produces one `"name: value; ..."`
//! string. On flush the groups are joined with `"; "` and printed as the
//! argument that pairs with the CSS placeholder.

use std::fmt;

/// Separator between declarations and between declaration groups.
pub const DECLARATION_SEPARATOR: &str = "; ";

/// Converts a camel or pascal cased property name to declaration case.
///
/// Uppercase letters become a hyphen followed by the lowercase letter, and
/// underscores and spaces become hyphens. A leading uppercase letter yields a
/// leading hyphen, which is how vendor prefixes are spelled.
///
/// # Example
///
/// ```rust
/// use stylog::css::to_declaration_case;
///
/// assert_eq!(to_declaration_case("fontFamily"), "font-family");
/// assert_eq!(to_declaration_case("WebkitTextStroke"), "-webkit-text-stroke");
/// assert_eq!(to_declaration_case("color"), "color");
/// ```
pub fn to_declaration_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_uppercase() {
            out.push('-');
            out.extend(c.to_lowercase());
        } else if c == '_' || c == ' ' {
            out.push('-');
        } else {
            out.push(c);
        }
    }
    out
}

/// Joins properties into a single declaration group, preserving order.
pub fn declaration_group<I, K, V>(properties: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: fmt::Display,
{
    properties
        .into_iter()
        .map(|(name, value)| format!("{}: {}", to_declaration_case(name.as_ref()), value))
        .collect::<Vec<_>>()
        .join(DECLARATION_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_case() {
        assert_eq!(to_declaration_case("fontSize"), "font-size");
        assert_eq!(to_declaration_case("font-size"), "font-size");
        assert_eq!(to_declaration_case("border_top"), "border-top");
        assert_eq!(to_declaration_case("MozAppearance"), "-moz-appearance");
        assert_eq!(to_declaration_case(""), "");
    }

    #[test]
    fn test_declaration_group() {
        let group = declaration_group([
            ("color", "red"),
            ("fontFamily", "system-ui"),
            ("fontSize", "4rem"),
        ]);
        assert_eq!(group, "color: red; font-family: system-ui; font-size: 4rem");
    }

    #[test]
    fn test_declaration_group_numeric_values() {
        let group = declaration_group(vec![("opacity".to_string(), 0.5), ("zIndex".to_string(), 3.0)]);
        assert_eq!(group, "opacity: 0.5; z-index: 3");
    }

    #[test]
    fn test_declaration_group_empty() {
        let group = declaration_group(Vec::<(&str, &str)>::new());
        assert_eq!(group, "");
    }
}
