//! Format options.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Default maximum width of a single-line container before it breaks.
pub const DEFAULT_BREAK_LENGTH: usize = 80;

/// Default nesting depth inspected before containers collapse.
pub const DEFAULT_DEPTH: usize = 2;

/// The options every [`Console`](crate::Console) returns to after a flush.
pub const DEFAULT_FORMAT_OPTIONS: FormatOptions = FormatOptions {
    colors: Some(true),
    depth: None,
    break_length: None,
    compact: None,
    sorted: None,
};

/// Options for [`format_with_options`](super::format_with_options).
///
/// Every field is optional; unset fields fall back to the formatter's
/// defaults. Options with no field set are [empty](Self::is_empty), and empty
/// options bypass the formatter entirely.
///
/// Options can be loaded from configuration files:
///
/// ```rust
/// use stylog::FormatOptions;
///
/// let options = FormatOptions::from_yaml("colors: false\nbreakLength: 40\n").unwrap();
/// assert_eq!(options, FormatOptions::new().colors(false).break_length(40));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    /// Style inspected values with ANSI colors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,
    /// How deep nested data is inspected before collapsing to `[Object]`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    /// Width at which containers break across lines.
    #[serde(skip_serializing_if = "Option::is_none", alias = "breakLength")]
    pub break_length: Option<usize>,
    /// `false` always breaks containers across lines.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compact: Option<bool>,
    /// Sort object keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted: Option<bool>,
}

impl FormatOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// The library default: color-aware formatting.
    pub fn default_options() -> Self {
        DEFAULT_FORMAT_OPTIONS
    }

    pub fn colors(mut self, colors: bool) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn break_length(mut self, break_length: usize) -> Self {
        self.break_length = Some(break_length);
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = Some(compact);
        self
    }

    pub fn sorted(mut self, sorted: bool) -> Self {
        self.sorted = Some(sorted);
        self
    }

    /// Whether no option is set.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Parses options from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] on malformed input or unknown keys.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Parses options from a YAML mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] on malformed input or unknown keys.
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub(crate) fn use_colors(&self) -> bool {
        self.colors.unwrap_or(false)
    }

    pub(crate) fn max_depth(&self) -> usize {
        self.depth.unwrap_or(DEFAULT_DEPTH)
    }

    pub(crate) fn max_line(&self) -> usize {
        self.break_length.unwrap_or(DEFAULT_BREAK_LENGTH)
    }

    pub(crate) fn always_break(&self) -> bool {
        self.compact == Some(false)
    }

    pub(crate) fn sort_keys(&self) -> bool {
        self.sorted.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_enable_colors() {
        let options = FormatOptions::default_options();
        assert_eq!(options.colors, Some(true));
        assert!(!options.is_empty());
    }

    #[test]
    fn test_new_options_are_empty() {
        assert!(FormatOptions::new().is_empty());
        assert!(!FormatOptions::new().sorted(false).is_empty());
    }

    #[test]
    fn test_from_json() {
        let options = FormatOptions::from_json(r#"{"colors": true, "breakLength": 2}"#).unwrap();
        assert_eq!(options, FormatOptions::new().colors(true).break_length(2));
    }

    #[test]
    fn test_from_json_snake_case() {
        let options = FormatOptions::from_json(r#"{"break_length": 120, "depth": 4}"#).unwrap();
        assert_eq!(options.break_length, Some(120));
        assert_eq!(options.depth, Some(4));
    }

    #[test]
    fn test_from_json_rejects_unknown_keys() {
        let err = FormatOptions::from_json(r#"{"colours": true}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_yaml_empty_mapping() {
        let options = FormatOptions::from_yaml("{}").unwrap();
        assert!(options.is_empty());
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = FormatOptions::from_yaml("colors: [").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let json = serde_json::to_string(&FormatOptions::new().depth(1)).unwrap();
        assert_eq!(json, r#"{"depth":1}"#);
    }
}
