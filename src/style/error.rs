//! Style resolution errors.

use super::table::StyleKind;

/// Error returned when a style cannot be resolved to a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// The string is not a `#RGB` or `#RRGGBB` hex color
    #[error("'{input}' is not a valid hex color")]
    InvalidHex { input: String },
    /// No color with this name exists
    #[error("unknown color '{name}'")]
    UnknownColor { name: String },
    /// No style with this name exists for the given kind
    #[error("unknown {kind} style '{name}'")]
    UnknownName { kind: StyleKind, name: String },
    /// The name is reserved and cannot be set directly
    #[error("style '{name}' is reserved")]
    Reserved { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_hex_error_display() {
        let err = StyleError::InvalidHex {
            input: "#zzz".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("#zzz"));
        assert!(msg.contains("hex"));
    }

    #[test]
    fn test_unknown_name_error_display() {
        let err = StyleError::UnknownName {
            kind: StyleKind::Background,
            name: "teal".to_string(),
        };
        assert_eq!(err.to_string(), "unknown background style 'teal'");
    }

    #[test]
    fn test_unknown_color_error_display() {
        let err = StyleError::UnknownColor {
            name: "teal".to_string(),
        };
        assert_eq!(err.to_string(), "unknown color 'teal'");
    }

    #[test]
    fn test_reserved_error_display() {
        let err = StyleError::Reserved {
            name: "reset".to_string(),
        };
        assert!(err.to_string().contains("reserved"));
    }
}
