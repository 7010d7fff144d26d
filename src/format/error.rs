//! Configuration errors.

/// Error returned when format options cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid JSON format options: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML format options: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ConfigError::from(source);
        assert!(err.to_string().starts_with("invalid JSON format options"));
    }

    #[test]
    fn test_yaml_error_display() {
        let source = serde_yaml::from_str::<serde_yaml::Value>("a: [").unwrap_err();
        let err = ConfigError::from(source);
        assert!(err.to_string().starts_with("invalid YAML format options"));
    }
}
