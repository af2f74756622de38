//! Schema loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a frontmatter schema.
///
/// All of them are fatal: no document is touched once one occurs.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Schema not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Schema parsing error in `{0}`")]
    Parse(PathBuf, #[source] serde_yaml::Error),

    #[error("Schema missing 'required_fields' key: {0}")]
    MissingKey(PathBuf),

    #[error("Schema field '{field}' is invalid: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Schema field '{field}' has invalid pattern `{pattern}`")]
    InvalidPattern {
        field: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_display() {
        let err = SchemaError::NotFound(PathBuf::from("schema.yaml"));
        assert_eq!(err.to_string(), "Schema not found: schema.yaml");

        let err = SchemaError::MissingKey(PathBuf::from("schema.yaml"));
        assert!(err.to_string().contains("required_fields"));

        let err = SchemaError::InvalidField {
            field: "tags".into(),
            reason: "min_items must be a non-negative integer".into(),
        };
        let display = err.to_string();
        assert!(display.contains("tags"));
        assert!(display.contains("min_items"));
    }
}
