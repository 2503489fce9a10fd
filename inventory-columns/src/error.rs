//! Error types for custom column operations

use thiserror::Error;

use crate::surface::form::FieldViolation;

/// Result type for custom column operations
pub type Result<T> = std::result::Result<T, ColumnsError>;

/// Errors that can occur while reading, authoring, or projecting custom columns
#[derive(Debug, Error)]
pub enum ColumnsError {
    /// The metadata store could not be read for a table
    #[error("custom column lookup failed for table '{table}': {source}")]
    MetadataLookup {
        table: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A definition was rejected at authoring time
    #[error("malformed custom column '{name}': {reason}")]
    MalformedDefinition { name: String, reason: String },

    /// Another definition on the same table already uses this name
    #[error("duplicate custom column '{name}' on table '{table}'")]
    DuplicateColumnName { table: String, name: String },

    /// No definition with this id on the table
    #[error("custom column not found on table '{table}': {id}")]
    ColumnNotFound { table: String, id: String },

    /// A form submission failed validation
    #[error("form submission rejected with {} violation(s)", .violations.len())]
    Validation { violations: Vec<FieldViolation> },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ColumnsError {
    /// Wrap a store failure for the given table
    pub fn lookup(
        table: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::MetadataLookup {
            table: table.into(),
            source: source.into(),
        }
    }

    /// Create a malformed definition error
    pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedDefinition {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Violations carried by a validation error, if this is one
    pub fn violations(&self) -> &[FieldViolation] {
        match self {
            Self::Validation { violations } => violations,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColumnsError::DuplicateColumnName {
            table: "part_records".into(),
            name: "warranty_months".into(),
        };
        assert_eq!(
            err.to_string(),
            "duplicate custom column 'warranty_months' on table 'part_records'"
        );
    }

    #[test]
    fn test_lookup_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = ColumnsError::lookup("part_records", io);
        assert!(err.to_string().contains("part_records"));
        assert!(err.to_string().contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_validation_error_counts_violations() {
        let err = ColumnsError::Validation {
            violations: vec![FieldViolation::Required {
                field: "warranty_months".into(),
            }],
        };
        assert_eq!(err.to_string(), "form submission rejected with 1 violation(s)");
        assert_eq!(err.violations().len(), 1);
    }
}
