//! Error types for script rendering.

/// Errors that can occur while rendering a Chinook script.
#[derive(Debug, thiserror::Error)]
pub enum DdlError {
    /// The requested dialect name does not map to any strategy.
    #[error(
        "Unknown dialect '{}' (supported: {})",
        .0,
        crate::registry::Dialect::NAMES.join(", ")
    )]
    UnknownDialect(String),

    /// A date literal in the dataset could not be parsed.
    #[error("Invalid date literal '{0}'")]
    InvalidDate(String),

    /// A decimal literal in the dataset is not a plain number.
    #[error("Invalid decimal literal '{0}'")]
    InvalidNumber(String),

    /// The schema violates one of its structural invariants.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// The dataset does not line up with the schema.
    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Multiple errors occurred.
    #[error("Multiple errors occurred:\n{}", .0.iter().map(|e| format!("  - {e}")).collect::<Vec<_>>().join("\n"))]
    Multiple(Vec<DdlError>),
}

impl DdlError {
    /// Collapses a list of errors into a single error, if any.
    pub(crate) fn collect(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }
}

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, DdlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_dialect_lists_supported_names() {
        let err = DdlError::UnknownDialect("Informix".into());
        let msg = err.to_string();
        assert!(msg.contains("'Informix'"));
        assert!(msg.contains("SqlServer"));
        assert!(msg.contains("EffiProz"));
    }

    #[test]
    fn test_collect() {
        assert!(DdlError::collect(vec![]).is_none());
        assert!(matches!(
            DdlError::collect(vec![DdlError::InvalidNumber("x".into())]),
            Some(DdlError::InvalidNumber(_))
        ));
        let multiple = DdlError::collect(vec![
            DdlError::InvalidSchema("a".into()),
            DdlError::InvalidSchema("b".into()),
        ])
        .unwrap();
        assert!(multiple.to_string().contains("  - Invalid schema: b"));
    }
}
