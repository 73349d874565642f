//! Error types for fitting and inference.

/// Errors raised at the boundary of fitting and prediction.
///
/// Fitting either completes over the whole training set or fails with one of
/// these; inference either returns a complete distribution or fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Fitting was requested with zero training records.
    #[error("training set is empty")]
    EmptyTrainingSet,

    /// An (attribute, value) pair that was never observed during fitting.
    #[error("unknown category: {attribute} = {value}")]
    UnknownCategory {
        /// Attribute name as given by the caller.
        attribute: String,
        /// Value as given by the caller.
        value: String,
    },

    /// A record's attributes do not match the schema established at fit time.
    #[error("schema mismatch: {detail}")]
    SchemaMismatch {
        /// Human-readable description of the mismatch.
        detail: String,
    },
}

impl ModelError {
    pub(crate) fn unknown_category(attribute: &str, value: &str) -> Self {
        Self::UnknownCategory {
            attribute: attribute.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn schema_mismatch(detail: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            detail: detail.into(),
        }
    }
}
