//! Model metadata.
//!
//! Shared metadata for model introspection.

use serde::{Deserialize, Serialize};

/// Summary of a fitted model's structure and training context.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelMeta {
    /// Number of training records.
    pub n_records: usize,
    /// Number of schema attributes, including the label.
    pub n_attributes: usize,
    /// Number of latent clusters found.
    pub n_clusters: usize,
    /// Number of distinct (attribute, value) pairs.
    pub n_pairs: usize,
    /// Name of the label attribute.
    pub label: String,
    /// Number of distinct label values.
    pub n_labels: usize,
}

impl ModelMeta {
    /// Returns true if the label has exactly two values.
    pub fn is_binary(&self) -> bool {
        self.n_labels == 2
    }

    /// Number of observable (non-label) attributes.
    pub fn n_observable(&self) -> usize {
        self.n_attributes.saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observable_excludes_label() {
        let meta = ModelMeta {
            n_attributes: 3,
            n_labels: 2,
            ..Default::default()
        };
        assert_eq!(meta.n_observable(), 2);
        assert!(meta.is_binary());
        assert_eq!(ModelMeta::default().n_observable(), 0);
    }
}
