//! Sequential Bayesian update over latent clusters.

use ndarray::{Array1, ArrayView1};

use super::distribution::LabelDistribution;
use crate::data::Record;
use crate::error::ModelError;
use crate::repr::{AttributeValueIndex, ConditionalTable, Priors};
use crate::training::normalized;

// =============================================================================
// ClusterPosterior
// =============================================================================

/// Distribution over latent clusters, updated one observed attribute at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterPosterior {
    probs: Array1<f64>,
}

impl ClusterPosterior {
    /// Start from a copy of the cluster prior.
    pub fn from_prior(prior: ArrayView1<'_, f64>) -> Self {
        Self {
            probs: prior.to_owned(),
        }
    }

    /// Multiply by a cluster-indexed likelihood and renormalize.
    #[inline]
    pub fn update(&mut self, likelihood: ArrayView1<'_, f64>) {
        self.probs *= &likelihood;
        let total = self.probs.sum();
        self.probs /= total;
    }

    /// Current probabilities, one per cluster.
    pub fn probs(&self) -> ArrayView1<'_, f64> {
        self.probs.view()
    }
}

// =============================================================================
// Predictor
// =============================================================================

/// Read-only view over fitted tables that answers label queries.
///
/// Borrowing only immutable data, a `Predictor` can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Predictor<'a> {
    index: &'a AttributeValueIndex,
    conditionals: &'a ConditionalTable,
    priors: &'a Priors,
}

impl<'a> Predictor<'a> {
    /// Create a predictor over fitted tables.
    pub fn new(
        index: &'a AttributeValueIndex,
        conditionals: &'a ConditionalTable,
        priors: &'a Priors,
    ) -> Self {
        Self {
            index,
            conditionals,
            priors,
        }
    }

    /// Posterior over clusters after folding in every observed attribute.
    ///
    /// Attributes are applied in the observation's order with a
    /// renormalization after each one.
    ///
    /// # Errors
    ///
    /// - [`ModelError::SchemaMismatch`] if the observation carries the label
    /// - [`ModelError::UnknownCategory`] for a pair never seen during fitting
    pub fn cluster_posterior(&self, observation: &Record) -> Result<ClusterPosterior, ModelError> {
        let schema = self.index.schema();
        let mut posterior = ClusterPosterior::from_prior(self.priors.cluster.view());
        for (attribute, value) in observation.iter() {
            if schema.is_label(attribute) {
                return Err(ModelError::schema_mismatch(format!(
                    "observation contains the label attribute '{attribute}'"
                )));
            }
            let row = self.index.lookup(attribute, value)?;
            posterior.update(self.conditionals.row(row));
        }
        Ok(posterior)
    }

    /// Predict the distribution over label values for a partial observation.
    ///
    /// The label likelihood is marginalized over the cluster posterior,
    /// weighted by the label prior and normalized. An empty observation
    /// returns the label prior itself.
    ///
    /// # Errors
    ///
    /// See [`cluster_posterior`](Self::cluster_posterior).
    pub fn predict(&self, observation: &Record) -> Result<LabelDistribution, ModelError> {
        let labels = self.index.schema().label().values().to_vec();
        if observation.is_empty() {
            return Ok(LabelDistribution::new(labels, self.priors.label.clone()));
        }

        let posterior = self.cluster_posterior(observation)?;
        let raw: Array1<f64> = self
            .index
            .label_rows()
            .map(|row| self.conditionals.row(row).dot(&posterior.probs()))
            .collect();

        let weighted = raw * &self.priors.label;
        Ok(LabelDistribution::new(labels, normalized(weighted)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn update_renormalizes() {
        let mut post = ClusterPosterior::from_prior(array![0.5, 0.5].view());
        post.update(array![0.75, 0.25].view());
        assert_abs_diff_eq!(post.probs(), array![0.75, 0.25].view(), epsilon = 1e-12);
        post.update(array![0.75, 0.25].view());
        assert_abs_diff_eq!(post.probs(), array![0.9, 0.1].view(), epsilon = 1e-12);
    }

    #[test]
    fn prior_is_copied() {
        let prior = array![0.2, 0.8];
        let mut post = ClusterPosterior::from_prior(prior.view());
        post.update(array![1.0, 0.0].view());
        assert_eq!(prior, array![0.2, 0.8]);
        assert_eq!(post.probs(), array![1.0, 0.0].view());
    }
}
