//! Latent-cluster Bayesian model.
//!
//! High-level wrapper around the fitted tables with fitting, prediction and
//! evaluation. Access components via [`index()`](LatentBayesModel::index),
//! [`conditionals()`](LatentBayesModel::conditionals),
//! [`priors()`](LatentBayesModel::priors) and [`meta()`](LatentBayesModel::meta).

use serde::{Deserialize, Serialize};

use crate::data::{Dataset, Record, Schema};
use crate::error::ModelError;
use crate::eval::Evaluation;
use crate::inference::{ClusterPosterior, LabelDistribution, Predictor};
use crate::repr::{AttributeValueIndex, ClusterId, ConditionalTable, FrequencyTable, Priors};
use crate::training::{
    build_frequency_table, compute_priors, normalize, ClusterAssigner, FitLogger,
};
use crate::utils::{run_with_threads, Parallelism};

use super::{FitConfig, ModelMeta};

/// Fitted latent-cluster classifier.
///
/// All tables are computed once by [`fit`](Self::fit) and never change
/// afterward. Prediction borrows the model immutably, so a single model can
/// serve queries from many threads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatentBayesModel {
    index: AttributeValueIndex,
    frequencies: FrequencyTable,
    conditionals: ConditionalTable,
    priors: Priors,
    /// Cluster of each training record, in input order.
    assignments: Vec<ClusterId>,
    meta: ModelMeta,
    config: FitConfig,
}

impl LatentBayesModel {
    // =========================================================================
    // Fitting
    // =========================================================================

    /// Fit a model on `records` with `label` as the target attribute.
    ///
    /// The schema is taken from the first record. Records are clustered in
    /// the order given, so permuting them can change the fitted model.
    ///
    /// # Errors
    ///
    /// - [`ModelError::EmptyTrainingSet`] if `records` is empty
    /// - [`ModelError::SchemaMismatch`] if `label` is not an attribute of the
    ///   first record, or a record's attribute set differs from it
    pub fn fit(records: &[Record], label: &str, config: FitConfig) -> Result<Self, ModelError> {
        let dataset = Dataset::from_records(records, label)?;
        Self::fit_dataset(&dataset, config)
    }

    /// Fit a model on an already encoded dataset.
    ///
    /// # Errors
    ///
    /// [`ModelError::EmptyTrainingSet`] if the dataset has no records.
    pub fn fit_dataset(dataset: &Dataset, config: FitConfig) -> Result<Self, ModelError> {
        if dataset.n_records() == 0 {
            return Err(ModelError::EmptyTrainingSet);
        }

        let mut logger = FitLogger::new(config.verbosity);
        logger.start_fit(dataset.n_records(), dataset.n_attributes());

        let index = AttributeValueIndex::from_schema(dataset.schema());

        // Order-dependent; never parallelized
        let assignment =
            ClusterAssigner::new(config.similarity_floor).assign(dataset, &index, &logger);
        let n_clusters = assignment.n_clusters();

        let frequencies = build_frequency_table(&assignment, &index, config.smoothing);
        let priors = compute_priors(&frequencies, &index);
        let conditionals = normalize(&frequencies, &index, Parallelism::from_threads(0));

        logger.finish_fit(n_clusters, index.n_rows());

        let schema = index.schema();
        let meta = ModelMeta {
            n_records: dataset.n_records(),
            n_attributes: schema.n_attributes(),
            n_clusters,
            n_pairs: index.n_rows(),
            label: schema.label_name().to_string(),
            n_labels: schema.label().n_values(),
        };

        Ok(Self {
            assignments: assignment.into_assignments(),
            index,
            frequencies,
            conditionals,
            priors,
            meta,
            config,
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get reference to model metadata.
    pub fn meta(&self) -> &ModelMeta {
        &self.meta
    }

    /// Get reference to the fitting configuration.
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Schema established by the training records.
    pub fn schema(&self) -> &Schema {
        self.index.schema()
    }

    /// Attribute-value index defining the table rows.
    pub fn index(&self) -> &AttributeValueIndex {
        &self.index
    }

    /// Smoothed frequency table.
    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Conditional probability table.
    pub fn conditionals(&self) -> &ConditionalTable {
        &self.conditionals
    }

    /// Cluster and label priors.
    pub fn priors(&self) -> &Priors {
        &self.priors
    }

    /// Cluster of each training record, in input order.
    pub fn assignments(&self) -> &[ClusterId] {
        &self.assignments
    }

    /// Number of latent clusters.
    pub fn n_clusters(&self) -> usize {
        self.meta.n_clusters
    }

    /// Predictor borrowing this model's tables.
    pub fn predictor(&self) -> Predictor<'_> {
        Predictor::new(&self.index, &self.conditionals, &self.priors)
    }

    // =========================================================================
    // Prediction
    // =========================================================================

    /// Predict the label distribution for a partial observation.
    ///
    /// `observation` holds any subset of the observable attributes, never the
    /// label. An empty observation returns the label prior.
    ///
    /// # Errors
    ///
    /// - [`ModelError::UnknownCategory`] for an attribute or value not seen in
    ///   training
    /// - [`ModelError::SchemaMismatch`] if the observation contains the label
    pub fn predict(&self, observation: &Record) -> Result<LabelDistribution, ModelError> {
        self.predictor().predict(observation)
    }

    /// Posterior over latent clusters for a partial observation.
    ///
    /// # Errors
    ///
    /// Same as [`predict`](Self::predict).
    pub fn cluster_posterior(&self, observation: &Record) -> Result<ClusterPosterior, ModelError> {
        self.predictor().cluster_posterior(observation)
    }

    /// Predict many observations.
    ///
    /// Results are in input order regardless of thread count. The first
    /// failing observation (in input order) fails the whole batch.
    ///
    /// # Arguments
    ///
    /// * `observations` - Partial records without the label
    /// * `n_threads` - Thread count: 0 = auto, 1 = sequential, >1 = exact count
    pub fn predict_batch(
        &self,
        observations: &[Record],
        n_threads: usize,
    ) -> Result<Vec<LabelDistribution>, ModelError> {
        let predictor = self.predictor();
        run_with_threads(n_threads, |parallelism| {
            parallelism.maybe_par_map(observations, |obs| predictor.predict(obs))
        })
        .into_iter()
        .collect()
    }

    // =========================================================================
    // Evaluation
    // =========================================================================

    /// Predict every held-out record from its observable attributes and pair
    /// the result with its true label.
    ///
    /// The model is never mutated. Results are in input order.
    ///
    /// # Arguments
    ///
    /// * `held_out` - Complete records carrying exactly the schema's attributes
    /// * `n_threads` - Thread count: 0 = auto, 1 = sequential, >1 = exact count
    ///
    /// # Errors
    ///
    /// - [`ModelError::SchemaMismatch`] if a record's attribute set differs
    ///   from the schema
    /// - [`ModelError::UnknownCategory`] if a record holds a value (label
    ///   included) not seen in training
    pub fn evaluate(
        &self,
        held_out: &[Record],
        n_threads: usize,
    ) -> Result<Vec<Evaluation>, ModelError> {
        run_with_threads(n_threads, |parallelism| {
            parallelism.maybe_par_map(held_out, |record| self.evaluate_record(record))
        })
        .into_iter()
        .collect()
    }

    fn evaluate_record(&self, record: &Record) -> Result<Evaluation, ModelError> {
        let schema = self.schema();
        let same_attributes = record.len() == schema.n_attributes()
            && record
                .attributes()
                .all(|name| schema.attribute_index(name).is_some());
        if !same_attributes {
            return Err(ModelError::schema_mismatch(format!(
                "held-out record has attributes {:?}, expected {:?}",
                record.attributes().collect::<Vec<_>>(),
                schema.iter().map(|a| a.name()).collect::<Vec<_>>(),
            )));
        }

        let label = schema.label_name();
        let true_label = record
            .get(label)
            .ok_or_else(|| ModelError::schema_mismatch(format!("missing label '{label}'")))?;
        self.index.lookup(label, true_label)?;

        let distribution = self.predict(&record.without(label))?;
        Ok(Evaluation::new(distribution, true_label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{mushroom_records, DEFAULT_TOLERANCE};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn fitted() -> LatentBayesModel {
        LatentBayesModel::fit(&mushroom_records(), "class", FitConfig::default()).unwrap()
    }

    #[test]
    fn fit_populates_meta() {
        let model = fitted();
        let meta = model.meta();
        assert_eq!(meta.n_records, 4);
        assert_eq!(meta.n_attributes, 3);
        assert_eq!(meta.n_clusters, 2);
        assert_eq!(meta.n_pairs, 6);
        assert_eq!(meta.label, "class");
        assert_eq!(meta.n_labels, 2);
        assert_eq!(model.config(), &FitConfig::default());
    }

    #[test]
    fn assignments_follow_input_order() {
        let model = fitted();
        assert_eq!(
            model.assignments(),
            &[ClusterId(0), ClusterId(0), ClusterId(1), ClusterId(1)]
        );
    }

    #[test]
    fn cluster_posterior_is_exposed() {
        let model = fitted();
        let obs = Record::new().with("color", "red").with("size", "large");
        let post = model.cluster_posterior(&obs).unwrap();
        assert_abs_diff_eq!(
            post.probs(),
            array![0.9, 0.1].view(),
            epsilon = DEFAULT_TOLERANCE
        );
    }

    #[test]
    fn predict_batch_matches_predict() {
        let model = fitted();
        let observations = vec![
            Record::new().with("color", "red"),
            Record::new().with("size", "small"),
            Record::new(),
        ];
        let batch = model.predict_batch(&observations, 2).unwrap();
        for (obs, dist) in observations.iter().zip(&batch) {
            assert_eq!(&model.predict(obs).unwrap(), dist);
        }
    }

    #[test]
    fn predict_batch_fails_on_first_error() {
        let model = fitted();
        let observations = vec![
            Record::new().with("color", "red"),
            Record::new().with("color", "green"),
        ];
        let err = model.predict_batch(&observations, 1).unwrap_err();
        assert_eq!(err, ModelError::unknown_category("color", "green"));
    }

    #[test]
    fn evaluate_rejects_missing_attribute() {
        let model = fitted();
        let held_out = vec![Record::new().with("color", "red").with("class", "edible")];
        assert!(matches!(
            model.evaluate(&held_out, 1),
            Err(ModelError::SchemaMismatch { .. })
        ));
    }
}
