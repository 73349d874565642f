//! Online cluster assignment.
//!
//! Single pass over the dataset in input order. Each record joins the
//! existing cluster it is most similar to, or seeds a new cluster when no
//! cluster beats the similarity floor. Clusters are never merged, split, or
//! revisited, so the outcome depends on record order.

use ndarray::ArrayView1;

use crate::data::Dataset;
use crate::repr::{AttributeValueIndex, ClusterId};
use crate::training::logger::FitLogger;

// =============================================================================
// ClusterCounts
// =============================================================================

/// Running counts of one cluster during fitting.
///
/// `counts` is indexed by attribute-value row, `totals` by attribute. Unseen
/// pairs read as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterCounts {
    counts: Vec<f64>,
    totals: Vec<f64>,
}

impl ClusterCounts {
    fn new(n_rows: usize, n_attributes: usize) -> Self {
        Self {
            counts: vec![0.0; n_rows],
            totals: vec![0.0; n_attributes],
        }
    }

    /// Count recorded for an attribute-value row.
    #[inline]
    pub fn count(&self, row: usize) -> f64 {
        self.counts[row]
    }

    /// Counts for every attribute-value row.
    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    /// Sum of all counts recorded for attribute `attr`.
    #[inline]
    pub fn total(&self, attr: usize) -> f64 {
        self.totals[attr]
    }

    /// Similarity of an encoded record to this cluster, in `[0, 1]`.
    ///
    /// Sum over the record's attributes of the cluster's empirical frequency
    /// of the record's value, divided by the number of schema attributes
    /// (not the number matched).
    pub fn similarity(&self, index: &AttributeValueIndex, record: ArrayView1<'_, u32>) -> f64 {
        let mut sum = 0.0;
        for (attr, &code) in record.iter().enumerate() {
            let total = self.totals[attr];
            if total > 0.0 {
                sum += self.counts[index.row(attr, code)] / total;
            }
        }
        sum / index.n_attributes() as f64
    }

    fn observe(&mut self, index: &AttributeValueIndex, record: ArrayView1<'_, u32>) {
        for (attr, &code) in record.iter().enumerate() {
            self.counts[index.row(attr, code)] += 1.0;
            self.totals[attr] += 1.0;
        }
    }
}

// =============================================================================
// Assignment
// =============================================================================

/// Output of the assignment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    clusters: Vec<ClusterCounts>,
    assignments: Vec<ClusterId>,
}

impl Assignment {
    /// Number of clusters created.
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Final counts of every cluster, in creation order.
    pub fn clusters(&self) -> &[ClusterCounts] {
        &self.clusters
    }

    /// Cluster of every record, in input order.
    pub fn assignments(&self) -> &[ClusterId] {
        &self.assignments
    }

    /// Consume and return the per-record cluster ids.
    pub fn into_assignments(self) -> Vec<ClusterId> {
        self.assignments
    }
}

// =============================================================================
// ClusterAssigner
// =============================================================================

/// Greedy single-pass cluster assignment.
#[derive(Debug, Clone, Copy)]
pub struct ClusterAssigner {
    similarity_floor: f64,
}

impl ClusterAssigner {
    /// Create an assigner. A cluster must score strictly above
    /// `similarity_floor` to receive a record.
    pub fn new(similarity_floor: f64) -> Self {
        Self { similarity_floor }
    }

    /// Assign every record of `dataset`, in order.
    ///
    /// `index` must be built from `dataset.schema()`.
    pub fn assign(
        &self,
        dataset: &Dataset,
        index: &AttributeValueIndex,
        logger: &FitLogger,
    ) -> Assignment {
        let n_rows = index.n_rows();
        let n_attributes = index.n_attributes();

        let mut clusters: Vec<ClusterCounts> = Vec::new();
        let mut assignments = Vec::with_capacity(dataset.n_records());

        for (i, record) in dataset.codes().outer_iter().enumerate() {
            // Strict `>` against a running best: the first cluster reaching
            // the top score wins ties.
            let mut best: Option<usize> = None;
            let mut best_score = self.similarity_floor;
            for (j, cluster) in clusters.iter().enumerate() {
                let score = cluster.similarity(index, record);
                if score > best_score {
                    best = Some(j);
                    best_score = score;
                }
            }

            let (target, score) = match best {
                Some(j) => (j, Some(best_score)),
                None => {
                    clusters.push(ClusterCounts::new(n_rows, n_attributes));
                    logger.cluster_created(i + 1, clusters.len());
                    (clusters.len() - 1, None)
                }
            };

            clusters[target].observe(index, record);
            let id = ClusterId(target as u32);
            logger.record_assigned(i, id, score);
            assignments.push(id);
        }

        Assignment {
            clusters,
            assignments,
        }
    }
}
