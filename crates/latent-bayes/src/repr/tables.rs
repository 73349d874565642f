//! Fitted probability tables.
//!
//! All tables share the row space of [`AttributeValueIndex`](super::AttributeValueIndex)
//! and have one column per latent cluster.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

/// Identifier of a latent cluster: its position in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClusterId(pub u32);

impl ClusterId {
    /// Column of this cluster in the fitted tables.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ClusterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cluster {}", self.0)
    }
}

/// Smoothed per-cluster counts with shape `[n_pairs, n_clusters]`.
///
/// Every cell is `count + smoothing`, so with positive smoothing no cell is
/// zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrequencyTable {
    cells: Array2<f64>,
}

impl FrequencyTable {
    pub(crate) fn new(cells: Array2<f64>) -> Self {
        Self { cells }
    }

    /// All cells.
    pub fn cells(&self) -> ArrayView2<'_, f64> {
        self.cells.view()
    }

    /// Smoothed count of one `(row, cluster)` cell.
    #[inline]
    pub fn get(&self, row: usize, cluster: ClusterId) -> f64 {
        self.cells[[row, cluster.index()]]
    }

    /// Cluster-indexed counts of one attribute-value row.
    pub fn row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.cells.row(row)
    }

    /// Number of attribute-value rows.
    pub fn n_rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of clusters.
    pub fn n_clusters(&self) -> usize {
        self.cells.ncols()
    }

    /// Total smoothed mass of every cluster (column sums over all rows).
    pub fn cluster_mass(&self) -> Array1<f64> {
        self.cells.sum_axis(Axis(0))
    }
}

/// Conditional probabilities `P(attribute = value | cluster)`.
///
/// Shape `[n_pairs, n_clusters]`. For a fixed attribute and cluster the
/// probabilities over that attribute's values sum to 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalTable {
    probs: Array2<f64>,
}

impl ConditionalTable {
    pub(crate) fn new(probs: Array2<f64>) -> Self {
        Self { probs }
    }

    /// All probabilities.
    pub fn probs(&self) -> ArrayView2<'_, f64> {
        self.probs.view()
    }

    /// Cluster-indexed likelihood of one attribute-value row.
    #[inline]
    pub fn row(&self, row: usize) -> ArrayView1<'_, f64> {
        self.probs.row(row)
    }

    /// Probability of one `(row, cluster)` cell.
    #[inline]
    pub fn get(&self, row: usize, cluster: ClusterId) -> f64 {
        self.probs[[row, cluster.index()]]
    }

    /// Number of attribute-value rows.
    pub fn n_rows(&self) -> usize {
        self.probs.nrows()
    }

    /// Number of clusters.
    pub fn n_clusters(&self) -> usize {
        self.probs.ncols()
    }
}

/// Marginal priors derived from the frequency table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Priors {
    /// Distribution over clusters, proportional to each cluster's mass.
    pub cluster: Array1<f64>,
    /// Distribution over label values, in label-value order.
    pub label: Array1<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn cluster_mass_sums_columns() {
        let table = FrequencyTable::new(array![[3.0, 1.0], [1.0, 3.0], [2.0, 2.0]]);
        assert_eq!(table.cluster_mass(), array![6.0, 6.0]);
        assert_eq!(table.get(1, ClusterId(1)), 3.0);
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.n_clusters(), 2);
    }

    #[test]
    fn cluster_id_display() {
        assert_eq!(ClusterId(3).to_string(), "cluster 3");
        assert_eq!(ClusterId(3).index(), 3);
    }
}
