//! Smoothed frequency table and marginal priors.

use ndarray::{Array1, Array2, Axis};

use super::assign::Assignment;
use crate::repr::{AttributeValueIndex, FrequencyTable, Priors};

/// Build the smoothed `[n_pairs, n_clusters]` count table.
///
/// Every pair of the index gets a row, including pairs a cluster never saw;
/// each cell is `count + smoothing`.
pub fn build_frequency_table(
    assignment: &Assignment,
    index: &AttributeValueIndex,
    smoothing: f64,
) -> FrequencyTable {
    let n_rows = index.n_rows();
    let n_clusters = assignment.n_clusters();

    let mut cells = Array2::<f64>::from_elem((n_rows, n_clusters), smoothing);
    for (c, cluster) in assignment.clusters().iter().enumerate() {
        let mut column = cells.column_mut(c);
        for (cell, &count) in column.iter_mut().zip(cluster.counts()) {
            *cell += count;
        }
    }

    FrequencyTable::new(cells)
}

/// Derive the cluster prior and the label prior.
///
/// - cluster prior: column sums over all rows, normalized across clusters
/// - label prior: label-value row sums across clusters, normalized across
///   label values
pub fn compute_priors(table: &FrequencyTable, index: &AttributeValueIndex) -> Priors {
    let cluster = normalized(table.cluster_mass());

    let label_rows = index.label_rows();
    let label_mass = table
        .cells()
        .slice(ndarray::s![label_rows, ..])
        .sum_axis(Axis(1));
    let label = normalized(label_mass);

    Priors { cluster, label }
}

/// Scale a non-negative vector to sum to one.
pub(crate) fn normalized(mut values: Array1<f64>) -> Array1<f64> {
    let total = values.sum();
    values.mapv_inplace(|v| v / total);
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Dataset, Record};
    use crate::training::assign::ClusterAssigner;
    use crate::training::logger::FitLogger;
    use crate::training::Verbosity;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn fitted() -> (Assignment, AttributeValueIndex) {
        let rec = |c: &str, s: &str, k: &str| {
            Record::new().with("color", c).with("size", s).with("class", k)
        };
        let records = vec![
            rec("red", "large", "edible"),
            rec("red", "large", "edible"),
            rec("blue", "small", "poisonous"),
            rec("blue", "small", "poisonous"),
        ];
        let ds = Dataset::from_records(&records, "class").unwrap();
        let index = AttributeValueIndex::from_schema(ds.schema());
        let logger = FitLogger::new(Verbosity::Silent);
        (ClusterAssigner::new(0.5).assign(&ds, &index, &logger), index)
    }

    #[test]
    fn laplace_cells() {
        let (assignment, index) = fitted();
        let table = build_frequency_table(&assignment, &index, 1.0);
        // rows: red, blue, large, small, edible, poisonous
        let expected = array![
            [3.0, 1.0],
            [1.0, 3.0],
            [3.0, 1.0],
            [1.0, 3.0],
            [3.0, 1.0],
            [1.0, 3.0],
        ];
        assert_eq!(table.cells(), expected);
        assert!(table.cells().iter().all(|&v| v >= 1.0));
    }

    #[test]
    fn priors_sum_to_one() {
        let (assignment, index) = fitted();
        let table = build_frequency_table(&assignment, &index, 1.0);
        let priors = compute_priors(&table, &index);
        assert_abs_diff_eq!(priors.cluster, array![0.5, 0.5], epsilon = 1e-12);
        assert_abs_diff_eq!(priors.label, array![0.5, 0.5], epsilon = 1e-12);
    }

    #[test]
    fn custom_smoothing() {
        let (assignment, index) = fitted();
        let table = build_frequency_table(&assignment, &index, 0.5);
        assert_eq!(table.row(0), array![2.5, 0.5]);
    }

    #[test]
    fn normalized_scales() {
        assert_eq!(normalized(array![1.0, 3.0]), array![0.25, 0.75]);
    }
}
