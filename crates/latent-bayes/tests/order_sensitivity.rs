//! Cluster assignment depends on record order, but is otherwise deterministic.

use latent_bayes::testing::data::random_records;
use latent_bayes::testing::{order_sensitive_records, order_sensitive_records_swapped};
use latent_bayes::{ClusterId, FitConfig, LatentBayesModel};

#[test]
fn permutation_changes_cluster_count() {
    let config = FitConfig::default();

    let forward = LatentBayesModel::fit(&order_sensitive_records(), "class", config.clone()).unwrap();
    assert_eq!(forward.n_clusters(), 1);
    assert_eq!(forward.assignments(), &[ClusterId(0); 3]);

    let swapped = LatentBayesModel::fit(&order_sensitive_records_swapped(), "class", config).unwrap();
    assert_eq!(swapped.n_clusters(), 2);
    // The anise record scores exactly the floor and seeds cluster 1; the last
    // record ties both clusters and goes to the earlier one.
    assert_eq!(
        swapped.assignments(),
        &[ClusterId(0), ClusterId(1), ClusterId(0)]
    );
}

#[test]
fn zero_floor_merges_everything_that_overlaps() {
    let config = FitConfig::builder().similarity_floor(0.0).build().unwrap();
    let model = LatentBayesModel::fit(&order_sensitive_records_swapped(), "class", config).unwrap();
    assert_eq!(model.n_clusters(), 1);
}

#[test]
fn fitting_is_deterministic() {
    let records = random_records(200, 6, 4, 3, 0.8, 42);
    let a = LatentBayesModel::fit(&records, "class", FitConfig::default()).unwrap();
    let b = LatentBayesModel::fit(&records, "class", FitConfig::default()).unwrap();

    assert_eq!(a.assignments(), b.assignments());
    assert_eq!(a.frequencies(), b.frequencies());
    assert_eq!(a.conditionals(), b.conditionals());
    assert_eq!(a.priors(), b.priors());
    assert_eq!(a, b);
}
