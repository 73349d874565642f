//! Smoke test: on well-separated synthetic data the latent clusters recover
//! the hidden groups well enough to predict the label.

use latent_bayes::testing::data::{random_records, split_records};
use latent_bayes::{EvalReport, FitConfig, LatentBayesModel, Record};

#[test]
fn separated_groups_are_predictable() {
    let records = random_records(600, 6, 8, 2, 0.9, 0x5EED);
    let (train, valid) = split_records(&records, 0.2, 7);
    let model = LatentBayesModel::fit(&train, "class", FitConfig::default()).unwrap();

    let valid: Vec<Record> = valid
        .into_iter()
        .filter(|r| r.iter().all(|(a, v)| model.index().lookup(a, v).is_ok()))
        .collect();
    let evaluations = model.evaluate(&valid, 0).unwrap();
    let report = EvalReport::from_evaluations(&evaluations);

    assert!(report.n_samples > 100, "{report}");
    assert!(report.accuracy > 0.75, "{report}");
    assert!(report.log_loss.is_finite(), "{report}");
}
