//! Posterior distribution over label values.

use approx::{AbsDiffEq, RelativeEq};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Probability of every label value, in label-value order.
///
/// Values are non-negative and sum to one.
///
/// # Example
///
/// ```
/// use latent_bayes::{FitConfig, LatentBayesModel, Record};
///
/// let records = vec![
///     Record::new().with("odor", "almond").with("class", "edible"),
///     Record::new().with("odor", "foul").with("class", "poisonous"),
/// ];
/// let model = LatentBayesModel::fit(&records, "class", FitConfig::default()).unwrap();
/// let dist = model.predict(&Record::new().with("odor", "foul")).unwrap();
///
/// assert_eq!(dist.labels(), &["edible", "poisonous"]);
/// assert!((dist.sum() - 1.0).abs() < 1e-12);
/// assert!(dist.get("poisonous").unwrap() > dist.get("edible").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelDistribution {
    labels: Vec<String>,
    probs: Array1<f64>,
}

impl LabelDistribution {
    pub(crate) fn new(labels: Vec<String>, probs: Array1<f64>) -> Self {
        debug_assert_eq!(labels.len(), probs.len());
        Self { labels, probs }
    }

    /// Label values, in the order they first appeared in training.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Probabilities aligned with [`labels`](Self::labels).
    pub fn probabilities(&self) -> ArrayView1<'_, f64> {
        self.probs.view()
    }

    /// Probability of `label`, or `None` if it is not a known label value.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.probs[i])
    }

    /// Number of label values.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no label values.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate `(label, probability)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.probs.iter().copied())
    }

    /// Label with the highest probability. Earlier labels win ties.
    pub fn most_likely(&self) -> Option<(&str, f64)> {
        self.iter().fold(None, |best, (label, p)| match best {
            Some((_, bp)) if bp >= p => best,
            _ => Some((label, p)),
        })
    }

    /// Total probability mass.
    pub fn sum(&self) -> f64 {
        self.probs.sum()
    }
}

impl AbsDiffEq for LabelDistribution {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.labels == other.labels
            && self
                .probs
                .iter()
                .zip(other.probs.iter())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl RelativeEq for LabelDistribution {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.labels == other.labels
            && self
                .probs
                .iter()
                .zip(other.probs.iter())
                .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_ne};
    use ndarray::array;

    fn dist(probs: Array1<f64>) -> LabelDistribution {
        LabelDistribution::new(vec!["e".into(), "p".into(), "u".into()], probs)
    }

    #[test]
    fn most_likely_prefers_earlier_on_tie() {
        let d = dist(array![0.4, 0.4, 0.2]);
        assert_eq!(d.most_likely(), Some(("e", 0.4)));
        let d = dist(array![0.1, 0.2, 0.7]);
        assert_eq!(d.most_likely(), Some(("u", 0.7)));
    }

    #[test]
    fn lookup_and_iter() {
        let d = dist(array![0.5, 0.25, 0.25]);
        assert_eq!(d.get("p"), Some(0.25));
        assert_eq!(d.get("x"), None);
        assert_eq!(d.len(), 3);
        let pairs: Vec<_> = d.iter().collect();
        assert_eq!(pairs[0], ("e", 0.5));
        assert_abs_diff_eq!(d.sum(), 1.0);
    }

    #[test]
    fn approx_compares_labels_and_probs() {
        let a = dist(array![0.5, 0.25, 0.25]);
        let b = dist(array![0.5 + 1e-12, 0.25, 0.25 - 1e-12]);
        assert_abs_diff_eq!(a, b, epsilon = 1e-9);

        let relabelled = LabelDistribution::new(
            vec!["x".into(), "p".into(), "u".into()],
            array![0.5, 0.25, 0.25],
        );
        assert_relative_ne!(a, relabelled);
    }

    #[test]
    fn empty_has_no_mode() {
        let d = LabelDistribution::new(Vec::new(), Array1::zeros(0));
        assert!(d.is_empty());
        assert_eq!(d.most_likely(), None);
    }
}
