//! Held-out evaluation results and summary metrics.
//!
//! [`LatentBayesModel::evaluate`](crate::LatentBayesModel::evaluate) pairs each
//! prediction with its true label as an [`Evaluation`]. [`EvalReport`] reduces
//! a batch of evaluations to accuracy and log loss.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::inference::LabelDistribution;

/// Probabilities below this are clamped before taking the log.
pub const LOG_LOSS_EPS: f64 = 1e-15;

// =============================================================================
// Evaluation
// =============================================================================

/// Prediction for one held-out record, paired with its true label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Predicted distribution over label values.
    pub distribution: LabelDistribution,
    /// Label value the record actually carried.
    pub true_label: String,
}

impl Evaluation {
    pub fn new(distribution: LabelDistribution, true_label: impl Into<String>) -> Self {
        Self {
            distribution,
            true_label: true_label.into(),
        }
    }

    /// Most likely label value.
    pub fn predicted(&self) -> Option<&str> {
        self.distribution.most_likely().map(|(label, _)| label)
    }

    /// Whether the most likely label is the true one.
    pub fn is_correct(&self) -> bool {
        self.predicted() == Some(self.true_label.as_str())
    }

    /// Probability assigned to the true label.
    pub fn true_probability(&self) -> f64 {
        self.distribution.get(&self.true_label).unwrap_or(0.0)
    }

    /// Negative log probability of the true label, clamped at [`LOG_LOSS_EPS`].
    pub fn log_loss(&self) -> f64 {
        -self.true_probability().max(LOG_LOSS_EPS).ln()
    }
}

// =============================================================================
// EvalReport
// =============================================================================

/// Summary metrics over a batch of evaluations.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EvalReport {
    /// Number of evaluated records.
    pub n_samples: usize,
    /// Fraction of records whose most likely label is the true one.
    pub accuracy: f64,
    /// Mean negative log probability of the true label.
    pub log_loss: f64,
}

impl EvalReport {
    /// Summarize `evaluations`. An empty batch gives an all-zero report.
    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        if evaluations.is_empty() {
            return Self::default();
        }

        let n = evaluations.len() as f64;
        let correct = evaluations.iter().filter(|e| e.is_correct()).count();
        let log_loss = evaluations.iter().map(Evaluation::log_loss).sum::<f64>() / n;

        Self {
            n_samples: evaluations.len(),
            accuracy: correct as f64 / n,
            log_loss,
        }
    }
}

impl fmt::Display for EvalReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={} accuracy={:.4} logloss={:.6}",
            self.n_samples, self.accuracy, self.log_loss
        )
    }
}
