//! Structured fit logging.
//!
//! [`FitLogger`] emits `tracing` events gated by a [`Verbosity`] level. The
//! library never installs a subscriber; the embedding application decides
//! where events go.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::repr::ClusterId;

/// Verbosity level for fitting output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// No output.
    #[default]
    Silent,
    /// Only suspicious outcomes.
    Warning,
    /// Progress: fit start/finish and each newly created cluster.
    Info,
    /// Per-record assignment scores.
    Debug,
}

/// Logger for one fitting run.
#[derive(Debug)]
pub struct FitLogger {
    verbosity: Verbosity,
    started: Option<Instant>,
    n_records: usize,
}

impl FitLogger {
    /// Create a logger at the given verbosity.
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            started: None,
            n_records: 0,
        }
    }

    /// Configured verbosity.
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    /// Mark the start of fitting.
    pub fn start_fit(&mut self, n_records: usize, n_attributes: usize) {
        self.started = Some(Instant::now());
        self.n_records = n_records;
        if self.verbosity >= Verbosity::Info {
            tracing::info!(n_records, n_attributes, "fitting latent clusters");
        }
    }

    /// A new cluster was created while processing row `rows_analysed - 1`.
    pub fn cluster_created(&self, rows_analysed: usize, n_clusters: usize) {
        if self.verbosity >= Verbosity::Info {
            tracing::info!(
                rows_analysed,
                n_clusters,
                "{rows_analysed} rows analysed, {n_clusters} clusters found"
            );
        }
    }

    /// Row `row` was assigned to `cluster` with similarity `score`.
    ///
    /// `score` is `None` when the cluster was created for this row.
    pub fn record_assigned(&self, row: usize, cluster: ClusterId, score: Option<f64>) {
        if self.verbosity >= Verbosity::Debug {
            tracing::debug!(row, cluster = cluster.0, ?score, "record assigned");
        }
    }

    /// Mark the end of fitting.
    pub fn finish_fit(&mut self, n_clusters: usize, n_pairs: usize) {
        let elapsed_ms = self
            .started
            .take()
            .map(|t| t.elapsed().as_secs_f64() * 1e3)
            .unwrap_or_default();

        if self.verbosity >= Verbosity::Warning && self.n_records > 1 && n_clusters == self.n_records
        {
            tracing::warn!(
                n_clusters,
                "every record seeded its own cluster; the similarity floor may be too high"
            );
        }
        if self.verbosity >= Verbosity::Info {
            tracing::info!(n_clusters, n_pairs, elapsed_ms, "fit complete");
        }
    }
}
