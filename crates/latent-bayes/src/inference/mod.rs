//! Inference over a fitted model.
//!
//! - [`Predictor`]: sequential Bayesian update over clusters, then
//!   marginalization to a label distribution
//! - [`ClusterPosterior`]: the running posterior over clusters
//! - [`LabelDistribution`]: the prediction result
//!
//! Inference only reads the fitted tables; any number of queries may run
//! concurrently against one model.

mod distribution;
mod predictor;

pub use distribution::LabelDistribution;
pub use predictor::{ClusterPosterior, Predictor};
