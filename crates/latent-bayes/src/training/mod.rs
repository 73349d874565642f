//! Model fitting.
//!
//! Fitting runs three stages strictly in order:
//!
//! 1. [`ClusterAssigner`]: single-pass, order-dependent latent cluster assignment
//! 2. [`build_frequency_table`] / [`compute_priors`]: Laplace-smoothed counts,
//!    cluster prior and label prior
//! 3. [`normalize`]: per-attribute, per-cluster conditional distributions
//!
//! Stage 1 is inherently sequential. Stages 2 and 3 are pure functions of
//! their inputs.
//!
//! [`FitLogger`] / [`Verbosity`] provide structured progress output.

pub mod assign;
mod frequency;
mod logger;
mod normalize;

pub use assign::{Assignment, ClusterAssigner, ClusterCounts};
pub use frequency::{build_frequency_table, compute_priors};
pub use logger::{FitLogger, Verbosity};
pub use normalize::normalize;

pub(crate) use frequency::normalized;
