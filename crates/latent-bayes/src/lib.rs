//! latent-bayes: latent-cluster Bayesian classification for categorical data.
//!
//! Records are grouped into latent clusters by a single-pass, order-dependent
//! online procedure. The clusters then act as the hidden variable of a
//! Laplace-smoothed Bayesian classifier that predicts a label from any subset
//! of the observable attributes.
//!
//! # Key Types
//!
//! - [`LatentBayesModel`] - Fitted model with predict/evaluate
//! - [`FitConfig`] - Configuration builder
//! - [`Record`] / [`Dataset`] - Data handling
//! - [`LabelDistribution`] - Posterior over label values
//! - [`ModelError`] - Errors at the fit/predict boundary
//!
//! # Fitting
//!
//! ```
//! use latent_bayes::{FitConfig, LatentBayesModel, Record};
//!
//! let records = vec![
//!     Record::new().with("color", "red").with("class", "edible"),
//!     Record::new().with("color", "blue").with("class", "poisonous"),
//! ];
//! let model = LatentBayesModel::fit(&records, "class", FitConfig::default()).unwrap();
//!
//! let dist = model.predict(&Record::new().with("color", "red")).unwrap();
//! assert_eq!(dist.most_likely().unwrap().0, "edible");
//! ```

// Re-export approx traits for users who want to compare distributions
pub use approx;

pub mod data;
pub mod error;
pub mod eval;
pub mod inference;
pub mod model;
pub mod repr;
pub mod testing;
pub mod training;
pub mod utils;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use data::{Dataset, DatasetBuilder, Record, Schema};
pub use error::ModelError;
pub use eval::{EvalReport, Evaluation};
pub use inference::LabelDistribution;
pub use model::{ConfigError, FitConfig, LatentBayesModel, ModelMeta};
pub use repr::{AttributeValueIndex, ClusterId, ConditionalTable, FrequencyTable, Priors};
pub use training::Verbosity;
pub use utils::{run_with_threads, Parallelism};
