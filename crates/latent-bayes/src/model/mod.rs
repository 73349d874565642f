//! High-level model wrapper.
//!
//! - [`LatentBayesModel`]: fitting, prediction and evaluation
//! - [`FitConfig`]: validated fitting configuration
//! - [`ModelMeta`]: fitted model summary
//!
//! # Example
//!
//! ```
//! use latent_bayes::{FitConfig, LatentBayesModel};
//! use latent_bayes::testing::mushroom_records;
//!
//! let config = FitConfig::builder().similarity_floor(0.5).build().unwrap();
//! let model = LatentBayesModel::fit(&mushroom_records(), "class", config).unwrap();
//! assert_eq!(model.meta().n_clusters, 2);
//! ```

mod config;
mod latent;
mod meta;

pub use config::{ConfigError, FitConfig};
pub use latent::LatentBayesModel;
pub use meta::ModelMeta;
