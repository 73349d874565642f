//! High-level fitting configuration with builder pattern.
//!
//! [`FitConfig`] uses the `bon` crate for builder generation with validation
//! at build time.
//!
//! # Example
//!
//! ```
//! use latent_bayes::{FitConfig, Verbosity};
//!
//! // All defaults: similarity floor 0.5, Laplace smoothing 1.0
//! let config = FitConfig::builder().build().unwrap();
//!
//! // Stricter clustering, lighter smoothing
//! let config = FitConfig::builder()
//!     .similarity_floor(0.7)
//!     .smoothing(0.5)
//!     .verbosity(Verbosity::Info)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::training::Verbosity;

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Similarity floor must be finite and in `[0, 1)`.
    #[error("similarity_floor must be in [0, 1), got {0}")]
    InvalidSimilarityFloor(f64),
    /// Smoothing must be finite and positive.
    #[error("smoothing must be positive, got {0}")]
    InvalidSmoothing(f64),
}

// =============================================================================
// FitConfig
// =============================================================================

/// Configuration for model fitting.
///
/// Defaults reproduce the fixed constants of the classic procedure: a
/// similarity floor of 0.5 and add-one smoothing.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct FitConfig {
    /// A cluster must score strictly above this to receive a record.
    /// Default: 0.5.
    #[builder(default = 0.5)]
    pub similarity_floor: f64,

    /// Pseudo-count added to every frequency cell. Default: 1.0 (Laplace).
    #[builder(default = 1.0)]
    pub smoothing: f64,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

/// Custom finishing function that validates the config.
impl<S: fit_config_builder::IsComplete> FitConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - `similarity_floor` is not finite or outside `[0, 1)`
    /// - `smoothing` is not finite or `<= 0`
    pub fn build(self) -> Result<FitConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl FitConfig {
    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        // A floor of 1.0 or more would put every record in its own cluster
        if !(0.0..1.0).contains(&self.similarity_floor) {
            return Err(ConfigError::InvalidSimilarityFloor(self.similarity_floor));
        }

        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(ConfigError::InvalidSmoothing(self.smoothing));
        }

        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            similarity_floor: 0.5,
            smoothing: 1.0,
            verbosity: Verbosity::Silent,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
