//! Fitted model representations.
//!
//! Pure data types produced by fitting and read by inference. None of them
//! is mutated after fitting completes.
//!
//! - [`AttributeValueIndex`]: row space of all tables
//! - [`FrequencyTable`]: smoothed per-cluster counts
//! - [`ConditionalTable`]: per-attribute, per-cluster value distributions
//! - [`Priors`]: cluster prior and label prior

mod index;
mod tables;

pub use index::AttributeValueIndex;
pub use tables::{ClusterId, ConditionalTable, FrequencyTable, Priors};
