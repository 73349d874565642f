//! Data input for fitting and prediction.
//!
//! - [`Record`]: ordered attribute → value mapping (training rows and observations)
//! - [`Schema`] / [`AttributeMeta`]: attribute order, label, distinct values
//! - [`Dataset`] / [`DatasetBuilder`]: validated, code-encoded training rows

mod dataset;
mod record;
mod schema;

pub use dataset::{Dataset, DatasetBuilder};
pub use record::Record;
pub use schema::{AttributeMeta, Schema};
