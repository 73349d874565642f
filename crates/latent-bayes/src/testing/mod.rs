//! Test fixtures and tolerances shared by unit tests, integration tests and
//! benches.
//!
//! - [`mushroom_records`]: the four-record color/size/class scenario
//! - [`order_sensitive_records`]: three records whose order changes the
//!   cluster count
//! - [`data`]: seeded synthetic categorical data

pub mod data;

use crate::data::Record;

/// Default absolute tolerance for probability comparisons.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

fn record(pairs: &[(&str, &str)]) -> Record {
    pairs.iter().copied().collect()
}

/// Two red/large/edible records followed by two blue/small/poisonous ones.
///
/// Fits to exactly two clusters with label `class`.
pub fn mushroom_records() -> Vec<Record> {
    vec![
        record(&[("color", "red"), ("size", "large"), ("class", "edible")]),
        record(&[("color", "red"), ("size", "large"), ("class", "edible")]),
        record(&[("color", "blue"), ("size", "small"), ("class", "poisonous")]),
        record(&[("color", "blue"), ("size", "small"), ("class", "poisonous")]),
    ]
}

/// [`mushroom_records`] with every record repeated `times` times in place.
pub fn repeated_mushroom_records(times: usize) -> Vec<Record> {
    mushroom_records()
        .into_iter()
        .flat_map(|r| std::iter::repeat(r).take(times))
        .collect()
}

/// Three edible records over `shape`, `odor`, `ring` and `class`.
///
/// In this order they share one cluster. Swapping the last two
/// ([`order_sensitive_records_swapped`]) yields two clusters.
pub fn order_sensitive_records() -> Vec<Record> {
    vec![
        record(&[("shape", "bell"), ("odor", "almond"), ("ring", "pendant"), ("class", "edible")]),
        record(&[("shape", "bell"), ("odor", "almond"), ("ring", "flaring"), ("class", "edible")]),
        record(&[("shape", "bell"), ("odor", "anise"), ("ring", "flaring"), ("class", "edible")]),
    ]
}

/// [`order_sensitive_records`] with the last two records swapped.
pub fn order_sensitive_records_swapped() -> Vec<Record> {
    let mut records = order_sensitive_records();
    records.swap(1, 2);
    records
}
