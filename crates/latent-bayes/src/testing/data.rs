//! Seeded synthetic categorical data.

use rand::prelude::*;

use crate::data::Record;

/// Name of the label attribute in generated records.
pub const LABEL: &str = "class";

/// Generate records drawn from `n_groups` hidden prototypes.
///
/// Each record picks a group, then every one of `n_attributes` observable
/// attributes (`a0`, `a1`, ...) takes the group's prototype value with
/// probability `purity` and a uniform value out of `n_values` otherwise. The
/// label `class` is `c{group}`, flipped to a random group with the same noise.
pub fn random_records(
    rows: usize,
    n_attributes: usize,
    n_values: usize,
    n_groups: usize,
    purity: f64,
    seed: u64,
) -> Vec<Record> {
    assert!(n_values > 0 && n_groups > 0);
    assert!((0.0..=1.0).contains(&purity));
    let mut rng = StdRng::seed_from_u64(seed);

    let prototypes: Vec<Vec<usize>> = (0..n_groups)
        .map(|_| (0..n_attributes).map(|_| rng.gen_range(0..n_values)).collect())
        .collect();

    (0..rows)
        .map(|_| {
            let group = rng.gen_range(0..n_groups);
            let mut record = Record::new();
            for (attr, &proto) in prototypes[group].iter().enumerate() {
                let value = if rng.gen_bool(purity) {
                    proto
                } else {
                    rng.gen_range(0..n_values)
                };
                record.insert(format!("a{attr}"), format!("v{value}"));
            }
            let label = if rng.gen_bool(purity) {
                group
            } else {
                rng.gen_range(0..n_groups)
            };
            record.insert(LABEL, format!("c{label}"));
            record
        })
        .collect()
}

/// Deterministic train/valid split of `records`.
///
/// Returns `(train, valid)`.
pub fn split_records(
    records: &[Record],
    valid_fraction: f64,
    seed: u64,
) -> (Vec<Record>, Vec<Record>) {
    assert!((0.0..1.0).contains(&valid_fraction));
    let mut idx: Vec<usize> = (0..records.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    idx.shuffle(&mut rng);

    let valid_len = ((records.len() as f64) * valid_fraction).round() as usize;
    let (valid, train) = idx.split_at(valid_len.min(records.len()));
    let pick = |ids: &[usize]| -> Vec<Record> {
        ids.iter().map(|&i| records[i].clone()).collect()
    };
    (pick(train), pick(valid))
}

/// Drop the label from every record, keeping the first `keep` observable
/// attributes.
pub fn observations(records: &[Record], keep: usize) -> Vec<Record> {
    records
        .iter()
        .map(|r| r.without(LABEL).iter().take(keep).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_seeded() {
        let a = random_records(50, 4, 3, 2, 0.8, 7);
        let b = random_records(50, 4, 3, 2, 0.8, 7);
        assert_eq!(a, b);
        assert_eq!(a[0].len(), 5);
        assert!(a.iter().all(|r| r.contains(LABEL)));
    }

    #[test]
    fn split_partitions_records() {
        let records = random_records(20, 2, 2, 2, 0.9, 1);
        let (train, valid) = split_records(&records, 0.25, 3);
        assert_eq!(train.len(), 15);
        assert_eq!(valid.len(), 5);
    }

    #[test]
    fn observations_drop_label() {
        let records = random_records(3, 4, 3, 2, 0.8, 2);
        let obs = observations(&records, 2);
        assert!(obs.iter().all(|r| r.len() == 2 && !r.contains(LABEL)));
        assert_eq!(obs[0].get("a0"), records[0].get("a0"));
    }
}
