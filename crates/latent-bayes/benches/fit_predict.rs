//! Fitting and prediction benchmarks.
//!
//! Benchmarks cover:
//! - Fitting at different training set sizes
//! - Batch prediction, sequential vs parallel
//!
//! HTML reports are generated in `target/criterion/`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use latent_bayes::testing::data::{observations, random_records};
use latent_bayes::{FitConfig, LatentBayesModel};

// =============================================================================
// Fitting
// =============================================================================

fn bench_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit");

    for rows in [1_000usize, 5_000, 20_000] {
        let records = random_records(rows, 12, 6, 8, 0.8, 42);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &records, |b, records| {
            b.iter(|| {
                LatentBayesModel::fit(black_box(records), "class", FitConfig::default()).unwrap()
            })
        });
    }

    group.finish();
}

// =============================================================================
// Prediction
// =============================================================================

fn bench_predict_batch(c: &mut Criterion) {
    let records = random_records(5_000, 12, 6, 8, 0.8, 42);
    let model = LatentBayesModel::fit(&records, "class", FitConfig::default()).unwrap();
    let queries = observations(&records, 8);

    let mut group = c.benchmark_group("predict_batch");
    group.throughput(Throughput::Elements(queries.len() as u64));

    for n_threads in [1usize, 0] {
        let name = if n_threads == 1 { "sequential" } else { "parallel" };
        group.bench_function(name, |b| {
            b.iter(|| model.predict_batch(black_box(&queries), n_threads).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fit, bench_predict_batch);
criterion_main!(benches);
