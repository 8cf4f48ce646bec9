use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use hold_rs::comparison::compare_outcomes;
use hold_rs::entities::LoadingInstance;
use hold_rs::manifest::CargoManifest;
use hold_rs::strategies::{StrategyId, compute_sequence};
use rand::prelude::SmallRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

criterion_main!(benches);
criterion_group!(benches, strategy_bench, comparison_bench);

const N_ITEMS: [usize; 3] = [10, 100, 1000];

/// Random cargo list whose total weight is roughly twice the capacity, so both strategies stop halfway
fn create_instance(n_items: usize, seed: u64) -> LoadingInstance {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut manifest = CargoManifest::new(0.0);
    let mut total_weight = 0.0;
    for i in 0..n_items {
        let weight = rng.random_range(1.0..50.0);
        let profit = rng.random_range(0.0..500.0);
        total_weight += weight;
        manifest.add(format!("cargo {i}"), weight, profit).unwrap();
    }
    manifest.set_capacity(total_weight / 2.0);
    manifest.freeze()
}

/// Benchmark the full recomputation of a sequence, as done whenever a simulation starts
fn strategy_bench(c: &mut Criterion) {
    for strategy in StrategyId::ALL {
        let mut group = c.benchmark_group(format!("{strategy}_sequence"));
        for n_items in N_ITEMS {
            let instance = create_instance(n_items, 0);
            group.bench_function(BenchmarkId::from_parameter(n_items), |b| {
                b.iter(|| compute_sequence(strategy, black_box(&instance)))
            });
        }
        group.finish();
    }
}

fn comparison_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_outcomes");
    for n_items in N_ITEMS {
        let instance = create_instance(n_items, 0);
        let greedy = compute_sequence(StrategyId::Greedy, &instance);
        let naive = compute_sequence(StrategyId::Naive, &instance);
        group.bench_function(BenchmarkId::from_parameter(n_items), |b| {
            b.iter(|| compare_outcomes(black_box(&greedy), black_box(&naive)))
        });
    }
    group.finish();
}
