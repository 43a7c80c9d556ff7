//! Benchmarks for the simulation module (population steps and full runs).

use allevo_sim::evolution::{ReproductionPolicy, SurvivalPolicy};
use allevo_sim::simulation::{Population, Simulation, SimulationConfig};
use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;

fn create_config(initial_population: usize, generations: usize, capacity: usize) -> SimulationConfig {
    SimulationConfig {
        initial_population,
        generations,
        carrying_capacity: capacity,
        seed: Some(42),
        ..Default::default()
    }
}

/// Benchmark one survival pass over populations of increasing size
fn bench_selection(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection");
    let policy = SurvivalPolicy::new(0.99, 0.95, 0.8).unwrap();

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
            b.iter_batched(
                || Population::heterozygous(n),
                |mut pop| {
                    pop.select(&policy, &mut rng);
                    black_box(pop)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

/// Benchmark pairing plus reproduction
fn bench_reproduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reproduction");
    let policy = ReproductionPolicy::new(2.5, 0.5).unwrap();

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &n| {
            let pop = Population::heterozygous(n);
            let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
            b.iter(|| {
                let pairs = pop.mating_pairs(&mut rng);
                black_box(pop.reproduce(&pairs, &policy, &mut rng))
            });
        });
    }
    group.finish();
}

/// Benchmark complete runs at the reference parameters and at larger capacities
fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_run");
    group.sample_size(20);

    for capacity in [1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("capacity", capacity), &capacity, |b, &cap| {
            b.iter_batched(
                || Simulation::new(create_config(100, 20, cap)).unwrap(),
                |mut sim| {
                    sim.run().unwrap();
                    black_box(sim.into_history())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_selection, bench_reproduction, bench_full_run);
criterion_main!(benches);
