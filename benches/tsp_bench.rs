//! Criterion benchmarks for the TSP engines.
//!
//! Uses seeded random instances so every run measures the same work.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::distance::DistanceModel;
use u_tsp::pso::{ParticleSwarm, PsoConfig};
use u_tsp::sa::{SaConfig, SimulatedAnnealing};
use u_tsp::tabu::{TabuConfig, TabuSearch};
use u_tsp::vnd::{VariableNeighborhoodDescent, VndConfig};

const SIZES: [usize; 3] = [10, 30, 60];

fn instance(size: usize) -> DistanceModel {
    DistanceModel::random_seeded(size, 10..99, 42).expect("valid instance")
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for &n in &SIZES {
        let model = instance(n);
        let config = TabuConfig::default().with_iterations(200).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(model, config), |b, (m, c)| {
            b.iter(|| {
                let search = TabuSearch::new(black_box(m), c.clone()).expect("valid");
                black_box(search.run())
            })
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    for &n in &SIZES {
        let model = instance(n);
        let config = SaConfig::default().with_cooling_rate(0.001).with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(model, config), |b, (m, c)| {
            b.iter(|| {
                let sa = SimulatedAnnealing::new(black_box(m), c.clone()).expect("valid");
                black_box(sa.run())
            })
        });
    }
    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso");
    group.sample_size(10);

    for &n in &SIZES {
        let model = instance(n);
        let config = PsoConfig::default().with_iterations(20).with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}", n, config.particles), n),
            &(model, config),
            |b, (m, c)| {
                b.iter(|| {
                    let swarm = ParticleSwarm::new(black_box(m), c.clone()).expect("valid");
                    black_box(swarm.run())
                })
            },
        );
    }
    group.finish();
}

fn bench_vnd(c: &mut Criterion) {
    let mut group = c.benchmark_group("vnd");
    group.sample_size(10);

    for &n in &SIZES {
        let model = instance(n);
        let config = VndConfig::default().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(model, config), |b, (m, c)| {
            b.iter(|| {
                let vnd = VariableNeighborhoodDescent::new(black_box(m), c.clone()).expect("valid");
                black_box(vnd.run())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_tabu, bench_sa, bench_pso, bench_vnd);
criterion_main!(benches);
