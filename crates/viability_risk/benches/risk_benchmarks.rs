//! Criterion benchmarks for viability_risk.
//!
//! Benchmarks cover:
//! - Monte Carlo throughput, sequential versus chunked parallel execution
//! - Sensitivity analysis over the project model
//! - Three-scenario comparison

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::collections::BTreeMap;
use viability_risk::monte_carlo::{monte_carlo_simulation, DistributionSpec, MonteCarloConfig};
use viability_risk::{compare_scenarios, sensitivity_analysis, ParallelConfig, ProjectModel};

fn reference_model() -> ProjectModel {
    ProjectModel::new(500_000.0, 200_000.0, 50_000.0, 10, 0.10)
}

fn reference_distributions() -> BTreeMap<String, DistributionSpec> {
    BTreeMap::from([
        (
            "benefit_realization".to_string(),
            DistributionSpec::Uniform {
                low: 0.8,
                high: 1.2,
            },
        ),
        (
            "cost_overrun".to_string(),
            DistributionSpec::Triangular {
                low: 0.0,
                mode: 0.1,
                high: 0.3,
            },
        ),
        (
            "discount_rate".to_string(),
            DistributionSpec::Normal {
                mean: 0.10,
                std: 0.02,
            },
        ),
    ])
}

/// Benchmark Monte Carlo runs at several iteration counts.
fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    let model = reference_model();
    let distributions = reference_distributions();

    for iterations in [1_000_usize, 10_000, 100_000] {
        group.throughput(Throughput::Elements(iterations as u64));

        for (label, parallel) in [
            ("sequential", ParallelConfig::sequential()),
            ("parallel", ParallelConfig::new(1)),
        ] {
            let config = MonteCarloConfig::builder()
                .iterations(iterations)
                .seed(42)
                .parallel(parallel)
                .build()
                .expect("valid configuration");

            group.bench_with_input(BenchmarkId::new(label, iterations), &config, |b, config| {
                b.iter(|| {
                    monte_carlo_simulation(black_box(&model), black_box(&distributions), config)
                        .expect("simulation succeeds")
                });
            });
        }
    }

    group.finish();
}

/// Benchmark the four-parameter tornado.
fn bench_sensitivity(c: &mut Criterion) {
    let model = reference_model();
    let parameters = model.sensitivity_parameters();
    let base = model.npv();

    c.bench_function("sensitivity_tornado", |b| {
        b.iter(|| sensitivity_analysis(black_box(base), &parameters, black_box(20.0)))
    });
}

/// Benchmark the three-scenario comparison.
fn bench_compare_scenarios(c: &mut Criterion) {
    c.bench_function("compare_scenarios", |b| {
        b.iter(|| {
            compare_scenarios(
                black_box(500_000.0),
                black_box(50_000.0),
                black_box(200_000.0),
                black_box(10),
                black_box(0.10),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_monte_carlo,
    bench_sensitivity,
    bench_compare_scenarios
);
criterion_main!(benches);
