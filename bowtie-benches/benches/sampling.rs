//! Edge sampling and statistics benchmarks.
//!
//! `sample_edges` measures node drawing plus rejection sampling from a fresh
//! seeded sampler per iteration. `statistics` measures reciprocity and type
//! distribution over an already sampled graph.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

use bowtie_benches::{error::BenchSetupError, params::SamplingBenchParams};
use bowtie_core::GraphStatistics;

/// Seed used for every benchmark graph.
const SEED: u64 = 42;

/// Node counts to benchmark.
const NODE_COUNTS: &[usize] = &[500, 1_000, 2_000];

const DENSITY: f64 = 0.003;
const RECIPROCITY_RATE: f64 = 0.15;

fn params_for(node_count: usize) -> SamplingBenchParams {
    SamplingBenchParams {
        node_count,
        density: DENSITY,
        reciprocity_rate: RECIPROCITY_RATE,
        seed: SEED,
    }
}

fn sample_edges_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("sample_edges");
    group.sample_size(20);

    for &node_count in NODE_COUNTS {
        let params = params_for(node_count);
        params.sampled()?;

        group.bench_with_input(BenchmarkId::from_parameter(params), &params, |b, params| {
            b.iter_batched(
                || match params.build_sampler() {
                    Ok(sampler) => sampler,
                    Err(err) => panic!("sampler setup failed for {params}: {err}"),
                },
                |mut sampler| match sampler.sample_edges() {
                    Ok(edges) => edges.len(),
                    Err(err) => panic!("edge sampling failed for {params}: {err}"),
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
    Ok(())
}

fn statistics_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("statistics");

    for &node_count in NODE_COUNTS {
        let params = params_for(node_count);
        let sampler = params.sampled()?;

        group.bench_with_input(
            BenchmarkId::from_parameter(params),
            &sampler,
            |b, sampler| {
                b.iter(|| GraphStatistics::compute(sampler.nodes(), sampler.edges()));
            },
        );
    }

    group.finish();
    Ok(())
}

fn sample_edges(c: &mut Criterion) {
    if let Err(err) = sample_edges_impl(c) {
        panic!("sample_edges benchmark setup failed: {err}");
    }
}

fn statistics(c: &mut Criterion) {
    if let Err(err) = statistics_impl(c) {
        panic!("statistics benchmark setup failed: {err}");
    }
}

criterion_group!(benches, sample_edges, statistics);
criterion_main!(benches);
