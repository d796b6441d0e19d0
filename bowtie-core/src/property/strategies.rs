//! Strategy builders for sampling property tests.

use proptest::prelude::*;

use crate::{BowtieError, GraphSampler};

use super::types::{SamplingFixture, TypeRegime};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 40;

/// Generates fixtures over every regime, biasing the reciprocity rate towards
/// its endpoints.
pub(super) fn sampling_fixture_strategy() -> impl Strategy<Value = SamplingFixture> {
    let rate = prop_oneof![
        1 => Just(0.0),
        1 => Just(1.0),
        3 => 0.0_f64..=1.0,
    ];
    (
        any::<TypeRegime>(),
        MIN_NODES..=MAX_NODES,
        0.01_f64..=0.6,
        rate,
        any::<u64>(),
    )
        .prop_map(
            |(regime, node_count, density, reciprocity_rate, seed)| SamplingFixture {
                regime,
                node_count,
                density,
                reciprocity_rate,
                seed,
            },
        )
}

/// Builds a sampler for `fixture`, or `None` when the drawn node types cannot
/// hold the requested edge count.
pub(super) fn build_sampler(fixture: &SamplingFixture) -> Result<Option<GraphSampler>, String> {
    match GraphSampler::builder()
        .with_node_count(fixture.node_count)
        .with_connectivity_density(fixture.density)
        .with_reciprocity_rate(fixture.reciprocity_rate)
        .with_type_distribution(fixture.regime.distribution())
        .with_seed(fixture.seed)
        .build()
    {
        Ok(sampler) => Ok(Some(sampler)),
        Err(BowtieError::InfeasibleEdgeTarget { .. }) => Ok(None),
        Err(err) => Err(format!("unexpected build failure for {fixture:?}: {err}")),
    }
}
