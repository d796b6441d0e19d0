use bowtie_core::{BowtieError, GraphSampler, GraphSamplerBuilder, NodeType, TypeDistribution};

/// Seeds tried before a scenario gives up on finding a feasible node draw.
pub const SEED_ATTEMPTS: u64 = 64;

/// Type table placing every node in the core.
#[must_use]
pub fn core_only() -> TypeDistribution {
    TypeDistribution::new([(NodeType::Gscc, 1.0)]).expect("single-type table is valid")
}

/// Builds samplers from `builder` over successive seeds, skipping draws whose
/// node types cannot hold the edge target.
pub fn feasible_samplers(builder: GraphSamplerBuilder) -> impl Iterator<Item = GraphSampler> {
    (0..SEED_ATTEMPTS).filter_map(move |seed| {
        match builder.clone().with_seed(seed).build() {
            Ok(sampler) => Some(sampler),
            Err(BowtieError::InfeasibleEdgeTarget { .. }) => None,
            Err(err) => panic!("unexpected build failure for seed {seed}: {err}"),
        }
    })
}
