//! Proptest and rstest entry points for the sampling properties.

use proptest::prelude::*;
use rstest::rstest;

use crate::test_utils::suite_proptest_config;

use super::{
    reproducibility::run_reproducibility_property,
    strategies::sampling_fixture_strategy,
    structural::run_structural_invariants_property,
    types::{SamplingFixture, TypeRegime},
};

proptest! {
    #![proptest_config(suite_proptest_config(128))]

    #[test]
    fn sampled_edges_satisfy_structural_invariants(fixture in sampling_fixture_strategy()) {
        run_structural_invariants_property(&fixture)?;
    }

    #[test]
    fn seeded_sampling_is_reproducible(fixture in sampling_fixture_strategy()) {
        run_reproducibility_property(&fixture)?;
    }
}

#[rstest]
#[case::web_sparse(TypeRegime::Web, 60, 0.05, 0.15, 42)]
#[case::web_no_reciprocity(TypeRegime::Web, 10, 0.3, 0.0, 7)]
#[case::core_heavy_full_reciprocity(TypeRegime::CoreHeavy, 30, 0.4, 1.0, 3)]
#[case::periphery(TypeRegime::Periphery, 40, 0.05, 0.5, 999)]
#[case::split(TypeRegime::Split, 24, 0.2, 0.3, 11)]
#[case::complete_core(TypeRegime::CoreOnly, 6, 1.0, 1.0, 5)]
fn structural_invariants_rstest(
    #[case] regime: TypeRegime,
    #[case] node_count: usize,
    #[case] density: f64,
    #[case] reciprocity_rate: f64,
    #[case] seed: u64,
) {
    let fixture = SamplingFixture {
        regime,
        node_count,
        density,
        reciprocity_rate,
        seed,
    };
    run_structural_invariants_property(&fixture).expect("structural invariants must hold");
    run_reproducibility_property(&fixture).expect("seeded sampling must be reproducible");
}
