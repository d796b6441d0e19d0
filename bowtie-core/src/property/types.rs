//! Fixture types for sampling property tests.

use test_strategy::Arbitrary;

use crate::{NodeType, TypeDistribution};

/// Node type table used to draw the fixture's nodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum TypeRegime {
    /// The web-measured default table.
    #[weight(3)]
    Web,
    /// Almost every node in the core.
    #[weight(2)]
    CoreHeavy,
    /// Periphery dominates, so most fresh samples are rejected.
    #[weight(2)]
    Periphery,
    /// Core and disconnected nodes only.
    #[weight(1)]
    Split,
    /// Core nodes only; every edge is reciprocity-eligible.
    #[weight(1)]
    CoreOnly,
}

impl TypeRegime {
    pub(super) fn distribution(self) -> TypeDistribution {
        let weights: &[(NodeType, f64)] = match self {
            Self::Web => return TypeDistribution::default(),
            Self::CoreHeavy => &[
                (NodeType::Gscc, 0.95),
                (NodeType::Gout, 0.02),
                (NodeType::Gin, 0.02),
                (NodeType::Dc, 0.01),
            ],
            Self::Periphery => &[
                (NodeType::Gscc, 0.2),
                (NodeType::Gout, 0.3),
                (NodeType::Gin, 0.3),
                (NodeType::Dc, 0.2),
            ],
            Self::Split => &[(NodeType::Gscc, 0.5), (NodeType::Dc, 0.5)],
            Self::CoreOnly => &[(NodeType::Gscc, 1.0)],
        };
        TypeDistribution::new(weights.iter().copied())
            .unwrap_or_else(|err| panic!("{self:?} table must be valid: {err}"))
    }
}

/// Sampler parameters drawn for one property case.
#[derive(Clone, Copy, Debug)]
pub(super) struct SamplingFixture {
    pub regime: TypeRegime,
    pub node_count: usize,
    pub density: f64,
    pub reciprocity_rate: f64,
    pub seed: u64,
}
