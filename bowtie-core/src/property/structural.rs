//! Structural invariants of a sampled edge set.

use std::collections::HashSet;

use proptest::test_runner::TestCaseError;

use crate::{EdgeKey, NodeType, check_constraints, target_edge_count};

use super::{strategies::build_sampler, types::SamplingFixture};

/// Samples `fixture` and checks every structural guarantee of the result.
pub(super) fn run_structural_invariants_property(
    fixture: &SamplingFixture,
) -> Result<(), TestCaseError> {
    let Some(mut sampler) = build_sampler(fixture).map_err(TestCaseError::fail)? else {
        return Ok(());
    };
    let expected = target_edge_count(fixture.density, fixture.node_count);
    let edges = sampler
        .sample_edges()
        .map_err(|err| TestCaseError::fail(format!("sampling failed: {err}")))?
        .to_vec();

    if edges.len() != expected {
        return Err(TestCaseError::fail(format!(
            "expected {expected} edges, sampled {}",
            edges.len()
        )));
    }

    let mut keys: HashSet<EdgeKey> = HashSet::with_capacity(edges.len());
    for edge in &edges {
        let source = edge.source().node_type();
        let destination = edge.destination().node_type();
        if let Err(violation) = check_constraints(source, destination) {
            return Err(TestCaseError::fail(format!(
                "edge {edge} breaks a constraint: {violation}"
            )));
        }
        if edge.source().name() == edge.destination().name() {
            return Err(TestCaseError::fail(format!("self-loop {edge}")));
        }
        let core_pair = source == NodeType::Gscc && destination == NodeType::Gscc;
        if edge.is_reciprocal_eligible() != core_pair {
            return Err(TestCaseError::fail(format!(
                "edge {edge} has eligibility {} but joins {source} -> {destination}",
                edge.is_reciprocal_eligible()
            )));
        }
        if !keys.insert(edge.key()) {
            return Err(TestCaseError::fail(format!("duplicate key {}", edge.key())));
        }
    }

    let counters = sampler.counters();
    if counters.accepted() != edges.len() {
        return Err(TestCaseError::fail(format!(
            "counters report {} accepted edges for {} sampled",
            counters.accepted(),
            edges.len()
        )));
    }
    if fixture.reciprocity_rate == 0.0 && counters.reciprocal_accepted != 0 {
        return Err(TestCaseError::fail(
            "reciprocal path taken with a zero reciprocity rate",
        ));
    }
    Ok(())
}
