//! Seeded sampling must be reproducible.

use proptest::test_runner::TestCaseError;

use crate::{EdgeKey, NodeType};

use super::{strategies::build_sampler, types::SamplingFixture};

type Snapshot = (Vec<NodeType>, Vec<EdgeKey>);

fn snapshot(fixture: &SamplingFixture) -> Result<Option<Snapshot>, TestCaseError> {
    let Some(mut sampler) = build_sampler(fixture).map_err(TestCaseError::fail)? else {
        return Ok(None);
    };
    let keys = sampler
        .sample_edges()
        .map_err(|err| TestCaseError::fail(format!("sampling failed: {err}")))?
        .iter()
        .map(|edge| edge.key())
        .collect();
    let types = sampler.nodes().iter().map(|node| node.node_type()).collect();
    Ok(Some((types, keys)))
}

/// Samples `fixture` twice and requires identical node types and edges.
pub(super) fn run_reproducibility_property(
    fixture: &SamplingFixture,
) -> Result<(), TestCaseError> {
    let first = snapshot(fixture)?;
    let second = snapshot(fixture)?;
    if first != second {
        return Err(TestCaseError::fail(format!(
            "seed {} produced different graphs",
            fixture.seed
        )));
    }
    Ok(())
}
