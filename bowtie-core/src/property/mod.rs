//! Property-based tests for edge sampling.
//!
//! Samples graphs across node type regimes, densities, and reciprocity rates,
//! then checks the structural guarantees of the result: every edge satisfies
//! the bow-tie constraints, keys are unique, the edge count matches the
//! target, and reciprocity eligibility is exactly the `GSCC -> GSCC` case.

mod reproducibility;
mod strategies;
mod structural;
mod tests;
mod types;
