//! Errors raised while preparing benchmark inputs.

use bowtie_core::BowtieError;
use thiserror::Error;

/// Failure to construct or sample the graph a benchmark measures.
#[derive(Debug, Error)]
pub enum BenchSetupError {
    /// The sampler rejected the benchmark parameters.
    #[error("sampler setup failed: {0}")]
    Sampler(#[from] BowtieError),
}
