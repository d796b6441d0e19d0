//! Benchmark parameter types.

use std::fmt;

use bowtie_core::{GraphSampler, GraphSamplerBuilder};

use crate::error::BenchSetupError;

/// Parameters for one edge-sampling benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct SamplingBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Fraction of possible directed edges to sample.
    pub density: f64,
    /// Probability of the reciprocal path.
    pub reciprocity_rate: f64,
    /// Seed for node types and edges.
    pub seed: u64,
}

impl SamplingBenchParams {
    /// Returns a seeded builder configured with these parameters.
    ///
    /// # Examples
    /// ```
    /// use bowtie_benches::params::SamplingBenchParams;
    ///
    /// let params = SamplingBenchParams {
    ///     node_count: 500,
    ///     density: 0.003,
    ///     reciprocity_rate: 0.15,
    ///     seed: 42,
    /// };
    /// assert_eq!(params.builder().node_count(), 500);
    /// assert_eq!(params.to_string(), "n=500,d=0.003,r=0.15");
    /// ```
    #[must_use]
    pub fn builder(&self) -> GraphSamplerBuilder {
        GraphSampler::builder()
            .with_node_count(self.node_count)
            .with_connectivity_density(self.density)
            .with_reciprocity_rate(self.reciprocity_rate)
            .with_seed(self.seed)
    }

    /// Builds the seeded sampler for these parameters.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Sampler`] when the parameters are rejected.
    pub fn build_sampler(&self) -> Result<GraphSampler, BenchSetupError> {
        Ok(self.builder().build()?)
    }

    /// Builds the seeded sampler and samples its edges.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Sampler`] when construction or sampling
    /// fails.
    pub fn sampled(&self) -> Result<GraphSampler, BenchSetupError> {
        let mut sampler = self.build_sampler()?;
        sampler.sample_edges()?;
        Ok(sampler)
    }
}

impl fmt::Display for SamplingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},d={},r={}",
            self.node_count, self.density, self.reciprocity_rate
        )
    }
}
