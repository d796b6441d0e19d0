//! Edge sampling for the bow-tie model.
//!
//! [`GraphSampler`] owns the node set, the random stream, the accepted edges,
//! the seen-key set, and the reciprocal candidate pool. Only the sampling loop
//! mutates them.
//!
//! Each iteration takes the reciprocal path with probability
//! `reciprocity_rate`, otherwise a fresh rejection sample. Candidates whose key
//! was already accepted are dropped without counting towards the target.
//! When every pooled edge already has its reverse accepted the reciprocal path
//! can only yield duplicates, so the iteration samples fresh instead.

use std::collections::HashSet;

use rand::{Rng, rngs::SmallRng, seq::SliceRandom};
use tracing::{error, info, instrument};

use crate::{
    Result,
    builder::GraphSamplerBuilder,
    edge::{Edge, EdgeKey},
    error::BowtieError,
    node::Node,
    statistics::GraphStatistics,
};

/// Tallies describing how the accepted edges were obtained.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SamplingCounters {
    /// Edges accepted from the fresh-sample path.
    pub fresh_accepted: usize,
    /// Edges accepted from the reciprocal path.
    pub reciprocal_accepted: usize,
    /// Node pairs discarded for breaking a constraint.
    pub rejected_samples: usize,
    /// Valid candidates discarded because their key was already accepted.
    pub duplicate_candidates: usize,
}

impl SamplingCounters {
    /// Total accepted edges across both paths.
    #[must_use]
    pub const fn accepted(&self) -> usize {
        self.fresh_accepted + self.reciprocal_accepted
    }
}

#[derive(Clone, Copy, Debug)]
enum Origin {
    Fresh,
    Reciprocal,
}

/// Samples a bow-tie graph with a target edge count and reciprocity rate.
///
/// # Examples
/// ```
/// use bowtie_core::GraphSampler;
///
/// let mut sampler = GraphSampler::builder()
///     .with_node_count(10)
///     .with_connectivity_density(0.1)
///     .with_reciprocity_rate(0.0)
///     .with_seed(11)
///     .build()
///     .expect("configuration is valid");
/// let edges = sampler.sample_edges().expect("sampling must succeed");
/// assert_eq!(edges.len(), 9);
/// ```
#[derive(Debug)]
pub struct GraphSampler {
    nodes: Vec<Node>,
    target_edge_count: usize,
    reciprocity_rate: f64,
    verbose: bool,
    rng: SmallRng,
    edges: Vec<Edge>,
    seen: HashSet<EdgeKey>,
    reciprocal_pool: Vec<usize>,
    unreciprocated: usize,
    counters: SamplingCounters,
}

impl GraphSampler {
    /// Builds an entropy-seeded sampler with the default type table.
    ///
    /// # Errors
    /// Returns the same errors as [`GraphSamplerBuilder::build`].
    ///
    /// # Examples
    /// ```
    /// use bowtie_core::{BowtieError, GraphSampler};
    ///
    /// let err = GraphSampler::new(1, 0.5, 0.5).expect_err("one node cannot hold an edge");
    /// assert!(matches!(err, BowtieError::InsufficientNodes { got: 1 }));
    /// ```
    pub fn new(node_count: usize, connectivity_density: f64, reciprocity_rate: f64) -> Result<Self> {
        GraphSamplerBuilder::new()
            .with_node_count(node_count)
            .with_connectivity_density(connectivity_density)
            .with_reciprocity_rate(reciprocity_rate)
            .build()
    }

    /// Returns a builder populated with default parameters.
    #[must_use]
    pub fn builder() -> GraphSamplerBuilder {
        GraphSamplerBuilder::new()
    }

    pub(crate) fn from_parts(
        nodes: Vec<Node>,
        target_edge_count: usize,
        reciprocity_rate: f64,
        verbose: bool,
        rng: SmallRng,
    ) -> Self {
        Self {
            nodes,
            target_edge_count,
            reciprocity_rate,
            verbose,
            rng,
            edges: Vec::with_capacity(target_edge_count),
            seen: HashSet::with_capacity(target_edge_count),
            reciprocal_pool: Vec::new(),
            unreciprocated: 0,
            counters: SamplingCounters::default(),
        }
    }

    /// Returns the nodes in creation order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges accepted so far in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the number of distinct edges sampling stops at.
    #[must_use]
    pub fn target_edge_count(&self) -> usize {
        self.target_edge_count
    }

    /// Returns the probability of taking the reciprocal path.
    #[must_use]
    pub fn reciprocity_rate(&self) -> f64 {
        self.reciprocity_rate
    }

    /// Returns whether rejection diagnostics are emitted.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Returns how the accepted edges were obtained.
    #[must_use]
    pub fn counters(&self) -> SamplingCounters {
        self.counters
    }

    /// Whether the target edge count has been reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.edges.len() >= self.target_edge_count
    }

    /// Computes reciprocity and type distribution over the current graph.
    #[must_use]
    pub fn statistics(&self) -> GraphStatistics {
        GraphStatistics::compute(&self.nodes, &self.edges)
    }

    /// Samples edges until the target count of distinct edges is accepted.
    ///
    /// Calling this on a complete sampler returns the existing edges without
    /// drawing anything.
    ///
    /// # Errors
    /// Returns [`BowtieError::ReciprocalConstruction`] if the reverse of a
    /// pooled edge fails validation. Pooled edges join `GSCC` nodes, so this
    /// signals a broken invariant rather than an input problem.
    pub fn sample_edges(&mut self) -> Result<&[Edge]> {
        self.run_sampling()?;
        Ok(&self.edges)
    }

    #[instrument(
        name = "core.sample_edges",
        err,
        skip(self),
        fields(
            target = self.target_edge_count,
            nodes = self.nodes.len(),
            reciprocity_rate = self.reciprocity_rate,
        ),
    )]
    fn run_sampling(&mut self) -> Result<()> {
        if self.is_complete() {
            return Ok(());
        }

        while self.edges.len() < self.target_edge_count {
            let (candidate, origin) = self.next_candidate()?;
            self.offer(candidate, origin);
        }

        info!(
            accepted = self.edges.len(),
            fresh = self.counters.fresh_accepted,
            reciprocal = self.counters.reciprocal_accepted,
            rejected = self.counters.rejected_samples,
            duplicates = self.counters.duplicate_candidates,
            "edge sampling completed"
        );
        Ok(())
    }

    fn next_candidate(&mut self) -> Result<(Edge, Origin)> {
        let wants_reciprocal = self.rng.gen_bool(self.reciprocity_rate);
        if wants_reciprocal && self.unreciprocated > 0 {
            if let Some(&index) = self.reciprocal_pool.choose(&mut self.rng) {
                let pooled = &self.edges[index];
                let edge = pooled.reciprocal().map_err(|violation| {
                    let key = pooled.key();
                    error!(edge = %key, %violation, "reciprocal construction failed");
                    BowtieError::ReciprocalConstruction {
                        edge: key,
                        violation,
                    }
                })?;
                return Ok((edge, Origin::Reciprocal));
            }
        }
        Ok((self.fresh_sample(), Origin::Fresh))
    }

    /// Draws ordered pairs of distinct nodes until one forms a valid edge.
    fn fresh_sample(&mut self) -> Edge {
        let node_count = self.nodes.len();
        loop {
            let first = self.rng.gen_range(0..node_count);
            let mut second = self.rng.gen_range(0..node_count - 1);
            if second >= first {
                second += 1;
            }

            let source = &self.nodes[first];
            let destination = &self.nodes[second];
            match Edge::try_new(source.clone(), destination.clone()) {
                Ok(edge) => return edge,
                Err(violation) => {
                    self.counters.rejected_samples += 1;
                    record_rejection();
                    if self.verbose {
                        info!(
                            violation = %violation,
                            code = %violation.code(),
                            source = source.name(),
                            destination = destination.name(),
                            "resampling due to constraint violation"
                        );
                    }
                }
            }
        }
    }

    fn offer(&mut self, candidate: Edge, origin: Origin) {
        let key = candidate.key();
        if self.seen.contains(&key) {
            self.counters.duplicate_candidates += 1;
            record_duplicate();
            return;
        }

        if candidate.is_reciprocal_eligible() {
            if self.seen.contains(&key.reversed()) {
                self.unreciprocated = self.unreciprocated.saturating_sub(1);
            } else {
                self.unreciprocated += 1;
            }
            self.reciprocal_pool.push(self.edges.len());
        }

        self.seen.insert(key);
        self.edges.push(candidate);
        match origin {
            Origin::Fresh => self.counters.fresh_accepted += 1,
            Origin::Reciprocal => self.counters.reciprocal_accepted += 1,
        }
        record_acceptance();
    }
}

#[cfg(feature = "metrics")]
fn record_rejection() {
    metrics::counter!("bowtie_rejected_samples").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_rejection() {}

#[cfg(feature = "metrics")]
fn record_duplicate() {
    metrics::counter!("bowtie_duplicate_candidates").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_duplicate() {}

#[cfg(feature = "metrics")]
fn record_acceptance() {
    metrics::counter!("bowtie_accepted_edges").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_acceptance() {}
