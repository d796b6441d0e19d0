//! Builder utilities for configuring [`GraphSampler`] instances.
//!
//! Validation happens eagerly in [`GraphSamplerBuilder::build`], including
//! the check that the requested edge count is reachable for the node types
//! actually drawn.

use rand::{SeedableRng, rngs::SmallRng};
use tracing::{debug, instrument};

use crate::{
    Result,
    capacity::TypeCounts,
    distribution::TypeDistribution,
    error::BowtieError,
    node::{Node, NodeType},
    sampler::GraphSampler,
};

/// Configures and constructs [`GraphSampler`] instances.
///
/// # Examples
/// ```
/// use bowtie_core::GraphSamplerBuilder;
///
/// let sampler = GraphSamplerBuilder::new()
///     .with_node_count(10)
///     .with_connectivity_density(0.1)
///     .with_reciprocity_rate(0.0)
///     .with_seed(7)
///     .build()
///     .expect("configuration is valid");
/// assert_eq!(sampler.nodes().len(), 10);
/// assert_eq!(sampler.target_edge_count(), 9);
/// ```
#[derive(Debug, Clone)]
pub struct GraphSamplerBuilder {
    node_count: usize,
    connectivity_density: f64,
    reciprocity_rate: f64,
    verbose: bool,
    seed: Option<u64>,
    type_distribution: TypeDistribution,
}

impl Default for GraphSamplerBuilder {
    fn default() -> Self {
        Self {
            node_count: Self::DEFAULT_NODE_COUNT,
            connectivity_density: Self::DEFAULT_CONNECTIVITY_DENSITY,
            reciprocity_rate: Self::DEFAULT_RECIPROCITY_RATE,
            verbose: false,
            seed: None,
            type_distribution: TypeDistribution::default(),
        }
    }
}

impl GraphSamplerBuilder {
    /// Node count used when none is configured.
    pub const DEFAULT_NODE_COUNT: usize = 7_000;
    /// Connectivity density used when none is configured.
    pub const DEFAULT_CONNECTIVITY_DENSITY: f64 = 0.003;
    /// Reciprocity rate used when none is configured.
    pub const DEFAULT_RECIPROCITY_RATE: f64 = 0.15;

    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use bowtie_core::GraphSamplerBuilder;
    ///
    /// let builder = GraphSamplerBuilder::new();
    /// assert_eq!(builder.node_count(), 7_000);
    /// assert_eq!(builder.connectivity_density(), 0.003);
    /// assert_eq!(builder.reciprocity_rate(), 0.15);
    /// assert!(!builder.verbose());
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of nodes to create.
    #[must_use]
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Overrides the fraction of the `n(n - 1)` possible directed edges to
    /// sample.
    #[must_use]
    pub fn with_connectivity_density(mut self, density: f64) -> Self {
        self.connectivity_density = density;
        self
    }

    /// Returns the configured connectivity density.
    #[must_use]
    pub fn connectivity_density(&self) -> f64 {
        self.connectivity_density
    }

    /// Overrides the probability of taking the reciprocal path on each
    /// iteration.
    #[must_use]
    pub fn with_reciprocity_rate(mut self, rate: f64) -> Self {
        self.reciprocity_rate = rate;
        self
    }

    /// Returns the configured reciprocity rate.
    #[must_use]
    pub fn reciprocity_rate(&self) -> f64 {
        self.reciprocity_rate
    }

    /// Enables a diagnostic event for every rejected fresh sample.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns whether rejection diagnostics are enabled.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Seeds the sampler's random stream to make node types and edges
    /// reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Replaces the node type table.
    ///
    /// # Examples
    /// ```
    /// use bowtie_core::{GraphSamplerBuilder, NodeType, TypeDistribution};
    ///
    /// let only_core = TypeDistribution::new([(NodeType::Gscc, 1.0)]).expect("valid table");
    /// let sampler = GraphSamplerBuilder::new()
    ///     .with_node_count(4)
    ///     .with_connectivity_density(1.0)
    ///     .with_type_distribution(only_core)
    ///     .build()
    ///     .expect("configuration is valid");
    /// assert!(sampler.nodes().iter().all(|node| node.node_type() == NodeType::Gscc));
    /// ```
    #[must_use]
    pub fn with_type_distribution(mut self, distribution: TypeDistribution) -> Self {
        self.type_distribution = distribution;
        self
    }

    /// Returns the configured node type table.
    #[must_use]
    pub fn type_distribution(&self) -> &TypeDistribution {
        &self.type_distribution
    }

    /// Validates the configuration, draws the nodes, and constructs a
    /// [`GraphSampler`].
    ///
    /// # Errors
    /// Returns [`BowtieError::InsufficientNodes`] for fewer than two nodes,
    /// [`BowtieError::InvalidConnectivityDensity`] or
    /// [`BowtieError::InvalidReciprocityRate`] for out-of-range fractions, and
    /// [`BowtieError::InfeasibleEdgeTarget`] when the drawn node types admit
    /// fewer distinct valid edges than the density requests.
    #[instrument(
        name = "core.build_sampler",
        err,
        skip(self),
        fields(
            node_count = self.node_count,
            connectivity_density = self.connectivity_density,
            reciprocity_rate = self.reciprocity_rate,
            seeded = self.seed.is_some(),
        ),
    )]
    pub fn build(self) -> Result<GraphSampler> {
        self.validate()?;

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let nodes: Vec<Node> = (0..self.node_count)
            .map(|index| Node::sample(index.to_string(), &self.type_distribution, &mut rng))
            .collect();

        let counts = TypeCounts::from_nodes(&nodes);
        debug!(
            gscc = counts.get(NodeType::Gscc),
            gout = counts.get(NodeType::Gout),
            gin = counts.get(NodeType::Gin),
            dc = counts.get(NodeType::Dc),
            "node types drawn"
        );

        let target = target_edge_count(self.connectivity_density, self.node_count);
        let feasible = counts.feasible_edge_count();
        if target > feasible {
            return Err(BowtieError::InfeasibleEdgeTarget { target, feasible });
        }

        Ok(GraphSampler::from_parts(
            nodes,
            target,
            self.reciprocity_rate,
            self.verbose,
            rng,
        ))
    }

    fn validate(&self) -> Result<()> {
        if self.node_count < 2 {
            return Err(BowtieError::InsufficientNodes {
                got: self.node_count,
            });
        }
        let density = self.connectivity_density;
        if !density.is_finite() || density <= 0.0 || density > 1.0 {
            return Err(BowtieError::InvalidConnectivityDensity { got: density });
        }
        let rate = self.reciprocity_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(BowtieError::InvalidReciprocityRate { got: rate });
        }
        Ok(())
    }
}

/// Computes `floor(density * n * (n - 1))`, the density-scaled edge count of
/// a simple directed graph on `node_count` nodes.
///
/// # Examples
/// ```
/// use bowtie_core::target_edge_count;
///
/// assert_eq!(target_edge_count(0.3, 10), 27);
/// assert_eq!(target_edge_count(1.0, 4), 12);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_arithmetic,
    reason = "the edge target is defined as the floor of a real-valued product"
)]
#[must_use]
pub fn target_edge_count(density: f64, node_count: usize) -> usize {
    let nodes = node_count as f64;
    let pairs = node_count.saturating_sub(1) as f64;
    (density * nodes * pairs).floor() as usize
}
