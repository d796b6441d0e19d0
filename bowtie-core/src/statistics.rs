//! Read-only statistics over a sampled graph.
//!
//! These serve as a self-check on the sampler: the reciprocity rate should
//! track the configured rate and the type distribution should track the type
//! table.

use std::{collections::HashSet, fmt};

use crate::{
    capacity::TypeCounts,
    edge::{Edge, EdgeKey},
    node::{Node, NodeType},
};

/// Share of directed edges whose reverse is also present.
///
/// The rate is computed per directed edge, not per unordered node pair: a
/// mutual pair contributes two reciprocated edges.
///
/// # Examples
/// ```
/// use bowtie_core::{Edge, Node, NodeType, reciprocity_rate};
///
/// let a = Node::new("a", NodeType::Gscc);
/// let b = Node::new("b", NodeType::Gscc);
/// let c = Node::new("c", NodeType::Gscc);
/// let edges = [
///     Edge::try_new(a.clone(), b.clone()).expect("valid"),
///     Edge::try_new(b, a.clone()).expect("valid"),
///     Edge::try_new(a, c).expect("valid"),
/// ];
/// let rate = reciprocity_rate(&edges);
/// assert_eq!(rate.reciprocated(), 2);
/// assert_eq!(rate.to_string(), "66.67%");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReciprocityRate {
    reciprocated: usize,
    distinct: usize,
}

impl ReciprocityRate {
    /// Number of edges whose reverse key is present.
    #[must_use]
    pub const fn reciprocated(&self) -> usize {
        self.reciprocated
    }

    /// Number of distinct edge keys.
    #[must_use]
    pub const fn distinct(&self) -> usize {
        self.distinct
    }

    /// Reciprocated edges as a percentage of distinct keys; zero when there
    /// are no edges.
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "percentages are reported as real numbers"
    )]
    #[must_use]
    pub fn percentage(&self) -> f64 {
        if self.distinct == 0 {
            return 0.0;
        }
        self.reciprocated as f64 * 100.0 / self.distinct as f64
    }
}

impl fmt::Display for ReciprocityRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.percentage())
    }
}

/// Computes the reciprocity rate of `edges`.
#[must_use]
pub fn reciprocity_rate(edges: &[Edge]) -> ReciprocityRate {
    let keys: HashSet<EdgeKey> = edges.iter().map(Edge::key).collect();
    let reciprocated = edges
        .iter()
        .filter(|edge| keys.contains(&edge.key().reversed()))
        .count();
    ReciprocityRate {
        reciprocated,
        distinct: keys.len(),
    }
}

/// Percentage of nodes per observed type.
///
/// Types with no nodes are absent rather than reported at zero.
///
/// # Examples
/// ```
/// use bowtie_core::{Node, NodeType, type_distribution};
///
/// let nodes = [
///     Node::new("0", NodeType::Gscc),
///     Node::new("1", NodeType::Gscc),
///     Node::new("2", NodeType::Gout),
///     Node::new("3", NodeType::Dc),
///     Node::new("4", NodeType::Gscc),
/// ];
/// let report = type_distribution(&nodes);
/// assert_eq!(report.to_string(), "GSCC:60.00%\nGOUT:20.00%\nDC:20.00%");
/// assert_eq!(report.percentage(NodeType::Gin), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDistributionReport {
    entries: Vec<(NodeType, f64)>,
}

impl TypeDistributionReport {
    /// Observed `(type, percentage)` pairs in canonical type order.
    #[must_use]
    pub fn entries(&self) -> &[(NodeType, f64)] {
        &self.entries
    }

    /// Percentage for `node_type`, or `None` when no node has that type.
    #[must_use]
    pub fn percentage(&self, node_type: NodeType) -> Option<f64> {
        self.entries
            .iter()
            .find(|&&(candidate, _)| candidate == node_type)
            .map(|&(_, percentage)| percentage)
    }
}

impl fmt::Display for TypeDistributionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (node_type, percentage)) in self.entries.iter().enumerate() {
            if position > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{node_type}:{percentage:.2}%")?;
        }
        Ok(())
    }
}

/// Computes the share of each node type among `nodes`.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "percentages are reported as real numbers"
)]
#[must_use]
pub fn type_distribution(nodes: &[Node]) -> TypeDistributionReport {
    let counts = TypeCounts::from_nodes(nodes);
    let total = counts.total() as f64;
    let entries = counts
        .present()
        .map(|(node_type, count)| (node_type, count as f64 * 100.0 / total))
        .collect();
    TypeDistributionReport { entries }
}

/// Reciprocity and type distribution of one graph.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphStatistics {
    node_count: usize,
    edge_count: usize,
    reciprocity: ReciprocityRate,
    type_distribution: TypeDistributionReport,
}

impl GraphStatistics {
    /// Computes both statistics over the given graph.
    #[must_use]
    pub fn compute(nodes: &[Node], edges: &[Edge]) -> Self {
        Self {
            node_count: nodes.len(),
            edge_count: edges.len(),
            reciprocity: reciprocity_rate(edges),
            type_distribution: type_distribution(nodes),
        }
    }

    /// Number of nodes inspected.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Number of edges inspected.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Reciprocity of the edges.
    #[must_use]
    pub fn reciprocity(&self) -> ReciprocityRate {
        self.reciprocity
    }

    /// Type shares of the nodes.
    #[must_use]
    pub fn type_distribution(&self) -> &TypeDistributionReport {
        &self.type_distribution
    }
}
