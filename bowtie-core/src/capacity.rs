//! Counting the distinct valid edges a node population admits.
//!
//! Sources may be `GSCC` or `GIN`, destinations `GSCC` or `GOUT`, and `DC`
//! nodes pair only among themselves. With `g`, `o`, `i`, `d` nodes of each
//! type the valid directed edges number `(g + i)(g + o) - g + d(d - 1)`; the
//! `- g` removes the `GSCC` self-loops.

use crate::node::{Node, NodeType};

/// Per-type node tallies.
///
/// # Examples
/// ```
/// use bowtie_core::{Node, NodeType, TypeCounts};
///
/// let nodes = [Node::new("0", NodeType::Gscc), Node::new("1", NodeType::Dc)];
/// let counts = TypeCounts::from_nodes(&nodes);
/// assert_eq!(counts.get(NodeType::Gscc), 1);
/// assert_eq!(counts.total(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TypeCounts {
    counts: [usize; NodeType::ALL.len()],
}

impl TypeCounts {
    /// Tallies the types of `nodes`.
    #[must_use]
    pub fn from_nodes(nodes: &[Node]) -> Self {
        nodes.iter().map(Node::node_type).collect()
    }

    /// Returns the number of nodes of `node_type`.
    #[must_use]
    pub const fn get(&self, node_type: NodeType) -> usize {
        self.counts[node_type.index()]
    }

    /// Returns the number of tallied nodes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Returns `(type, count)` pairs in canonical order, skipping absent
    /// types.
    pub fn present(&self) -> impl Iterator<Item = (NodeType, usize)> + '_ {
        NodeType::ALL
            .into_iter()
            .map(|node_type| (node_type, self.get(node_type)))
            .filter(|&(_, count)| count > 0)
    }

    /// Number of distinct valid directed edges between the tallied nodes.
    ///
    /// Saturates at `usize::MAX` rather than overflowing.
    ///
    /// # Examples
    /// ```
    /// use bowtie_core::{Node, NodeType, TypeCounts};
    ///
    /// let nodes: Vec<Node> = (0..4).map(|idx| Node::new(idx.to_string(), NodeType::Gscc)).collect();
    /// assert_eq!(TypeCounts::from_nodes(&nodes).feasible_edge_count(), 12);
    /// ```
    #[must_use]
    pub fn feasible_edge_count(&self) -> usize {
        let core = self.get(NodeType::Gscc);
        let sources = core.saturating_add(self.get(NodeType::Gin));
        let destinations = core.saturating_add(self.get(NodeType::Gout));
        let satellites = self.get(NodeType::Dc);
        sources
            .saturating_mul(destinations)
            .saturating_sub(core)
            .saturating_add(satellites.saturating_mul(satellites.saturating_sub(1)))
    }
}

impl FromIterator<NodeType> for TypeCounts {
    fn from_iter<I: IntoIterator<Item = NodeType>>(iter: I) -> Self {
        let mut counts = Self::default();
        for node_type in iter {
            counts.counts[node_type.index()] += 1;
        }
        counts
    }
}
