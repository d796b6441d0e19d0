//! Directed edges and the validity rules that govern them.
//!
//! [`Edge::try_new`] is the only way to obtain an [`Edge`], so every edge in
//! existence satisfies the bow-tie constraints:
//!
//! 1. a `GOUT` node is never a source;
//! 2. a `GIN` node is never a destination;
//! 3. an edge never crosses the `DC` boundary in either direction.

use std::{fmt, sync::Arc};

use crate::{
    error::ConstraintViolation,
    node::{Node, NodeType},
};

/// Identity of a directed edge: the ordered pair of endpoint names.
///
/// # Examples
/// ```
/// use bowtie_core::{Edge, Node, NodeType};
///
/// let edge = Edge::try_new(Node::new("a", NodeType::Gin), Node::new("b", NodeType::Gscc))
///     .expect("GIN -> GSCC is valid");
/// assert_eq!(edge.key().to_string(), "a->b");
/// assert_eq!(edge.key().reversed().to_string(), "b->a");
/// ```
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeKey {
    source: Arc<str>,
    destination: Arc<str>,
}

impl EdgeKey {
    /// Creates a key from endpoint names.
    #[must_use]
    pub fn new(source: impl Into<Arc<str>>, destination: impl Into<Arc<str>>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Returns the source name.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the destination name.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the key of the edge pointing the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            source: Arc::clone(&self.destination),
            destination: Arc::clone(&self.source),
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.destination)
    }
}

/// A validated directed edge between two nodes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Edge {
    source: Node,
    destination: Node,
    reciprocal_eligible: bool,
}

impl Edge {
    /// Validates the pair and builds an edge from `source` to `destination`.
    ///
    /// # Errors
    /// Returns the first [`ConstraintViolation`] the pair breaks. Rules are
    /// checked in the order listed in the module documentation.
    ///
    /// # Examples
    /// ```
    /// use bowtie_core::{ConstraintViolation, Edge, Node, NodeType};
    ///
    /// let core = Node::new("0", NodeType::Gscc);
    /// let satellite = Node::new("1", NodeType::Dc);
    /// let err = Edge::try_new(core, satellite).expect_err("edge crosses the DC boundary");
    /// assert_eq!(err, ConstraintViolation::DisconnectedBoundary);
    /// ```
    pub fn try_new(source: Node, destination: Node) -> Result<Self, ConstraintViolation> {
        check_constraints(source.node_type(), destination.node_type())?;
        let reciprocal_eligible =
            source.node_type() == NodeType::Gscc && destination.node_type() == NodeType::Gscc;
        Ok(Self {
            source,
            destination,
            reciprocal_eligible,
        })
    }

    /// Builds the edge pointing the other way.
    ///
    /// Always succeeds for reciprocity-eligible edges, since both endpoints
    /// are `GSCC`.
    ///
    /// # Errors
    /// Returns the [`ConstraintViolation`] the reversed pair breaks.
    ///
    /// # Examples
    /// ```
    /// use bowtie_core::{Edge, Node, NodeType};
    ///
    /// let edge = Edge::try_new(Node::new("0", NodeType::Gscc), Node::new("1", NodeType::Gscc))
    ///     .expect("core edges are valid");
    /// let reverse = edge.reciprocal().expect("core edges reverse cleanly");
    /// assert_eq!(reverse.key(), edge.key().reversed());
    /// ```
    pub fn reciprocal(&self) -> Result<Self, ConstraintViolation> {
        Self::try_new(self.destination.clone(), self.source.clone())
    }

    /// Returns the source node.
    #[must_use]
    pub fn source(&self) -> &Node {
        &self.source
    }

    /// Returns the destination node.
    #[must_use]
    pub fn destination(&self) -> &Node {
        &self.destination
    }

    /// Whether both endpoints are `GSCC`, making the edge a reciprocal
    /// candidate.
    #[must_use]
    pub fn is_reciprocal_eligible(&self) -> bool {
        self.reciprocal_eligible
    }

    /// Returns the edge's identity key.
    #[must_use]
    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            source: self.source.shared_name(),
            destination: self.destination.shared_name(),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source.name(), self.destination.name())
    }
}

/// Checks the bow-tie rules for an edge between the given types.
///
/// # Errors
/// Returns the first broken rule.
///
/// # Examples
/// ```
/// use bowtie_core::{ConstraintViolation, NodeType, check_constraints};
///
/// assert!(check_constraints(NodeType::Gin, NodeType::Gout).is_ok());
/// assert_eq!(
///     check_constraints(NodeType::Gout, NodeType::Gscc),
///     Err(ConstraintViolation::GoutSource),
/// );
/// ```
pub const fn check_constraints(
    source: NodeType,
    destination: NodeType,
) -> Result<(), ConstraintViolation> {
    if matches!(source, NodeType::Gout) {
        return Err(ConstraintViolation::GoutSource);
    }
    if matches!(destination, NodeType::Gin) {
        return Err(ConstraintViolation::GinDestination);
    }
    if matches!(source, NodeType::Dc) != matches!(destination, NodeType::Dc) {
        return Err(ConstraintViolation::DisconnectedBoundary);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::node::NodeType::{Dc, Gin, Gout, Gscc};

    #[rstest]
    #[case::core_to_core(Gscc, Gscc, true)]
    #[case::core_to_out(Gscc, Gout, false)]
    #[case::in_to_core(Gin, Gscc, false)]
    #[case::in_to_out(Gin, Gout, false)]
    #[case::satellites(Dc, Dc, false)]
    fn valid_pairs_build_edges(
        #[case] source: NodeType,
        #[case] destination: NodeType,
        #[case] eligible: bool,
    ) {
        let edge = Edge::try_new(Node::new("s", source), Node::new("d", destination))
            .expect("pair satisfies every rule");
        assert_eq!(edge.is_reciprocal_eligible(), eligible);
        assert_eq!(edge.key(), EdgeKey::new("s", "d"));
    }

    #[rstest]
    #[case::out_source(Gout, Gscc, ConstraintViolation::GoutSource)]
    #[case::out_to_out(Gout, Gout, ConstraintViolation::GoutSource)]
    #[case::out_to_in(Gout, Gin, ConstraintViolation::GoutSource)]
    #[case::in_destination(Gscc, Gin, ConstraintViolation::GinDestination)]
    #[case::in_to_in(Gin, Gin, ConstraintViolation::GinDestination)]
    #[case::dc_to_in(Dc, Gin, ConstraintViolation::GinDestination)]
    #[case::core_to_dc(Gscc, Dc, ConstraintViolation::DisconnectedBoundary)]
    #[case::dc_to_core(Dc, Gscc, ConstraintViolation::DisconnectedBoundary)]
    #[case::in_to_dc(Gin, Dc, ConstraintViolation::DisconnectedBoundary)]
    #[case::dc_to_out(Dc, Gout, ConstraintViolation::DisconnectedBoundary)]
    fn invalid_pairs_report_first_broken_rule(
        #[case] source: NodeType,
        #[case] destination: NodeType,
        #[case] expected: ConstraintViolation,
    ) {
        let err = Edge::try_new(Node::new("s", source), Node::new("d", destination))
            .expect_err("pair breaks a rule");
        assert_eq!(err, expected);
    }

    #[test]
    fn core_node_cannot_link_into_disconnected_pair() {
        let satellites = [Node::new("dc-a", Dc), Node::new("dc-b", Dc)];
        let core = Node::new("core", Gscc);

        for satellite in &satellites {
            let err = Edge::try_new(core.clone(), satellite.clone())
                .expect_err("GSCC -> DC must be rejected");
            assert_eq!(err, ConstraintViolation::DisconnectedBoundary);
        }
        let [first, second] = satellites;
        assert!(Edge::try_new(first, second).is_ok());
    }

    #[test]
    fn reciprocal_swaps_endpoints_and_keeps_eligibility() {
        let edge = Edge::try_new(Node::new("0", Gscc), Node::new("1", Gscc)).expect("valid");
        let reverse = edge.reciprocal().expect("core edges reverse cleanly");
        assert_eq!(reverse.source().name(), "1");
        assert_eq!(reverse.destination().name(), "0");
        assert!(reverse.is_reciprocal_eligible());
    }

    #[test]
    fn reciprocal_of_ineligible_edge_can_fail() {
        let edge = Edge::try_new(Node::new("in", Gin), Node::new("out", Gout)).expect("valid");
        assert_eq!(edge.reciprocal(), Err(ConstraintViolation::GoutSource));
    }
}
