//! Node types of the bow-tie model and the nodes that carry them.

use std::{fmt, str::FromStr, sync::Arc};

use rand::Rng;

use crate::{distribution::TypeDistribution, error::DistributionError};

/// Component of the bow-tie model a node belongs to.
///
/// # Examples
/// ```
/// use bowtie_core::NodeType;
///
/// let parsed: NodeType = "gout".parse().expect("label is known");
/// assert_eq!(parsed, NodeType::Gout);
/// assert_eq!(parsed.to_string(), "GOUT");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeType {
    /// The strongly connected core.
    Gscc,
    /// Nodes reachable from the core that never link out.
    Gout,
    /// Nodes linking into the core that are never linked to.
    Gin,
    /// Disconnected satellites linking only among themselves.
    Dc,
}

impl NodeType {
    /// Every node type in canonical order.
    pub const ALL: [Self; 4] = [Self::Gscc, Self::Gout, Self::Gin, Self::Dc];

    /// Returns the upper-case label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gscc => "GSCC",
            Self::Gout => "GOUT",
            Self::Gin => "GIN",
            Self::Dc => "DC",
        }
    }

    /// Position of this type within [`Self::ALL`].
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Gscc => 0,
            Self::Gout => 1,
            Self::Gin => 2,
            Self::Dc => 3,
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = DistributionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let label = raw.trim();
        Self::ALL
            .into_iter()
            .find(|node_type| node_type.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| DistributionError::UnknownNodeType {
                label: label.to_owned(),
            })
    }
}

/// A named vertex whose type is fixed at construction.
///
/// Cloning is cheap: the name is shared.
///
/// # Examples
/// ```
/// use bowtie_core::{Node, NodeType};
///
/// let node = Node::new("7", NodeType::Gin);
/// assert_eq!(node.name(), "7");
/// assert_eq!(node.node_type(), NodeType::Gin);
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Node {
    name: Arc<str>,
    node_type: NodeType,
}

impl Node {
    /// Creates a node with an explicit type.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, node_type: NodeType) -> Self {
        Self {
            name: name.into(),
            node_type,
        }
    }

    /// Creates a node whose type is drawn from `distribution`.
    ///
    /// # Examples
    /// ```
    /// use bowtie_core::{Node, NodeType, TypeDistribution};
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let only_core = TypeDistribution::new([(NodeType::Gscc, 1.0)]).expect("valid table");
    /// let mut rng = SmallRng::seed_from_u64(3);
    /// let node = Node::sample("0", &only_core, &mut rng);
    /// assert_eq!(node.node_type(), NodeType::Gscc);
    /// ```
    #[must_use]
    pub fn sample<R: Rng + ?Sized>(
        name: impl Into<Arc<str>>,
        distribution: &TypeDistribution,
        rng: &mut R,
    ) -> Self {
        Self::new(name, distribution.sample(rng))
    }

    /// Returns the node's stable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the node's type.
    #[must_use]
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }
}
