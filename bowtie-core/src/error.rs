//! Error types for the bowtie core library.
//!
//! Defines the error enums exposed by the public API, their stable codes, and
//! a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::{edge::EdgeKey, node::NodeType};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// A directional or component-boundary rule broken by a candidate edge.
///
/// Violations are expected during sampling: the sampler discards the
/// candidate and draws again. Rules are checked in declaration order, so a
/// candidate breaking several rules reports the first.
#[derive(Clone, Copy, Debug, Eq, Error, Hash, PartialEq)]
pub enum ConstraintViolation {
    /// The source node is a `GOUT` node, which may only receive links.
    #[error("direction constraint: GOUT node cannot be an edge source")]
    GoutSource,
    /// The destination node is a `GIN` node, which may only emit links.
    #[error("direction constraint: GIN node cannot be an edge destination")]
    GinDestination,
    /// Exactly one endpoint is a `DC` node.
    #[error("disconnected component constraint: DC nodes only link to DC nodes")]
    DisconnectedBoundary,
}

define_error_codes! {
    /// Stable codes describing [`ConstraintViolation`] variants.
    enum ConstraintViolationCode for ConstraintViolation {
        /// The source node is a `GOUT` node.
        GoutSource => GoutSource => "EDGE_GOUT_SOURCE",
        /// The destination node is a `GIN` node.
        GinDestination => GinDestination => "EDGE_GIN_DESTINATION",
        /// The edge crosses the `DC` boundary.
        DisconnectedBoundary => DisconnectedBoundary => "EDGE_DC_BOUNDARY",
    }
}

/// An error produced while building or parsing a [`crate::TypeDistribution`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum DistributionError {
    /// The table contained no entries.
    #[error("type distribution must contain at least one entry")]
    Empty,
    /// The same node type appeared twice.
    #[error("node type {node_type} appears more than once")]
    DuplicateType {
        /// The repeated node type.
        node_type: NodeType,
    },
    /// A weight was negative, NaN, or infinite.
    #[error("weight {weight} for {node_type} must be finite and non-negative")]
    InvalidWeight {
        /// Node type carrying the invalid weight.
        node_type: NodeType,
        /// The rejected weight.
        weight: f64,
    },
    /// The weights did not sum to one.
    #[error("weights must sum to 1.0 (got {sum})")]
    WeightSum {
        /// Sum of the supplied weights.
        sum: f64,
    },
    /// A textual entry named a type outside `GSCC`, `GOUT`, `GIN`, `DC`.
    #[error("unknown node type `{label}`")]
    UnknownNodeType {
        /// The unrecognised label.
        label: String,
    },
    /// A textual entry was not of the form `TYPE=WEIGHT`.
    #[error("malformed entry `{entry}`; expected TYPE=WEIGHT")]
    MalformedEntry {
        /// The offending entry.
        entry: String,
    },
    /// A textual entry carried a weight that is not a number.
    #[error("entry `{entry}` does not carry a numeric weight")]
    UnparsableWeight {
        /// The offending entry.
        entry: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`DistributionError`] variants.
    enum DistributionErrorCode for DistributionError {
        /// The table contained no entries.
        Empty => Empty => "DISTRIBUTION_EMPTY",
        /// The same node type appeared twice.
        DuplicateType => DuplicateType { .. } => "DISTRIBUTION_DUPLICATE_TYPE",
        /// A weight was negative, NaN, or infinite.
        InvalidWeight => InvalidWeight { .. } => "DISTRIBUTION_INVALID_WEIGHT",
        /// The weights did not sum to one.
        WeightSum => WeightSum { .. } => "DISTRIBUTION_WEIGHT_SUM",
        /// A textual entry named an unknown type.
        UnknownNodeType => UnknownNodeType { .. } => "DISTRIBUTION_UNKNOWN_NODE_TYPE",
        /// A textual entry was not of the form `TYPE=WEIGHT`.
        MalformedEntry => MalformedEntry { .. } => "DISTRIBUTION_MALFORMED_ENTRY",
        /// A textual entry carried a non-numeric weight.
        UnparsableWeight => UnparsableWeight { .. } => "DISTRIBUTION_UNPARSABLE_WEIGHT",
    }
}

/// Error type produced when constructing or running a [`crate::GraphSampler`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum BowtieError {
    /// Fewer than two nodes were requested, so no edge can exist.
    #[error("node_count must be at least 2 (got {got})")]
    InsufficientNodes {
        /// The node count supplied by the caller.
        got: usize,
    },
    /// Connectivity density was outside `(0, 1]` or not finite.
    #[error("connectivity_density must lie in (0, 1] (got {got})")]
    InvalidConnectivityDensity {
        /// The density supplied by the caller.
        got: f64,
    },
    /// Reciprocity rate was outside `[0, 1]` or not finite.
    #[error("reciprocity_rate must lie in [0, 1] (got {got})")]
    InvalidReciprocityRate {
        /// The rate supplied by the caller.
        got: f64,
    },
    /// The requested edge count exceeds the distinct valid edges the sampled
    /// node types admit, so sampling could never finish.
    #[error("target of {target} edges exceeds the {feasible} distinct valid edges available")]
    InfeasibleEdgeTarget {
        /// Edge count derived from density and node count.
        target: usize,
        /// Number of distinct valid directed edges for the sampled types.
        feasible: usize,
    },
    /// The reverse of a reciprocity-eligible edge failed validation. This
    /// indicates a broken invariant rather than a sampling outcome.
    #[error("reverse of reciprocity-eligible edge {edge} was rejected: {violation}")]
    ReciprocalConstruction {
        /// Key of the pooled edge whose reverse was rejected.
        edge: EdgeKey,
        /// The rule the reverse edge broke.
        #[source]
        violation: ConstraintViolation,
    },
}

define_error_codes! {
    /// Stable codes describing [`BowtieError`] variants.
    enum BowtieErrorCode for BowtieError {
        /// Fewer than two nodes were requested.
        InsufficientNodes => InsufficientNodes { .. } => "BOWTIE_INSUFFICIENT_NODES",
        /// Connectivity density was out of range.
        InvalidConnectivityDensity => InvalidConnectivityDensity { .. } => "BOWTIE_INVALID_CONNECTIVITY_DENSITY",
        /// Reciprocity rate was out of range.
        InvalidReciprocityRate => InvalidReciprocityRate { .. } => "BOWTIE_INVALID_RECIPROCITY_RATE",
        /// The edge target cannot be met.
        InfeasibleEdgeTarget => InfeasibleEdgeTarget { .. } => "BOWTIE_INFEASIBLE_EDGE_TARGET",
        /// A reciprocal edge could not be constructed.
        ReciprocalConstruction => ReciprocalConstruction { .. } => "BOWTIE_RECIPROCAL_CONSTRUCTION",
    }
}

impl BowtieError {
    /// Retrieve the inner [`ConstraintViolationCode`] when the error wraps a
    /// rejected reciprocal edge.
    #[must_use]
    pub const fn violation_code(&self) -> Option<ConstraintViolationCode> {
        match self {
            Self::ReciprocalConstruction { violation, .. } => Some(violation.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, BowtieError>;
