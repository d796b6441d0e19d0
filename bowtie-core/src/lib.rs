//! Bow-tie core library.
//!
//! Synthesises random directed graphs following the bow-tie web topology: a
//! strongly connected core (`GSCC`), an out-component (`GOUT`), an
//! in-component (`GIN`), and disconnected satellites (`DC`). Node types are
//! drawn from a weighted table, then edges are sampled by rejection against
//! the per-type constraints, with a tunable share of core edges reciprocated.
//!
//! When the `metrics` feature is enabled the sampler emits:
//!
//! - `bowtie_rejected_samples` (counter)
//! - `bowtie_duplicate_candidates` (counter)
//! - `bowtie_accepted_edges` (counter)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod capacity;
mod distribution;
mod edge;
mod error;
mod node;
#[cfg(test)]
mod property;
mod sampler;
mod statistics;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::{GraphSamplerBuilder, target_edge_count},
    capacity::TypeCounts,
    distribution::TypeDistribution,
    edge::{Edge, EdgeKey, check_constraints},
    error::{
        BowtieError, BowtieErrorCode, ConstraintViolation, ConstraintViolationCode,
        DistributionError, DistributionErrorCode, Result,
    },
    node::{Node, NodeType},
    sampler::{GraphSampler, SamplingCounters},
    statistics::{
        GraphStatistics, ReciprocityRate, TypeDistributionReport, reciprocity_rate,
        type_distribution,
    },
};
