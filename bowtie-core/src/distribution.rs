//! Weighted categorical draws over [`NodeType`].
//!
//! The table is held as an ordered list so the cumulative scan never depends
//! on map iteration order. Cumulative weights are computed once when the
//! distribution is built.

use std::{fmt, str::FromStr};

use rand::{Rng, distributions::Standard};

use crate::{error::DistributionError, node::NodeType};

/// Tolerance applied when checking that weights sum to one.
const WEIGHT_SUM_TOLERANCE: f64 = 1.0e-6;

/// Web-graph calibration used when no table is supplied.
const DEFAULT_WEIGHTS: [(NodeType, f64); 4] = [
    (NodeType::Gscc, 0.78),
    (NodeType::Gout, 0.12),
    (NodeType::Gin, 0.08),
    (NodeType::Dc, 0.02),
];

/// Categorical distribution assigning node types by weight.
///
/// # Examples
/// ```
/// use bowtie_core::{NodeType, TypeDistribution};
///
/// let table: TypeDistribution = "GSCC=0.5,GOUT=0.5".parse().expect("valid table");
/// assert_eq!(table.weight(NodeType::Gscc), 0.5);
/// assert_eq!(table.weight(NodeType::Dc), 0.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDistribution {
    weights: Vec<(NodeType, f64)>,
    cumulative: Vec<(NodeType, f64)>,
}

impl TypeDistribution {
    /// Builds a distribution from `(type, weight)` entries in draw order.
    ///
    /// Entries with a zero weight are kept for reporting but never drawn.
    ///
    /// # Errors
    /// Returns [`DistributionError::Empty`] for an empty table,
    /// [`DistributionError::DuplicateType`] when a type repeats,
    /// [`DistributionError::InvalidWeight`] for negative or non-finite
    /// weights, and [`DistributionError::WeightSum`] when the weights do not
    /// sum to one.
    pub fn new(
        entries: impl IntoIterator<Item = (NodeType, f64)>,
    ) -> Result<Self, DistributionError> {
        let weights: Vec<(NodeType, f64)> = entries.into_iter().collect();
        if weights.is_empty() {
            return Err(DistributionError::Empty);
        }

        let mut seen = [false; NodeType::ALL.len()];
        for &(node_type, weight) in &weights {
            if std::mem::replace(&mut seen[node_type.index()], true) {
                return Err(DistributionError::DuplicateType { node_type });
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(DistributionError::InvalidWeight { node_type, weight });
            }
        }

        let sum: f64 = weights.iter().map(|&(_, weight)| weight).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DistributionError::WeightSum { sum });
        }

        Ok(Self::from_validated(weights))
    }

    fn from_validated(weights: Vec<(NodeType, f64)>) -> Self {
        let mut running = 0.0_f64;
        let cumulative = weights
            .iter()
            .filter(|&&(_, weight)| weight > 0.0)
            .map(|&(node_type, weight)| {
                running += weight;
                (node_type, running)
            })
            .collect();
        Self {
            weights,
            cumulative,
        }
    }

    /// Returns the configured weight for `node_type`, or zero when absent.
    #[must_use]
    pub fn weight(&self, node_type: NodeType) -> f64 {
        self.weights
            .iter()
            .find(|&&(candidate, _)| candidate == node_type)
            .map_or(0.0, |&(_, weight)| weight)
    }

    /// Returns the table entries in draw order.
    #[must_use]
    pub fn entries(&self) -> &[(NodeType, f64)] {
        &self.weights
    }

    /// Draws one node type, consuming a single `f64` from `rng`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> NodeType {
        let draw: f64 = rng.sample(Standard);
        self.select(draw)
    }

    /// Maps a uniform draw in `[0, 1)` to the first type whose cumulative
    /// weight reaches it.
    ///
    /// Falls back to the last drawable type when rounding leaves the draw
    /// above the final cumulative weight.
    pub(crate) fn select(&self, draw: f64) -> NodeType {
        // Validation requires a weight sum of one, so at least one entry is
        // positive and the cumulative table is never empty.
        debug_assert!(
            !self.cumulative.is_empty(),
            "validated distribution must have a positive weight"
        );
        self.cumulative
            .iter()
            .find(|&&(_, cumulative)| cumulative >= draw)
            .or_else(|| self.cumulative.last())
            .map_or(NodeType::Gscc, |&(node_type, _)| node_type)
    }
}

impl Default for TypeDistribution {
    fn default() -> Self {
        Self::from_validated(DEFAULT_WEIGHTS.to_vec())
    }
}

impl FromStr for TypeDistribution {
    type Err = DistributionError;

    /// Parses `TYPE=WEIGHT` entries separated by commas.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let entries = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(parse_entry)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(entries)
    }
}

fn parse_entry(entry: &str) -> Result<(NodeType, f64), DistributionError> {
    let (label, weight) = entry
        .split_once('=')
        .ok_or_else(|| DistributionError::MalformedEntry {
            entry: entry.to_owned(),
        })?;
    let node_type = label.parse::<NodeType>()?;
    let weight = weight
        .trim()
        .parse::<f64>()
        .map_err(|_| DistributionError::UnparsableWeight {
            entry: entry.to_owned(),
        })?;
    Ok((node_type, weight))
}

impl fmt::Display for TypeDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, (node_type, weight)) in self.weights.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{node_type}={weight}")?;
        }
        Ok(())
    }
}
