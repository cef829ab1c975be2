use gar_core::{Factor, GarError};
use serde::{Deserialize, Serialize};

use crate::hash::canonical_hash;
use crate::set::SlidingCircuitsSet;

/// Summary of a sliding circuit set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScsReport {
    /// Number of elements.
    pub cardinality: usize,
    /// Circuit lengths, largest first.
    pub circuit_sizes: Vec<usize>,
    /// Infimum shared by all elements.
    pub inf: i32,
    /// Supremum shared by all elements.
    pub sup: i32,
    /// Canonical length shared by all elements.
    pub canonical_length: usize,
    /// See [`canonical_hash`].
    pub hash: String,
}

/// Builds the report of `set`. Invariants are zero for an empty set.
pub fn build_report<F: Factor>(set: &SlidingCircuitsSet<F>) -> Result<ScsReport, GarError> {
    let mut circuit_sizes = set.circuit_sizes();
    circuit_sizes.sort_unstable_by(|a, b| b.cmp(a));
    let (inf, sup, canonical_length) = set
        .iter()
        .next()
        .map_or((0, 0, 0), |b| (b.inf(), b.sup(), b.canonical_length()));
    Ok(ScsReport {
        cardinality: set.cardinality(),
        circuit_sizes,
        inf,
        sup,
        canonical_length,
        hash: canonical_hash(set)?,
    })
}
