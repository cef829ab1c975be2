use sha2::{Digest, Sha256};

use gar_core::{ErrorInfo, Factor, GarError};

use crate::set::SlidingCircuitsSet;

/// Content addressed hash of a sliding circuit set.
///
/// Elements are serialised, sorted and hashed, so the value does not depend
/// on discovery order. The sliding circuit set is a conjugacy invariant,
/// hence so is the hash.
pub fn canonical_hash<F: Factor>(set: &SlidingCircuitsSet<F>) -> Result<String, GarError> {
    let mut encoded = set
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| GarError::Serde(ErrorInfo::new("scs-hash", err.to_string())))?;
    encoded.sort_unstable();

    let mut hasher = Sha256::new();
    for element in &encoded {
        hasher.update(element.as_bytes());
        hasher.update(b"\n");
    }
    Ok(hex::encode(hasher.finalize()))
}
