//! JSON helpers for braids.

use gar_core::{ErrorInfo, Factor, GarError};

use crate::braid::{Braid, BraidPayload};

/// Serializes a braid to a JSON string.
pub fn to_json<F: Factor>(braid: &Braid<F>) -> Result<String, GarError> {
    serde_json::to_string(braid)
        .map_err(|err| GarError::Serde(ErrorInfo::new("braid-serialize", err.to_string())))
}

/// Restores a braid from a JSON string. The stored factors are renormalized,
/// so any factor sequence describing the element is accepted as long as
/// every factor belongs to the braid's group.
pub fn from_json<F: Factor>(data: &str) -> Result<Braid<F>, GarError> {
    let payload: BraidPayload<F> = serde_json::from_str(data)
        .map_err(|err| GarError::Serde(ErrorInfo::new("braid-deserialize", err.to_string())))?;
    Braid::try_from(payload)
}
