#![deny(missing_docs)]
#![doc = "Artin braid groups as Garside groups: simple factors are positive \
permutation braids, stored as the permutation they induce on the strands."]

mod factor;
mod permutation;

pub use factor::{check_strands, ArtinFactor};

use gar_braid::Braid;
use gar_core::GarError;

/// Largest supported number of strands.
pub const MAX_NUMBER_OF_STRANDS: usize = 256;

/// An element of the braid group on `n` strands.
pub type ArtinBraid = Braid<ArtinFactor>;

/// Builds the braid given by a word in the Artin generators `σ1 .. σ(n-1)`,
/// written `i` for `σi` and `-i` for its inverse.
pub fn braid_from_word(strands: usize, word: &[i32]) -> Result<ArtinBraid, GarError> {
    check_strands(strands)?;
    Braid::from_word(strands, word)
}
