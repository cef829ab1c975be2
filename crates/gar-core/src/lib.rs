#![deny(missing_docs)]
#![doc = "Core traits and data structures shared by the Garside crates: the lattice \
contract of simple factors, structured errors, deterministic randomness and the \
generic search utilities used by summit set constructions."]

use std::fmt::Debug;
use std::hash::Hash;

use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod errors;
pub mod orbit;
pub mod partition;
pub mod rng;

pub use errors::{ErrorInfo, GarError};
pub use orbit::{iterate_until_revisit, Orbit};
pub use partition::Partition;
pub use rng::{derive_stream_seed, derive_substream_seed, RngHandle};

/// Describes the simple elements ("canonical factors") of a Garside structure.
///
/// Simple elements are the left (equivalently right) divisors of the Garside
/// element `Δ`. They form a lattice for the prefix order `a ≼ b` (`b = a·c`
/// with `c` positive) and for the suffix order `a ≼_R b` (`b = c·a`).
/// Implementations are value types; two factors are equal exactly when they
/// denote the same simple element.
pub trait Factor:
    Clone + PartialEq + Eq + Hash + Debug + Send + Sync + Serialize + DeserializeOwned
{
    /// Group parameter (e.g. the number of strands of a braid group).
    type Parameter: Copy + PartialEq + Eq + Hash + Debug + Send + Sync + Serialize + DeserializeOwned;

    /// Returns the parameter of the group the factor belongs to.
    fn parameter(&self) -> Self::Parameter;

    /// Returns the trivial simple element.
    fn identity(parameter: Self::Parameter) -> Self;

    /// Returns the Garside element `Δ`.
    fn delta(parameter: Self::Parameter) -> Self;

    /// Returns the atoms of the structure, in a fixed order.
    fn atoms(parameter: Self::Parameter) -> Vec<Self>;

    /// Greatest common prefix of `self` and `other`.
    fn left_meet(&self, other: &Self) -> Self;

    /// Greatest common suffix of `self` and `other`.
    fn right_meet(&self, other: &Self) -> Self;

    /// For `self ≼ other`, returns the simple `c` with `self · c = other`.
    fn left_complement(&self, other: &Self) -> Self;

    /// For `self ≼_R other`, returns the simple `c` with `c · self = other`.
    fn right_complement(&self, other: &Self) -> Self;

    /// Product `self · other`, under the hypothesis that it is simple.
    fn product(&self, other: &Self) -> Self;

    /// Conjugate by `Δ^k`, that is `Δ^-k · self · Δ^k`.
    fn delta_conjugate(&self, k: i32) -> Self;

    /// Draws a simple element uniformly at random.
    fn random<R: Rng + ?Sized>(parameter: Self::Parameter, rng: &mut R) -> Self;

    /// Returns whether the factor is the identity.
    fn is_identity(&self) -> bool {
        *self == Self::identity(self.parameter())
    }

    /// Returns whether the factor is `Δ`.
    fn is_delta(&self) -> bool {
        *self == Self::delta(self.parameter())
    }

    /// Prefix order test `self ≼ other`.
    fn left_divides(&self, other: &Self) -> bool {
        self.left_meet(other) == *self
    }

    /// The complement `∂(self) = self⁻¹ · Δ`.
    fn delta_left_complement(&self) -> Self {
        self.left_complement(&Self::delta(self.parameter()))
    }

    /// The complement `∂⁻¹(self) = Δ · self⁻¹`.
    fn delta_right_complement(&self) -> Self {
        self.right_complement(&Self::delta(self.parameter()))
    }

    /// Least common right multiple `self ∨ other` for the prefix order.
    ///
    /// `∂` reverses the prefix order onto the suffix order, so the join is
    /// `∂⁻¹(∂(self) ∧_R ∂(other))`.
    fn left_join(&self, other: &Self) -> Self {
        self.delta_left_complement()
            .right_meet(&other.delta_left_complement())
            .delta_right_complement()
    }
}
