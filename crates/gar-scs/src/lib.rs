#![deny(missing_docs)]
#![doc = "Sliding circuit sets of elements of Garside groups and the conjugacy \
decision procedure built on them: every element is slid into its sliding \
circuits, the whole set of sliding circuits is explored through minimal simple \
conjugators, and a spanning tree of that exploration yields conjugating elements."]

/// Conjugating elements read off the exploration tree.
pub mod conjugacy;
/// Content addressed hashing of sliding circuit sets.
pub mod hash;
/// Minimal simple conjugators inside the sliding circuit set.
pub mod minimal;
/// Serialisable summaries of sliding circuit sets.
pub mod report;
/// JSON helpers for reports.
#[path = "serde.rs"]
pub mod serde_io;
/// The set of sliding circuits and its breadth first construction.
pub mod set;
/// Minimal simple conjugators inside the super summit set.
pub mod super_summit;
/// Iterated sliding.
pub mod trajectory;
/// Transport and pullback of conjugators along sliding.
pub mod transport;

use serde::{Deserialize, Serialize};

pub use conjugacy::{are_conjugate, are_conjugate_with, tree_path};
pub use hash::canonical_hash;
pub use minimal::{min_sliding_circuits, min_sliding_circuits_all};
pub use report::{build_report, ScsReport};
pub use set::{
    sliding_circuits_set, sliding_circuits_set_tracked, sliding_circuits_set_with,
    SlidingCircuitsSet, TrackedSlidingCircuits,
};
pub use super_summit::min_super_summit;
pub use trajectory::{
    send_to_sliding_circuits, send_to_sliding_circuits_with_conjugator, trajectory,
    trajectory_with_conjugator, TrackedTrajectory,
};
pub use transport::{main_pullback, pullback, transport, transports_sending_to_trajectory};

/// Options controlling sliding circuit set constructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScsOpts {
    /// Evaluate the minimal conjugator of every atom on the rayon pool.
    pub parallel: bool,
}
