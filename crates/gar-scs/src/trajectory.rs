use gar_braid::Braid;
use gar_core::{iterate_until_revisit, Factor, Orbit};

fn sliding_orbit<F: Factor>(b: &Braid<F>) -> Orbit<Braid<F>> {
    iterate_until_revisit(b.clone(), Braid::slid)
}

/// Successive slidings `b, 𝔰(b), 𝔰²(b), ...` up to the first repetition.
///
/// When `b` belongs to a sliding circuit this is exactly that circuit,
/// starting at `b`.
pub fn trajectory<F: Factor>(b: &Braid<F>) -> Vec<Braid<F>> {
    sliding_orbit(b).sequence
}

/// A trajectory together with the conjugator sending its start to its
/// sliding circuit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedTrajectory<F: Factor> {
    /// Distinct iterated slidings of the start.
    pub elements: Vec<Braid<F>>,
    /// `c` with `c⁻¹ · elements[0] · c == elements[tail_length]`.
    pub conjugator: Braid<F>,
    /// Number of slidings performed before entering the circuit.
    pub tail_length: usize,
}

/// Like [`trajectory`], also recording the product of the preferred prefixes
/// used before reaching the circuit.
pub fn trajectory_with_conjugator<F: Factor>(b: &Braid<F>) -> TrackedTrajectory<F> {
    let orbit = sliding_orbit(b);
    let mut conjugator = Braid::identity(b.parameter());
    for element in orbit.tail() {
        conjugator.right_multiply_factor(&element.preferred_prefix());
    }
    TrackedTrajectory {
        tail_length: orbit.cycle_start,
        elements: orbit.sequence,
        conjugator,
    }
}

/// First element of the sliding circuits reached by iterated sliding.
pub fn send_to_sliding_circuits<F: Factor>(b: &Braid<F>) -> Braid<F> {
    sliding_orbit(b).cycle_entry().clone()
}

/// Returns `(rep, c)` where `rep` is [`send_to_sliding_circuits`] of `b` and
/// `c⁻¹ · b · c == rep`.
pub fn send_to_sliding_circuits_with_conjugator<F: Factor>(b: &Braid<F>) -> (Braid<F>, Braid<F>) {
    let tracked = trajectory_with_conjugator(b);
    let rep = tracked.elements[tracked.tail_length].clone();
    (rep, tracked.conjugator)
}
