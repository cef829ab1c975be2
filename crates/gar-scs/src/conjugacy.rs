use gar_braid::Braid;
use gar_core::{ErrorInfo, Factor, GarError};
use tracing::debug;

use crate::set::{sliding_circuits_set_tracked, TrackedSlidingCircuits};
use crate::trajectory::send_to_sliding_circuits_with_conjugator;
use crate::ScsOpts;

/// Conjugator `c` sending the first element of circuit 0 to `b`, i.e.
/// `c⁻¹ · root · c == b`, read off the exploration tree.
///
/// # Panics
///
/// If `b` has positive canonical length and is not in `tracked.set`.
pub fn tree_path<F: Factor>(b: &Braid<F>, tracked: &TrackedSlidingCircuits<F>) -> Braid<F> {
    let mut path = Braid::identity(b.parameter());
    if b.canonical_length() == 0 {
        return path;
    }

    let mut current = tracked
        .set
        .circuit_of(b)
        .expect("element outside the sliding circuit set");
    for element in tracked.set.circuit(current).iter().take_while(|e| *e != b) {
        path.right_multiply_factor(&element.preferred_prefix());
    }
    while current != 0 {
        path.left_multiply_factor(&tracked.mins[current]);
        current = tracked.prev[current];
    }
    path
}

/// Decides whether `b1` and `b2` are conjugate. Returns `c` with
/// `c⁻¹ · b1 · c == b2` when they are.
pub fn are_conjugate<F: Factor>(b1: &Braid<F>, b2: &Braid<F>) -> Result<Option<Braid<F>>, GarError> {
    are_conjugate_with(b1, b2, &ScsOpts::default())
}

/// [`are_conjugate`] with explicit options.
pub fn are_conjugate_with<F: Factor>(
    b1: &Braid<F>,
    b2: &Braid<F>,
    opts: &ScsOpts,
) -> Result<Option<Braid<F>>, GarError> {
    if b1.parameter() != b2.parameter() {
        return Err(GarError::Parameter(
            ErrorInfo::new("parameter-mismatch", "elements belong to different groups")
                .with_context("left", format!("{:?}", b1.parameter()))
                .with_context("right", format!("{:?}", b2.parameter())),
        ));
    }

    let (bt1, c1) = send_to_sliding_circuits_with_conjugator(b1);
    let (bt2, c2) = send_to_sliding_circuits_with_conjugator(b2);

    if bt1.canonical_length() != bt2.canonical_length() || bt1.sup() != bt2.sup() {
        debug!(
            left_sup = bt1.sup(),
            right_sup = bt2.sup(),
            "summit invariants differ"
        );
        return Ok(None);
    }

    if bt1.canonical_length() == 0 {
        let mut c = c1;
        c.right_divide(&c2);
        return Ok(Some(c));
    }

    let tracked = sliding_circuits_set_tracked(&bt1, opts);
    if !tracked.set.contains(&bt2) {
        debug!(
            cardinality = tracked.set.cardinality(),
            "not in the sliding circuit set"
        );
        return Ok(None);
    }

    let mut c = c1;
    c.right_multiply(&tree_path(&bt2, &tracked));
    c.right_divide(&c2);
    Ok(Some(c))
}
