use gar_braid::Braid;
use gar_core::Factor;
use rayon::prelude::*;
use tracing::trace;

use crate::super_summit::min_super_summit;
use crate::transport::{main_pullback, transports_sending_to_trajectory};
use crate::ScsOpts;

/// Smallest simple `g` with `f ≼ g` such that `b^g` is again in the sliding
/// circuits, for `b` in its sliding circuit set and `b_inv` the left normal
/// form of `b⁻¹`.
///
/// The candidate starts as the super summit minimum and absorbs its main
/// pullback until it divides it. The answer is then the least multiple of
/// `f` among the candidate's transports around the circuit.
pub fn min_sliding_circuits<F: Factor>(b: &Braid<F>, b_inv: &Braid<F>, f: &F) -> F {
    let mut candidate = min_super_summit(b, b_inv, f);
    if b.canonical_length() == 0 {
        // Δ^k is the only element of its super summit set.
        return candidate;
    }
    loop {
        let pulled = main_pullback(b, &candidate);
        if pulled.left_divides(&candidate) {
            break;
        }
        candidate = min_super_summit(b, b_inv, &candidate.left_join(&pulled));
    }
    transports_sending_to_trajectory(b, &candidate)
        .into_iter()
        .filter(|g| f.left_divides(g))
        .reduce(|least, g| least.left_meet(&g))
        .unwrap_or_else(|| F::delta(b.parameter()))
}

/// The minimal simple conjugators of `b` inside its sliding circuit set, one
/// per atom that generates a minimal one, without duplicates.
///
/// Results are listed in atom order whether or not they were computed in
/// parallel.
pub fn min_sliding_circuits_all<F: Factor>(b: &Braid<F>, b_inv: &Braid<F>, opts: &ScsOpts) -> Vec<F> {
    let atoms = F::atoms(b.parameter());
    let candidates: Vec<F> = if opts.parallel {
        atoms
            .par_iter()
            .map(|atom| min_sliding_circuits(b, b_inv, atom))
            .collect()
    } else {
        atoms
            .iter()
            .map(|atom| min_sliding_circuits(b, b_inv, atom))
            .collect()
    };

    let mut kept = vec![false; atoms.len()];
    let mut minimal = Vec::new();
    for (i, candidate) in candidates.into_iter().enumerate() {
        // A divisor generated by an earlier atom was already kept.
        let shadowed = (0..i).any(|j| kept[j] && atoms[j].left_divides(&candidate));
        // A later atom divides it too and will be responsible for it.
        let deferred = (i + 1..atoms.len()).any(|j| atoms[j].left_divides(&candidate));
        if !shadowed && !deferred {
            kept[i] = true;
            minimal.push(candidate);
        }
    }
    trace!(count = minimal.len(), "minimal simple conjugators");
    minimal
}
