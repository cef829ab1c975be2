//! Left and right weighting of factor sequences.
//!
//! A pair `(a, b)` of simple elements is left-weighted when `∂a ∧ b = 1`, that
//! is when no nontrivial prefix of `b` can be moved into `a` without leaving
//! the simple elements. Symmetrically it is right-weighted when
//! `a ∧_R ∂⁻¹b = 1`.

use gar_core::Factor;

/// Returns whether `(left, right)` is a left-weighted pair.
pub fn is_left_weighted<F: Factor>(left: &F, right: &F) -> bool {
    left.delta_left_complement().left_meet(right).is_identity()
}

/// Returns whether `(left, right)` is a right-weighted pair.
pub fn is_right_weighted<F: Factor>(left: &F, right: &F) -> bool {
    left.right_meet(&right.delta_right_complement()).is_identity()
}

/// Moves the largest possible prefix of `right` into `left`. Returns whether
/// the pair changed.
fn left_weight<F: Factor>(left: &mut F, right: &mut F) -> bool {
    let moved = left.delta_left_complement().left_meet(right);
    if moved.is_identity() {
        return false;
    }
    *right = moved.left_complement(right);
    *left = left.product(&moved);
    true
}

/// Moves the largest possible suffix of `left` into `right`.
fn right_weight<F: Factor>(left: &mut F, right: &mut F) -> bool {
    let moved = left.right_meet(&right.delta_right_complement());
    if moved.is_identity() {
        return false;
    }
    *left = moved.right_complement(left);
    *right = moved.product(right);
    true
}

/// Sweeps `weight` over every adjacent pair until no pair changes.
fn sweep<F, W>(factors: &mut [F], mut weight: W)
where
    F: Factor,
    W: FnMut(&mut F, &mut F) -> bool,
{
    if factors.len() < 2 {
        return;
    }
    loop {
        let mut changed = false;
        for i in (0..factors.len() - 1).rev() {
            let (head, tail) = factors.split_at_mut(i + 1);
            changed |= weight(&mut head[i], &mut tail[0]);
        }
        for i in 0..factors.len() - 1 {
            let (head, tail) = factors.split_at_mut(i + 1);
            changed |= weight(&mut head[i], &mut tail[0]);
        }
        if !changed {
            break;
        }
    }
}

/// Brings `Δ^inf · factors` to left normal form in place.
///
/// Once every pair is left-weighted the `Δ` factors sit at the front and the
/// identities at the back; the former are absorbed into `inf` and the latter
/// dropped.
pub(crate) fn normalize<F: Factor>(inf: &mut i32, factors: &mut Vec<F>) {
    sweep(factors, left_weight);
    let leading = factors.iter().take_while(|f| f.is_delta()).count();
    factors.drain(..leading);
    *inf += leading as i32;
    while factors.last().map_or(false, Factor::is_identity) {
        factors.pop();
    }
}

/// Right normal form `g1 ⋯ gr · Δ^inf` of the element `Δ^inf · factors`,
/// where `factors` is a left normal form. Returns the factors `g1 ⋯ gr`; the
/// power of `Δ` is unchanged.
///
/// The last factor of the right normal form is the greatest simple suffix of
/// a positive element with `inf = 0`.
pub fn right_normal_factors<F: Factor>(inf: i32, factors: &[F]) -> Vec<F> {
    let mut moved: Vec<F> = factors.iter().map(|f| f.delta_conjugate(-inf)).collect();
    sweep(&mut moved, right_weight);
    moved
}
