use gar_braid::Braid;
use gar_core::{iterate_until_revisit, Factor};

use crate::super_summit::{min_super_summit, pair_remainder};
use crate::trajectory::trajectory;

/// Transport of the simple conjugator `f` of `b` to a conjugator of `𝔰(b)`:
/// `𝔭(b)⁻¹ · f · 𝔭(b^f)`.
///
/// Simple whenever `b` and `b^f` lie in the super summit set.
pub fn transport<F: Factor>(b: &Braid<F>, f: &F) -> F {
    let mut conjugate = b.clone();
    conjugate.conjugate(f);
    let mut transported = Braid::from_factor(b.preferred_prefix()).inverse();
    transported.right_multiply_factor(f);
    transported.right_multiply_factor(&conjugate.preferred_prefix());
    transported.to_simple()
}

/// Transports `f` once around the whole circuit of `b` and repeats until a
/// conjugator comes back. Returns the conjugators on that final cycle.
pub fn transports_sending_to_trajectory<F: Factor>(b: &Braid<F>, f: &F) -> Vec<F> {
    let circuit = trajectory(b);
    iterate_until_revisit(f.clone(), |g| {
        circuit
            .iter()
            .fold(g.clone(), |carried, element| transport(element, &carried))
    })
    .into_cycle()
}

/// Pullback of a simple conjugator `f` of `𝔰(b)` to `b`: the smallest simple
/// `t` keeping `b^t` in the super summit set whose transport is a multiple
/// of `f`. Requires `b` in its super summit set.
///
/// With `p = inf(b)`, `r` its canonical length and `𝔭 = 𝔭(b)`, the element
/// `t · 𝔭(b^t)` is the meet of `b·t·Δ^-p`, `b⁻¹·t·Δ^(p+r)` and `t·Δ`, so the
/// transport of `t` is a multiple of `f` exactly when `𝔭·f` divides all
/// three. Each divisibility bounds `t` from below by a simple element.
pub fn pullback<F: Factor>(b: &Braid<F>, f: &F) -> F {
    let b_inv = b.inverse();
    let prefix = b.preferred_prefix();
    let past = |x: &Braid<F>| {
        let k = x.inf();
        pair_remainder(&prefix.delta_conjugate(k), &f.delta_conjugate(k), x)
    };
    let complement = prefix.delta_left_complement();
    let past_delta = complement
        .left_complement(&f.left_join(&complement))
        .delta_conjugate(-1);

    let bound = past(b).left_join(&past(&b_inv)).left_join(&past_delta);
    min_super_summit(b, &b_inv, &bound)
}

/// Pulls `f` back along the whole circuit of `b`, from its end to `b`, until
/// a conjugator repeats. Returns the point of that cycle fixed by the
/// iterated pullback once it has become idempotent.
///
/// `Δ` is returned unchanged.
pub fn main_pullback<F: Factor>(b: &Braid<F>, f: &F) -> F {
    if f.is_delta() {
        return f.clone();
    }
    let circuit = trajectory(b);
    iterate_until_revisit(f.clone(), |g| {
        circuit
            .iter()
            .rev()
            .fold(g.clone(), |carried, element| pullback(element, &carried))
    })
    .stable_point()
    .clone()
}
