use gar_braid::Braid;
use gar_core::Factor;

/// Part of the simple `s` that is not yet a prefix of the positive element
/// `y1 ⋯ yk · tail`, i.e. `(y1 ⋯ yk · tail)⁻¹ · (s ∨ y1 ⋯ yk · tail)`.
fn remainder<'a, F, I>(mut s: F, word: I) -> F
where
    F: Factor + 'a,
    I: IntoIterator<Item = &'a F>,
{
    for y in word {
        s = y.left_complement(&s.left_join(y));
    }
    s
}

/// `X⁻¹ · (a·b ∨ X)` for simple `a`, `b` and the positive part `X` of
/// `x = Δ^inf · X`, provided the result is simple.
pub(crate) fn pair_remainder<F: Factor>(a: &F, b: &F, x: &Braid<F>) -> F {
    let first = remainder(a.clone(), x.factors());
    // a⁻¹ · (a ∨ X) = a⁻¹ · X · first
    let mut rest = x.clone();
    rest.left_multiply_delta(-x.inf());
    rest.right_multiply_factor(&first);
    rest.left_divide(&Braid::from_factor(a.clone()));

    let delta = F::delta(x.parameter());
    let powers = std::iter::repeat(&delta).take(rest.inf().max(0) as usize);
    first.product(&remainder(b.clone(), powers.chain(rest.factors())))
}

/// One closure step for the condition `inf(x^u) >= inf(x)`.
///
/// With `x = Δ^p · X` the condition reads `τ^p(u) ≼ X · u`. Whatever part of
/// `τ^p(u)` is missing from `X · u` has to be appended to `u`.
fn inf_closure<F: Factor>(x: &Braid<F>, u: &F) -> F {
    let missing = remainder(
        u.delta_conjugate(x.inf()),
        x.factors().iter().chain(std::iter::once(u)),
    );
    u.product(&missing)
}

/// Smallest simple `u` with `f ≼ u` such that `b^u` stays in the super summit
/// set, for `b` in its super summit set.
///
/// `b_inv` is the left normal form of `b⁻¹`; the condition on `sup` is the
/// condition on `inf` for the inverse.
pub fn min_super_summit<F: Factor>(b: &Braid<F>, b_inv: &Braid<F>, f: &F) -> F {
    let mut u = f.clone();
    loop {
        let next = inf_closure(b_inv, &inf_closure(b, &u));
        if next == u {
            return u;
        }
        u = next;
    }
}
