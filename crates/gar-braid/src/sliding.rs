use gar_core::Factor;

use crate::braid::Braid;

impl<F: Factor> Braid<F> {
    /// `ι(x) = τ^-inf(f1)`, the first factor moved to the left of `Δ^inf`.
    /// Identity when the canonical length is zero.
    pub fn initial_factor(&self) -> F {
        match self.factors().first() {
            Some(first) => first.delta_conjugate(-self.inf()),
            None => F::identity(self.parameter()),
        }
    }

    /// `φ(x) = fr`. Identity when the canonical length is zero.
    pub fn final_factor(&self) -> F {
        match self.factors().last() {
            Some(last) => last.clone(),
            None => F::identity(self.parameter()),
        }
    }

    /// Preferred prefix `𝔭(x) = ι(x) ∧ ∂(φ(x))`.
    pub fn preferred_prefix(&self) -> F {
        if self.canonical_length() == 0 {
            return F::identity(self.parameter());
        }
        self.initial_factor()
            .left_meet(&self.final_factor().delta_left_complement())
    }

    /// Preferred suffix `𝔭'(x) = φ(x) ∧_R ∂⁻¹(ι(x))`.
    pub fn preferred_suffix(&self) -> F {
        if self.canonical_length() == 0 {
            return F::identity(self.parameter());
        }
        self.final_factor()
            .right_meet(&self.initial_factor().delta_right_complement())
    }

    /// Cyclic sliding: replaces `x` by `𝔭(x)⁻¹ · x · 𝔭(x)`.
    pub fn sliding(&mut self) {
        let prefix = self.preferred_prefix();
        if !prefix.is_identity() {
            self.conjugate(&prefix);
        }
    }

    /// Returns the sliding of `self`, leaving it untouched.
    pub fn slid(&self) -> Self {
        let mut next = self.clone();
        next.sliding();
        next
    }
}
