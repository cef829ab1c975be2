//! The element type and its arithmetic.

use std::fmt::{self, Display};
use std::ops::Mul;

use gar_core::{ErrorInfo, Factor, GarError};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::normal_form::{normalize, right_normal_factors};

/// An element `Δ^inf · f1 ⋯ fr` of a Garside group in left normal form.
///
/// The factors are never the identity nor `Δ`, and every consecutive pair is
/// left-weighted, so two elements are equal exactly when their stored forms
/// are. Every operation renormalizes before returning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(bound = "", try_from = "BraidPayload<F>")]
pub struct Braid<F: Factor> {
    parameter: F::Parameter,
    inf: i32,
    factors: Vec<F>,
}

/// Wire shape of a braid. Payloads are checked against the braid's
/// parameter and renormalized.
#[derive(Deserialize)]
#[serde(bound = "")]
pub(crate) struct BraidPayload<F: Factor> {
    parameter: F::Parameter,
    inf: i32,
    factors: Vec<F>,
}

impl<F: Factor> TryFrom<BraidPayload<F>> for Braid<F> {
    type Error = GarError;

    fn try_from(payload: BraidPayload<F>) -> Result<Self, GarError> {
        let stray = payload
            .factors
            .iter()
            .position(|factor| factor.parameter() != payload.parameter);
        if let Some(position) = stray {
            return Err(GarError::Parameter(
                ErrorInfo::new("factor-parameter", "factor belongs to a different group")
                    .with_context("braid", format!("{:?}", payload.parameter))
                    .with_context("factor", format!("{:?}", payload.factors[position].parameter()))
                    .with_context("position", position.to_string()),
            ));
        }
        let mut braid = Braid {
            parameter: payload.parameter,
            inf: payload.inf,
            factors: payload.factors,
        };
        braid.normalize();
        Ok(braid)
    }
}

impl<F: Factor> Braid<F> {
    /// The trivial element.
    pub fn identity(parameter: F::Parameter) -> Self {
        Self {
            parameter,
            inf: 0,
            factors: Vec::new(),
        }
    }

    /// The element `Δ^k`.
    pub fn delta_power(parameter: F::Parameter, k: i32) -> Self {
        Self {
            parameter,
            inf: k,
            factors: Vec::new(),
        }
    }

    /// The element represented by a single simple factor.
    pub fn from_factor(factor: F) -> Self {
        let parameter = factor.parameter();
        if factor.is_delta() {
            Self::delta_power(parameter, 1)
        } else if factor.is_identity() {
            Self::identity(parameter)
        } else {
            Self {
                parameter,
                inf: 0,
                factors: vec![factor],
            }
        }
    }

    /// Builds the product of a word in the atoms. Letter `i > 0` stands for
    /// the `i`-th atom (counting from 1) and `-i` for its inverse.
    pub fn from_word(parameter: F::Parameter, word: &[i32]) -> Result<Self, GarError> {
        let atoms = F::atoms(parameter);
        let mut braid = Self::identity(parameter);
        for (position, &letter) in word.iter().enumerate() {
            let index = letter.unsigned_abs() as usize;
            if letter == 0 || index > atoms.len() {
                return Err(GarError::Word(
                    ErrorInfo::new("atom-out-of-range", "letter does not name an atom")
                        .with_context("letter", letter.to_string())
                        .with_context("position", position.to_string())
                        .with_context("atoms", atoms.len().to_string())
                        .with_hint("use letters in ±1..=number of atoms"),
                ));
            }
            let atom = &atoms[index - 1];
            if letter > 0 {
                braid.factors.push(atom.clone());
            } else {
                // a⁻¹ = ∂a · Δ⁻¹
                braid.factors.push(atom.delta_left_complement());
                braid.right_multiply_delta(-1);
            }
        }
        braid.normalize();
        Ok(braid)
    }

    /// Product of `length` simple factors drawn uniformly at random.
    pub fn random<R: Rng + ?Sized>(parameter: F::Parameter, length: usize, rng: &mut R) -> Self {
        let factors = (0..length).map(|_| F::random(parameter, &mut *rng)).collect();
        let mut braid = Self {
            parameter,
            inf: 0,
            factors,
        };
        braid.normalize();
        braid
    }

    fn normalize(&mut self) {
        normalize(&mut self.inf, &mut self.factors);
    }

    /// Group parameter of the element.
    pub fn parameter(&self) -> F::Parameter {
        self.parameter
    }

    /// Power of `Δ` in the left normal form.
    pub fn inf(&self) -> i32 {
        self.inf
    }

    /// `inf + canonical_length`.
    pub fn sup(&self) -> i32 {
        self.inf + self.factors.len() as i32
    }

    /// Number of non-`Δ` factors in the left normal form.
    pub fn canonical_length(&self) -> usize {
        self.factors.len()
    }

    /// The non-`Δ` factors of the left normal form.
    pub fn factors(&self) -> &[F] {
        &self.factors
    }

    /// Returns whether the element is trivial.
    pub fn is_identity(&self) -> bool {
        self.inf == 0 && self.factors.is_empty()
    }

    fn ensure_same_group(&self, other: &Self) {
        assert_eq!(
            self.parameter, other.parameter,
            "elements belong to different groups"
        );
    }

    /// `self · Δ^k`.
    pub fn right_multiply_delta(&mut self, k: i32) {
        self.inf += k;
        for factor in &mut self.factors {
            *factor = factor.delta_conjugate(k);
        }
    }

    /// `Δ^k · self`.
    pub fn left_multiply_delta(&mut self, k: i32) {
        self.inf += k;
    }

    /// `self · f`.
    pub fn right_multiply_factor(&mut self, f: &F) {
        self.factors.push(f.clone());
        self.normalize();
    }

    /// `f · self`.
    pub fn left_multiply_factor(&mut self, f: &F) {
        self.factors.insert(0, f.delta_conjugate(self.inf));
        self.normalize();
    }

    /// `self · other`.
    ///
    /// # Panics
    ///
    /// If the two elements have different parameters.
    pub fn right_multiply(&mut self, other: &Self) {
        self.ensure_same_group(other);
        self.right_multiply_delta(other.inf);
        self.factors.extend(other.factors.iter().cloned());
        self.normalize();
    }

    /// `other · self`.
    pub fn left_multiply(&mut self, other: &Self) {
        let mut product = other.clone();
        product.right_multiply(self);
        *self = product;
    }

    /// The inverse element.
    ///
    /// The inverse of `Δ^p · f1 ⋯ fr` is `Δ^(-p-r) · g_r ⋯ g_1` with
    /// `g_i = τ^(-p-i)(∂ f_i)`, already in left normal form.
    pub fn inverse(&self) -> Self {
        let r = self.factors.len() as i32;
        let factors = self
            .factors
            .iter()
            .enumerate()
            .rev()
            .map(|(i, f)| f.delta_left_complement().delta_conjugate(-self.inf - i as i32 - 1))
            .collect();
        let mut inverse = Self {
            parameter: self.parameter,
            inf: -self.inf - r,
            factors,
        };
        inverse.normalize();
        inverse
    }

    /// `self · other⁻¹`.
    pub fn right_divide(&mut self, other: &Self) {
        self.right_multiply(&other.inverse());
    }

    /// `other⁻¹ · self`.
    pub fn left_divide(&mut self, other: &Self) {
        self.left_multiply(&other.inverse());
    }

    /// `self · f⁻¹` for a simple `f`.
    pub fn right_divide_factor(&mut self, f: &F) {
        self.factors.push(f.delta_left_complement());
        self.right_multiply_delta(-1);
        self.normalize();
    }

    /// Replaces `self` by `f⁻¹ · self · f`.
    pub fn conjugate(&mut self, f: &F) {
        // f⁻¹ = Δ⁻¹ · τ⁻¹(∂f); moved past Δ^inf it becomes τ^(inf-1)(∂f).
        self.factors.push(f.clone());
        self.factors
            .insert(0, f.delta_left_complement().delta_conjugate(self.inf - 1));
        self.inf -= 1;
        self.normalize();
    }

    /// Replaces `self` by `c⁻¹ · self · c`.
    pub fn conjugate_by(&mut self, c: &Self) {
        self.left_divide(c);
        self.right_multiply(c);
    }

    /// Replaces `self` by `Δ^-k · self · Δ^k`.
    pub fn delta_conjugate(&mut self, k: i32) {
        for factor in &mut self.factors {
            *factor = factor.delta_conjugate(k);
        }
    }

    /// The simple element `self ∧ Δ`, exact for elements between the
    /// identity and `Δ`.
    pub fn to_simple(&self) -> F {
        if self.inf >= 1 {
            F::delta(self.parameter)
        } else if let (0, Some(first)) = (self.inf, self.factors.first()) {
            first.clone()
        } else {
            F::identity(self.parameter)
        }
    }

    /// Greatest simple right divisor `self ∧_R Δ` of a positive element.
    pub fn greatest_simple_suffix(&self) -> F {
        debug_assert!(self.inf >= 0, "suffix of a non-positive element");
        if self.inf >= 1 {
            return F::delta(self.parameter);
        }
        right_normal_factors(self.inf, &self.factors)
            .pop()
            .unwrap_or_else(|| F::identity(self.parameter))
    }

    /// Greatest common right divisor of a positive element and a simple `f`.
    pub fn right_meet(&self, f: &F) -> F {
        self.greatest_simple_suffix().right_meet(f)
    }
}

impl<F: Factor + Display> Display for Braid<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_identity() {
            return write!(f, "1");
        }
        let mut first = true;
        if self.inf != 0 {
            write!(f, "D^{}", self.inf)?;
            first = false;
        }
        for factor in &self.factors {
            if !first {
                write!(f, " . ")?;
            }
            write!(f, "{factor}")?;
            first = false;
        }
        Ok(())
    }
}

impl<F: Factor> Mul for &Braid<F> {
    type Output = Braid<F>;

    fn mul(self, rhs: &Braid<F>) -> Braid<F> {
        let mut product = self.clone();
        product.right_multiply(rhs);
        product
    }
}

impl<F: Factor> Mul for Braid<F> {
    type Output = Braid<F>;

    fn mul(mut self, rhs: Braid<F>) -> Braid<F> {
        self.right_multiply(&rhs);
        self
    }
}
