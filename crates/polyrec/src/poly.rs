//! The recursive polynomial type.
//!
//! A `Poly` is either a scalar or a sum of terms `x^e * c`, where `x` is the
//! leading variable and each coefficient `c` is itself a `Poly` in the
//! remaining variables.

use polyrec_rings::{Ring, Z};

use crate::error::PolyError;
use crate::mono::Mono;
use crate::normalize;

/// A sparse multivariate polynomial in recursive form.
///
/// Values are always canonical:
/// - a sum is never empty
/// - its terms have strictly increasing exponents
/// - no coefficient is identically zero
/// - a sum equivalent to a scalar is stored as that scalar
///
/// The representation is private; sums are produced only by the
/// normalizing constructors, and inspected through [`Poly::view`].
///
/// Coefficients default to the arbitrary precision [`Z`], for which every
/// operation is exact. `i64` and `Wrapping<i64>` are available for speed;
/// with `i64`, coefficient overflow follows Rust's integer semantics
/// (a panic when overflow checks are enabled).
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Poly<R = Z> {
    pub(crate) repr: Repr<R>,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Repr<R> {
    Scalar(R),
    Sum(Vec<Mono<R>>),
}

/// A borrowed view of a polynomial's top level.
#[derive(Debug)]
pub enum PolyView<'a, R> {
    /// A constant, independent of the leading variable.
    Scalar(&'a R),
    /// Terms in strictly increasing exponent order.
    Sum(&'a [Mono<R>]),
}

impl<R> Clone for PolyView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for PolyView<'_, R> {}

impl<R: Ring> Poly<R> {
    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(R::zero())
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self::constant(R::one())
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: R) -> Self {
        Self {
            repr: Repr::Scalar(c),
        }
    }

    /// Creates the monomial `c * x0^e0 * x1^e1 * ...` from `exps = [e0, e1, ...]`.
    #[must_use]
    pub fn monomial(c: R, exps: &[u32]) -> Self {
        exps.iter().rev().fold(Self::constant(c), |inner, &exp| {
            Self::from_terms(vec![Mono::new(exp, inner)])
        })
    }

    /// Creates the variable `x_idx`.
    #[must_use]
    pub fn var(idx: usize) -> Self {
        let mut exps = vec![0; idx + 1];
        exps[idx] = 1;
        Self::monomial(R::one(), &exps)
    }

    /// Sums an arbitrary list of terms into canonical form.
    ///
    /// Terms may come in any order, repeat exponents, or carry zero
    /// coefficients.
    #[must_use]
    pub fn from_terms(terms: Vec<Mono<R>>) -> Self {
        normalize::merge_terms(terms)
    }

    /// Like [`Poly::from_terms`], but leaves the caller's terms untouched.
    #[must_use]
    pub fn from_terms_cloned(terms: &[Mono<R>]) -> Self {
        normalize::merge_terms(terms.to_vec())
    }

    /// Builds a sum from terms the caller asserts are already canonical.
    ///
    /// # Errors
    ///
    /// Returns a [`PolyError`] naming the first violated invariant; the
    /// terms are not re-normalized.
    pub fn try_from_sorted_terms(terms: Vec<Mono<R>>) -> Result<Self, PolyError> {
        normalize::check_sorted_terms(&terms)?;
        Ok(Self::from_sum_unchecked(terms))
    }

    /// Wraps terms as a sum. Callers uphold every invariant except scalar
    /// collapse.
    pub(crate) fn from_sum_unchecked(terms: Vec<Mono<R>>) -> Self {
        Self {
            repr: Repr::Sum(terms),
        }
    }

    /// Returns a borrowed view of the top level.
    #[must_use]
    pub fn view(&self) -> PolyView<'_, R> {
        match &self.repr {
            Repr::Scalar(c) => PolyView::Scalar(c),
            Repr::Sum(terms) => PolyView::Sum(terms),
        }
    }

    /// Returns true if this polynomial is a constant.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        matches!(self.repr, Repr::Scalar(_))
    }

    /// Returns the constant value, if this polynomial is a constant.
    #[must_use]
    pub fn as_scalar(&self) -> Option<&R> {
        match &self.repr {
            Repr::Scalar(c) => Some(c),
            Repr::Sum(_) => None,
        }
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.as_scalar().is_some_and(R::is_zero)
    }

    /// Returns the top-level terms; empty for a constant.
    #[must_use]
    pub fn terms(&self) -> &[Mono<R>] {
        match &self.repr {
            Repr::Scalar(_) => &[],
            Repr::Sum(terms) => terms,
        }
    }

    /// Returns the number of top-level terms; zero for a constant.
    #[must_use]
    pub fn num_terms(&self) -> usize {
        self.terms().len()
    }

    /// Converts into an equivalent list of top-level terms.
    ///
    /// A nonzero constant becomes a single exponent-0 term; zero becomes
    /// the empty list.
    #[must_use]
    pub fn into_terms(self) -> Vec<Mono<R>> {
        match self.repr {
            Repr::Scalar(c) if c.is_zero() => Vec::new(),
            Repr::Scalar(c) => vec![Mono::new(0, Self::constant(c))],
            Repr::Sum(terms) => terms,
        }
    }
}

impl<R: Ring> Default for Poly<R> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<R: Ring> From<R> for Poly<R> {
    fn from(c: R) -> Self {
        Self::constant(c)
    }
}
