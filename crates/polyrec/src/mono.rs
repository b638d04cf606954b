//! Terms of a recursive polynomial.

use polyrec_rings::{Ring, Z};

use crate::poly::Poly;

/// A term `x^exp * coeff`, where `x` is the leading variable.
///
/// The coefficient is a polynomial in the remaining variables. A term on
/// its own may carry a zero coefficient; such terms vanish when merged.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Mono<R = Z> {
    exp: u32,
    coeff: Poly<R>,
}

impl<R: Ring> Mono<R> {
    /// Creates a term from an exponent and an owned coefficient.
    #[must_use]
    pub fn new(exp: u32, coeff: Poly<R>) -> Self {
        Self { exp, coeff }
    }

    /// Creates a term with a copy of `coeff`.
    #[must_use]
    pub fn from_poly(coeff: &Poly<R>, exp: u32) -> Self {
        Self::new(exp, coeff.clone())
    }

    /// Returns the exponent of the leading variable.
    #[must_use]
    pub fn exp(&self) -> u32 {
        self.exp
    }

    /// Returns the coefficient.
    #[must_use]
    pub fn coeff(&self) -> &Poly<R> {
        &self.coeff
    }

    /// Splits into exponent and coefficient.
    #[must_use]
    pub fn into_parts(self) -> (u32, Poly<R>) {
        (self.exp, self.coeff)
    }

    /// Total degree of the term: its exponent plus the coefficient's degree.
    ///
    /// Returns -1 for a zero coefficient.
    #[must_use]
    pub fn degree(&self) -> i64 {
        if self.coeff.is_zero() {
            return -1;
        }
        i64::from(self.exp) + self.coeff.degree()
    }

    /// Adds the coefficient of a term with the same exponent.
    pub(crate) fn absorb(&mut self, other: Self) {
        debug_assert_eq!(self.exp, other.exp);
        let coeff = std::mem::take(&mut self.coeff);
        self.coeff = coeff + other.coeff;
    }
}
