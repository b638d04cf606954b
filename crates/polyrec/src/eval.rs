//! Evaluation in the leading variable.

use polyrec_rings::Ring;
use tracing::trace;

use crate::poly::{Poly, PolyView};

impl<R: Ring> Poly<R> {
    /// Substitutes `x` for the leading variable.
    ///
    /// The result is a polynomial in the remaining variables. Constants do
    /// not depend on the leading variable and are returned unchanged.
    ///
    /// # Panics
    ///
    /// With `i64` coefficients, panics if `x^e` or a product or sum of
    /// coefficients overflows and overflow checks are enabled. [`Z`] and
    /// `Wrapping<i64>` never panic here.
    ///
    /// [`Z`]: polyrec_rings::Z
    #[must_use]
    pub fn at(&self, x: &R) -> Self {
        match self.view() {
            PolyView::Scalar(_) => self.clone(),
            PolyView::Sum(terms) => {
                trace!(terms = terms.len(), point = ?x, "evaluating leading variable");
                terms.iter().fold(Self::zero(), |acc, mono| {
                    let power = Self::constant(Ring::pow(x, mono.exp()));
                    acc + Poly::mul(&power, mono.coeff())
                })
            }
        }
    }

    /// Substitutes `xs[0]` for `x0`, `xs[1]` for `x1`, and so on.
    ///
    /// Variables beyond `xs.len()` are left in the result.
    #[must_use]
    pub fn at_point(&self, xs: &[R]) -> Self {
        xs.iter().fold(self.clone(), |p, x| p.at(x))
    }
}
