//! Polynomial ring arithmetic.
//!
//! Borrowed operations (`p.add(&q)`, `&p + &q`) leave their inputs untouched;
//! owned operator forms reuse the operands' terms.

use polyrec_rings::Ring;

use crate::mono::Mono;
use crate::normalize::{collapse, merge_terms};
use crate::poly::{Poly, Repr};

impl<R: Ring> Poly<R> {
    /// Adds two polynomials.
    ///
    /// # Panics
    ///
    /// With `i64` coefficients, panics if a coefficient sum overflows and
    /// overflow checks are enabled.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        sum(self.clone(), other.clone())
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.mul(&Self::constant(-R::one()))
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        self.add(&other.neg())
    }

    /// Multiplies two polynomials.
    ///
    /// # Panics
    ///
    /// Panics if the exponents of two multiplied terms sum past `u32::MAX`.
    /// With `i64` coefficients, also panics if a coefficient product
    /// overflows and overflow checks are enabled.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        match (&self.repr, &other.repr) {
            (Repr::Scalar(a), Repr::Scalar(b)) => Self::constant(a.clone() * b.clone()),
            (Repr::Scalar(c), Repr::Sum(terms)) | (Repr::Sum(terms), Repr::Scalar(c)) => {
                scale_terms(terms, c)
            }
            (Repr::Sum(p), Repr::Sum(q)) => {
                let mut products = Vec::with_capacity(p.len() * q.len());
                for a in p {
                    for b in q {
                        let coeff = a.coeff().mul(b.coeff());
                        if !coeff.is_zero() {
                            products.push(Mono::new(product_exp(a.exp(), b.exp()), coeff));
                        }
                    }
                }
                merge_terms(products)
            }
        }
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: &R) -> Self {
        self.mul(&Self::constant(c.clone()))
    }

    /// Raises the polynomial to a non-negative integer power.
    ///
    /// # Panics
    ///
    /// Under the same conditions as [`Poly::mul`].
    #[must_use]
    pub fn pow(&self, n: u32) -> Self {
        Ring::pow(self, n)
    }
}

/// Exponent of the product of two terms in the same variable.
fn product_exp(a: u32, b: u32) -> u32 {
    a.checked_add(b)
        .unwrap_or_else(|| panic!("exponent overflow: x^{a} * x^{b} exceeds u32::MAX"))
}

/// Adds two owned polynomials, moving their terms into the merge.
fn sum<R: Ring>(lhs: Poly<R>, rhs: Poly<R>) -> Poly<R> {
    match (lhs.repr, rhs.repr) {
        (Repr::Scalar(a), Repr::Scalar(b)) => Poly::constant(a + b),
        (Repr::Scalar(c), Repr::Sum(mut terms)) | (Repr::Sum(mut terms), Repr::Scalar(c)) => {
            if c.is_zero() {
                return Poly::from_sum_unchecked(terms);
            }
            terms.push(Mono::new(0, Poly::constant(c)));
            merge_terms(terms)
        }
        (Repr::Sum(mut p), Repr::Sum(q)) => {
            p.extend(q);
            merge_terms(p)
        }
    }
}

/// Multiplies every coefficient by a nonzero scalar.
///
/// Exponents keep their order, so no merge is needed; products that vanish
/// (possible in rings with zero divisors) are dropped.
fn scale_terms<R: Ring>(terms: &[Mono<R>], c: &R) -> Poly<R> {
    let factor = Poly::constant(c.clone());
    let scaled = terms
        .iter()
        .filter_map(|mono| {
            let coeff = Poly::mul(&factor, mono.coeff());
            (!coeff.is_zero()).then(|| Mono::new(mono.exp(), coeff))
        })
        .collect();
    collapse(scaled)
}

impl<R: Ring> Ring for Poly<R> {
    fn zero() -> Self {
        Self::zero()
    }

    fn one() -> Self {
        Self::one()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }

    fn is_one(&self) -> bool {
        self.as_scalar().is_some_and(R::is_one)
    }
}

impl<R: Ring> std::ops::Add for Poly<R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        sum(self, rhs)
    }
}

impl<R: Ring> std::ops::Add for &Poly<R> {
    type Output = Poly<R>;

    fn add(self, rhs: Self) -> Self::Output {
        Poly::add(self, rhs)
    }
}

impl<R: Ring> std::ops::Sub for Poly<R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        sum(self, Poly::neg(&rhs))
    }
}

impl<R: Ring> std::ops::Sub for &Poly<R> {
    type Output = Poly<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        Poly::sub(self, rhs)
    }
}

impl<R: Ring> std::ops::Mul for Poly<R> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Poly::mul(&self, &rhs)
    }
}

impl<R: Ring> std::ops::Mul for &Poly<R> {
    type Output = Poly<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        Poly::mul(self, rhs)
    }
}

impl<R: Ring> std::ops::Neg for Poly<R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Poly::neg(&self)
    }
}

impl<R: Ring> std::ops::Neg for &Poly<R> {
    type Output = Poly<R>;

    fn neg(self) -> Self::Output {
        Poly::neg(self)
    }
}
