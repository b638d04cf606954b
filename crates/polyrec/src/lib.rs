//! # polyrec
//!
//! Sparse multivariate polynomials with integer coefficients, stored in
//! recursive form.
//!
//! A polynomial in `x0, x1, ..., xn` is a polynomial in its leading variable
//! `x0` whose coefficients are polynomials in `x1, ..., xn`, bottoming out at
//! scalar constants. Every value is kept in a unique canonical form:
//! - terms sorted by strictly increasing exponent
//! - no zero coefficients
//! - no sum that is equivalent to a scalar
//!
//! so structural equality coincides with polynomial equality.
//!
//! ## Example
//!
//! ```
//! use polyrec::{Poly, Z};
//!
//! let x: Poly = Poly::var(0);
//! let one = Poly::one();
//!
//! // (x + 1)(x - 1) = x^2 - 1
//! let p = (&x + &one) * (&x - &one);
//! assert_eq!(p, Poly::monomial(Z::new(1), &[2]) - one);
//! assert_eq!(p.at(&Z::new(3)), Poly::constant(Z::new(8)));
//! assert_eq!(p.degree(), 2);
//!
//! // Machine-word coefficients are opt-in.
//! let q = Poly::<i64>::monomial(3, &[1, 2]);
//! assert_eq!(q.at_point(&[2, 5]), Poly::constant(150));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod degree;
pub mod error;
pub mod eval;
pub mod mono;
pub mod normalize;
pub mod poly;

#[cfg(test)]
mod proptests;

pub use error::PolyError;
pub use mono::Mono;
pub use poly::{Poly, PolyView};
pub use polyrec_rings::{Ring, Z};
