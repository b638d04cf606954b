//! Exact integer coefficients.
//!
//! `Z` is the default coefficient ring of a polynomial. Sums, products and
//! powers never overflow, so polynomial arithmetic over `Z` is total.

use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;

use crate::traits::Ring;

/// An integer of unbounded size.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Z(IBig);

impl Z {
    /// Creates an integer from a machine word.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Returns the value as an `i64`, or `None` if it does not fit.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }
}

impl From<i64> for Z {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Z {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! forward_binop {
    ($($trait:ident :: $method:ident),*) => {
        $(
            impl std::ops::$trait for Z {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Self(std::ops::$trait::$method(self.0, rhs.0))
                }
            }
        )*
    };
}

forward_binop!(Add::add, Sub::sub, Mul::mul);

impl std::ops::Neg for Z {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for Z {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0 == IBig::ZERO
    }
}

impl One for Z {
    fn one() -> Self {
        Self(IBig::ONE)
    }
}

impl Ring for Z {
    fn zero() -> Self {
        <Self as Zero>::zero()
    }

    fn one() -> Self {
        <Self as One>::one()
    }

    fn is_zero(&self) -> bool {
        Zero::is_zero(self)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }

    fn pow(&self, n: u32) -> Self {
        Self(self.0.pow(n as usize))
    }
}
