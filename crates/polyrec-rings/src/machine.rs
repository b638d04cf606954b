//! Machine-word coefficient rings.
//!
//! Both are opt-in alternatives to [`Z`](crate::Z). `i64` follows Rust's
//! integer semantics: overflow panics when overflow checks are enabled and
//! wraps otherwise. `Wrapping<i64>` always wraps, giving exact arithmetic
//! in Z/2^64.

use std::num::Wrapping;

use crate::traits::Ring;

impl Ring for i64 {
    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn is_zero(&self) -> bool {
        *self == 0
    }

    fn is_one(&self) -> bool {
        *self == 1
    }
}

impl Ring for Wrapping<i64> {
    fn zero() -> Self {
        Wrapping(0)
    }

    fn one() -> Self {
        Wrapping(1)
    }

    fn is_zero(&self) -> bool {
        self.0 == 0
    }

    fn is_one(&self) -> bool {
        self.0 == 1
    }

    fn pow(&self, n: u32) -> Self {
        Wrapping(self.0.wrapping_pow(n))
    }
}
