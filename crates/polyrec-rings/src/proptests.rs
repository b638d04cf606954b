//! Property-based tests for the coefficient rings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use std::num::Wrapping;

    use crate::{Ring, Z};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        #[test]
        fn z_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = Z::new(a);
            let b = Z::new(b);
            let c = Z::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        #[test]
        fn z_additive_inverse(a in small_int()) {
            let a = Z::new(a);
            prop_assert!(Ring::is_zero(&(a.clone() + (-a))));
        }

        #[test]
        fn z_matches_i64(a in small_int(), b in small_int()) {
            prop_assert_eq!((Z::new(a) * Z::new(b)).to_i64(), Some(a * b));
            prop_assert_eq!((Z::new(a) - Z::new(b)).to_i64(), Some(a - b));
        }

        #[test]
        fn pow_matches_repeated_mul(a in -20i64..20i64, n in 0u32..12) {
            let expected = (0..n).fold(1i64, |acc, _| acc * a);
            prop_assert_eq!(Ring::pow(&a, n), expected);
            prop_assert_eq!(Ring::pow(&Z::new(a), n).to_i64(), Some(expected));
        }

        #[test]
        fn pow_adds_exponents(a in -5i64..5i64, m in 0u32..6, n in 0u32..6) {
            let a = Z::new(a);
            prop_assert_eq!(Ring::pow(&a, m) * Ring::pow(&a, n), Ring::pow(&a, m + n));
        }

        #[test]
        fn wrapping_pow_matches_default_squaring(a in any::<i64>(), n in 0u32..200) {
            // The wrapping_pow override must agree with plain squaring mod 2^64.
            let by_squaring = {
                let mut result = Wrapping(1i64);
                let mut base = a;
                let mut e = n;
                while e > 0 {
                    if e & 1 == 1 {
                        result *= Wrapping(base);
                    }
                    base = base.wrapping_mul(base);
                    e >>= 1;
                }
                result
            };
            prop_assert_eq!(Ring::pow(&Wrapping(a), n), by_squaring);
        }
    }
}
