//! Property-based tests for the arithmetic engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::mono::Mono;
    use crate::normalize::check_sorted_terms;
    use crate::poly::{Poly, PolyView};

    // Strategy for generating small coefficients
    fn small_coeff() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    // Strategy for generating polynomials in up to three variables
    fn small_poly() -> impl Strategy<Value = Poly<i64>> {
        proptest::collection::vec(
            (small_coeff(), proptest::collection::vec(0u32..4, 0..=3)),
            0..6,
        )
        .prop_map(|monomials| {
            monomials
                .into_iter()
                .fold(Poly::zero(), |acc, (c, exps)| acc + Poly::monomial(c, &exps))
        })
    }

    // Recursively checks every invariant of the canonical form.
    fn is_canonical(p: &Poly<i64>) -> bool {
        match p.view() {
            PolyView::Scalar(_) => true,
            PolyView::Sum(terms) => {
                check_sorted_terms(terms).is_ok()
                    && terms.iter().all(|mono| is_canonical(mono.coeff()))
            }
        }
    }

    proptest! {
        // Polynomial ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_identities(a in small_poly()) {
            prop_assert_eq!(a.add(&Poly::zero()), a.clone());
            prop_assert_eq!(a.mul(&Poly::one()), a.clone());
            prop_assert!(a.mul(&Poly::zero()).is_zero());
        }

        #[test]
        fn poly_sub_self_is_zero(a in small_poly()) {
            prop_assert_eq!(a.sub(&a), Poly::zero());
            prop_assert_eq!(a.add(&a.neg()), Poly::zero());
        }

        #[test]
        fn poly_owned_ops_match_borrowed(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.clone() + b.clone(), a.add(&b));
            prop_assert_eq!(a.clone() - b.clone(), a.sub(&b));
            prop_assert_eq!(a.clone() * b.clone(), a.mul(&b));
            prop_assert_eq!(-a.clone(), a.neg());
        }

        // Canonical form

        #[test]
        fn results_are_canonical(a in small_poly(), b in small_poly(), x in small_coeff()) {
            prop_assert!(is_canonical(&a));
            prop_assert!(is_canonical(&a.add(&b)));
            prop_assert!(is_canonical(&a.sub(&b)));
            prop_assert!(is_canonical(&a.mul(&b)));
            prop_assert!(is_canonical(&a.at(&x)));
        }

        #[test]
        fn merge_ignores_term_order(a in small_poly(), b in small_poly()) {
            let mut forward: Vec<Mono<i64>> = a.clone().into_terms();
            forward.extend(b.clone().into_terms());
            let mut backward = forward.clone();
            backward.reverse();
            prop_assert_eq!(Poly::from_terms(forward), Poly::from_terms(backward));
        }

        #[test]
        fn into_terms_roundtrips(a in small_poly()) {
            prop_assert_eq!(Poly::from_terms(a.clone().into_terms()), a);
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // deg(a * b) = deg(a) + deg(b) over an integral domain
            if !a.is_zero() && !b.is_zero() {
                prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
            }
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            for k in 0..3 {
                let sum = a.add(&b);
                prop_assert!(sum.degree_by(k) <= a.degree_by(k).max(b.degree_by(k)));
            }
        }

        #[test]
        fn variable_degree_bounded_by_total(a in small_poly(), k in 0usize..4) {
            prop_assert!(a.degree_by(k) <= a.degree());
        }

        // Evaluation properties

        #[test]
        fn poly_eval_at_zero(a in small_poly()) {
            let expected = match a.view() {
                PolyView::Scalar(_) => a.clone(),
                PolyView::Sum(terms) => terms
                    .first()
                    .filter(|mono| mono.exp() == 0)
                    .map_or_else(Poly::zero, |mono| mono.coeff().clone()),
            };
            prop_assert_eq!(a.at(&0), expected);
        }

        #[test]
        fn poly_eval_add(a in small_poly(), b in small_poly(), x in small_coeff()) {
            // (a + b)(x) = a(x) + b(x)
            prop_assert_eq!(a.add(&b).at(&x), a.at(&x).add(&b.at(&x)));
        }

        #[test]
        fn poly_eval_mul(a in small_poly(), b in small_poly(), x in -3i64..3) {
            // (a * b)(x) = a(x) * b(x)
            prop_assert_eq!(a.mul(&b).at(&x), a.at(&x).mul(&b.at(&x)));
        }

        #[test]
        fn full_evaluation_is_scalar(a in small_poly(), xs in proptest::collection::vec(-3i64..3, 3)) {
            prop_assert!(a.at_point(&xs).is_scalar());
        }
    }
}
