//! Canonical-form construction.
//!
//! Every sum the crate produces passes through [`merge_terms`] or
//! [`collapse`]. The deep predicates here are pure queries over already
//! built trees.

use polyrec_rings::Ring;
use tracing::trace;

use crate::error::PolyError;
use crate::mono::Mono;
use crate::poly::{Poly, PolyView};

/// Sums an unordered list of terms into canonical form.
///
/// Terms are stably sorted by exponent, like exponents are folded by
/// recursive addition, and identically zero groups are dropped.
pub fn merge_terms<R: Ring>(mut terms: Vec<Mono<R>>) -> Poly<R> {
    if terms.is_empty() {
        return Poly::zero();
    }

    terms.sort_by_key(Mono::exp);

    let mut merged: Vec<Mono<R>> = Vec::with_capacity(terms.len());
    for mono in terms {
        if let Some(last) = merged.last_mut() {
            if last.exp() == mono.exp() {
                last.absorb(mono);
                continue;
            }
        }
        merged.push(mono);
    }
    merged.retain(|mono| !is_deep_zero(mono.coeff()));

    collapse(merged)
}

/// Builds a sum from sorted, nonzero terms, reducing it to a scalar when
/// it is equivalent to one.
pub(crate) fn collapse<R: Ring>(terms: Vec<Mono<R>>) -> Poly<R> {
    if terms.is_empty() {
        return Poly::zero();
    }

    let poly = Poly::from_sum_unchecked(terms);
    if let Some(c) = deep_constant(&poly).cloned() {
        trace!(value = ?c, "sum collapsed to scalar");
        return Poly::constant(c);
    }
    poly
}

/// Returns true if `poly` is zero at every level of nesting.
pub fn is_deep_zero<R: Ring>(poly: &Poly<R>) -> bool {
    match poly.view() {
        PolyView::Scalar(c) => c.is_zero(),
        PolyView::Sum(terms) => terms.iter().all(|mono| is_deep_zero(mono.coeff())),
    }
}

/// Returns the constant `poly` is equivalent to, if any.
///
/// A sum is constant when its first term has exponent 0 and a constant
/// coefficient and every other term is identically zero.
pub fn deep_constant<R: Ring>(poly: &Poly<R>) -> Option<&R> {
    match poly.view() {
        PolyView::Scalar(c) => Some(c),
        PolyView::Sum(terms) => {
            let (first, rest) = terms.split_first()?;
            if first.exp() != 0 || !rest.iter().all(|mono| is_deep_zero(mono.coeff())) {
                return None;
            }
            deep_constant(first.coeff())
        }
    }
}

/// Checks that `terms` already form a canonical sum.
///
/// # Errors
///
/// Returns the first violation found, scanning left to right.
pub fn check_sorted_terms<R: Ring>(terms: &[Mono<R>]) -> Result<(), PolyError> {
    if terms.is_empty() {
        return Err(PolyError::EmptySum);
    }

    for pair in terms.windows(2) {
        let (previous, next) = (pair[0].exp(), pair[1].exp());
        if next == previous {
            return Err(PolyError::DuplicateExponent(next));
        }
        if next < previous {
            return Err(PolyError::UnsortedExponents { previous, next });
        }
    }

    if let Some(mono) = terms.iter().find(|mono| is_deep_zero(mono.coeff())) {
        return Err(PolyError::ZeroCoefficient(mono.exp()));
    }

    if let [only] = terms {
        if only.exp() == 0 && deep_constant(only.coeff()).is_some() {
            return Err(PolyError::ReducibleToScalar);
        }
    }

    Ok(())
}
