//! Degree queries.

use polyrec_rings::Ring;

use crate::mono::Mono;
use crate::poly::{Poly, PolyView};

impl<R: Ring> Poly<R> {
    /// Total degree, summed across all variables.
    ///
    /// The zero polynomial has degree -1.
    #[must_use]
    pub fn degree(&self) -> i64 {
        match self.view() {
            PolyView::Scalar(c) => {
                if c.is_zero() {
                    -1
                } else {
                    0
                }
            }
            PolyView::Sum(terms) => terms.iter().map(Mono::degree).max().unwrap_or(-1),
        }
    }

    /// Degree in the variable `x_var_idx` alone.
    ///
    /// The zero polynomial has degree -1 in every variable.
    #[must_use]
    pub fn degree_by(&self, var_idx: usize) -> i64 {
        match self.view() {
            PolyView::Scalar(c) => {
                if c.is_zero() {
                    -1
                } else {
                    0
                }
            }
            PolyView::Sum(terms) if var_idx == 0 => {
                terms.last().map_or(-1, |mono| i64::from(mono.exp()))
            }
            PolyView::Sum(terms) => terms
                .iter()
                .map(|mono| mono.coeff().degree_by(var_idx - 1))
                .max()
                .unwrap_or(0),
        }
    }
}
