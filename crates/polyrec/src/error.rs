//! Errors raised by checked polynomial construction.

use thiserror::Error;

/// Reasons a raw term list is not in canonical form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A sum must contain at least one term.
    #[error("sum has no terms")]
    EmptySum,

    /// Exponents must increase from one term to the next.
    #[error("exponent {next} follows exponent {previous}")]
    UnsortedExponents {
        /// Exponent of the earlier term.
        previous: u32,
        /// Exponent of the later, smaller term.
        next: u32,
    },

    /// Two terms share an exponent.
    #[error("exponent {0} appears more than once")]
    DuplicateExponent(u32),

    /// A term's coefficient is identically zero.
    #[error("term with exponent {0} has a zero coefficient")]
    ZeroCoefficient(u32),

    /// The sum is equivalent to a scalar and must be stored as one.
    #[error("sum reduces to a scalar")]
    ReducibleToScalar,
}
