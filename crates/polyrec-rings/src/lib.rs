//! # polyrec-rings
//!
//! Coefficient rings for recursive sparse polynomials.
//!
//! This crate provides:
//! - The `Ring` trait every coefficient type implements
//! - Machine-word coefficients: `i64` and `Wrapping<i64>`
//! - Arbitrary precision integers `Z`, backed by `dashu`

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod machine;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use integers::Z;
pub use traits::Ring;
