//! Exact-decimal vector algebra for `linsys`.
//!
//! # Motivation
//!
//! Solving small linear systems by hand-style row reduction is very sensitive to rounding:
//! a coefficient that should cancel to exactly zero but ends up as `1e-17` changes the pivot
//! structure, and with it the classification of the whole system. This library therefore does
//! all arithmetic on [`Decimal`] values instead of binary floating point.
//!
//! # Goals & Non-Goals
//!
//! - Vectors are dynamically sized. The dimension of a system of equations is only known at
//!   runtime, so mismatched dimensions are reported as [`Error::DimensionMismatch`] instead of
//!   being ruled out by the type system.
//! - Every operation returns a new [`Vector`]; vectors are never mutated after construction.
//! - Don't support anything but [`Decimal`] elements. Generic element types would only make the
//!   API harder to use for the one element type that matters here.
//! - Don't try to be fast. The target are systems with a handful of equations and variables.
//!
//! [`Decimal`]: rust_decimal::Decimal

pub mod approx;
mod error;
mod traits;
mod vector;

pub use error::*;
pub use traits::*;
pub use vector::*;

pub use rust_decimal::Decimal;
