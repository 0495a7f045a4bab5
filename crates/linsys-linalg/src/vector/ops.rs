//! Implementations of `std::ops`.
//!
//! Only the infallible operations get operator impls. Element-wise addition and subtraction can
//! fail on mismatched dimensions and are available as [`Vector::plus`] and [`Vector::minus`].

use std::ops::{Index, Mul, Neg};

use rust_decimal::Decimal;

use crate::approx::ApproxEq;

use super::Vector;

impl Index<usize> for Vector {
    type Output = Decimal;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl ApproxEq for Vector {
    type Tolerance = Decimal;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }
}

/// Element-wise negation.
impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        -&self
    }
}

/// Element-wise negation.
impl Neg for &Vector {
    type Output = Vector;

    fn neg(self) -> Self::Output {
        Vector(self.0.iter().map(|x| -*x).collect())
    }
}

/// Vector-Scalar multiplication (scaling).
///
/// # Panics
///
/// Panics on overflow, like [`Decimal`]'s own `Mul`. [`Vector::times_scalar`] reports it as an
/// error instead.
impl Mul<Decimal> for Vector {
    type Output = Vector;

    fn mul(self, rhs: Decimal) -> Self::Output {
        &self * rhs
    }
}

/// Vector-Scalar multiplication (scaling).
impl Mul<Decimal> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Vector(self.0.iter().map(|x| *x * rhs).collect())
    }
}
