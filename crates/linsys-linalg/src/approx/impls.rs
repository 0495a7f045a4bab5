use rust_decimal::Decimal;

use super::ApproxEq;

/// A difference that overflows is never within tolerance. A tolerance bound that overflows
/// accepts any representable difference.
impl ApproxEq for Decimal {
    type Tolerance = Self;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.checked_sub(*other)
            .map_or(false, |diff| diff.abs() <= abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        let Some(abs_diff) = self.checked_sub(*other).map(|d| d.abs()) else {
            return false;
        };
        let largest = Decimal::max(self.abs(), other.abs());

        largest
            .checked_mul(rel_tolerance)
            .map_or(true, |bound| abs_diff <= bound)
    }
}

impl ApproxEq for f64 {
    type Tolerance = Self;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            // Ensures that `inf == inf`, `-inf == -inf` and `inf != -inf`.
            return self == other;
        }

        let diff = (self - other).abs();
        diff <= abs_tolerance
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        if !self.is_finite() || !other.is_finite() {
            return self == other;
        }

        let abs_diff = (self - other).abs();
        let largest = Self::max(self.abs(), other.abs());

        abs_diff <= largest * rel_tolerance
    }
}

impl<'a, T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &'a T {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        T::abs_diff_eq(self, other, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        T::rel_diff_eq(self, other, rel_tolerance)
    }
}

/// Slices of different length are never equal.
impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::abs_diff_eq(a, b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other)
                .all(|(a, b)| T::rel_diff_eq(a, b, rel_tolerance))
    }
}

impl<T: ApproxEq<U>, U> ApproxEq<Vec<U>> for Vec<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Vec<U>, abs_tolerance: Self::Tolerance) -> bool {
        self.as_slice().abs_diff_eq(other.as_slice(), abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Vec<U>, rel_tolerance: Self::Tolerance) -> bool {
        self.as_slice().rel_diff_eq(other.as_slice(), rel_tolerance)
    }
}
