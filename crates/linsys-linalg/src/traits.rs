use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// Magnitudes below this value are treated as zero (`1e-10`).
///
/// This is the tolerance used by [`Vector::is_zero`][crate::Vector::is_zero],
/// [`Vector::is_orthogonal_to`][crate::Vector::is_orthogonal_to] and by every pivot search.
pub const NEAR_ZERO: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// *π* to 28 decimal places.
pub const PI: Decimal = Decimal::from_parts(1102470953, 185874565, 1703060790, false, 28);

/// Types that can be tested for being (almost) zero.
pub trait NearZero {
    /// Returns whether the absolute value of `self` is less than [`NEAR_ZERO`].
    fn is_near_zero(&self) -> bool;

    /// Returns whether the absolute value of `self` is less than `tolerance`.
    fn is_near_zero_with(&self, tolerance: Decimal) -> bool;
}

impl NearZero for Decimal {
    #[inline]
    fn is_near_zero(&self) -> bool {
        self.is_near_zero_with(NEAR_ZERO)
    }

    #[inline]
    fn is_near_zero_with(&self, tolerance: Decimal) -> bool {
        self.abs() < tolerance
    }
}

/// Trigonometric functions that [`rust_decimal::MathematicalOps`] does not provide.
pub trait Trig: Sized {
    /// Computes the arccosine of `self`, in radians.
    ///
    /// Returns [`None`] if `self` lies outside of `[-1, 1]`.
    fn acos(self) -> Option<Self>;

    /// Converts an angle in radians to degrees.
    fn to_degrees(self) -> Self;
}

impl Trig for Decimal {
    fn acos(self) -> Option<Self> {
        if self > Decimal::ONE || self < Decimal::NEGATIVE_ONE {
            return None;
        }

        // There is no exact-decimal arccosine, so this goes through `f64`. That keeps about 15
        // significant digits.
        Decimal::from_f64(self.to_f64()?.acos())
    }

    fn to_degrees(self) -> Self {
        self * Decimal::from(180) / PI
    }
}
