use std::{fmt, str::FromStr};

use itertools::Itertools;
use rust_decimal::{Decimal, MathematicalOps};

use crate::{
    traits::{NearZero, Trig},
    Error, Result, NEAR_ZERO, PI,
};

mod ops;

/// An immutable vector of exact decimal coordinates.
///
/// # Construction
///
/// - [`Vector::new`] takes any iterator of [`Decimal`]s.
/// - [`Vector::parse`] takes numeric literals, which are parsed without any rounding.
/// - The [`FromStr`] impl accepts a comma-separated list, optionally in parentheses.
/// - [`Vector::zero`] creates the zero vector of a given dimension.
///
/// A vector always has at least one coordinate.
///
/// # Operations
///
/// Operations that combine two vectors ([`Vector::plus`], [`Vector::dot`], ...) check that both
/// operands have the same dimension and return [`Error::DimensionMismatch`] otherwise. All
/// operations return new values, `self` is never modified.
///
/// Equality via [`PartialEq`] is exact. Use the tolerance-based predicates, or
/// [`ApproxEq`][crate::approx::ApproxEq], to compare computed results.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Vector(Vec<Decimal>);

impl Vector {
    /// Creates a vector from its coordinates.
    ///
    /// Returns [`Error::InvalidArgument`] if `coordinates` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = Vector::new([Decimal::ONE, Decimal::TWO]).unwrap();
    /// assert_eq!(v.dimension(), 2);
    /// assert!(Vector::new([]).is_err());
    /// ```
    pub fn new<I>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = Decimal>,
    {
        let coordinates: Vec<_> = coordinates.into_iter().collect();
        if coordinates.is_empty() {
            return Err(Error::InvalidArgument("the coordinates must be nonempty"));
        }
        Ok(Self(coordinates))
    }

    /// Creates a vector by parsing each coordinate from a numeric literal.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = Vector::parse(["8.218", "-9.341"]).unwrap();
    /// let w = Vector::parse(["-1.129", "2.111"]).unwrap();
    /// assert_eq!(v.plus(&w).unwrap(), Vector::parse(["7.089", "-7.23"]).unwrap());
    /// ```
    pub fn parse<I, S>(literals: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let coordinates = literals
            .into_iter()
            .map(|lit| parse_decimal(lit.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Self::new(coordinates)
    }

    /// Creates the zero vector with `dimension` coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn zero(dimension: usize) -> Self {
        assert!(dimension > 0, "vectors must have at least one dimension");
        Self(vec![Decimal::ZERO; dimension])
    }

    /// Returns the number of coordinates of this vector.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[Decimal] {
        &self.0
    }

    /// Returns an iterator over the coordinates.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.0.iter()
    }

    fn check_dimension(&self, other: &Self) -> Result<()> {
        if self.dimension() != other.dimension() {
            return Err(Error::dimension_mismatch(
                self.dimension(),
                other.dimension(),
            ));
        }
        Ok(())
    }

    fn zip_with<F>(&self, other: &Self, mut f: F) -> Result<Self>
    where
        F: FnMut(Decimal, Decimal) -> Option<Decimal>,
    {
        self.check_dimension(other)?;
        self.0
            .iter()
            .zip(&other.0)
            .map(|(&a, &b)| f(a, b))
            .collect::<Option<_>>()
            .map(Self)
            .ok_or(Error::Overflow)
    }

    /// Element-wise addition.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Decimal::checked_add)
    }

    /// Element-wise subtraction.
    pub fn minus(&self, other: &Self) -> Result<Self> {
        self.zip_with(other, Decimal::checked_sub)
    }

    /// Multiplies every coordinate with `c`.
    ///
    /// Returns [`Error::Overflow`] if a coordinate leaves the range of [`Decimal`].
    pub fn times_scalar(&self, c: Decimal) -> Result<Self> {
        self.0
            .iter()
            .map(|x| x.checked_mul(c))
            .collect::<Option<_>>()
            .map(Self)
            .ok_or(Error::Overflow)
    }

    /// Returns the largest absolute coordinate `m` and the length of `self / m`.
    ///
    /// Every coordinate of `self / m` lies in `[-1, 1]`, so squaring and summing them can't
    /// overflow. Returns [`None`] for the exact zero vector.
    fn scaled_length(&self) -> Option<(Decimal, Decimal)> {
        let largest = self.0.iter().map(|x| x.abs()).max()?;
        if largest.is_zero() {
            return None;
        }
        let squared: Decimal = self
            .0
            .iter()
            .map(|x| {
                let s = *x / largest;
                s * s
            })
            .sum();
        // A sum of squares is never negative, so `sqrt` always succeeds.
        Some((largest, squared.sqrt().unwrap_or_default()))
    }

    /// Returns the length of this vector.
    ///
    /// Returns [`Error::Overflow`] if the length itself exceeds the range of [`Decimal`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = Vector::parse(["3", "4"]).unwrap();
    /// assert_approx_eq!(v.magnitude().unwrap(), Decimal::from(5));
    /// ```
    pub fn magnitude(&self) -> Result<Decimal> {
        match self.scaled_length() {
            Some((largest, length)) => largest.checked_mul(length).ok_or(Error::Overflow),
            None => Ok(Decimal::ZERO),
        }
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// Returns [`Error::NormalizeZeroVector`] if [`Vector::is_zero`] holds.
    pub fn normalized(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::NormalizeZeroVector);
        }
        let Some((largest, length)) = self.scaled_length() else {
            return Err(Error::NormalizeZeroVector);
        };
        // `length` is at least 1, since the largest coordinate scales to ±1.
        Ok(Self(self.0.iter().map(|x| *x / largest / length).collect()))
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let a = Vector::parse(["1", "3", "-5"]).unwrap();
    /// let b = Vector::parse(["4", "-2", "-1"]).unwrap();
    /// assert_eq!(a.dot(&b).unwrap(), Decimal::from(3));
    /// ```
    pub fn dot(&self, other: &Self) -> Result<Decimal> {
        self.check_dimension(other)?;
        self.0
            .iter()
            .zip(&other.0)
            .try_fold(Decimal::ZERO, |acc, (a, b)| acc.checked_add(a.checked_mul(*b)?))
            .ok_or(Error::Overflow)
    }

    /// Computes the angle between `self` and `other`, in radians.
    ///
    /// Returns [`Error::AngleWithZeroVector`] if either vector is the zero vector.
    pub fn angle_with(&self, other: &Self) -> Result<Decimal> {
        self.check_dimension(other)?;
        let (u1, u2) = match (self.normalized(), other.normalized()) {
            (Ok(u1), Ok(u2)) => (u1, u2),
            (Err(Error::NormalizeZeroVector), _) | (_, Err(Error::NormalizeZeroVector)) => {
                return Err(Error::AngleWithZeroVector)
            }
            (Err(e), _) | (_, Err(e)) => return Err(e),
        };

        // Rounding can push the cosine of (anti)parallel vectors slightly outside of [-1, 1].
        let cos = u1.dot(&u2)?.clamp(Decimal::NEGATIVE_ONE, Decimal::ONE);
        Ok(cos.acos().unwrap_or_default())
    }

    /// Computes the angle between `self` and `other`, in degrees.
    pub fn angle_in_degrees_with(&self, other: &Self) -> Result<Decimal> {
        Ok(self.angle_with(other)?.to_degrees())
    }

    /// Returns whether the magnitude of this vector is below [`NEAR_ZERO`].
    pub fn is_zero(&self) -> bool {
        self.is_zero_with_tolerance(NEAR_ZERO)
    }

    /// A vector whose magnitude overflows is never zero.
    pub fn is_zero_with_tolerance(&self, tolerance: Decimal) -> bool {
        self.magnitude().map_or(false, |m| m < tolerance)
    }

    /// Returns whether the dot product of `self` and `other` is (almost) zero.
    ///
    /// The zero vector is orthogonal to every vector.
    pub fn is_orthogonal_to(&self, other: &Self) -> Result<bool> {
        self.is_orthogonal_with_tolerance(other, NEAR_ZERO)
    }

    pub fn is_orthogonal_with_tolerance(&self, other: &Self, tolerance: Decimal) -> Result<bool> {
        Ok(self.dot(other)?.is_near_zero_with(tolerance))
    }

    /// Returns whether `self` and `other` point in the same or in opposite directions.
    ///
    /// The zero vector is parallel to every vector (and, by [`Vector::is_orthogonal_to`], also
    /// orthogonal to every vector).
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let v = Vector::parse(["-7.579", "-7.88"]).unwrap();
    /// let w = Vector::parse(["22.737", "23.64"]).unwrap();
    /// assert!(v.is_parallel_to(&w).unwrap());
    /// assert!(Vector::zero(2).is_parallel_to(&v).unwrap());
    /// ```
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }

        let angle = self.angle_with(other)?;
        Ok(angle.is_near_zero() || (angle - PI).is_near_zero())
    }

    /// Projects `self` onto `basis`.
    ///
    /// Returns [`Error::NoUniqueParallelComponent`] if `basis` is the zero vector.
    pub fn component_parallel_to(&self, basis: &Self) -> Result<Self> {
        self.check_dimension(basis)?;
        let u = basis.normalized().map_err(|e| match e {
            Error::NormalizeZeroVector => Error::NoUniqueParallelComponent,
            e => e,
        })?;
        let weight = self.dot(&u)?;
        u.times_scalar(weight)
    }

    /// Returns the component of `self` that is orthogonal to `basis`.
    ///
    /// Together with [`Vector::component_parallel_to`], this decomposes `self` into two
    /// orthogonal vectors that sum up to `self`.
    pub fn component_orthogonal_to(&self, basis: &Self) -> Result<Self> {
        let projection = self.component_parallel_to(basis)?;
        self.minus(&projection)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// 2-dimensional vectors are embedded in 3 dimensions by appending a zero coordinate first,
    /// so the result always has 3 dimensions. Any other dimension results in
    /// [`Error::UnsupportedDimension`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys_linalg::*;
    /// let x = Vector::parse(["1", "0"]).unwrap();
    /// let y = Vector::parse(["0", "1"]).unwrap();
    /// assert_eq!(x.cross(&y).unwrap(), Vector::parse(["0", "0", "1"]).unwrap());
    /// ```
    pub fn cross(&self, other: &Self) -> Result<Self> {
        self.check_dimension(other)?;
        match self.dimension() {
            3 => {
                let [x1, y1, z1] = [self.0[0], self.0[1], self.0[2]];
                let [x2, y2, z2] = [other.0[0], other.0[1], other.0[2]];

                #[rustfmt::skip]
                let cross = [
                    det2(y1, z1, y2, z2),
                    det2(z1, x1, z2, x2),
                    det2(x1, y1, x2, y2),
                ];
                cross
                    .into_iter()
                    .collect::<Option<_>>()
                    .map(Self)
                    .ok_or(Error::Overflow)
            }
            2 => self.embed_in_3d().cross(&other.embed_in_3d()),
            n => Err(Error::UnsupportedDimension(n)),
        }
    }

    fn embed_in_3d(&self) -> Self {
        Self(self.0.iter().copied().chain([Decimal::ZERO]).collect())
    }

    /// Returns the area of the parallelogram spanned by `self` and `other`.
    pub fn area_of_parallelogram_with(&self, other: &Self) -> Result<Decimal> {
        self.cross(other)?.magnitude()
    }

    /// Returns the area of the triangle spanned by `self` and `other`.
    pub fn area_of_triangle_with(&self, other: &Self) -> Result<Decimal> {
        Ok(self.area_of_parallelogram_with(other)? / Decimal::TWO)
    }
}

/// `a * d - b * c`, or [`None`] on overflow.
fn det2(a: Decimal, b: Decimal, c: Decimal, d: Decimal) -> Option<Decimal> {
    a.checked_mul(d)?.checked_sub(b.checked_mul(c)?)
}

/// Parses a numeric literal (plain or scientific notation) into an exact [`Decimal`].
pub fn parse_decimal(literal: &str) -> Result<Decimal> {
    let literal = literal.trim();
    literal
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(literal))
        .map_err(|source| Error::InvalidNumber {
            literal: literal.to_string(),
            source,
        })
}

impl FromStr for Vector {
    type Err = Error;

    /// Parses a comma-separated coordinate list, such as `1, 2.5, -3` or `(1, 2.5, -3)`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|s| s.strip_suffix(')'))
            .unwrap_or(s);
        if s.trim().is_empty() {
            return Err(Error::InvalidArgument("the coordinates must be nonempty"));
        }
        Self::parse(s.split(','))
    }
}

impl<const N: usize> From<[Decimal; N]> for Vector {
    /// # Panics
    ///
    /// Panics if `N` is 0.
    fn from(coordinates: [Decimal; N]) -> Self {
        assert!(N > 0, "vectors must have at least one dimension");
        Self(coordinates.into())
    }
}

impl TryFrom<Vec<Decimal>> for Vector {
    type Error = Error;

    fn try_from(coordinates: Vec<Decimal>) -> Result<Self> {
        Self::new(coordinates)
    }
}

impl From<Vector> for Vec<Decimal> {
    #[inline]
    fn from(value: Vector) -> Self {
        value.0
    }
}

impl AsRef<[Decimal]> for Vector {
    #[inline]
    fn as_ref(&self) -> &[Decimal] {
        &self.0
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("Vector");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

/// Writes `(c1, c2, ...)`. A formatter precision (`{:.3}`) is applied to every coordinate.
impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let coords = self.0.iter().format_with(", ", |c, g| match precision {
            Some(places) => g(&format_args!("{:.places$}", c.round_dp(places as u32))),
            None => g(c),
        });
        write!(f, "({coords})")
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    fn v<const N: usize>(coords: [&str; N]) -> Vector {
        Vector::parse(coords).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn milli() -> Decimal {
        dec("0.001")
    }

    #[test]
    fn construction() {
        assert!(matches!(
            Vector::new([]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            Vector::parse(["1", "x"]),
            Err(Error::InvalidNumber { literal, .. }) if literal == "x"
        ));
        assert_eq!(Vector::parse(["1e-3"]).unwrap(), v(["0.001"]));
        assert_eq!(Vector::zero(3), v(["0", "0", "0"]));
        assert_eq!(Vector::from([Decimal::ONE, Decimal::TWO]), v(["1", "2"]));
        assert_eq!("(1, 2.5, -3)".parse::<Vector>().unwrap(), v(["1", "2.5", "-3"]));
        assert_eq!("4,5".parse::<Vector>().unwrap(), v(["4", "5"]));
        assert!("()".parse::<Vector>().is_err());
    }

    #[test]
    fn equality_is_numeric() {
        assert_eq!(v(["1.0", "2"]), v(["1", "2.000"]));
        assert_ne!(v(["1", "2"]), v(["1", "2", "0"]));
    }

    #[test]
    fn fmt() {
        assert_eq!(v(["1", "-2.5", "0"]).to_string(), "(1, -2.5, 0)");
        assert_eq!(format!("{:.3}", v(["1.23456", "-2.5"])), "(1.235, -2.500)");
        assert_eq!(format!("{:?}", v(["1", "2"])), "Vector(1, 2)");
    }

    #[test]
    fn plus_minus_scale() {
        assert_eq!(
            v(["8.218", "-9.341"]).plus(&v(["-1.129", "2.111"])).unwrap(),
            v(["7.089", "-7.23"])
        );
        assert_eq!(
            v(["7.119", "8.125"]).minus(&v(["-8.223", "0.878"])).unwrap(),
            v(["15.342", "7.247"])
        );
        assert_eq!(
            v(["1.671", "-1.012", "-0.318"]).times_scalar(dec("7.41")).unwrap(),
            v(["12.38211", "-7.49892", "-2.35638"])
        );
    }

    #[test]
    fn dimension_mismatch() {
        let a = v(["1", "2"]);
        let b = v(["1", "2", "3"]);
        for res in [a.plus(&b), a.minus(&b), a.component_parallel_to(&b), a.cross(&b)] {
            assert!(matches!(
                res,
                Err(Error::DimensionMismatch {
                    expected: 2,
                    actual: 3
                })
            ));
        }
        assert!(a.dot(&b).is_err());
        assert!(a.is_parallel_to(&b).is_err());
        assert!(a.is_orthogonal_to(&b).is_err());
    }

    #[test]
    fn magnitude_and_direction() {
        assert_approx_eq!(v(["-0.221", "7.437"]).magnitude().unwrap(), dec("7.440282924728"))
            .abs(milli());
        assert_approx_eq!(
            v(["8.813", "-1.331", "-6.247"]).magnitude().unwrap(),
            dec("10.884187567292")
        )
        .abs(milli());

        assert_approx_eq!(
            v(["5.581", "-2.136"]).normalized().unwrap(),
            v(["0.933935214087", "-0.357442325262"])
        )
        .abs(milli());
        assert_approx_eq!(
            v(["1.996", "3.108", "-4.554"]).normalized().unwrap(),
            v(["0.340401295943", "0.530043701298", "-0.776647044953"])
        )
        .abs(milli());
        assert_approx_eq!(v(["0", "0", "4"]).normalized().unwrap(), v(["0", "0", "1"]));
    }

    #[test]
    fn large_coordinates() {
        let a = v(["1e15", "1e15"]);
        assert_approx_eq!(a.magnitude().unwrap(), dec("1414213562373095.0488"))
            .rel(dec("0.000000000001"));
        let u = a.normalized().unwrap();
        assert_approx_eq!(u[0], dec("0.70710678118654752")).abs(NEAR_ZERO);
        assert_eq!(u[0], u[1]);
        assert!(!a.is_zero());
        assert!(a.is_parallel_to(&v(["1", "1"])).unwrap());

        let huge = v(["7e28", "7e28"]);
        assert!(matches!(huge.magnitude(), Err(Error::Overflow)));
        assert!(!huge.is_zero());
        assert_approx_eq!(huge.normalized().unwrap(), u).abs(NEAR_ZERO);
    }

    #[test]
    fn overflow() {
        let a = v(["1e15", "1e15"]);
        let b = v(["1e15", "-1e15"]);
        assert!(matches!(a.dot(&a), Err(Error::Overflow)));
        assert!(matches!(a.cross(&b), Err(Error::Overflow)));
        assert!(matches!(a.times_scalar(dec("1e15")), Err(Error::Overflow)));
        assert!(matches!(
            v(["7e28"]).plus(&v(["7e28"])),
            Err(Error::Overflow)
        ));
        assert!(matches!(
            v(["-7e28"]).minus(&v(["7e28"])),
            Err(Error::Overflow)
        ));
    }

    #[test]
    fn normalize_zero() {
        assert!(matches!(
            Vector::zero(2).normalized(),
            Err(Error::NormalizeZeroVector)
        ));
        assert!(matches!(
            v(["0.00000000001", "0"]).normalized(),
            Err(Error::NormalizeZeroVector)
        ));
        assert_eq!(
            Vector::zero(2).normalized().unwrap_err().to_string(),
            "cannot normalize the zero vector"
        );
    }

    #[test]
    fn dot() {
        assert_eq!(
            v(["7.887", "4.138"]).dot(&v(["-8.802", "6.776"])).unwrap(),
            dec("-41.382286")
        );
        assert_eq!(
            v(["-5.955", "-4.904", "-1.874"])
                .dot(&v(["-4.496", "-8.775", "7.103"]))
                .unwrap(),
            dec("56.495258")
        );
    }

    #[test]
    fn angle() {
        assert_approx_eq!(
            v(["3.183", "-7.627"]).angle_with(&v(["-2.668", "5.319"])).unwrap(),
            dec("3.072")
        )
        .abs(milli());
        assert_approx_eq!(
            v(["7.35", "0.221", "5.188"])
                .angle_in_degrees_with(&v(["2.751", "8.259", "3.985"]))
                .unwrap(),
            dec("60.276")
        )
        .abs(milli());
        assert_approx_eq!(v(["0", "1"]).angle_with(&v(["1", "0"])).unwrap(), PI / Decimal::TWO)
            .abs(dec("0.000000000001"));

        let err = v(["1", "2"]).angle_with(&Vector::zero(2)).unwrap_err();
        assert!(matches!(err, Error::AngleWithZeroVector));
        assert_eq!(err.to_string(), "cannot compute an angle with the zero vector");
    }

    #[test]
    fn parallel_and_orthogonal() {
        let (a, b) = (v(["-7.579", "-7.88"]), v(["22.737", "23.64"]));
        assert!(a.is_parallel_to(&b).unwrap());
        assert!(!a.is_orthogonal_to(&b).unwrap());

        let (a, b) = (
            v(["-2.029", "9.97", "4.172"]),
            v(["-9.231", "-6.639", "-7.245"]),
        );
        assert!(!a.is_parallel_to(&b).unwrap());
        assert!(!a.is_orthogonal_to(&b).unwrap());

        let (a, b) = (
            v(["-2.328", "-7.284", "-1.214"]),
            v(["-1.821", "1.072", "-2.94"]),
        );
        assert!(!a.is_parallel_to(&b).unwrap());
        assert!(a.is_orthogonal_to(&b).unwrap());

        let (a, b) = (v(["2.118", "4.827"]), Vector::zero(2));
        assert!(a.is_parallel_to(&b).unwrap());
        assert!(a.is_orthogonal_to(&b).unwrap());
        assert!(b.is_parallel_to(&a).unwrap());
        assert!(b.is_orthogonal_to(&a).unwrap());
    }

    #[test]
    fn projections() {
        assert_approx_eq!(
            v(["3.039", "1.879"])
                .component_parallel_to(&v(["0.825", "2.036"]))
                .unwrap(),
            v(["1.083", "2.672"])
        )
        .abs(milli());
        assert_approx_eq!(
            v(["-9.88", "-3.264", "-8.158"])
                .component_orthogonal_to(&v(["-2.155", "-9.353", "-9.473"]))
                .unwrap(),
            v(["-8.350", "3.376", "-1.433"])
        )
        .abs(milli());

        let a = v(["3.009", "-6.172", "3.692", "-2.51"]);
        let basis = v(["6.404", "-9.144", "2.759", "8.718"]);
        let par = a.component_parallel_to(&basis).unwrap();
        let orth = a.component_orthogonal_to(&basis).unwrap();
        assert_approx_eq!(par, v(["1.969", "-2.811", "0.848", "2.680"])).abs(milli());
        assert_approx_eq!(orth, v(["1.040", "-3.361", "2.844", "-5.190"])).abs(milli());
        assert_approx_eq!(par.plus(&orth).unwrap(), a);
        assert!(par.is_parallel_to(&basis).unwrap());
        assert!(orth.is_orthogonal_to(&basis).unwrap());
    }

    #[test]
    fn projection_onto_zero() {
        let a = v(["1", "2"]);
        assert!(matches!(
            a.component_parallel_to(&Vector::zero(2)),
            Err(Error::NoUniqueParallelComponent)
        ));
        assert!(matches!(
            a.component_orthogonal_to(&Vector::zero(2)),
            Err(Error::NoUniqueParallelComponent)
        ));
    }

    #[test]
    fn cross() {
        let a = v(["8.462", "7.893", "-8.187"]);
        let b = v(["6.984", "-5.975", "4.778"]);
        assert_eq!(
            a.cross(&b).unwrap(),
            v(["-11.204571", "-97.609444", "-105.685162"])
        );
        assert_eq!(a.cross(&b).unwrap(), -b.cross(&a).unwrap());
        assert!(a.cross(&b).unwrap().is_orthogonal_to(&a).unwrap());

        assert_approx_eq!(
            v(["-8.987", "-9.838", "5.031"])
                .area_of_parallelogram_with(&v(["-4.268", "-1.861", "-8.866"]))
                .unwrap(),
            dec("142.122")
        )
        .abs(milli());
        assert_approx_eq!(
            v(["1.5", "9.547", "3.691"])
                .area_of_triangle_with(&v(["-6.007", "0.124", "5.772"]))
                .unwrap(),
            dec("42.565")
        )
        .abs(milli());
    }

    #[test]
    fn cross_embeds_2d() {
        let a = v(["3", "0"]);
        let b = v(["0", "2"]);
        assert_eq!(a.cross(&b).unwrap(), v(["0", "0", "6"]));
        assert_approx_eq!(a.area_of_triangle_with(&b).unwrap(), dec("3"));
    }

    #[test]
    fn cross_unsupported_dimension() {
        for dim in [1, 4, 5] {
            let a = Vector::zero(dim);
            let err = a.cross(&a).unwrap_err();
            assert!(matches!(err, Error::UnsupportedDimension(d) if d == dim));
            assert!(err.to_string().starts_with("only defined in 2 and 3 dimensions"));
        }
    }

    fn random_vector(rng: &mut fastrand::Rng, dim: usize) -> Vector {
        Vector::new((0..dim).map(|_| Decimal::new(rng.i64(-10_000..=10_000), 3))).unwrap()
    }

    #[test]
    fn algebraic_properties() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for _ in 0..200 {
            let dim = rng.usize(1..=4);
            let a = random_vector(&mut rng, dim);
            let b = random_vector(&mut rng, dim);

            assert_eq!(a.plus(&b).unwrap().minus(&b).unwrap(), a);
            assert_eq!(a.dot(&b).unwrap(), b.dot(&a).unwrap());
            assert_eq!(a.times_scalar(Decimal::ONE).unwrap(), a);
            assert!(Vector::zero(dim).is_zero());
            assert!(Vector::zero(dim).is_parallel_to(&b).unwrap());
            assert!(Vector::zero(dim).is_orthogonal_to(&b).unwrap());
            assert_eq!(a.normalized().is_err(), a.is_zero());

            if !b.is_zero() {
                let par = a.component_parallel_to(&b).unwrap();
                let orth = a.component_orthogonal_to(&b).unwrap();
                assert_approx_eq!(par.plus(&orth).unwrap(), a).abs(NEAR_ZERO);
            }

            if dim == 2 || dim == 3 {
                assert_approx_eq!(a.cross(&b).unwrap(), -b.cross(&a).unwrap());
            }
        }
    }
}
