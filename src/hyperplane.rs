//! Linear equations of the form `n · x = k`.

use std::{fmt, str::FromStr};

use itertools::Itertools;
use linsys_linalg::{parse_decimal, Decimal, Error, NearZero, Result, Vector};
use rust_decimal::RoundingStrategy;


/// A hyperplane in 3 dimensions.
///
/// There is no separate type for planes: all operations on them are the general hyperplane
/// operations.
pub type Plane = Hyperplane;

/// Decimal places shown by the [`Display`][fmt::Display] impl of [`Hyperplane`] unless the
/// formatter specifies a precision.
pub const DEFAULT_DECIMAL_PLACES: usize = 3;

/// The set of points `x` satisfying the linear equation `normal_vector · x = constant_term`.
///
/// A hyperplane whose normal vector is (almost) zero is *degenerate*: it is either the equation
/// `0 = 0`, which every point satisfies, or a contradictory equation `0 = k` with `k ≠ 0`.
///
/// Hyperplanes are immutable. Row operations on a [`LinearSystem`][crate::LinearSystem]
/// replace whole hyperplanes instead of modifying them.
///
/// # Equality
///
/// Two hyperplanes are equal if they describe the same set of points (up to [`NEAR_ZERO`]
/// tolerance), not if their coefficients are equal: `x_1 + x_2 = 1` equals
/// `2x_1 + 2x_2 = 2`.
///
/// [`NEAR_ZERO`]: linsys_linalg::NEAR_ZERO
#[derive(Clone)]
pub struct Hyperplane {
    normal_vector: Vector,
    constant_term: Decimal,
    basepoint: Option<Vector>,
}

impl Hyperplane {
    /// Creates the hyperplane `normal_vector · x = constant_term`.
    ///
    /// Returns [`Error::Overflow`] if the basepoint does not fit into a [`Decimal`], which can
    /// happen when the first nonzero coefficient is tiny compared to the constant term.
    pub fn new(normal_vector: Vector, constant_term: Decimal) -> Result<Self> {
        let basepoint = compute_basepoint(&normal_vector, constant_term)?;
        Ok(Self {
            normal_vector,
            constant_term,
            basepoint,
        })
    }

    /// Creates a hyperplane from coefficient and constant term literals.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::Hyperplane;
    /// let plane = Hyperplane::parse(["1", "-2", "0.5"], "4").unwrap();
    /// assert_eq!(plane.to_string(), "x_1 - 2x_2 + 0.500x_3 = 4");
    /// ```
    pub fn parse<I, S>(coefficients: I, constant_term: &str) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Vector::parse(coefficients)?, parse_decimal(constant_term)?)
    }

    /// Returns the equation `0 = 0` in `dimension` dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn zero(dimension: usize) -> Self {
        Self::degenerate(dimension, Decimal::ZERO)
    }

    /// Returns the equation `0 = constant_term` in `dimension` dimensions.
    ///
    /// # Panics
    ///
    /// Panics if `dimension` is 0.
    pub fn degenerate(dimension: usize, constant_term: Decimal) -> Self {
        Self {
            normal_vector: Vector::zero(dimension),
            constant_term,
            basepoint: None,
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.normal_vector.dimension()
    }

    #[inline]
    pub fn normal_vector(&self) -> &Vector {
        &self.normal_vector
    }

    #[inline]
    pub fn constant_term(&self) -> Decimal {
        self.constant_term
    }

    /// Returns a point on this hyperplane.
    ///
    /// The basepoint has at most one nonzero coordinate, at the index of the first nonzero
    /// coefficient. Degenerate hyperplanes have no basepoint.
    #[inline]
    pub fn basepoint(&self) -> Option<&Vector> {
        self.basepoint.as_ref()
    }

    /// Returns the coefficient of the variable `x_{index + 1}`, or [`None`] if `index` is out of
    /// bounds.
    pub fn coefficient(&self, index: usize) -> Option<Decimal> {
        self.normal_vector.coordinates().get(index).copied()
    }

    /// Returns the index of the first coordinate of `v` that is not (almost) zero.
    ///
    /// This is the pivot column of a row during Gaussian elimination. Returns
    /// [`Error::NoNonzeroElements`] if all coordinates are (almost) zero.
    pub fn first_nonzero_index(v: &Vector) -> Result<usize> {
        v.iter()
            .position(|c| !c.is_near_zero())
            .ok_or(Error::NoNonzeroElements)
    }

    /// Returns whether the normal vectors of `self` and `other` are parallel.
    ///
    /// Degenerate hyperplanes are parallel to everything.
    pub fn is_parallel_to(&self, other: &Self) -> Result<bool> {
        self.normal_vector.is_parallel_to(&other.normal_vector)
    }

    /// Multiplies both sides of the equation with `coefficient`.
    pub fn scaled(&self, coefficient: Decimal) -> Result<Self> {
        Self::new(
            self.normal_vector.times_scalar(coefficient)?,
            self.constant_term
                .checked_mul(coefficient)
                .ok_or(Error::Overflow)?,
        )
    }

    /// Adds the equation `other` to `self`.
    pub fn plus(&self, other: &Self) -> Result<Self> {
        Self::new(
            self.normal_vector.plus(&other.normal_vector)?,
            self.constant_term
                .checked_add(other.constant_term)
                .ok_or(Error::Overflow)?,
        )
    }

    /// Returns whether this equation is (almost) `0 = k` for some `k`, meaning that every
    /// coefficient is near zero.
    pub fn is_degenerate(&self) -> bool {
        Self::first_nonzero_index(&self.normal_vector).is_err()
    }
}

fn compute_basepoint(normal_vector: &Vector, constant_term: Decimal) -> Result<Option<Vector>> {
    // No nonzero coefficient means either `0 = 0` or `0 = k`; neither has a basepoint.
    let Ok(index) = Hyperplane::first_nonzero_index(normal_vector) else {
        return Ok(None);
    };
    let offset = constant_term
        .checked_div(normal_vector[index])
        .ok_or(Error::Overflow)?;

    let mut basepoint = vec![Decimal::ZERO; normal_vector.dimension()];
    basepoint[index] = offset;
    Vector::new(basepoint).map(Some)
}

impl PartialEq for Hyperplane {
    fn eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }

        match (self.is_degenerate(), other.is_degenerate()) {
            (true, true) => self
                .constant_term
                .checked_sub(other.constant_term)
                .map_or(false, |diff| diff.is_near_zero()),
            (true, false) | (false, true) => false,
            (false, false) => {
                if !matches!(self.is_parallel_to(other), Ok(true)) {
                    return false;
                }

                let (Some(x0), Some(y0)) = (&self.basepoint, &other.basepoint) else {
                    return false;
                };
                x0.minus(y0)
                    .and_then(|diff| diff.is_orthogonal_to(&self.normal_vector))
                    .unwrap_or(false)
            }
        }
    }
}

impl fmt::Debug for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hyperplane")
            .field("normal_vector", &self.normal_vector)
            .field("constant_term", &self.constant_term)
            .finish()
    }
}

fn round(value: Decimal, places: u32) -> Decimal {
    value.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Writes an already rounded number: integers without decimal places, anything else with
/// exactly `places` decimal places.
fn write_number(f: &mut fmt::Formatter<'_>, value: Decimal, places: usize) -> fmt::Result {
    if value.fract().is_zero() {
        write!(f, "{}", value.trunc().normalize())
    } else {
        write!(f, "{value:.places$}")
    }
}

/// Renders the equation as `c1x_1 + c2x_2 + ... = k`.
///
/// Coefficients and the constant term are rounded to 3 decimal places (or the formatter's
/// precision), terms whose coefficient rounds to zero are omitted, coefficients of ±1 are only
/// shown as a sign, and a degenerate equation is rendered as `0 = k`.
impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let places = f.precision().unwrap_or(DEFAULT_DECIMAL_PLACES);
        let dp = places as u32;

        match Self::first_nonzero_index(&self.normal_vector) {
            Ok(initial_index) => {
                let terms = self
                    .normal_vector
                    .iter()
                    .map(|&c| round(c, dp))
                    .enumerate()
                    .filter(|(_, c)| !c.is_zero())
                    .format_with(" ", |(i, c), g| {
                        g(&Term {
                            coefficient: c,
                            index: i,
                            is_initial: i == initial_index,
                            places,
                        })
                    });
                write!(f, "{terms}")?;
            }
            Err(_) => f.write_str("0")?,
        }

        f.write_str(" = ")?;
        write_number(f, round(self.constant_term, dp), places)
    }
}

struct Term {
    coefficient: Decimal,
    index: usize,
    is_initial: bool,
    places: usize,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.coefficient;
        if c.is_sign_negative() {
            f.write_str("-")?;
        } else if !self.is_initial {
            f.write_str("+")?;
        }
        if !self.is_initial {
            f.write_str(" ")?;
        }
        if c.abs() != Decimal::ONE {
            write_number(f, c.abs(), self.places)?;
        }
        write!(f, "x_{}", self.index + 1)
    }
}

impl FromStr for Hyperplane {
    type Err = Error;

    /// Parses an equation like `1 -2 0.5 = 4` or `1, -2, 0.5 = 4`.
    fn from_str(s: &str) -> Result<Self> {
        let (lhs, rhs) = s.split_once('=').ok_or(Error::InvalidArgument(
            "equations must have the form `c1 c2 ... = k`",
        ))?;
        let coefficients = lhs
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|lit| !lit.is_empty());
        Self::parse(coefficients, rhs)
    }
}
