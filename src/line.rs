//! Lines in the 2D plane.

use std::{fmt, ops::Deref};

use linsys_linalg::{Decimal, Error, NearZero, Result, Vector};

use crate::Hyperplane;

/// A [`Hyperplane`] in 2 dimensions: the line `a·x + b·y = k`.
#[derive(Clone, PartialEq)]
pub struct Line(Hyperplane);

/// Result of [`Line::intersection_with`].
#[derive(Debug, Clone, PartialEq)]
pub enum Intersection {
    /// The lines cross in a single point.
    Point(Vector),
    /// Both lines are the same line, so every point on it is an intersection.
    Coincident(Line),
    /// The lines are parallel and distinct.
    Empty,
}

impl Line {
    /// Creates the line `normal_vector · x = constant_term`.
    ///
    /// Returns [`Error::DimensionMismatch`] if `normal_vector` is not 2-dimensional.
    pub fn new(normal_vector: Vector, constant_term: Decimal) -> Result<Self> {
        Self::try_from(Hyperplane::new(normal_vector, constant_term)?)
    }

    /// Creates a line from coefficient and constant term literals.
    pub fn parse(coefficients: [&str; 2], constant_term: &str) -> Result<Self> {
        Self::try_from(Hyperplane::parse(coefficients, constant_term)?)
    }

    /// Computes the intersection of `self` and `other` using Cramer's rule.
    ///
    /// Returns [`Error::Overflow`] if the intersection point, or a product along the way, does
    /// not fit into a [`Decimal`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::{Intersection, Line};
    /// let a = Line::parse(["4.046", "2.836"], "1.21").unwrap();
    /// let b = Line::parse(["10.115", "7.09"], "3.025").unwrap();
    /// assert_eq!(a.intersection_with(&b).unwrap(), Intersection::Coincident(a.clone()));
    ///
    /// let c = Line::parse(["1", "1"], "2").unwrap();
    /// let d = Line::parse(["1", "-1"], "0").unwrap();
    /// let Intersection::Point(p) = c.intersection_with(&d).unwrap() else { panic!() };
    /// assert_eq!(format!("{p:.3}"), "(1.000, 1.000)");
    /// ```
    pub fn intersection_with(&self, other: &Line) -> Result<Intersection> {
        let [a, b] = self.coefficients();
        let [c, d] = other.coefficients();
        let k1 = self.constant_term();
        let k2 = other.constant_term();

        let determinant = det2(a, b, c, d)?;
        if determinant.is_near_zero() {
            log::trace!("lines `{self}` and `{other}` are parallel");
            return Ok(if self == other {
                Intersection::Coincident(self.clone())
            } else {
                Intersection::Empty
            });
        }

        let x = det2(k1, b, k2, d)?.checked_div(determinant);
        let y = det2(a, k1, c, k2)?.checked_div(determinant);
        match (x, y) {
            (Some(x), Some(y)) => Ok(Intersection::Point(Vector::from([x, y]))),
            _ => Err(Error::Overflow),
        }
    }

    fn coefficients(&self) -> [Decimal; 2] {
        let n = self.0.normal_vector();
        [n[0], n[1]]
    }

    pub fn into_hyperplane(self) -> Hyperplane {
        self.0
    }
}

/// The determinant of the 2×2 matrix `[[a, b], [c, d]]`.
fn det2(a: Decimal, b: Decimal, c: Decimal, d: Decimal) -> Result<Decimal> {
    a.checked_mul(d)
        .zip(b.checked_mul(c))
        .and_then(|(ad, bc)| ad.checked_sub(bc))
        .ok_or(Error::Overflow)
}

impl TryFrom<Hyperplane> for Line {
    type Error = Error;

    fn try_from(hyperplane: Hyperplane) -> Result<Self> {
        if hyperplane.dimension() != 2 {
            return Err(Error::dimension_mismatch(2, hyperplane.dimension()));
        }
        Ok(Self(hyperplane))
    }
}

impl From<Line> for Hyperplane {
    fn from(line: Line) -> Self {
        line.0
    }
}

impl Deref for Line {
    type Target = Hyperplane;

    fn deref(&self) -> &Hyperplane {
        &self.0
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Line").field(&self.0).finish()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
