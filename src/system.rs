//! Systems of linear equations and their row operations.
//!
//! Gaussian elimination itself lives in the `gauss` submodule and is exposed through
//! [`LinearSystem::compute_triangular_form`], [`LinearSystem::compute_rref`] and
//! [`LinearSystem::compute_solution`]. None of those modify the system they are called on.

use std::{fmt, ops::Index};

use linsys_linalg::{Decimal, Error, Result, Vector};

use crate::Hyperplane;

mod gauss;

/// An ordered, non-empty list of [`Hyperplane`]s of the same dimension.
///
/// Each hyperplane is a row of the augmented matrix `[A | b]`. The rows can be manipulated with
/// the elementary row operations [`swap_rows`], [`scale_row`] and [`add_scaled_row_to_row`], or
/// replaced wholesale with [`set`].
///
/// # Equality
///
/// Two systems are equal if they have the same number of rows and their rows are pairwise equal
/// in the sense of [`Hyperplane`]'s [`PartialEq`] impl.
///
/// [`swap_rows`]: Self::swap_rows
/// [`scale_row`]: Self::scale_row
/// [`add_scaled_row_to_row`]: Self::add_scaled_row_to_row
/// [`set`]: Self::set
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem {
    planes: Vec<Hyperplane>,
    dimension: usize,
}

impl LinearSystem {
    /// Creates a system from a list of equations.
    ///
    /// Returns [`Error::InvalidArgument`] if `planes` is empty and [`Error::DimensionMismatch`]
    /// if the equations don't all have the same dimension as the first one.
    pub fn new<I>(planes: I) -> Result<Self>
    where
        I: IntoIterator<Item = Hyperplane>,
    {
        let planes: Vec<_> = planes.into_iter().collect();
        let dimension = planes
            .first()
            .ok_or(Error::InvalidArgument(
                "a linear system needs at least one equation",
            ))?
            .dimension();

        if let Some(plane) = planes.iter().find(|p| p.dimension() != dimension) {
            return Err(Error::dimension_mismatch(dimension, plane.dimension()));
        }

        Ok(Self { planes, dimension })
    }

    /// Returns the number of equations (rows).
    #[inline]
    pub fn len(&self) -> usize {
        self.planes.len()
    }

    /// Always `false`, since systems can't be empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// Returns the number of variables.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, row: usize) -> Option<&Hyperplane> {
        self.planes.get(row)
    }

    #[inline]
    pub fn planes(&self) -> &[Hyperplane] {
        &self.planes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Hyperplane> {
        self.planes.iter()
    }

    /// Replaces the equation in `row` with `plane`.
    ///
    /// Returns [`Error::DimensionMismatch`] if `plane` lives in another dimension than the rest
    /// of the system, and [`Error::RowOutOfBounds`] if `row` doesn't exist.
    pub fn set(&mut self, row: usize, plane: Hyperplane) -> Result<()> {
        if plane.dimension() != self.dimension {
            return Err(Error::dimension_mismatch(self.dimension, plane.dimension()));
        }
        self.check_row(row)?;
        self.planes[row] = plane;
        Ok(())
    }

    /// Exchanges the equations in `row1` and `row2`.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) -> Result<()> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        log::trace!("swap rows {row1} and {row2}");
        self.planes.swap(row1, row2);
        Ok(())
    }

    /// Multiplies both sides of the equation in `row` with `coefficient`.
    ///
    /// If the result overflows, [`Error::Overflow`] is returned and the row is left unchanged.
    pub fn scale_row(&mut self, row: usize, coefficient: Decimal) -> Result<()> {
        self.check_row(row)?;
        log::trace!("scale row {row} by {coefficient}");
        self.planes[row] = self.planes[row].scaled(coefficient)?;
        Ok(())
    }

    /// Adds `coefficient` times the equation in `source` to the equation in `target`.
    pub fn add_scaled_row_to_row(
        &mut self,
        coefficient: Decimal,
        source: usize,
        target: usize,
    ) -> Result<()> {
        self.check_row(source)?;
        self.check_row(target)?;
        log::trace!("add {coefficient} times row {source} to row {target}");
        let sum = self.planes[source]
            .scaled(coefficient)?
            .plus(&self.planes[target])?;
        self.planes[target] = sum;
        Ok(())
    }

    /// Returns the pivot column of every row, or [`None`] for rows whose normal vector is
    /// (almost) zero.
    pub fn indices_of_first_nonzero_terms_in_each_row(&self) -> Vec<Option<usize>> {
        self.planes
            .iter()
            .map(|p| Hyperplane::first_nonzero_index(p.normal_vector()).ok())
            .collect()
    }

    fn check_row(&self, index: usize) -> Result<()> {
        if index < self.planes.len() {
            Ok(())
        } else {
            Err(Error::RowOutOfBounds {
                index,
                len: self.planes.len(),
            })
        }
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    #[inline]
    fn index(&self, row: usize) -> &Hyperplane {
        &self.planes[row]
    }
}

impl<'a> IntoIterator for &'a LinearSystem {
    type Item = &'a Hyperplane;
    type IntoIter = std::slice::Iter<'a, Hyperplane>;

    fn into_iter(self) -> Self::IntoIter {
        self.planes.iter()
    }
}

/// Renders the system as a `Linear System:` header followed by one `Equation i: ...` line per
/// row.
///
/// The formatter's precision is forwarded to every equation.
impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Linear System:")?;
        for (i, plane) in self.planes.iter().enumerate() {
            write!(f, "\nEquation {}: ", i + 1)?;
            fmt::Display::fmt(plane, f)?;
        }
        Ok(())
    }
}

/// Classification of the solution set of a [`LinearSystem`].
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// Exactly one point satisfies every equation.
    Unique(Vector),
    /// The equations contradict each other.
    NoSolutions,
    /// The equations don't pin down every variable.
    InfiniteSolutions,
}

impl Solution {
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }

    /// Returns the solution vector if there is exactly one.
    pub fn unique(&self) -> Option<&Vector> {
        match self {
            Self::Unique(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_unique(self) -> Option<Vector> {
        match self {
            Self::Unique(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique(v) => fmt::Display::fmt(v, f),
            Self::NoSolutions => f.write_str("No solutions"),
            Self::InfiniteSolutions => f.write_str("Infinitely many solutions"),
        }
    }
}
