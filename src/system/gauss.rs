//! Gaussian elimination.
//!
//! Forward elimination brings the system into triangular form, back substitution then reduces it
//! to reduced row-echelon form (RREF), from which the solution can be read off directly.

use linsys_linalg::{Decimal, Error, NearZero, Result, Vector};

use super::{LinearSystem, Solution};

impl LinearSystem {
    /// Returns an equivalent system in triangular form.
    ///
    /// Each row's pivot column is to the right of the pivot column of the row above it. Rows
    /// that end up without a pivot are not moved to the bottom.
    pub fn compute_triangular_form(&self) -> Result<LinearSystem> {
        let mut system = self.clone();

        let mut col = 0;
        for row in 0..system.len() {
            while col < system.dimension {
                let c = system.planes[row].normal_vector()[col];
                if c.is_near_zero()
                    && !system.swap_with_row_below_for_nonzero_coefficient(row, col)?
                {
                    col += 1;
                    continue;
                }

                system.clear_coefficients_below(row, col)?;
                col += 1;
                break;
            }
        }

        Ok(system)
    }

    /// Returns an equivalent system in reduced row-echelon form.
    ///
    /// Every pivot coefficient is 1 and is the only nonzero coefficient in its column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::{Hyperplane, LinearSystem};
    /// let system = LinearSystem::new([
    ///     "1 1 1 = 1".parse::<Hyperplane>()?,
    ///     "0 1 1 = 2".parse()?,
    /// ])?;
    /// let rref = system.compute_rref()?;
    /// assert_eq!(rref[0].to_string(), "x_1 = -1");
    /// assert_eq!(rref[1].to_string(), "x_2 + x_3 = 2");
    /// # Ok::<_, linsys::Error>(())
    /// ```
    pub fn compute_rref(&self) -> Result<LinearSystem> {
        let mut system = self.compute_triangular_form()?;

        let pivots = system.indices_of_first_nonzero_terms_in_each_row();
        for (row, pivot) in pivots.into_iter().enumerate().rev() {
            let Some(col) = pivot else { continue };
            system.scale_row_to_make_coefficient_equal_one(row, col)?;
            system.clear_coefficients_above(row, col)?;
        }

        Ok(system)
    }

    /// Solves the system.
    ///
    /// Contradictions are checked before the number of pivots, so an inconsistent system with
    /// free variables is reported as [`Solution::NoSolutions`].
    pub fn compute_solution(&self) -> Result<Solution> {
        let rref = self.compute_rref()?;
        let solution = rref.extract_solution()?;
        log::debug!("{} equations in {} variables: {solution}", self.len(), self.dimension);
        Ok(solution)
    }

    fn extract_solution(&self) -> Result<Solution> {
        if self.has_contradictory_equation() {
            return Ok(Solution::NoSolutions);
        }

        let pivots = self.indices_of_first_nonzero_terms_in_each_row();
        if pivots.iter().flatten().count() < self.dimension {
            return Ok(Solution::InfiniteSolutions);
        }

        let mut coordinates = vec![Decimal::ZERO; self.dimension];
        for (plane, pivot) in self.planes.iter().zip(pivots) {
            if let Some(col) = pivot {
                coordinates[col] = plane.constant_term();
            }
        }
        Ok(Solution::Unique(Vector::try_from(coordinates)?))
    }

    /// Whether some row has reduced to `0 = k` with `k ≠ 0`.
    fn has_contradictory_equation(&self) -> bool {
        self.planes
            .iter()
            .any(|p| p.is_degenerate() && !p.constant_term().is_near_zero())
    }

    /// Swaps `row` with the first row below it that has a nonzero coefficient in `col`.
    ///
    /// Returns whether such a row was found.
    fn swap_with_row_below_for_nonzero_coefficient(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<bool> {
        let below = (row + 1..self.len())
            .find(|&k| !self.planes[k].normal_vector()[col].is_near_zero());
        match below {
            Some(k) => {
                self.swap_rows(row, k)?;
                Ok(true)
            }
            None => {
                log::trace!("no pivot for row {row} in column {col}");
                Ok(false)
            }
        }
    }

    fn clear_coefficients_below(&mut self, row: usize, col: usize) -> Result<()> {
        let pivot = self.planes[row].normal_vector()[col];
        for k in row + 1..self.len() {
            let alpha = (-self.planes[k].normal_vector()[col])
                .checked_div(pivot)
                .ok_or(Error::Overflow)?;
            self.add_scaled_row_to_row(alpha, row, k)?;
        }
        Ok(())
    }

    fn clear_coefficients_above(&mut self, row: usize, col: usize) -> Result<()> {
        for k in (0..row).rev() {
            let alpha = -self.planes[k].normal_vector()[col];
            self.add_scaled_row_to_row(alpha, row, k)?;
        }
        Ok(())
    }

    fn scale_row_to_make_coefficient_equal_one(&mut self, row: usize, col: usize) -> Result<()> {
        let beta = Decimal::ONE
            .checked_div(self.planes[row].normal_vector()[col])
            .ok_or(Error::Overflow)?;
        self.scale_row(row, beta)
    }
}
