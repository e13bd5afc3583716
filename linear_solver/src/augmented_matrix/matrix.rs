use std::fmt;

use itertools::Itertools;

use super::equation_row::EquationRow;
use crate::complex_number::ComplexNumber;
use crate::error::{Axis, Result, SolverError};

/// `n` equations in `n` variables, stored as rows of `n + 1` terms.
///
/// Every public accessor is 1-based so that indices line up with the
/// `R1`, `R2`, ... narration of the row operations.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix {
    size: usize,
    rows: Vec<EquationRow>,
}

impl AugmentedMatrix {
    pub fn new(size: usize, rows: Vec<EquationRow>) -> Result<Self> {
        if size < 1 {
            return Err(SolverError::InvalidSize(size as i64));
        }
        if rows.len() != size {
            return Err(SolverError::MalformedInput(format!(
                "expected {size} equations, got {}",
                rows.len()
            )));
        }
        if let Some((idx, row)) = rows
            .iter()
            .find_position(|row| row.number_of_variables() != size)
        {
            return Err(SolverError::MalformedInput(format!(
                "equation {} has {} terms, expected {}",
                idx + 1,
                row.number_of_variables() + 1,
                size + 1
            )));
        }
        Ok(Self { size, rows })
    }

    pub fn from_rows(rows: Vec<Vec<ComplexNumber>>) -> Result<Self> {
        let size = rows.len();
        let rows = rows
            .into_iter()
            .map(EquationRow::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(size, rows)
    }

    pub fn from_real_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        Self::from_rows(
            rows.iter()
                .map(|row| {
                    let row = row.as_ref();
                    row.iter().copied().map(ComplexNumber::real).collect()
                })
                .collect(),
        )
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> &[EquationRow] {
        &self.rows
    }

    pub fn get_row(&self, row: usize) -> Result<&EquationRow> {
        let idx = SolverError::check_index(Axis::Row, row, self.size)?;
        Ok(&self.rows[idx])
    }

    pub fn get_row_mut(&mut self, row: usize) -> Result<&mut EquationRow> {
        let idx = SolverError::check_index(Axis::Row, row, self.size)?;
        Ok(&mut self.rows[idx])
    }

    /// Coefficient of variable `column` in equation `row`.
    pub fn get_term(&self, row: usize, column: usize) -> Result<ComplexNumber> {
        SolverError::check_index(Axis::Column, column, self.size)?;
        self.get_row(row)?.get_term(column)
    }

    pub fn find_non_zero_row_in_column(&self, column: usize) -> Result<Option<usize>> {
        self.find_non_zero_row_in_column_from(column, 1)
    }

    /// First row at or below `from_row`, scanning top to bottom, whose term in
    /// `column` is non-zero.
    pub fn find_non_zero_row_in_column_from(
        &self,
        column: usize,
        from_row: usize,
    ) -> Result<Option<usize>> {
        SolverError::check_index(Axis::Row, from_row, self.size)?;
        for row in from_row..=self.size {
            if !self.get_term(row, column)?.is_zero() {
                return Ok(Some(row));
            }
        }
        Ok(None)
    }

    /// Row holding the leftmost non-zero coefficient, `None` when every
    /// coefficient of the matrix is zero.
    pub fn find_first_non_zero_row(&self) -> Option<usize> {
        (0..self.size).find_map(|column| {
            self.rows
                .iter()
                .position(|row| !row.coefficients()[column].is_zero())
                .map(|idx| idx + 1)
        })
    }

    /// First column at or right of `from_column` with a non-zero term in
    /// `from_row` or below.
    pub fn find_leading_non_zero_column(
        &self,
        from_column: usize,
        from_row: usize,
    ) -> Result<Option<usize>> {
        for column in from_column..=self.size {
            if self.find_non_zero_row_in_column_from(column, from_row)?.is_some() {
                return Ok(Some(column));
            }
        }
        Ok(None)
    }

    pub fn swap_rows(&mut self, first: usize, second: usize) -> Result<()> {
        let first = SolverError::check_index(Axis::Row, first, self.size)?;
        let second = SolverError::check_index(Axis::Row, second, self.size)?;
        self.rows.swap(first, second);
        Ok(())
    }

    /// Exchanges two variable columns in every row. The constant term never moves.
    pub fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        SolverError::check_index(Axis::Column, first, self.size)?;
        SolverError::check_index(Axis::Column, second, self.size)?;
        for row in self.rows.iter_mut() {
            row.swap_terms(first, second)?;
        }
        Ok(())
    }

    pub fn scale_row(&mut self, row: usize, factor: ComplexNumber) -> Result<()> {
        self.get_row_mut(row)?.multiply_in_place(factor);
        Ok(())
    }

    /// `factor * R_source + R_target -> R_target`
    pub fn add_scaled_row(
        &mut self,
        source: usize,
        target: usize,
        factor: ComplexNumber,
    ) -> Result<()> {
        let scaled = self.get_row(source)?.multiplied_by(factor);
        self.get_row_mut(target)?.add_row(&scaled);
        Ok(())
    }

    /// Number of rows without a pivot, i.e. `n - rank` once the matrix is in
    /// row echelon form.
    pub fn number_of_free_variables(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| row.has_only_zero_coefficients())
            .count()
    }

    /// Some equation reads `0 = c` with `c != 0`.
    pub fn is_inconsistent(&self) -> bool {
        self.rows.iter().any(|row| {
            row.has_only_zero_coefficients() && !row.constant_term().is_zero()
        })
    }

    pub fn sum_of_constant_terms(&self) -> ComplexNumber {
        self.rows
            .iter()
            .fold(ComplexNumber::ZERO, |sum, row| sum + row.constant_term())
    }

    pub fn constant_terms(&self) -> Vec<ComplexNumber> {
        self.rows.iter().map(EquationRow::constant_term).collect()
    }
}

impl fmt::Display for AugmentedMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rows.iter().join("\n"))
    }
}
