use std::fmt;

use itertools::Itertools;

use crate::complex_number::ComplexNumber;
use crate::error::{Axis, Result, SolverError};

/// One equation: `n` variable coefficients followed by the constant term.
/// Columns are addressed 1-based, column `n + 1` being the constant term.
#[derive(Debug, Clone, PartialEq)]
pub struct EquationRow {
    terms: Vec<ComplexNumber>,
}

impl EquationRow {
    pub fn new(terms: Vec<ComplexNumber>) -> Result<Self> {
        if terms.len() < 2 {
            return Err(SolverError::MalformedInput(format!(
                "an equation needs at least one coefficient and a constant term, got {} terms",
                terms.len()
            )));
        }
        Ok(Self { terms })
    }

    pub fn number_of_variables(&self) -> usize {
        self.terms.len() - 1
    }

    pub fn get_term(&self, column: usize) -> Result<ComplexNumber> {
        let idx = SolverError::check_index(Axis::Column, column, self.terms.len())?;
        Ok(self.terms[idx])
    }

    pub fn set_term(&mut self, column: usize, value: ComplexNumber) -> Result<()> {
        let idx = SolverError::check_index(Axis::Column, column, self.terms.len())?;
        self.terms[idx] = value;
        Ok(())
    }

    pub fn constant_term(&self) -> ComplexNumber {
        self.terms[self.terms.len() - 1]
    }

    pub fn coefficients(&self) -> &[ComplexNumber] {
        &self.terms[..self.number_of_variables()]
    }

    pub fn has_only_zero_coefficients(&self) -> bool {
        self.coefficients().iter().all(ComplexNumber::is_zero)
    }

    pub fn swap_terms(&mut self, first: usize, second: usize) -> Result<()> {
        let first = SolverError::check_index(Axis::Column, first, self.terms.len())?;
        let second = SolverError::check_index(Axis::Column, second, self.terms.len())?;
        self.terms.swap(first, second);
        Ok(())
    }

    pub fn multiply_in_place(&mut self, factor: ComplexNumber) {
        for term in self.terms.iter_mut() {
            *term = *term * factor;
        }
    }

    pub fn multiplied_by(&self, factor: ComplexNumber) -> Self {
        Self {
            terms: self.terms.iter().map(|term| *term * factor).collect(),
        }
    }

    pub fn add_row(&mut self, other: &EquationRow) {
        debug_assert_eq!(self.terms.len(), other.terms.len());
        for (term, addend) in self.terms.iter_mut().zip(other.terms.iter()) {
            *term = *term + *addend;
        }
    }
}

impl fmt::Display for EquationRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {}",
            self.coefficients().iter().join(" "),
            self.constant_term()
        )
    }
}
