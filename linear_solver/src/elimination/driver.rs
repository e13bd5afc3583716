use crate::augmented_matrix::{AugmentedMatrix, SwapHistory, UndoableSwap};
use crate::complex_number::ComplexNumber;
use crate::error::Result;

use super::operation::RowOperation;
use super::solution::SystemSolution;

/// Gaussian elimination to row echelon form, classification, then
/// Gauss-Jordan reduction when the solution is unique.
///
/// A driver owns its matrix and its swap history and is meant for a single
/// [`solve`](Self::solve) call.
pub struct EliminationDriver {
    matrix: AugmentedMatrix,
    swap_history: SwapHistory,
    operations: Vec<RowOperation>,
}

impl EliminationDriver {
    pub fn new(matrix: AugmentedMatrix) -> Self {
        Self {
            matrix,
            swap_history: SwapHistory::new(),
            operations: Vec::new(),
        }
    }

    pub fn matrix(&self) -> &AugmentedMatrix {
        &self.matrix
    }

    pub fn into_matrix(self) -> AugmentedMatrix {
        self.matrix
    }

    /// Every row and column operation performed so far, in order.
    pub fn operations(&self) -> &[RowOperation] {
        &self.operations
    }

    pub fn solve(&mut self) -> Result<SystemSolution> {
        log_matrix("Input matrix", &self.matrix);
        log::info!("-----Performing Gaussian elimination----");

        let Some(leading_row) = self.matrix.find_first_non_zero_row() else {
            return Ok(self.classify_zero_matrix());
        };
        if leading_row > 1 {
            self.swap_rows(1, leading_row)?;
        }

        self.go_to_echelon_form()?;
        log_matrix("Row echelon", &self.matrix);
        if let Some(solution) = self.classify_echelon_form() {
            return Ok(solution);
        }

        self.undo_column_swaps()?;
        log::info!("-----Performing Gauss-Jordan elimination----");
        self.go_to_reduced_echelon_form()?;
        log_matrix("Reduced row echelon", &self.matrix);

        let solution = SystemSolution::Unique(self.matrix.constant_terms());
        log::info!("-----Final result----");
        log::info!("{solution}");
        Ok(solution)
    }

    // every coefficient is zero, so the constants alone decide
    fn classify_zero_matrix(&self) -> SystemSolution {
        log::info!(
            "All coefficients are zero, sum of constant terms: {}",
            self.matrix.sum_of_constant_terms()
        );
        if self.matrix.is_inconsistent() {
            log::info!("No solutions");
            SystemSolution::NoSolution
        } else {
            log::info!("Infinitely many solutions");
            SystemSolution::InfinitelyMany {
                free_variables: self.matrix.size(),
            }
        }
    }

    fn go_to_echelon_form(&mut self) -> Result<()> {
        for pivot in 1..=self.matrix.size() {
            if !self.move_non_zero_term_to_pivot(pivot)? {
                // the remaining columns are zero below the pivot row
                break;
            }
            self.normalize_pivot_row(pivot)?;
            self.eliminate_below_pivot(pivot)?;
        }
        Ok(())
    }

    /// Returns `false` if no non-zero term is left at or below the pivot row.
    fn move_non_zero_term_to_pivot(&mut self, pivot: usize) -> Result<bool> {
        if !self.matrix.get_term(pivot, pivot)?.is_zero() {
            return Ok(true);
        }
        if let Some(row) = self.matrix.find_non_zero_row_in_column_from(pivot, pivot)? {
            self.swap_rows(pivot, row)?;
            return Ok(true);
        }
        let Some(column) = self.matrix.find_leading_non_zero_column(pivot + 1, pivot)? else {
            return Ok(false);
        };
        self.swap_columns(pivot, column)?;
        if let Some(row) = self.matrix.find_non_zero_row_in_column_from(pivot, pivot)? {
            if row != pivot {
                self.swap_rows(pivot, row)?;
            }
        }
        Ok(true)
    }

    fn normalize_pivot_row(&mut self, pivot: usize) -> Result<()> {
        let factor = self.matrix.get_term(pivot, pivot)?.inverse()?;
        if !factor.is_one() {
            self.matrix.scale_row(pivot, factor)?;
            self.record(RowOperation::Scale { row: pivot, factor });
        }
        Ok(())
    }

    fn eliminate_below_pivot(&mut self, pivot: usize) -> Result<()> {
        let pivot_term = self.matrix.get_term(pivot, pivot)?;
        for row in (pivot + 1)..=self.matrix.size() {
            let factor = -self.matrix.get_term(row, pivot)?.divide_by(pivot_term)?;
            if !factor.is_zero() {
                self.add_scaled_row(pivot, row, factor)?;
            }
        }
        Ok(())
    }

    fn classify_echelon_form(&self) -> Option<SystemSolution> {
        if self.matrix.is_inconsistent() {
            log::info!("No solutions - inconsistent");
            return Some(SystemSolution::NoSolution);
        }
        let free_variables = self.matrix.number_of_free_variables();
        if free_variables > 0 {
            log::info!("Infinitely many solutions - has {free_variables} free variables");
            return Some(SystemSolution::InfinitelyMany { free_variables });
        }
        None
    }

    fn undo_column_swaps(&mut self) -> Result<()> {
        while let Some(swap) = self.swap_history.undo_last(&mut self.matrix)? {
            log::debug!("Undid {swap:?}");
        }
        Ok(())
    }

    fn go_to_reduced_echelon_form(&mut self) -> Result<()> {
        for column in (1..=self.matrix.size()).rev() {
            for row in (1..column).rev() {
                let factor = -self.matrix.get_term(row, column)?;
                if !factor.is_zero() {
                    self.add_scaled_row(column, row, factor)?;
                }
            }
        }
        Ok(())
    }

    fn swap_rows(&mut self, first: usize, second: usize) -> Result<()> {
        self.matrix.swap_rows(first, second)?;
        self.record(RowOperation::SwapRows(first, second));
        Ok(())
    }

    fn swap_columns(&mut self, first: usize, second: usize) -> Result<()> {
        if self
            .swap_history
            .execute(UndoableSwap::columns(first, second), &mut self.matrix)?
        {
            self.record(RowOperation::SwapColumns(first, second));
        }
        Ok(())
    }

    fn add_scaled_row(
        &mut self,
        source: usize,
        target: usize,
        factor: ComplexNumber,
    ) -> Result<()> {
        self.matrix.add_scaled_row(source, target, factor)?;
        self.record(RowOperation::AddScaled {
            source,
            target,
            factor,
        });
        Ok(())
    }

    fn record(&mut self, operation: RowOperation) {
        log::info!("{operation}");
        self.operations.push(operation);
    }
}

fn log_matrix(title: &str, matrix: &AugmentedMatrix) {
    log::info!("-----{title}----");
    for row in matrix.rows() {
        log::info!("{row}");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn driver(rows: &[&[f64]]) -> EliminationDriver {
        EliminationDriver::new(AugmentedMatrix::from_real_rows(rows).unwrap())
    }

    fn c(re: f64, im: f64) -> ComplexNumber {
        ComplexNumber::new(re, im)
    }

    fn assert_unique(solution: SystemSolution, expected: &[ComplexNumber]) {
        let values = match solution {
            SystemSolution::Unique(values) => values,
            other => panic!("expected a unique solution, got {other:?}"),
        };
        assert_eq!(values.len(), expected.len());
        for (idx, (value, expected)) in values.iter().zip(expected).enumerate() {
            assert!(
                (*value - *expected).is_zero(),
                "x{}: {value:?} vs {expected:?}",
                idx + 1
            );
        }
    }

    #[test]
    fn identity_is_left_untouched() {
        let mut d = driver(&[
            &[1.0, 0.0, 0.0, 4.0],
            &[0.0, 1.0, 0.0, -2.0],
            &[0.0, 0.0, 1.0, 0.5],
        ]);
        let solution = d.solve().unwrap();
        assert!(d.operations().is_empty());
        assert_eq!(
            solution,
            SystemSolution::Unique(vec![c(4.0, 0.0), c(-2.0, 0.0), c(0.5, 0.0)])
        );
    }

    #[test]
    fn zero_coefficient_row_with_constant_is_inconsistent() {
        let mut d = driver(&[&[0.0, 0.0, 5.0], &[1.0, 1.0, 3.0]]);
        assert_eq!(d.solve(), Ok(SystemSolution::NoSolution));
        assert_eq!(d.operations()[0], RowOperation::SwapRows(1, 2));
    }

    #[test]
    fn dependent_rows_leave_one_free_variable() {
        let mut d = driver(&[&[1.0, 1.0, 2.0], &[2.0, 2.0, 4.0]]);
        assert_eq!(
            d.solve(),
            Ok(SystemSolution::InfinitelyMany { free_variables: 1 })
        );
        assert!(d.matrix().get_row(2).unwrap().has_only_zero_coefficients());
    }

    #[test]
    fn all_zero_system_with_zero_constants_has_infinitely_many_solutions() {
        let mut d = driver(&[&[0.0, 0.0]]);
        assert_eq!(
            d.solve(),
            Ok(SystemSolution::InfinitelyMany { free_variables: 1 })
        );
    }

    #[test]
    fn all_zero_system_with_non_zero_constant_has_no_solution() {
        let mut d = driver(&[&[0.0, 7.0]]);
        assert_eq!(d.solve(), Ok(SystemSolution::NoSolution));
    }

    #[test]
    fn all_zero_system_with_cancelling_constants_has_no_solution() {
        let mut d = driver(&[&[0.0, 0.0, 1.0], &[0.0, 0.0, -1.0]]);
        assert_eq!(d.solve(), Ok(SystemSolution::NoSolution));
    }

    #[test]
    fn solves_two_by_two() {
        // 2x + y = 5, x - y = 1
        let mut d = driver(&[&[2.0, 1.0, 5.0], &[1.0, -1.0, 1.0]]);
        assert_unique(d.solve().unwrap(), &[c(2.0, 0.0), c(1.0, 0.0)]);
        assert_eq!(
            d.operations()[0],
            RowOperation::Scale {
                row: 1,
                factor: c(0.5, 0.0),
            }
        );
    }

    #[test]
    fn solves_three_by_three() {
        let mut d = driver(&[
            &[2.0, 1.0, -1.0, 8.0],
            &[-3.0, -1.0, 2.0, -11.0],
            &[-2.0, 1.0, 2.0, -3.0],
        ]);
        assert_unique(d.solve().unwrap(), &[c(2.0, 0.0), c(3.0, 0.0), c(-1.0, 0.0)]);
    }

    #[test]
    fn zero_leading_term_moves_a_row_up() {
        let mut d = driver(&[&[0.0, 1.0, 2.0], &[1.0, 0.0, 3.0]]);
        assert_unique(d.solve().unwrap(), &[c(3.0, 0.0), c(2.0, 0.0)]);
        assert_eq!(d.operations()[0], RowOperation::SwapRows(1, 2));
    }

    #[test]
    fn zero_pivot_swaps_with_a_row_below() {
        let mut d = driver(&[
            &[1.0, 1.0, 1.0, 6.0],
            &[1.0, 1.0, 2.0, 9.0],
            &[1.0, 2.0, 3.0, 14.0],
        ]);
        assert_unique(d.solve().unwrap(), &[c(1.0, 0.0), c(2.0, 0.0), c(3.0, 0.0)]);
        assert!(d.operations().contains(&RowOperation::SwapRows(2, 3)));
    }

    #[test]
    fn empty_pivot_column_swaps_columns() {
        let mut d = driver(&[
            &[1.0, 1.0, 1.0, 3.0],
            &[0.0, 0.0, 1.0, 1.0],
            &[0.0, 0.0, 2.0, 2.0],
        ]);
        assert_eq!(
            d.solve(),
            Ok(SystemSolution::InfinitelyMany { free_variables: 1 })
        );
        assert!(d.operations().contains(&RowOperation::SwapColumns(2, 3)));
    }

    #[test]
    fn column_swap_then_inconsistent_row() {
        let mut d = driver(&[
            &[1.0, 1.0, 1.0, 3.0],
            &[0.0, 0.0, 1.0, 1.0],
            &[0.0, 0.0, 2.0, 5.0],
        ]);
        assert_eq!(d.solve(), Ok(SystemSolution::NoSolution));
    }

    #[test]
    fn column_swap_below_the_pivot_row_brings_the_term_up() {
        let mut d = driver(&[
            &[1.0, 0.0, 0.0, 1.0],
            &[0.0, 0.0, 0.0, 0.0],
            &[0.0, 0.0, 4.0, 8.0],
        ]);
        assert_eq!(
            d.solve(),
            Ok(SystemSolution::InfinitelyMany { free_variables: 1 })
        );
        assert_eq!(
            &d.operations()[..2],
            &[RowOperation::SwapColumns(2, 3), RowOperation::SwapRows(2, 3)]
        );
        assert!(d.matrix().get_term(2, 2).unwrap().is_one());
    }

    #[test]
    fn solves_complex_system() {
        // (1+i)x + y = 1+2i, x - iy = 2, with x = 1, y = i
        let mut d = EliminationDriver::new(
            AugmentedMatrix::from_rows(vec![
                vec![c(1.0, 1.0), c(1.0, 0.0), c(1.0, 2.0)],
                vec![c(1.0, 0.0), c(0.0, -1.0), c(2.0, 0.0)],
            ])
            .unwrap(),
        );
        assert_unique(d.solve().unwrap(), &[c(1.0, 0.0), c(0.0, 1.0)]);
    }

    #[test]
    fn normalized_pivot_is_one() {
        let mut d = EliminationDriver::new(
            AugmentedMatrix::from_rows(vec![
                vec![c(3.0, -4.0), c(1.0, 0.0), c(2.0, 0.0)],
                vec![c(0.0, 0.0), c(0.0, 7.0), c(1.0, 0.0)],
            ])
            .unwrap(),
        );
        for pivot in 1..=2 {
            d.normalize_pivot_row(pivot).unwrap();
            assert!(d.matrix().get_term(pivot, pivot).unwrap().is_one());
        }
    }

    #[test]
    fn reduced_form_is_the_identity() {
        let mut d = driver(&[
            &[2.0, 1.0, -1.0, 8.0],
            &[-3.0, -1.0, 2.0, -11.0],
            &[-2.0, 1.0, 2.0, -3.0],
        ]);
        d.solve().unwrap();
        let m = d.into_matrix();
        for row in 1..=3 {
            for column in 1..=3 {
                let term = m.get_term(row, column).unwrap();
                if row == column {
                    assert!(term.is_one(), "({row}, {column}) = {term}");
                } else {
                    assert!(term.is_zero(), "({row}, {column}) = {term}");
                }
            }
        }
    }
}
