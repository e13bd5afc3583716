use super::matrix::AugmentedMatrix;
use crate::error::Result;

/// Structural rewrite of the matrix that can be replayed backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoableSwap {
    Columns { first: usize, second: usize },
}

impl UndoableSwap {
    pub fn columns(first: usize, second: usize) -> Self {
        Self::Columns { first, second }
    }

    /// Returns `false` when the swap is a no-op.
    pub fn execute(&self, matrix: &mut AugmentedMatrix) -> Result<bool> {
        match *self {
            Self::Columns { first, second } => {
                if first == second {
                    return Ok(false);
                }
                matrix.swap_columns(first, second)?;
                Ok(true)
            }
        }
    }

    pub fn undo(&self, matrix: &mut AugmentedMatrix) -> Result<()> {
        match *self {
            // a column swap is its own inverse
            Self::Columns { first, second } => matrix.swap_columns(first, second),
        }
    }
}

/// Executed swaps of one elimination run, most recent last.
#[derive(Debug, Default)]
pub struct SwapHistory {
    executed: Vec<UndoableSwap>,
}

impl SwapHistory {
    pub fn new() -> Self {
        Default::default()
    }

    /// Executes `swap` and records it if it changed the matrix.
    pub fn execute(
        &mut self,
        swap: UndoableSwap,
        matrix: &mut AugmentedMatrix,
    ) -> Result<bool> {
        let applied = swap.execute(matrix)?;
        if applied {
            self.executed.push(swap);
        }
        Ok(applied)
    }

    pub fn undo_last(
        &mut self,
        matrix: &mut AugmentedMatrix,
    ) -> Result<Option<UndoableSwap>> {
        let Some(swap) = self.executed.pop() else {
            return Ok(None);
        };
        swap.undo(matrix)?;
        Ok(Some(swap))
    }

    pub fn len(&self) -> usize {
        self.executed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executed.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::complex_number::ComplexNumber;

    fn matrix() -> AugmentedMatrix {
        AugmentedMatrix::from_real_rows(&[
            &[1.0, 2.0, 3.0, 10.0],
            &[4.0, 5.0, 6.0, 20.0],
            &[7.0, 8.0, 9.0, 30.0],
        ])
        .unwrap()
    }

    #[test]
    fn execute_reports_no_op() {
        let mut m = matrix();
        let mut history = SwapHistory::new();
        assert_eq!(history.execute(UndoableSwap::columns(2, 2), &mut m), Ok(false));
        assert!(history.is_empty());
        assert_eq!(m, matrix());
    }

    #[test]
    fn undo_swaps_columns_not_rows() {
        let mut m = matrix();
        let swap = UndoableSwap::columns(1, 3);
        assert_eq!(swap.execute(&mut m), Ok(true));
        assert_eq!(m.get_term(1, 1), Ok(ComplexNumber::real(3.0)));
        m.swap_rows(1, 2).unwrap();
        swap.undo(&mut m).unwrap();
        assert_eq!(m.get_term(1, 1), Ok(ComplexNumber::real(4.0)));
        assert_eq!(m.get_term(2, 3), Ok(ComplexNumber::real(3.0)));
    }

    #[test]
    fn undo_in_reverse_order_restores_the_matrix() {
        let original = matrix();
        let mut m = matrix();
        let mut history = SwapHistory::new();
        for (first, second) in [(1, 2), (2, 3), (1, 3), (3, 3), (2, 1)] {
            history.execute(UndoableSwap::columns(first, second), &mut m).unwrap();
        }
        assert_eq!(history.len(), 4);
        assert_ne!(m, original);
        while history.undo_last(&mut m).unwrap().is_some() {}
        assert!(history.is_empty());
        assert_eq!(m, original);
    }

    #[test]
    fn out_of_range_swap_is_not_recorded() {
        let mut m = matrix();
        let mut history = SwapHistory::new();
        assert!(history.execute(UndoableSwap::columns(1, 4), &mut m).is_err());
        assert!(history.is_empty());
        assert_eq!(history.undo_last(&mut m), Ok(None));
    }
}
