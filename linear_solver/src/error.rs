use strum_macros::Display;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SolverError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
}

/// Structural faults. Running out of pivots, inconsistent rows and free
/// variables are classifications, not errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Invalid matrix size: {0}")]
    InvalidSize(i64),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid {axis} index {index}, expected 1..={bound}")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    #[error("Division by zero")]
    DivisionByZero,
}

impl SolverError {
    pub(crate) fn check_index(axis: Axis, index: usize, bound: usize) -> Result<usize> {
        if index < 1 || index > bound {
            return Err(Self::IndexOutOfRange { axis, index, bound });
        }
        Ok(index - 1)
    }
}
