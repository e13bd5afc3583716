use std::fmt;

use crate::complex_number::ComplexNumber;

/// A step applied to the matrix, kept in order for narration and inspection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOperation {
    SwapRows(usize, usize),
    SwapColumns(usize, usize),
    Scale {
        row: usize,
        factor: ComplexNumber,
    },
    AddScaled {
        source: usize,
        target: usize,
        factor: ComplexNumber,
    },
}

impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SwapRows(first, second) => write!(f, "R{first} <-> R{second}"),
            Self::SwapColumns(first, second) => write!(f, "C{first} <-> C{second}"),
            Self::Scale { row, factor } => {
                write!(f, "{} * R{row} -> R{row}", factor.render(true))
            }
            Self::AddScaled {
                source,
                target,
                factor,
            } => write!(
                f,
                "{} * R{source} + R{target} -> R{target}",
                factor.render(true)
            ),
        }
    }
}
