use std::fmt;

use itertools::Itertools;

use crate::complex_number::ComplexNumber;

/// Terminal classification of a system.
#[derive(Debug, Clone, PartialEq)]
pub enum SystemSolution {
    /// Values of variables `1..=n`, in order.
    Unique(Vec<ComplexNumber>),
    NoSolution,
    InfinitelyMany { free_variables: usize },
}

impl SystemSolution {
    pub fn is_unique(&self) -> bool {
        matches!(self, Self::Unique(_))
    }
}

impl fmt::Display for SystemSolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique(values) => write!(f, "{}", values.iter().join("\n")),
            Self::NoSolution => write!(f, "No solutions"),
            Self::InfinitelyMany { .. } => write!(f, "Infinitely many solutions"),
        }
    }
}
