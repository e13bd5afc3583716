//! Solves square linear systems over the complex numbers by Gaussian
//! elimination followed by Gauss-Jordan reduction, classifying each system as
//! uniquely solved, inconsistent or underdetermined.

pub mod augmented_matrix;
pub mod cli;
pub mod complex_number;
pub mod elimination;
pub mod error;
pub mod files;

pub use augmented_matrix::{AugmentedMatrix, EquationRow, SwapHistory, UndoableSwap};
pub use complex_number::ComplexNumber;
pub use elimination::{EliminationDriver, RowOperation, SystemSolution};
pub use error::{Axis, SolverError};
