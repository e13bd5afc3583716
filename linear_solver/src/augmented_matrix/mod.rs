pub mod column_swap;
pub mod equation_row;
pub mod matrix;

pub use column_swap::{SwapHistory, UndoableSwap};
pub use equation_row::EquationRow;
pub use matrix::AugmentedMatrix;
