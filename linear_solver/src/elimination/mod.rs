pub mod driver;
pub mod operation;
pub mod solution;

pub use driver::EliminationDriver;
pub use operation::RowOperation;
pub use solution::SystemSolution;
