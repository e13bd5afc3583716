use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::elimination::{EliminationDriver, SystemSolution};
use crate::files::{read_matrix, write_solution};

pub struct SolverParams {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl SolverParams {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// Loads the input matrix, classifies the system and persists the result.
    pub fn run(&self) -> Result<SystemSolution> {
        let matrix = read_matrix(&self.input)?;
        let solution = EliminationDriver::new(matrix)
            .solve()
            .context("eliminating the augmented matrix")?;
        write_solution(&self.output, &solution)?;
        Ok(solution)
    }
}
