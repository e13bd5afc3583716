use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;

use crate::augmented_matrix::AugmentedMatrix;
use crate::complex_number::ComplexNumber;
use crate::elimination::SystemSolution;
use crate::error::SolverError;

/// Parses `n` followed by `n` rows of `n + 1` whitespace separated numbers.
pub fn parse_matrix(text: &str) -> crate::error::Result<AugmentedMatrix> {
    let mut tokens = text.split_whitespace();
    let size_token = tokens
        .next()
        .ok_or_else(|| SolverError::MalformedInput("input is empty".to_string()))?;
    let size: i64 = size_token.parse().map_err(|_| {
        let message = format!("matrix size `{size_token}` is not an integer");
        SolverError::MalformedInput(message)
    })?;
    if size < 1 {
        return Err(SolverError::InvalidSize(size));
    }
    let too_large =
        || SolverError::MalformedInput(format!("matrix size {size} is too large"));
    let size = usize::try_from(size).map_err(|_| too_large())?;
    let row_length = size.checked_add(1).ok_or_else(too_large)?;
    let expected_terms = size.checked_mul(row_length).ok_or_else(too_large)?;

    let terms = tokens
        .by_ref()
        .take(expected_terms)
        .map(str::parse::<ComplexNumber>)
        .collect::<crate::error::Result<Vec<_>>>()?;
    if terms.len() < expected_terms {
        return Err(SolverError::MalformedInput(format!(
            "expected {expected_terms} numbers for {size} equations, found {}",
            terms.len()
        )));
    }
    let trailing = tokens.count();
    if trailing > 0 {
        log::warn!("Ignoring {trailing} trailing tokens after the matrix");
    }
    log::debug!("Parsed {} terms for {size} equations", terms.len());

    AugmentedMatrix::from_rows(terms.chunks(row_length).map(<[_]>::to_vec).collect())
}

pub fn read_matrix(path: &Path) -> Result<AugmentedMatrix> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading input file {}", path.display()))?;
    parse_matrix(&text)
        .with_context(|| format!("parsing input file {}", path.display()))
}

/// One value per line for a unique solution, the bare phrase otherwise.
pub fn render_solution(solution: &SystemSolution) -> String {
    match solution {
        SystemSolution::Unique(values) => {
            values.iter().map(|value| format!("{value}\n")).join("")
        }
        other => other.to_string(),
    }
}

pub fn write_solution(path: &Path, solution: &SystemSolution) -> Result<()> {
    fs::write(path, render_solution(solution))
        .with_context(|| format!("writing output file {}", path.display()))?;
    log::info!("Results saved to: {}", path.display());
    Ok(())
}
