//! # Reading and writing of linear programs
//!
//! This module reads linear programs written as algebraic text, and renders the progress of the
//! Simplex method back into text.
use std::fs;
use std::path::Path;

use crate::data::number_types::traits::OrderedField;
use crate::io::error::ImportError;
use crate::io::text::{ParsedProblem, ProblemText, parse_problem};

pub mod constraint;
pub mod error;
pub mod expression;
pub mod objective;
pub mod report;
pub mod text;

/// Import a problem from a file.
///
/// The first meaningful line of the file is the objective function, every following one a
/// constraint; see `ProblemText::from_contents`.
///
/// # Arguments
///
/// * `file_path`: Location of the problem file.
/// * `epsilon`: Numerical tolerance used while normalizing constraints.
///
/// # Errors
///
/// When the file cannot be found or read, has no objective function line, or when one of its lines
/// can't be parsed.
pub fn import<F: OrderedField>(file_path: &Path, epsilon: F) -> Result<ParsedProblem<F>, ImportError> {
    let text = read_problem_text(file_path)?;

    parse_problem(&text.objective, &text.constraints, epsilon)
        .map_err(|error| ImportError::Problem { path: file_path.to_path_buf(), error })
}

/// Read the lines of a problem file without parsing them.
///
/// # Errors
///
/// When the file cannot be found or read, or has no objective function line.
pub fn read_problem_text(file_path: &Path) -> Result<ProblemText, ImportError> {
    let contents = fs::read_to_string(file_path)
        .map_err(|error| ImportError::IO { path: file_path.to_path_buf(), error })?;

    ProblemText::from_contents(&contents)
        .ok_or_else(|| ImportError::NoObjective(file_path.to_path_buf()))
}
