//! # Small textbook problems
//!
//! Problem files in the text format, each exercising a different outcome of the solver.
use std::path::{Path, PathBuf};

use simplex_trace::algorithm::SolveResult;
use simplex_trace::algorithm::config::SolverConfig;
use simplex_trace::algorithm::solve;
use simplex_trace::io::error::ImportError;
use simplex_trace::io::import;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Relative path of the folder where the problem files are stored.
///
/// The path is relative to the project root folder.
fn problem_file_directory() -> PathBuf {
    Path::new(file!()).parent().unwrap().to_path_buf()
}

/// Compute the path of the problem file, based on the problem name.
///
/// # Arguments
///
/// * `name`: Problem name without extension.
///
/// # Return value
///
/// File path relative to the project root folder.
fn get_test_file_path(name: &str) -> PathBuf {
    problem_file_directory().join(name).with_extension("txt")
}

/// Read and solve a problem file.
fn solve_file(name: &str, config: &SolverConfig) -> Result<SolveResult<f64>, ImportError> {
    let problem = import(&get_test_file_path(name), config.epsilon)?;
    Ok(solve(problem.standard_form(), config))
}
