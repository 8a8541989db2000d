//! # Reading the objective function
//!
//! The objective is written like `Maximize Z = 3x1 + 2x2`, possibly in another language
//! (`Maximizar Z = ...`). Only maximization is supported; anything mentioning a minimization is
//! rejected before a tableau is ever built.
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::OrderedField;
use crate::io::error::{ParseError, SolveError};
use crate::io::expression::{LinearExpression, parse};

/// Direction keywords that may precede an objective function without `Z =`.
const MAXIMIZE_KEYWORDS: [&str; 3] = ["maximize", "maximizar", "max"];

/// Read the objective function of a maximization problem.
///
/// # Arguments
///
/// * `text`: Objective line, e.g. `Z = 3x1 + 2x2` or `maximize: 3x1 + 2x2`.
///
/// # Return value
///
/// The objective function, without any constant term.
///
/// # Errors
///
/// * `SolveError::UnsupportedDirection` when the text asks for a minimization.
/// * `SolveError::Parse` when the expression can't be found or read.
/// * `SolveError::Formulation` when the objective doesn't contain any variable, or contains a
///   constant (which would shift the reported objective value).
pub fn parse_objective<F: OrderedField>(text: &str) -> Result<LinearExpression<F>, SolveError> {
    if direction(text) == Objective::Minimize {
        return Err(SolveError::UnsupportedDirection(text.trim().to_string()));
    }

    let expression_text = objective_expression(text)
        .ok_or_else(|| ParseError::MissingObjective(text.to_string()).in_line(text))?;
    let expression = parse::<F>(expression_text).map_err(|error| match error {
        ParseError::NoVariable(_) => SolveError::Formulation(
            "the objective function has no decision variables".to_string(),
        ),
        error => error.in_line(text),
    })?;

    if !expression.constant().is_zero() {
        return Err(SolveError::Formulation(format!(
            "the objective function contains the constant {}, which is not supported",
            expression.constant(),
        )));
    }

    Ok(expression)
}

/// Whether the text reads as a maximization or a minimization.
///
/// Any mention of "min" makes it a minimization: `min`, `minimize`, `Minimizar`.
fn direction(text: &str) -> Objective {
    if text.to_lowercase().contains("min") {
        Objective::Minimize
    } else {
        Objective::Maximize
    }
}

/// Find the part of the text that holds the linear expression.
///
/// That is everything after `Z =` when present. Otherwise a leading direction keyword (and a
/// colon) is stripped, and a text without any `=` is taken as a bare expression.
fn objective_expression(text: &str) -> Option<&str> {
    let after_z = text.char_indices()
        .filter(|&(_, character)| character == 'z' || character == 'Z')
        .find_map(|(index, character)| {
            text[(index + character.len_utf8())..].trim_start().strip_prefix('=')
        });
    if after_z.is_some() {
        return after_z;
    }

    let trimmed = text.trim_start();
    let lowercase = trimmed.to_lowercase();
    let stripped = MAXIMIZE_KEYWORDS.iter()
        .find(|keyword| {
            lowercase.starts_with(**keyword)
                && !lowercase[keyword.len()..].starts_with(|character: char| character.is_alphanumeric())
        })
        .map(|keyword| {
            let rest = trimmed[keyword.len()..].trim_start();
            rest.strip_prefix(':').unwrap_or(rest)
        });

    match stripped {
        Some(rest) => Some(rest),
        None if !trimmed.contains('=') => Some(trimmed),
        None => None,
    }
}
