//! # Problems written as text
//!
//! A problem is an objective line plus a list of constraint lines. This module turns such text
//! into a `StandardForm`, keeping track of which lines didn't end up in the tableau and why.
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::OrderedField;
use crate::io::constraint::{is_non_negativity_declaration, parse_constraint};
use crate::io::error::SolveError;
use crate::io::objective::parse_objective;

/// The lines of a problem, before any parsing of expressions.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProblemText {
    /// Objective function line.
    pub objective: String,
    /// Constraint lines, in order.
    pub constraints: Vec<String>,
}

impl ProblemText {
    /// Split the contents of a problem file into lines.
    ///
    /// The first meaningful line is the objective function, all following meaningful lines are
    /// constraints. Blank lines, comments (starting with `#` or `*`) and lines without any digit,
    /// such as a `subject to` header, are not meaningful.
    ///
    /// A direction line on its own before the objective, like `Minimize` or `max:`, is prefixed to
    /// the objective line so that the direction is still checked.
    ///
    /// # Return value
    ///
    /// `None` if there is no meaningful line at all.
    pub fn from_contents(contents: &str) -> Option<Self> {
        let mut lines = contents.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| !line.starts_with('#') && !line.starts_with('*'));

        let mut direction = None;
        let objective = loop {
            let line = lines.next()?;
            if contains_digit(line) {
                break match direction {
                    Some(keyword) => format!("{} {}", keyword, line),
                    None => line.to_string(),
                };
            }
            if is_direction_line(line) {
                direction = Some(line);
            }
        };
        let constraints = lines
            .filter(|line| contains_digit(line))
            .map(str::to_string)
            .collect();

        Some(Self { objective, constraints })
    }
}

fn contains_digit(line: &str) -> bool {
    line.chars().any(|character| character.is_ascii_digit())
}

/// Whether a line without an expression names an optimization direction.
fn is_direction_line(line: &str) -> bool {
    let lowercase = line.to_lowercase();
    lowercase.starts_with("max") || lowercase.starts_with("min")
}

/// Why a constraint line is not a row of the tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The line only states that variables are nonnegative, which is implicit.
    NonNegativity,
    /// After normalization the right hand side is negative, so the slack variable can't start in
    /// the basis.
    InfeasibleAtOrigin,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            SkipReason::NonNegativity => "non-negativity is implicit",
            SkipReason::InfeasibleAtOrigin => "not satisfied at the origin, needs a phase one",
        })
    }
}

/// A constraint line that was read but not used.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Skipped {
    /// Index of the line in the list of constraints.
    pub index: usize,
    /// The line itself.
    pub line: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// A problem read from text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParsedProblem<F> {
    standard_form: StandardForm<F>,
    skipped: Vec<Skipped>,
}

impl<F: OrderedField> ParsedProblem<F> {
    /// The problem that will be solved.
    pub fn standard_form(&self) -> &StandardForm<F> {
        &self.standard_form
    }

    /// Constraint lines that are not part of the standard form, ordered by line.
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }

    /// Take the standard form, dropping the information about skipped lines.
    pub fn into_standard_form(self) -> StandardForm<F> {
        self.standard_form
    }
}

/// Read a problem from its objective and constraint lines.
///
/// The number of decision variables is the highest subscript used anywhere, in the objective or
/// in a constraint. Variables that only appear in constraints get objective coefficient zero.
///
/// # Arguments
///
/// * `objective`: Objective line, like `Z = 3x1 + 2x2`.
/// * `constraints`: Constraint lines, like `x1 + x2 <= 4`. Blank lines are ignored.
/// * `epsilon`: Right hand sides in `[-epsilon, 0)` count as zero.
///
/// # Errors
///
/// When a line can't be read, when the objective is a minimization or when no constraint remains.
pub fn parse_problem<F: OrderedField, S: AsRef<str>>(
    objective: &str,
    constraints: &[S],
    epsilon: F,
) -> Result<ParsedProblem<F>, SolveError> {
    let objective = parse_objective::<F>(objective)?;

    let mut skipped = Vec::new();
    let mut raw_constraints = Vec::with_capacity(constraints.len());
    for (index, line) in constraints.iter().enumerate() {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }
        if is_non_negativity_declaration(line) {
            debug!("Skipping non-negativity declaration \"{}\"", line);
            skipped.push(Skipped { index, line: line.to_string(), reason: SkipReason::NonNegativity });
            continue;
        }

        let constraint = parse_constraint::<F>(line).map_err(|error| error.in_line(line))?;
        let all_finite = constraint.coefficients().iter()
            .chain(std::iter::once(&constraint.rhs()))
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(SolveError::Formulation(format!(
                "constraint \"{}\" contains a number that is too large to represent",
                line,
            )));
        }
        if constraint.constraint_type() == ConstraintType::Equal {
            warn!("Equality constraint \"{}\" is relaxed to \"<=\"", line);
        }
        raw_constraints.push((index, line, constraint));
    }

    let nr_variables = raw_constraints.iter()
        .map(|(_, _, constraint)| constraint.nr_variables())
        .chain(std::iter::once(objective.nr_variables()))
        .max()
        .unwrap_or(0);

    let mut rows = Vec::with_capacity(raw_constraints.len());
    for (index, line, constraint) in raw_constraints {
        let constraint = constraint.into_standard(nr_variables, epsilon);
        if constraint.is_feasible_at_origin() {
            rows.push(constraint);
        } else {
            warn!(
                "Dropping constraint \"{}\": right hand side {} is negative after normalization",
                line, constraint.rhs(),
            );
            skipped.push(Skipped { index, line: line.to_string(), reason: SkipReason::InfeasibleAtOrigin });
        }
    }
    skipped.sort_by_key(|skip| skip.index);

    let standard_form = StandardForm::from_constraints(
        objective.into_padded_coefficients(nr_variables),
        rows,
    )?;
    debug!(
        "Read a problem with {} variables and {} constraints",
        standard_form.nr_variables(), standard_form.nr_constraints(),
    );

    Ok(ParsedProblem { standard_form, skipped })
}
