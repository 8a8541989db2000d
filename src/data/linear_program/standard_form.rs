//! # Linear programs in standard form
//!
//! Maximize `c x` subject to `A x <= b`, `x >= 0` and `b >= 0`. This is the only form the tableau
//! engine accepts: the slack variables of the constraints form a feasible starting basis.
use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::data::number_types::traits::OrderedField;
use crate::io::error::SolveError;

/// A single `a x <= b` row.
///
/// The relation is implicit; after normalization it is always `<=`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Constraint<F> {
    coefficients: Vec<F>,
    rhs: F,
}

impl<F: OrderedField> Constraint<F> {
    /// Create a new constraint.
    ///
    /// A plain constructor, no normalization takes place.
    pub fn new(coefficients: Vec<F>, rhs: F) -> Self {
        Self { coefficients, rhs }
    }

    /// Coefficient of `x(j + 1)` at index `j`.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// The right hand side `b`.
    pub fn rhs(&self) -> F {
        self.rhs
    }

    /// Number of variables this constraint is expressed in.
    pub fn nr_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the origin satisfies this constraint, such that its slack can start in the basis.
    pub fn is_feasible_at_origin(&self) -> bool {
        self.rhs >= F::zero()
    }
}

impl<F: OrderedField> fmt::Display for Constraint<F> {
    /// Renders as e.g. `2x1 + 1x2 <= 10`, which can be read back by the constraint parser.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_expression(f, &self.coefficients)?;
        write!(f, " <= {}", positive_zero(self.rhs))
    }
}

/// A linear program in standard form.
///
/// Invariants, checked at construction:
/// * there is at least one variable and one constraint;
/// * every constraint has exactly as many coefficients as the objective function;
/// * every right hand side is nonnegative;
/// * all values are finite.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardForm<F> {
    /// `c`, coefficient of `x(j + 1)` at index `j`.
    objective: Vec<F>,
    /// Rows of `A` together with `b`.
    constraints: Vec<Constraint<F>>,
}

impl<F: OrderedField> StandardForm<F> {
    /// Build a standard form linear program from numeric data.
    ///
    /// This is the path for callers that already hold `(c, A, b)` and don't need the parser.
    ///
    /// # Arguments
    ///
    /// * `c`: Objective coefficients, length `n`.
    /// * `a`: Constraint matrix, `m` rows of length `n`.
    /// * `b`: Right hand side, length `m`. Values in `[-epsilon, 0)` are snapped to zero.
    /// * `epsilon`: Numerical tolerance.
    ///
    /// # Errors
    ///
    /// A `SolveError::Formulation` when the dimensions don't match, a value is not finite or a
    /// right hand side is negative.
    pub fn new(c: Vec<F>, a: Vec<Vec<F>>, b: Vec<F>, epsilon: F) -> Result<Self, SolveError> {
        if a.len() != b.len() {
            return Err(SolveError::Formulation(format!(
                "the constraint matrix has {} rows, but there are {} right hand side values",
                a.len(), b.len(),
            )));
        }
        if let Some((i, row)) = a.iter().enumerate().find(|(_, row)| row.len() != c.len()) {
            return Err(SolveError::Formulation(format!(
                "row {} of the constraint matrix has {} entries, but the objective has {} variables",
                i, row.len(), c.len(),
            )));
        }
        if let Some((i, &rhs)) = b.iter().enumerate().find(|(_, rhs)| !rhs.is_nonnegative_within(epsilon)) {
            return Err(SolveError::Formulation(format!(
                "the right hand side of constraint {} is {}, the slack basis would not be feasible",
                i, rhs,
            )));
        }

        let constraints = a.into_iter()
            .zip_eq(b)
            .map(|(row, rhs)| Constraint::new(row, rhs.clamp_negative_zero(epsilon)))
            .collect();

        Self::from_constraints(c, constraints)
    }

    /// Combine normalized constraints with an objective function.
    ///
    /// # Errors
    ///
    /// When one of the invariants listed on the struct doesn't hold.
    pub fn from_constraints(objective: Vec<F>, constraints: Vec<Constraint<F>>) -> Result<Self, SolveError> {
        if objective.is_empty() {
            return Err(SolveError::Formulation("the objective function has no decision variables".to_string()));
        }
        if constraints.is_empty() {
            return Err(SolveError::Formulation("there are no constraints to solve with".to_string()));
        }
        if let Some(i) = constraints.iter().position(|constraint| constraint.nr_variables() != objective.len()) {
            return Err(SolveError::Formulation(format!(
                "constraint {} has {} coefficients, but the objective has {} variables",
                i, constraints[i].nr_variables(), objective.len(),
            )));
        }
        if let Some(i) = constraints.iter().position(|constraint| !constraint.is_feasible_at_origin()) {
            return Err(SolveError::Formulation(format!(
                "the right hand side of constraint {} is {}, the slack basis would not be feasible",
                i, constraints[i].rhs(),
            )));
        }
        let all_finite = objective.iter()
            .chain(constraints.iter().flat_map(|constraint| constraint.coefficients.iter()))
            .chain(constraints.iter().map(|constraint| &constraint.rhs))
            .all(|value| value.is_finite());
        if !all_finite {
            return Err(SolveError::Formulation("all coefficients should be finite numbers".to_string()));
        }

        Ok(Self { objective, constraints })
    }

    /// Number of decision variables `n`.
    pub fn nr_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of constraints `m`, which equals the number of slack variables.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Objective function coefficients `c`.
    pub fn objective(&self) -> &[F] {
        &self.objective
    }

    /// All constraints, in input order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }
}

impl<F: OrderedField> fmt::Display for StandardForm<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "maximize Z = ")?;
        write_expression(f, &self.objective)?;
        writeln!(f)?;
        writeln!(f, "subject to")?;
        for constraint in &self.constraints {
            writeln!(f, "    {}", constraint)?;
        }
        write!(f, "    {} >= 0", (1..=self.nr_variables()).map(|j| format!("x{}", j)).join(", "))
    }
}

/// Write all terms of a dense coefficient vector, zeros included.
///
/// Zeros are kept so that the length of the vector survives a round trip through the parser.
pub(crate) fn write_expression<F: OrderedField>(f: &mut impl fmt::Write, coefficients: &[F]) -> fmt::Result {
    for (j, &coefficient) in coefficients.iter().enumerate() {
        let coefficient = positive_zero(coefficient);
        if j == 0 {
            write!(f, "{}x{}", coefficient, j + 1)?;
        } else if coefficient < F::zero() {
            write!(f, " - {}x{}", -coefficient, j + 1)?;
        } else {
            write!(f, " + {}x{}", coefficient, j + 1)?;
        }
    }

    Ok(())
}

/// Avoid rendering `-0`.
fn positive_zero<F: OrderedField>(value: F) -> F {
    if value == F::zero() { F::zero() } else { value }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::standard_form::{Constraint, StandardForm};
    use crate::io::error::SolveError;

    #[test]
    fn display_constraint() {
        assert_eq!(Constraint::new(vec![2_f64, 1_f64], 10_f64).to_string(), "2x1 + 1x2 <= 10");
        assert_eq!(Constraint::new(vec![-1_f64, 0_f64], -2_f64).to_string(), "-1x1 + 0x2 <= -2");
        assert_eq!(Constraint::new(vec![0.5_f64, -3_f64], -0_f64).to_string(), "0.5x1 - 3x2 <= 0");
    }

    #[test]
    fn new() {
        let problem = StandardForm::new(
            vec![3_f64, 2_f64],
            vec![vec![1_f64, 1_f64], vec![1_f64, 3_f64]],
            vec![4_f64, -1e-12],
            1e-10,
        ).unwrap();
        assert_eq!(problem.nr_variables(), 2);
        assert_eq!(problem.nr_constraints(), 2);
        assert_eq!(problem.constraints()[1].rhs(), 0_f64);
    }

    #[test]
    fn invalid() {
        let mismatch = StandardForm::new(vec![1_f64], vec![vec![1_f64, 1_f64]], vec![1_f64], 1e-10);
        assert!(matches!(mismatch, Err(SolveError::Formulation(_))));

        let rows = StandardForm::new(vec![1_f64], vec![vec![1_f64]], vec![1_f64, 2_f64], 1e-10);
        assert!(matches!(rows, Err(SolveError::Formulation(_))));

        let negative = StandardForm::new(vec![1_f64], vec![vec![1_f64]], vec![-1_f64], 1e-10);
        assert!(matches!(negative, Err(SolveError::Formulation(_))));

        let empty = StandardForm::<f64>::new(vec![], vec![], vec![], 1e-10);
        assert!(matches!(empty, Err(SolveError::Formulation(_))));

        let no_constraints = StandardForm::<f64>::new(vec![1_f64], vec![], vec![], 1e-10);
        assert!(matches!(no_constraints, Err(SolveError::Formulation(_))));

        let infinite = StandardForm::new(vec![f64::INFINITY], vec![vec![1_f64]], vec![1_f64], 1e-10);
        assert!(matches!(infinite, Err(SolveError::Formulation(_))));
    }

    #[test]
    fn display_problem() {
        let problem = StandardForm::new(
            vec![3_f64, 2_f64],
            vec![vec![1_f64, 1_f64], vec![1_f64, 3_f64]],
            vec![4_f64, 6_f64],
            1e-10,
        ).unwrap();
        assert_eq!(
            problem.to_string(),
            "maximize Z = 3x1 + 2x2\nsubject to\n    1x1 + 1x2 <= 4\n    1x1 + 3x2 <= 6\n    x1, x2 >= 0",
        );
    }
}
