//! # Algorithms
//!
//! Entry points for solving a linear program, either from text or from numeric data. Each call is
//! independent and returns the outcome together with the complete trace of tableaus.
use serde::Serialize;

use crate::algorithm::config::{PivotRuleKind, SolverConfig};
use crate::algorithm::simplex::logic::primal;
use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
use crate::algorithm::simplex::tableau::Tableau;
use crate::algorithm::simplex::trace::Trace;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::OrderedField;
use crate::io::error::SolveError;
use crate::io::text::parse_problem;

pub mod config;
pub mod simplex;

/// A maximization problem that starts from a feasible basis either has a finite optimum or is
/// unbounded. When the pivot limit is hit first, neither is known.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveResult<F> {
    /// The last tableau passed the optimality test.
    Optimal(Optimum<F>),
    /// A column with negative relative cost has no positive entry. Holds the trace up to that
    /// tableau.
    Unbounded(Trace<F>),
    /// The maximum number of pivots was made without reaching an optimum, for example because the
    /// pivot rule cycles.
    NonConvergent(Trace<F>),
}

impl<F: OrderedField> SolveResult<F> {
    /// All recorded tableaus, regardless of the outcome.
    pub fn trace(&self) -> &Trace<F> {
        match self {
            SolveResult::Optimal(optimum) => optimum.trace(),
            SolveResult::Unbounded(trace) | SolveResult::NonConvergent(trace) => trace,
        }
    }

    /// The optimum, if one was found.
    pub fn optimum(&self) -> Option<&Optimum<F>> {
        match self {
            SolveResult::Optimal(optimum) => Some(optimum),
            SolveResult::Unbounded(_) | SolveResult::NonConvergent(_) => None,
        }
    }
}

/// An optimal basic feasible solution.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Optimum<F> {
    /// Values of the decision variables `x1..xn`.
    solution: Vec<F>,
    objective_value: F,
    trace: Trace<F>,
}

impl<F: OrderedField> Optimum<F> {
    pub(crate) fn new(solution: Vec<F>, objective_value: F, trace: Trace<F>) -> Self {
        debug_assert_eq!(solution.len(), trace.names().nr_decision_variables());

        Self { solution, objective_value, trace }
    }

    /// Values of the decision variables, `x(j + 1)` at index `j`.
    pub fn solution(&self) -> &[F] {
        &self.solution
    }

    /// The maximum value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// All recorded tableaus, the last one being optimal.
    pub fn trace(&self) -> &Trace<F> {
        &self.trace
    }

    /// The solution with variable names attached.
    pub fn named_solution(&self) -> Solution<F> {
        let values = self.trace.names().decision_variables().iter()
            .cloned()
            .zip(self.solution.iter().copied())
            .collect();

        Solution::new(self.objective_value, values)
    }
}

/// Solve a problem in standard form with the primal Simplex method.
///
/// The slack variables form the initial basis.
pub fn solve<F: OrderedField>(problem: &StandardForm<F>, config: &SolverConfig) -> SolveResult<F> {
    let epsilon = F::tolerance(config.epsilon);
    let tableau = Tableau::new(problem, epsilon);

    match config.pivot_rule {
        PivotRuleKind::Dantzig => primal::<_, SteepestDescentAlongVariable>(tableau, config.max_iterations),
        PivotRuleKind::Bland => primal::<_, FirstProfitable>(tableau, config.max_iterations),
    }
}

/// Solve `max c x` subject to `A x <= b`, `x >= 0`, without going through the parser.
///
/// # Arguments
///
/// * `c`: Objective coefficients, length `n`.
/// * `a`: Constraint matrix, `m` rows of length `n`.
/// * `b`: Right hand side, nonnegative up to `config.epsilon`.
/// * `config`: Solver settings.
///
/// # Errors
///
/// A `SolveError::Formulation` if the data isn't a valid standard form problem.
pub fn solve_standard_form<F: OrderedField>(
    c: Vec<F>,
    a: Vec<Vec<F>>,
    b: Vec<F>,
    config: &SolverConfig,
) -> Result<SolveResult<F>, SolveError> {
    let problem = StandardForm::new(c, a, b, F::tolerance(config.epsilon))?;

    Ok(solve(&problem, config))
}

/// Read a problem from text and solve it.
///
/// Lines that don't become a row of the tableau (non-negativity declarations and constraints that
/// the origin doesn't satisfy) are dropped; see `parse_problem` to find out which.
///
/// # Arguments
///
/// * `objective`: Objective line, like `Z = 3x1 + 2x2`.
/// * `constraints`: Constraint lines, like `x1 + x2 <= 4`.
/// * `config`: Solver settings.
///
/// # Errors
///
/// When the problem can't be read, is a minimization, or has no constraints left.
pub fn solve_from_text<F: OrderedField, S: AsRef<str>>(
    objective: &str,
    constraints: &[S],
    config: &SolverConfig,
) -> Result<SolveResult<F>, SolveError> {
    let problem = parse_problem(objective, constraints, F::tolerance(config.epsilon))?;

    Ok(solve(problem.standard_form(), config))
}
