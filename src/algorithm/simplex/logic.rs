//! # High-level Simplex logic
//!
//! High level methods implementing the simplex algorithm. The details of this logic are hidden away
//! mostly in the `Tableau` type.
use tracing::{debug, warn};

use crate::algorithm::{Optimum, SolveResult};
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::tableau::{Tableau, is_in_basic_feasible_solution_state};
use crate::algorithm::simplex::trace::{Trace, VariableNames};
use crate::data::number_types::traits::OrderedField;

/// Increases the objective value of the basic feasible solution to the maximum.
///
/// Every tableau that is passed through, the initial one included, is recorded.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `tableau`: Tableau with a feasible basis, typically the slack basis.
/// * `max_iterations`: Maximum number of pivots. The optimality test is done before this limit is
/// checked, such that a tableau that becomes optimal on the last allowed pivot is still reported as
/// optimal.
///
/// # Return value
///
/// A `SolveResult` indicating whether the problem has a finite optimum. It cannot be infeasible, as
/// a feasible solution is needed to start using this method.
pub(crate) fn primal<F, PR>(mut tableau: Tableau<F>, max_iterations: usize) -> SolveResult<F>
where
    F: OrderedField,
    PR: PivotRule,
{
    let names = VariableNames::new(tableau.nr_decision_variables(), tableau.nr_rows());
    let mut trace = Trace::new(names);
    trace.record(&tableau, None);

    let mut rule = PR::new();
    loop {
        debug_assert!(is_in_basic_feasible_solution_state(&tableau));

        match rule.select_primal_pivot_column(&tableau) {
            Some((column_index, cost)) => {
                if trace.nr_pivots() >= max_iterations {
                    warn!("No optimum found within {} pivots", max_iterations);
                    break SolveResult::NonConvergent(trace);
                }

                match rule.select_primal_pivot_row(&tableau, column_index) {
                    Some(row_index) => {
                        let pivot = tableau.bring_into_basis(column_index, row_index);
                        debug!(
                            "Iteration {}: {} enters (relative cost {}), {} leaves, pivot element {}, objective value {}",
                            trace.len(),
                            trace.names().column(pivot.column),
                            cost,
                            trace.names().column(pivot.leaving),
                            pivot.element,
                            tableau.objective_function_value(),
                        );
                        trace.record(&tableau, Some(pivot));
                    },
                    None => {
                        debug!("Unbounded along {}", trace.names().column(column_index));
                        break SolveResult::Unbounded(trace);
                    },
                }
            },
            None => {
                debug!(
                    "Optimal after {} pivots, objective value {}",
                    trace.nr_pivots(), tableau.objective_function_value(),
                );
                break SolveResult::Optimal(Optimum::new(
                    tableau.current_bfs(),
                    tableau.objective_function_value(),
                    trace,
                ));
            },
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::SolveResult;
    use crate::algorithm::simplex::logic::primal;
    use crate::algorithm::simplex::strategy::pivot_rule::{FirstProfitable, SteepestDescentAlongVariable};
    use crate::algorithm::simplex::tableau::Tableau;
    use crate::data::linear_program::standard_form::StandardForm;

    const EPSILON: f64 = 1e-10;

    fn tableau(c: Vec<f64>, a: Vec<Vec<f64>>, b: Vec<f64>) -> Tableau<f64> {
        Tableau::new(&StandardForm::new(c, a, b, EPSILON).unwrap(), EPSILON)
    }

    #[test]
    fn single_pivot() {
        let tableau = tableau(vec![2_f64, 3_f64, 4_f64], vec![vec![3_f64, 2_f64, 1_f64], vec![2_f64, 5_f64, 3_f64]], vec![10_f64, 15_f64]);
        match primal::<_, SteepestDescentAlongVariable>(tableau, 100) {
            SolveResult::Optimal(optimum) => {
                assert_eq!(optimum.solution(), &[0_f64, 0_f64, 5_f64]);
                assert_eq!(optimum.objective_value(), 20_f64);
                assert_eq!(optimum.trace().nr_pivots(), 1);
            },
            other => panic!("expected an optimum, got {:?}", other),
        }
    }

    #[test]
    fn unbounded() {
        let tableau = tableau(vec![1_f64, 0_f64], vec![vec![1_f64, -1_f64]], vec![1_f64]);
        let result = primal::<_, FirstProfitable>(tableau, 100);
        assert!(matches!(&result, SolveResult::Unbounded(trace) if trace.nr_pivots() == 1));
    }

    #[test]
    fn iteration_limit() {
        let tableau = tableau(vec![3_f64, 5_f64], vec![vec![1_f64, 0_f64], vec![0_f64, 2_f64], vec![3_f64, 2_f64]], vec![4_f64, 12_f64, 18_f64]);
        let result = primal::<_, SteepestDescentAlongVariable>(tableau.clone(), 1);
        assert!(matches!(&result, SolveResult::NonConvergent(trace) if trace.len() == 2));

        // Optimal on exactly the last allowed pivot.
        let result = primal::<_, SteepestDescentAlongVariable>(tableau, 2);
        assert!(matches!(result, SolveResult::Optimal(_)));
    }

    #[test]
    fn zero_iterations_allowed() {
        let optimal = tableau(vec![-1_f64, -2_f64], vec![vec![1_f64, 1_f64]], vec![3_f64]);
        assert!(matches!(primal::<_, SteepestDescentAlongVariable>(optimal, 0), SolveResult::Optimal(_)));

        let not_optimal = tableau(vec![1_f64], vec![vec![1_f64]], vec![3_f64]);
        assert!(matches!(
            primal::<_, SteepestDescentAlongVariable>(not_optimal, 0),
            SolveResult::NonConvergent(trace) if trace.len() == 1,
        ));
    }
}
