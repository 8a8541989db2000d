//! # Property based tests
//!
//! Random small problems with integer data, checked against the optimality and unboundedness
//! certificates that can be read off the final tableau.
use proptest::prelude::*;

use simplex_trace::algorithm::{SolveResult, solve_standard_form};
use simplex_trace::algorithm::config::{PivotRuleKind, SolverConfig};
use simplex_trace::algorithm::simplex::trace::Trace;
use simplex_trace::data::linear_program::standard_form::Constraint;
use simplex_trace::io::constraint::parse_constraint;

const TOLERANCE: f64 = 1e-6;

type Problem = (Vec<f64>, Vec<Vec<f64>>, Vec<f64>);

fn to_f64(values: Vec<i32>) -> Vec<f64> {
    values.into_iter().map(f64::from).collect()
}

/// Between one and four variables and constraints, with a nonnegative right hand side.
fn problem() -> impl Strategy<Value = Problem> {
    (1usize..5, 1usize..5)
        .prop_flat_map(|(n, m)| (
            prop::collection::vec(-5i32..=5, n),
            prop::collection::vec(prop::collection::vec(-5i32..=5, n), m),
            prop::collection::vec(0i32..=10, m),
        ))
        .prop_map(|(c, a, b)| (to_f64(c), a.into_iter().map(to_f64).collect(), to_f64(b)))
}

fn bland() -> SolverConfig {
    SolverConfig::default()
        .with_pivot_rule(PivotRuleKind::Bland)
        .with_max_iterations(1000)
}

/// Records are numbered, only the first one has no pivot and only the last one may be optimal.
fn check_trace_shape(trace: &Trace<f64>) -> Result<(), TestCaseError> {
    prop_assert!(!trace.is_empty());
    prop_assert_eq!(trace.len(), trace.nr_pivots() + 1);
    for (i, record) in trace.records().iter().enumerate() {
        prop_assert_eq!(record.iteration(), i);
        prop_assert_eq!(record.pivot().is_none(), i == 0);
        if i + 1 < trace.len() {
            prop_assert!(!record.is_optimal());
        }
    }

    let values = trace.records().iter().map(|record| record.objective_function_value()).collect::<Vec<_>>();
    prop_assert!(values.windows(2).all(|pair| pair[1] >= pair[0] - TOLERANCE));

    Ok(())
}

proptest! {
    /// An optimum is feasible, consistent with its objective value, and certified by the tableau.
    #[test]
    fn bland_results_are_certified((c, a, b) in problem()) {
        let result = solve_standard_form(c.clone(), a.clone(), b.clone(), &bland()).unwrap();
        check_trace_shape(result.trace())?;

        let last = result.trace().last().unwrap();
        let tableau = last.tableau();
        let m = b.len();
        let n = c.len();
        match &result {
            SolveResult::Optimal(optimum) => {
                prop_assert!(last.is_optimal());
                prop_assert!(tableau[m][..(n + m)].iter().all(|&cost| cost >= -1e-10));

                let x = optimum.solution();
                prop_assert!(x.iter().all(|&value| value >= -TOLERANCE));
                for (row, &rhs) in a.iter().zip(&b) {
                    let lhs = row.iter().zip(x).map(|(a, x)| a * x).sum::<f64>();
                    prop_assert!(lhs <= rhs + TOLERANCE);
                }
                let objective = c.iter().zip(x).map(|(c, x)| c * x).sum::<f64>();
                prop_assert!((objective - optimum.objective_value()).abs() <= TOLERANCE);
            },
            SolveResult::Unbounded(_) => {
                let certificate = (0..(n + m)).any(|j| {
                    tableau[m][j] < -1e-10 && (0..m).all(|i| tableau[i][j] <= 1e-10)
                });
                prop_assert!(certificate);
            },
            SolveResult::NonConvergent(_) => prop_assert!(false, "Bland's rule should not cycle"),
        }
    }

    /// The entering rule changes the path, not the destination.
    #[test]
    fn pivot_rules_agree((c, a, b) in problem()) {
        let bland = solve_standard_form(c.clone(), a.clone(), b.clone(), &bland()).unwrap();
        let dantzig = solve_standard_form(c, a, b, &SolverConfig::default()).unwrap();
        check_trace_shape(dantzig.trace())?;

        match (&bland, &dantzig) {
            (SolveResult::Optimal(first), SolveResult::Optimal(second)) => {
                prop_assert!((first.objective_value() - second.objective_value()).abs() <= TOLERANCE);
            },
            (SolveResult::Unbounded(_), SolveResult::Unbounded(_)) => {},
            (_, SolveResult::NonConvergent(_)) => {},
            (first, second) => prop_assert!(false, "{:?} versus {:?}", first, second),
        }
    }

    /// A normalized constraint is printed in a form the parser reads back.
    #[test]
    fn constraint_text_is_read_back(
        coefficients in prop::collection::vec(-20i32..=20, 1..6),
        rhs in 0i32..=100,
    ) {
        let constraint = Constraint::new(to_f64(coefficients), f64::from(rhs));
        let n = constraint.nr_variables();

        let read = parse_constraint::<f64>(&constraint.to_string()).unwrap().into_standard(n, 1e-10);
        prop_assert_eq!(read, constraint);
    }
}
