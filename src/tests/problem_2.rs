//! The Wyndor Glass Co. problem from Hillier and Lieberman, two pivots with a fractional tableau.
//!
//! maximize Z = 3x1 + 5x2 subject to x1 <= 4, 2x2 <= 12, 3x1 + 2x2 <= 18, x1, x2 >= 0.
use approx::assert_abs_diff_eq;

use crate::algorithm::{SolveResult, solve_from_text};
use crate::algorithm::config::{PivotRuleKind, SolverConfig};
use crate::algorithm::simplex::trace::Pivot;
use crate::tests::assert_rows_eq;

const OBJECTIVE: &str = "Z = 3x1 + 5x2";
const CONSTRAINTS: [&str; 3] = ["x1 <= 4", "2x2 <= 12", "3x1 + 2x2 <= 18"];

#[test]
fn dantzig() {
    let result = solve_from_text::<f64, _>(OBJECTIVE, &CONSTRAINTS, &SolverConfig::default()).unwrap();
    let optimum = match &result {
        SolveResult::Optimal(optimum) => optimum,
        other => panic!("expected an optimum, got {:?}", other),
    };
    assert_abs_diff_eq!(optimum.solution()[0], 2_f64, epsilon = 1e-12);
    assert_abs_diff_eq!(optimum.solution()[1], 6_f64, epsilon = 1e-12);
    assert_abs_diff_eq!(optimum.objective_value(), 36_f64, epsilon = 1e-12);

    let records = optimum.trace().records();
    assert_eq!(records.len(), 3);
    assert_rows_eq(records[0].tableau(), &tableau_form());

    assert_eq!(records[1].pivot(), Some(&Pivot { row: 1, column: 1, element: 2_f64, leaving: 3 }));
    assert_eq!(records[1].basis(), &[2, 1, 4]);
    assert_rows_eq(records[1].tableau(), &tableau_form_after_pivot_1());
    assert!(!records[1].is_optimal());

    assert_eq!(records[2].pivot(), Some(&Pivot { row: 2, column: 0, element: 3_f64, leaving: 4 }));
    assert_eq!(records[2].basis(), &[2, 1, 0]);
    assert_rows_eq(records[2].tableau(), &tableau_form_after_pivot_2());
    assert!(records[2].is_optimal());
}

#[test]
fn bland_reaches_the_same_optimum() {
    let config = SolverConfig::default().with_pivot_rule(PivotRuleKind::Bland);
    let result = solve_from_text::<f64, _>(OBJECTIVE, &CONSTRAINTS, &config).unwrap();
    let optimum = result.optimum().unwrap();
    assert_abs_diff_eq!(optimum.objective_value(), 36_f64, epsilon = 1e-12);
    // Entering x1 first takes the long way around.
    assert_eq!(optimum.trace().records()[1].pivot().map(|pivot| pivot.column), Some(0));
    assert_eq!(optimum.trace().nr_pivots(), 3);
}

#[test]
fn objective_never_decreases() {
    let result = solve_from_text::<f64, _>(OBJECTIVE, &CONSTRAINTS, &SolverConfig::default()).unwrap();
    let values = result.trace().records().iter()
        .map(|record| record.objective_function_value())
        .collect::<Vec<_>>();
    assert!(values.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(values, vec![0_f64, 30_f64, 36_f64]);
}

fn tableau_form() -> Vec<Vec<f64>> {
    vec![
        vec![1_f64, 0_f64, 1_f64, 0_f64, 0_f64, 4_f64],
        vec![0_f64, 2_f64, 0_f64, 1_f64, 0_f64, 12_f64],
        vec![3_f64, 2_f64, 0_f64, 0_f64, 1_f64, 18_f64],
        vec![-3_f64, -5_f64, 0_f64, 0_f64, 0_f64, 0_f64],
    ]
}

fn tableau_form_after_pivot_1() -> Vec<Vec<f64>> {
    vec![
        vec![1_f64, 0_f64, 1_f64, 0_f64, 0_f64, 4_f64],
        vec![0_f64, 1_f64, 0_f64, 0.5_f64, 0_f64, 6_f64],
        vec![3_f64, 0_f64, 0_f64, -1_f64, 1_f64, 6_f64],
        vec![-3_f64, 0_f64, 0_f64, 2.5_f64, 0_f64, 30_f64],
    ]
}

fn tableau_form_after_pivot_2() -> Vec<Vec<f64>> {
    vec![
        vec![0_f64, 0_f64, 1_f64, 1_f64 / 3_f64, -1_f64 / 3_f64, 2_f64],
        vec![0_f64, 1_f64, 0_f64, 0.5_f64, 0_f64, 6_f64],
        vec![1_f64, 0_f64, 0_f64, -1_f64 / 3_f64, 1_f64 / 3_f64, 2_f64],
        vec![0_f64, 0_f64, 0_f64, 1.5_f64, 1_f64, 36_f64],
    ]
}
