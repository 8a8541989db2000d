use approx::assert_abs_diff_eq;

use simplex_trace::algorithm::{SolveResult, solve_standard_form};
use simplex_trace::algorithm::config::{PivotRuleKind, SolverConfig};
use simplex_trace::io::error::{ImportError, SolveError};
use simplex_trace::io::import;
use simplex_trace::io::report::{render_trace, summary};
use simplex_trace::io::text::SkipReason;

use super::{get_test_file_path, solve_file};

#[test]
fn production() {
    let result = solve_file("production", &SolverConfig::default()).unwrap();
    let optimum = result.optimum().unwrap();
    assert_eq!(optimum.solution(), &[4_f64, 0_f64]);
    assert_eq!(optimum.objective_value(), 12_f64);
    assert_eq!(optimum.named_solution().to_string(), " Z = 12\nx1 = 4\nx2 = 0\n");

    assert_eq!(result.trace().len(), 2);
    assert!(summary(result.trace(), 1).unwrap().contains("Entering variable: x1 (column 0)"));
    assert_eq!(summary(result.trace(), 2), None);
}

#[test]
fn wyndor() {
    let result = solve_file("wyndor", &SolverConfig::default()).unwrap();
    let optimum = result.optimum().unwrap();
    assert_abs_diff_eq!(optimum.solution()[0], 2_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(optimum.solution()[1], 6_f64, epsilon = 1e-9);
    assert_abs_diff_eq!(optimum.objective_value(), 36_f64, epsilon = 1e-9);

    let text = render_trace(result.trace(), true);
    assert!(text.starts_with("=====") && text.contains("INITIAL TABLEAU"));
    assert!(text.contains("ITERATION 2"));
    assert!(text.trim_end().ends_with("*** OPTIMAL SOLUTION REACHED ***"));
}

#[test]
fn unbounded() {
    let result = solve_file("unbounded", &SolverConfig::default()).unwrap();
    match result {
        SolveResult::Unbounded(trace) => {
            assert_eq!(trace.nr_pivots(), 1);
            assert!(!trace.last().unwrap().is_optimal());
        },
        other => panic!("expected an unbounded problem, got {:?}", other),
    }
}

#[test]
fn minimize() {
    let error = import::<f64>(&get_test_file_path("minimize"), 1e-10).unwrap_err();
    assert!(matches!(error, ImportError::Problem { error: SolveError::UnsupportedDirection(_), .. }));
}

#[test]
fn minimize_on_separate_line() {
    let error = import::<f64>(&get_test_file_path("minimize_separate_line"), 1e-10).unwrap_err();
    assert!(matches!(error, ImportError::Problem { error: SolveError::UnsupportedDirection(_), .. }));
}

#[test]
fn missing_file() {
    let error = import::<f64>(&get_test_file_path("does_not_exist"), 1e-10).unwrap_err();
    assert!(matches!(error, ImportError::IO { .. }));
}

#[test]
fn chvatal() {
    let dantzig = solve_file("chvatal", &SolverConfig::default()).unwrap();
    assert!(matches!(dantzig, SolveResult::NonConvergent(_)));

    let config = SolverConfig::default().with_pivot_rule(PivotRuleKind::Bland);
    let bland = solve_file("chvatal", &config).unwrap();
    assert_abs_diff_eq!(bland.optimum().unwrap().objective_value(), 1_f64, epsilon = 1e-9);
}

#[test]
fn mixed() {
    let problem = import::<f64>(&get_test_file_path("mixed"), 1e-10).unwrap();
    let standard_form = problem.standard_form();

    // `x1 >= 1` can't start from the slack basis and is dropped, the equality is relaxed.
    assert_eq!(problem.skipped().len(), 1);
    assert_eq!(problem.skipped()[0].line, "x1 >= 1");
    assert_eq!(problem.skipped()[0].reason, SkipReason::InfeasibleAtOrigin);
    assert_eq!(standard_form.nr_constraints(), 4);
    assert_eq!(standard_form.constraints()[1].coefficients(), &[-1_f64, 1_f64, 0_f64]);
    assert_eq!(standard_form.constraints()[1].rhs(), 2_f64);
    assert_eq!(standard_form.constraints()[2].coefficients(), &[0_f64, 0_f64, 1_f64]);
    assert_eq!(standard_form.constraints()[2].rhs(), 4_f64);

    let result = solve_file("mixed", &SolverConfig::default()).unwrap();
    assert!(result.optimum().is_some());
}

#[test]
fn programmatic() {
    let config = SolverConfig::default();
    let result = solve_standard_form(
        vec![1_f64, 0_f64],
        vec![vec![1_f64, -1_f64]],
        vec![1_f64],
        &config,
    ).unwrap();
    assert!(matches!(result, SolveResult::Unbounded(_)));

    let already_optimal = solve_standard_form(vec![-1_f64, -2_f64], vec![vec![1_f64, 1_f64]], vec![3_f64], &config)
        .unwrap();
    let optimum = already_optimal.optimum().unwrap();
    assert_eq!(optimum.trace().len(), 1);
    assert!(optimum.trace().records()[0].is_optimal());
    assert_eq!(optimum.objective_value(), 0_f64);

    let error = solve_standard_form::<f64>(vec![1_f64], vec![], vec![], &config);
    assert!(matches!(error, Err(SolveError::Formulation(_))));
}
