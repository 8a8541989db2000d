//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `const OBJECTIVE` and `const CONSTRAINTS`
//! * `fn standard_form()`
//! * `fn tableau_form()`, `fn tableau_form_after_pivot_k()`
//! * `fn solution()`
pub mod problem_2;

use approx::assert_abs_diff_eq;

/// Compare two tableaus entry by entry.
pub fn assert_rows_eq(actual: &[Vec<f64>], expected: &[Vec<f64>]) {
    assert_eq!(actual.len(), expected.len());
    for (actual_row, expected_row) in actual.iter().zip(expected) {
        assert_eq!(actual_row.len(), expected_row.len());
        for (actual_value, expected_value) in actual_row.iter().zip(expected_row) {
            assert_abs_diff_eq!(*actual_value, *expected_value, epsilon = 1e-12);
        }
    }
}
