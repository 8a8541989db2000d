//! # Simplex tableau
//!
//! A dense tableau for problems in standard form, started from the basis of slack variables.
//!
//! Layout, for `n` decision variables and `m` constraints: rows `0..m` are the constraints, row `m`
//! holds the relative costs. Columns `0..n` belong to the decision variables, columns `n..n + m` to
//! the slacks and the last column holds the constraint values (and the objective value in the
//! objective row).
use std::fmt;

use tracing::trace;

use crate::algorithm::simplex::trace::{Pivot, VariableNames, write_table};
use crate::data::linear_program::standard_form::StandardForm;
use crate::data::number_types::traits::OrderedField;

/// How to choose between rows that attain the same minimum ratio.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum RatioTieBreak {
    /// Take the first row.
    FirstRow,
    /// Take the row whose basic variable has the lowest index (Bland's rule).
    LowestLeavingIndex,
}

/// The tableau used by the primal Simplex method.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// `m + 1` rows of `n + m + 1` values.
    rows: Vec<Vec<F>>,
    /// Column index of the basic variable of each constraint row.
    basis: Vec<usize>,
    nr_decision_variables: usize,
    /// Values with an absolute value up to `epsilon` are treated as zero in pivoting decisions.
    epsilon: F,
}

impl<F: OrderedField> Tableau<F> {
    /// Create the initial tableau, with the slack variables in the basis.
    ///
    /// The objective row holds `-c` for the decision variables and zero for the slacks, the
    /// objective value is zero.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem in standard form, so the slack basis is feasible.
    /// * `epsilon`: Numerical tolerance.
    pub fn new(problem: &StandardForm<F>, epsilon: F) -> Self {
        let n = problem.nr_variables();
        let m = problem.nr_constraints();

        let mut rows = problem.constraints().iter()
            .enumerate()
            .map(|(i, constraint)| {
                let mut row = Vec::with_capacity(n + m + 1);
                row.extend_from_slice(constraint.coefficients());
                row.extend((0..m).map(|k| if k == i { F::one() } else { F::zero() }));
                row.push(constraint.rhs());
                row
            })
            .collect::<Vec<_>>();
        let mut objective_row = problem.objective().iter().map(|&cost| -cost).collect::<Vec<_>>();
        objective_row.resize(n + m + 1, F::zero());
        rows.push(objective_row);

        Self {
            rows,
            basis: (n..(n + m)).collect(),
            nr_decision_variables: n,
            epsilon,
        }
    }

    /// Number of constraint rows `m`.
    pub fn nr_rows(&self) -> usize {
        self.basis.len()
    }

    /// Number of variable columns `n + m`, the right hand side column not included.
    pub fn nr_columns(&self) -> usize {
        self.nr_decision_variables + self.nr_rows()
    }

    /// Number of decision variables `n`.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }

    /// The numerical tolerance.
    pub fn epsilon(&self) -> F {
        self.epsilon
    }

    /// All rows, the objective row last.
    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    /// Basic variable of each constraint row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// Entry of the tableau.
    ///
    /// # Arguments
    ///
    /// * `row`: In range `0` until `m` inclusive, `m` being the objective row.
    /// * `column`: In range `0` until `n + m` inclusive, `n + m` being the right hand side.
    pub fn get(&self, row: usize, column: usize) -> F {
        self.rows[row][column]
    }

    /// Relative cost of a variable, as found in the objective row.
    pub fn relative_cost(&self, column: usize) -> F {
        debug_assert!(column < self.nr_columns());

        self.rows[self.nr_rows()][column]
    }

    /// Value of the basic variable of a constraint row.
    pub fn constraint_value(&self, row: usize) -> F {
        debug_assert!(row < self.nr_rows());

        self.rows[row][self.nr_columns()]
    }

    /// Column index of the basic variable of a row.
    pub fn basis_column_index_for_row(&self, row: usize) -> usize {
        self.basis[row]
    }

    /// Whether a variable is currently basic.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.basis.contains(&column)
    }

    /// Whether no relative cost is below `-epsilon`.
    pub fn is_optimal(&self) -> bool {
        (0..self.nr_columns()).all(|column| self.relative_cost(column) >= -self.epsilon)
    }

    /// Minimum ratio test.
    ///
    /// Only rows with an entry larger than `epsilon` in the pivot column are considered; the one
    /// minimizing the constraint value divided by that entry is chosen.
    ///
    /// # Arguments
    ///
    /// * `column`: Index of the entering variable.
    /// * `tie_break`: Rule for rows with ratios within `epsilon` of each other.
    ///
    /// # Return value
    ///
    /// The pivot row, or `None` if no entry in the column is positive, that is, if the problem is
    /// unbounded along this column.
    pub fn select_primal_pivot_row(&self, column: usize, tie_break: RatioTieBreak) -> Option<usize> {
        debug_assert!(column < self.nr_columns());

        // (chosen index, minimum ratio, corresponding leaving column)
        let mut min_values: Option<(usize, F, usize)> = None;
        for row in 0..self.nr_rows() {
            let xij = self.rows[row][column];
            if xij > self.epsilon {
                let ratio = self.constraint_value(row) / xij;
                let leaving_column = self.basis_column_index_for_row(row);
                if let Some((min_index, min_ratio, min_leaving_column)) = &mut min_values {
                    if (ratio - *min_ratio).abs() <= self.epsilon {
                        trace!("Ratio test tie between rows {} and {}", min_index, row);
                        if tie_break == RatioTieBreak::LowestLeavingIndex && leaving_column < *min_leaving_column {
                            *min_index = row;
                            *min_leaving_column = leaving_column;
                        }
                        *min_ratio = (*min_ratio).min(ratio);
                    } else if ratio < *min_ratio {
                        *min_index = row;
                        *min_ratio = ratio;
                        *min_leaving_column = leaving_column;
                    }
                } else {
                    min_values = Some((row, ratio, leaving_column))
                }
            }
        }

        min_values.map(|(min_index, _, _)| min_index)
    }

    /// Brings a column into the basis with a Gauss-Jordan pivot.
    ///
    /// The pivot row is divided by the pivot element, after which the pivot column is eliminated
    /// from all other rows, the objective row included.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Entering variable, not yet in the basis.
    /// * `pivot_row_index`: Row of the leaving variable, as found by the ratio test.
    ///
    /// # Return value
    ///
    /// A description of the basis change.
    pub fn bring_into_basis(&mut self, pivot_column_index: usize, pivot_row_index: usize) -> Pivot<F> {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let element = self.rows[pivot_row_index][pivot_column_index];
        debug_assert!(element > self.epsilon);

        let pivot_row = self.rows[pivot_row_index].iter()
            .map(|&value| value / element)
            .collect::<Vec<_>>();
        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == pivot_row_index {
                continue;
            }

            let factor = row[pivot_column_index];
            if !factor.is_zero() {
                for (value, &pivot_value) in row.iter_mut().zip(&pivot_row) {
                    *value = *value - factor * pivot_value;
                }
            }
        }
        self.rows[pivot_row_index] = pivot_row;

        let leaving = std::mem::replace(&mut self.basis[pivot_row_index], pivot_column_index);

        Pivot { row: pivot_row_index, column: pivot_column_index, element, leaving }
    }

    /// Values of the decision variables in the current basic feasible solution.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut solution = vec![F::zero(); self.nr_decision_variables];
        for (row, &column) in self.basis.iter().enumerate() {
            if column < self.nr_decision_variables {
                solution[column] = self.constraint_value(row);
            }
        }

        solution
    }

    /// Objective function value of the current basic feasible solution.
    pub fn objective_function_value(&self) -> F {
        self.rows[self.nr_rows()][self.nr_columns()]
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Each basic column should be a unit vector with its one in the row it is basic for, also in the
/// objective row. All constraint values should be nonnegative. Only used for debug purposes.
pub fn is_in_basic_feasible_solution_state<F: OrderedField>(tableau: &Tableau<F>) -> bool {
    let tolerance = tableau.epsilon().sqrt();

    let unit_columns = tableau.basis().iter().enumerate().all(|(basis_row, &column)| {
        (0..=tableau.nr_rows()).all(|row| {
            let expected = if row == basis_row { F::one() } else { F::zero() };
            (tableau.get(row, column) - expected).abs() <= tolerance
        })
    });
    let feasible = (0..tableau.nr_rows())
        .all(|row| tableau.constraint_value(row) >= -tolerance);

    unit_columns && feasible
}

impl<F: OrderedField> fmt::Display for Tableau<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = VariableNames::new(self.nr_decision_variables, self.nr_rows());
        write_table(f, &names, &self.rows, &self.basis)
    }
}
