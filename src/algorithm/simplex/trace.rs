//! # Recording the progress of the Simplex method
//!
//! Every tableau the method passes through is copied into an `IterationRecord`, such that the
//! complete sequence of pivots can be inspected (or printed) after solving. Records are only ever
//! appended.
use std::fmt;
use std::iter::once;

use serde::{Deserialize, Serialize};

use crate::algorithm::simplex::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;

/// Name of the objective function row.
pub const OBJECTIVE_ROW_NAME: &str = "Z";
/// Name of the right hand side column.
pub const RHS_COLUMN_NAME: &str = "RHS";
const BASIS_HEADER: &str = "Basis";

/// Names of the tableau columns: decision variables `x1..xn` followed by slacks `s1..sm`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct VariableNames {
    nr_decision_variables: usize,
    columns: Vec<String>,
}

impl VariableNames {
    /// Create the names for a problem of `n` decision variables and `m` constraints.
    pub fn new(nr_decision_variables: usize, nr_constraints: usize) -> Self {
        let columns = (1..=nr_decision_variables).map(|j| format!("x{}", j))
            .chain((1..=nr_constraints).map(|i| format!("s{}", i)))
            .collect();

        Self { nr_decision_variables, columns }
    }

    /// Name of a variable column, or of the right hand side column for index `n + m`.
    ///
    /// # Arguments
    ///
    /// * `j`: Column index, in range `0` until `n + m` inclusive.
    pub fn column(&self, j: usize) -> &str {
        debug_assert!(j <= self.columns.len());

        self.columns.get(j).map_or(RHS_COLUMN_NAME, String::as_str)
    }

    /// Names of all variable columns, the right hand side not included.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Names of the decision variables.
    pub fn decision_variables(&self) -> &[String] {
        &self.columns[..self.nr_decision_variables]
    }

    /// Number of decision variables `n`.
    pub fn nr_decision_variables(&self) -> usize {
        self.nr_decision_variables
    }
}

/// A single basis change.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pivot<F> {
    /// Row of the pivot, which is also the row of the leaving variable.
    pub row: usize,
    /// Column of the entering variable.
    pub column: usize,
    /// Value of the pivot element, before the pivot row was divided by it.
    pub element: F,
    /// Column index of the variable that left the basis.
    pub leaving: usize,
}

/// Snapshot of the tableau after an iteration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord<F> {
    iteration: usize,
    /// `m + 1` rows of `n + m + 1` values, objective row last and right hand side column last.
    tableau: Vec<Vec<F>>,
    /// Column index of the basic variable of each constraint row.
    basis: Vec<usize>,
    /// The pivot that produced this tableau, `None` for the initial tableau.
    pivot: Option<Pivot<F>>,
    is_optimal: bool,
}

impl<F: OrderedField> IterationRecord<F> {
    /// Iteration number, `0` being the initial tableau.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// All rows, the objective row last.
    pub fn tableau(&self) -> &[Vec<F>] {
        &self.tableau
    }

    /// Basic variable per constraint row.
    pub fn basis(&self) -> &[usize] {
        &self.basis
    }

    /// The pivot leading to this tableau.
    pub fn pivot(&self) -> Option<&Pivot<F>> {
        self.pivot.as_ref()
    }

    /// Whether this tableau passed the optimality test.
    pub fn is_optimal(&self) -> bool {
        self.is_optimal
    }

    /// Objective function value of the basic solution of this tableau.
    pub fn objective_function_value(&self) -> F {
        let last_row = &self.tableau[self.tableau.len() - 1];
        last_row[last_row.len() - 1]
    }
}

/// All tableaus from the initial one up to the last one computed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trace<F> {
    names: VariableNames,
    records: Vec<IterationRecord<F>>,
}

impl<F: OrderedField> Trace<F> {
    /// Create an empty trace.
    pub(crate) fn new(names: VariableNames) -> Self {
        Self { names, records: Vec::new() }
    }

    /// Append a copy of the current state of the tableau.
    ///
    /// # Arguments
    ///
    /// * `tableau`: State after the pivot.
    /// * `pivot`: The pivot that was just made, or `None` if this is the initial tableau.
    pub(crate) fn record(&mut self, tableau: &Tableau<F>, pivot: Option<Pivot<F>>) {
        debug_assert_eq!(self.records.is_empty(), pivot.is_none());

        self.records.push(IterationRecord {
            iteration: self.records.len(),
            tableau: tableau.rows().to_vec(),
            basis: tableau.basis().to_vec(),
            pivot,
            is_optimal: tableau.is_optimal(),
        });
    }

    /// Names of the tableau columns.
    pub fn names(&self) -> &VariableNames {
        &self.names
    }

    /// All records, in order of iteration.
    pub fn records(&self) -> &[IterationRecord<F>] {
        &self.records
    }

    /// Record of an iteration, if it exists.
    pub fn get(&self, iteration: usize) -> Option<&IterationRecord<F>> {
        self.records.get(iteration)
    }

    /// The last tableau that was computed.
    pub fn last(&self) -> Option<&IterationRecord<F>> {
        self.records.last()
    }

    /// Number of records, which is the number of pivots plus one.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of pivots made.
    pub fn nr_pivots(&self) -> usize {
        self.records.len().saturating_sub(1)
    }
}

impl<'a, F> IntoIterator for &'a Trace<F> {
    type Item = &'a IterationRecord<F>;
    type IntoIter = std::slice::Iter<'a, IterationRecord<F>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Write a tableau as a table.
///
/// Columns are labeled with the variable names and `RHS`, rows with the name of their basic
/// variable and `Z` for the objective row.
///
/// # Arguments
///
/// * `rows`: `m + 1` rows of `n + m + 1` values, the objective row last.
/// * `basis`: Basic variable of each of the `m` constraint rows.
pub fn write_table<F: OrderedField>(
    f: &mut impl fmt::Write,
    names: &VariableNames,
    rows: &[Vec<F>],
    basis: &[usize],
) -> fmt::Result {
    debug_assert_eq!(rows.len(), basis.len() + 1);
    debug_assert!(rows.iter().all(|row| row.len() == names.columns().len() + 1));

    let headers = (0..=names.columns().len()).map(|j| names.column(j)).collect::<Vec<_>>();
    let labels = basis.iter()
        .map(|&j| names.column(j))
        .chain(once(OBJECTIVE_ROW_NAME))
        .collect::<Vec<_>>();
    let cells = rows.iter()
        .map(|row| row.iter().map(|&value| cell(value)).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    let label_width = labels.iter()
        .map(|label| label.len())
        .chain(once(BASIS_HEADER.len()))
        .max()
        .unwrap_or(0);
    let widths = headers.iter()
        .enumerate()
        .map(|(j, header)| cells.iter().map(|row| row[j].len()).chain(once(header.len())).max().unwrap_or(0))
        .collect::<Vec<_>>();

    write!(f, "{:<width$}", BASIS_HEADER, width = label_width)?;
    for (header, width) in headers.iter().zip(&widths) {
        write!(f, " | {:>width$}", header, width = width)?;
    }
    writeln!(f)?;

    write!(f, "{}", "-".repeat(label_width))?;
    for width in &widths {
        write!(f, "-+-{}", "-".repeat(*width))?;
    }
    writeln!(f)?;

    for (label, row) in labels.iter().zip(&cells) {
        write!(f, "{:<width$}", label, width = label_width)?;
        for (value, width) in row.iter().zip(&widths) {
            write!(f, " | {:>width$}", value, width = width)?;
        }
        writeln!(f)?;
    }

    Ok(())
}

/// Four decimals, without a minus sign for values that round to zero.
pub(crate) fn cell<F: OrderedField>(value: F) -> String {
    let text = format!("{:.4}", value);
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|character| character == '0' || character == '.') => rest.to_string(),
        _ => text,
    }
}
