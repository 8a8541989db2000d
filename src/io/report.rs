//! # Rendering the trace of a solve
//!
//! Turns the recorded iterations of the Simplex method into text for a human reader: a header per
//! iteration, the pivot that was made and, optionally, the complete tableau with named rows and
//! columns.
use std::fmt;

use crate::algorithm::simplex::trace::{IterationRecord, Trace, VariableNames, cell, write_table};
use crate::data::number_types::traits::OrderedField;

const RULE_WIDTH: usize = 60;
const OPTIMAL_MARKER: &str = "*** OPTIMAL SOLUTION REACHED ***";

/// Description of a single iteration.
///
/// Created through `iteration_summary`.
pub struct IterationSummary<'a, F> {
    names: &'a VariableNames,
    record: &'a IterationRecord<F>,
    with_tableau: bool,
}

impl<F: OrderedField> fmt::Display for IterationSummary<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", rule)?;
        match self.record.iteration() {
            0 => writeln!(f, "INITIAL TABLEAU")?,
            iteration => writeln!(f, "ITERATION {}", iteration)?,
        }
        writeln!(f, "{}", rule)?;

        if let Some(pivot) = self.record.pivot() {
            writeln!(f)?;
            writeln!(f, "Entering variable: {} (column {})", self.names.column(pivot.column), pivot.column)?;
            writeln!(f, "Leaving variable: {} (row {})", self.names.column(pivot.leaving), pivot.row)?;
            writeln!(f, "Pivot element: {}", cell(pivot.element))?;
        }

        if self.with_tableau {
            writeln!(f)?;
            write_table(f, self.names, self.record.tableau(), self.record.basis())?;
        }

        if self.record.is_optimal() {
            writeln!(f)?;
            writeln!(f, "{}", OPTIMAL_MARKER)?;
        }

        Ok(())
    }
}

/// Describe one iteration of a trace.
///
/// # Arguments
///
/// * `trace`: Result of a solve.
/// * `iteration`: Index of the record, `0` being the initial tableau.
/// * `with_tableau`: Whether to include the complete tableau.
///
/// # Return value
///
/// `None` if the trace has no record with that index.
pub fn iteration_summary<F: OrderedField>(
    trace: &Trace<F>,
    iteration: usize,
    with_tableau: bool,
) -> Option<IterationSummary<'_, F>> {
    trace.get(iteration).map(|record| IterationSummary { names: trace.names(), record, with_tableau })
}

/// Short text describing one iteration: its header, the pivot and whether it is optimal.
///
/// `None` if the trace has no record with that index.
pub fn summary<F: OrderedField>(trace: &Trace<F>, iteration: usize) -> Option<String> {
    iteration_summary(trace, iteration, false).map(|summary| summary.to_string())
}

/// Describe every iteration of a trace, separated by blank lines.
pub fn render_trace<F: OrderedField>(trace: &Trace<F>, with_tableaus: bool) -> String {
    (0..trace.len())
        .filter_map(|iteration| iteration_summary(trace, iteration, with_tableaus))
        .map(|summary| summary.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
