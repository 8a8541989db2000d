//! # Representation of optimal solutions
//!
//! Once a linear program is solved, the solution vector is paired with the names of the decision
//! variables. This struct would typically be used to print the optimal solution for the user.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data::number_types::traits::OrderedField;

/// Value of the objective function and of every decision variable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution<F> {
    /// Value of the objective function for this solution.
    objective_value: F,
    /// (variable name, solution value) tuples for all decision variables, in index order.
    solution_values: Vec<(String, F)>,
}

impl<F: OrderedField> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(objective_value: F, solution_values: Vec<(String, F)>) -> Self {
        Self { objective_value, solution_values }
    }

    /// Value of the objective function.
    pub fn objective_value(&self) -> F {
        self.objective_value
    }

    /// All named values, in variable index order.
    pub fn values(&self) -> &[(String, F)] {
        &self.solution_values
    }

    /// Look up the value of a variable by name.
    pub fn get(&self, name: &str) -> Option<F> {
        self.solution_values.iter()
            .find(|(variable, _)| variable == name)
            .map(|&(_, value)| value)
    }
}

impl<F: OrderedField> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self.solution_values.iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0)
            .max("Z".len());

        writeln!(f, "{0:>width$} = {1}", "Z", self.objective_value, width = width)?;
        for (name, value) in &self.solution_values {
            writeln!(f, "{0:>width$} = {1}", name, value, width = width)?;
        }

        Ok(())
    }
}
