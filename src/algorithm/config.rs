//! # Solver settings
//!
//! Settings can be built in code, or read from JSON where every field is optional:
//!
//! ```json
//! { "max_iterations": 500, "epsilon": 1e-9, "pivot_rule": "bland" }
//! ```
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which pivot rule the primal Simplex method uses.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PivotRuleKind {
    /// Most negative relative cost, ratio ties to the first row. May cycle on degenerate problems.
    #[default]
    Dantzig,
    /// First negative relative cost, ratio ties to the lowest leaving index. Never cycles.
    Bland,
}

impl FromStr for PivotRuleKind {
    type Err = String;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text.trim().to_lowercase().as_str() {
            "dantzig" => Ok(PivotRuleKind::Dantzig),
            "bland" => Ok(PivotRuleKind::Bland),
            other => Err(format!("unknown pivot rule \"{}\", expected \"dantzig\" or \"bland\"", other)),
        }
    }
}

impl fmt::Display for PivotRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            PivotRuleKind::Dantzig => "dantzig",
            PivotRuleKind::Bland => "bland",
        })
    }
}

/// Parameters of a solve.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Maximum number of pivots before giving up with `SolveResult::NonConvergent`.
    pub max_iterations: usize,
    /// Values within this distance of zero are treated as zero in pivoting decisions, and
    /// slightly negative right hand sides are snapped to zero.
    pub epsilon: f64,
    /// How the entering and leaving variables are chosen.
    pub pivot_rule: PivotRuleKind,
}

impl SolverConfig {
    /// Pivot limit when nothing else is configured.
    pub const DEFAULT_MAX_ITERATIONS: usize = 100;
    /// Tolerance when nothing else is configured.
    pub const DEFAULT_EPSILON: f64 = 1e-10;

    /// Change the pivot limit.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Change the tolerance.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Change the pivot rule.
    pub fn with_pivot_rule(mut self, pivot_rule: PivotRuleKind) -> Self {
        self.pivot_rule = pivot_rule;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            epsilon: Self::DEFAULT_EPSILON,
            pivot_rule: PivotRuleKind::default(),
        }
    }
}
