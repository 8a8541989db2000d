//! # Pivot rules
//!
//! Strategies for moving from basis to basis in the primal Simplex method.
use crate::algorithm::simplex::tableau::{RatioTieBreak, Tableau};
use crate::data::number_types::traits::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior: it chooses the entering column, and decides
/// how ties in the ratio test for the leaving row are broken.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// Index of a column with a relative cost below `-epsilon` together with that cost, or `None`
    /// if there is no such column (and the tableau is optimal).
    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;

    /// Row selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// `None` if the column has no positive entry.
    fn select_primal_pivot_row<F: OrderedField>(&self, tableau: &Tableau<F>, column: usize) -> Option<usize> {
        tableau.select_primal_pivot_row(column, RatioTieBreak::FirstRow)
    }
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with choosing the leaving variable of lowest index among the ratio test ties, this is
/// Bland's rule, which never cycles.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .find(|&(_, cost)| cost < -tableau.epsilon())
    }

    fn select_primal_pivot_row<F: OrderedField>(&self, tableau: &Tableau<F>, column: usize) -> Option<usize> {
        tableau.select_primal_pivot_row(column, RatioTieBreak::LowestLeavingIndex)
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// This is Dantzig's rule. Ties are broken by the lowest column index. It may cycle on degenerate
/// problems.
pub struct SteepestDescentAlongVariable;
impl PivotRule for SteepestDescentAlongVariable {
    fn new() -> Self {
        Self
    }

    fn select_primal_pivot_column<F: OrderedField>(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let mut smallest = None;
        for (j, cost) in (0..tableau.nr_columns())
            .filter(|&column| !tableau.is_in_basis(column))
            .map(|column| (column, tableau.relative_cost(column)))
            .filter(|&(_, cost)| cost < -tableau.epsilon()) {
            if let Some((existing_j, existing_cost)) = smallest.as_mut() {
                if cost < *existing_cost {
                    *existing_j = j;
                    *existing_cost = cost;
                }
            } else { smallest = Some((j, cost)) }
        }

        smallest
    }
}
