//! # Reading constraints
//!
//! A constraint is two linear expressions around a relation, like `2x1 + x2 <= 10` or
//! `x1 >= x2 + 3`. Reading happens in two steps: first everything is moved to a single
//! `a x (relation) b` form, and only once the number of variables of the whole problem is known it
//! is rewritten to a standard form `a x <= b` row.
use crate::data::linear_program::elements::ConstraintType;
use crate::data::linear_program::standard_form::Constraint;
use crate::data::number_types::traits::OrderedField;
use crate::io::error::ParseError;
use crate::io::expression::parse_allowing_constant;

/// A constraint as read from text, with all variables on the left hand side.
#[derive(Clone, Debug, PartialEq)]
pub struct RawConstraint<F> {
    /// Coefficient of `x(j + 1)` at index `j`, length is the highest subscript on either side.
    coefficients: Vec<F>,
    constraint_type: ConstraintType,
    rhs: F,
}

impl<F: OrderedField> RawConstraint<F> {
    /// Coefficients of the left hand side.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Relation between both sides.
    pub fn constraint_type(&self) -> ConstraintType {
        self.constraint_type
    }

    /// The constant right hand side.
    pub fn rhs(&self) -> F {
        self.rhs
    }

    /// The highest variable subscript used.
    pub fn nr_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Rewrite into a `a x <= b` row over exactly `n` variables.
    ///
    /// A `>=` constraint is multiplied by `-1`. An equality is kept as `<=`, the solver can't
    /// enforce the other direction from the slack basis. A right hand side in `[-epsilon, 0)` is
    /// snapped to zero; anything more negative is left as is, for the caller to decide on.
    ///
    /// # Arguments
    ///
    /// * `n`: Number of decision variables of the problem, at least `self.nr_variables()`.
    /// * `epsilon`: Numerical tolerance.
    pub fn into_standard(self, n: usize, epsilon: F) -> Constraint<F> {
        debug_assert!(n >= self.coefficients.len());

        let Self { mut coefficients, constraint_type, rhs } = self;
        coefficients.resize(n, F::zero());

        let (coefficients, rhs) = match constraint_type {
            ConstraintType::Greater => (coefficients.into_iter().map(|value| -value).collect(), -rhs),
            ConstraintType::Less | ConstraintType::Equal => (coefficients, rhs),
        };

        Constraint::new(coefficients, rhs.clamp_negative_zero(epsilon))
    }
}

/// Read a constraint.
///
/// The first relational operator splits the text. Variables may appear on both sides; they are all
/// moved to the left, constants are all moved to the right.
///
/// # Errors
///
/// When there is no relation, when one of the sides doesn't follow the expression grammar or when
/// neither side contains a variable.
pub fn parse_constraint<F: OrderedField>(text: &str) -> Result<RawConstraint<F>, ParseError> {
    let (constraint_type, start, length) = ConstraintType::find_first(text)
        .ok_or_else(|| ParseError::MissingRelation(text.to_string()))?;

    let left = parse_allowing_constant::<F>(&text[..start])?;
    let right = parse_allowing_constant::<F>(&text[(start + length)..])?;
    if left.nr_variables() == 0 && right.nr_variables() == 0 {
        return Err(ParseError::NoVariable(text.to_string()));
    }

    // With a plain number on the right, this leaves the left hand side as it is. Otherwise
    // `a x >= c x + d` becomes `(a - c) x >= d`.
    let n = left.nr_variables().max(right.nr_variables());
    let rhs = right.constant() - left.constant();
    let coefficients = left.into_padded_coefficients(n)
        .into_iter()
        .zip(right.into_padded_coefficients(n))
        .map(|(left, right)| left - right)
        .collect();

    Ok(RawConstraint { coefficients, constraint_type, rhs })
}

/// Whether a line only declares variables to be nonnegative.
///
/// Recognizes `x1 >= 0`, `x1, x2 >= 0` and `x1 >= 0, x2 >= 0`. These bounds are implicit in the
/// standard form and shouldn't become rows of the tableau. A constraint like `x1 + x2 >= 0` is not
/// a declaration and is kept.
pub fn is_non_negativity_declaration(text: &str) -> bool {
    let segments = text.split(',').collect::<Vec<_>>();
    let last = segments.len() - 1;

    segments.iter().enumerate().all(|(i, segment)| match ConstraintType::find_first(segment) {
        Some((ConstraintType::Greater, start, length)) => {
            is_single_variable(&segment[..start]) && is_zero(&segment[(start + length)..])
        },
        Some(_) => false,
        None => i < last && is_single_variable(segment),
    })
}

fn is_single_variable(text: &str) -> bool {
    parse_allowing_constant::<f64>(text).is_ok_and(|expression| {
        let mut nonzero = expression.coefficients().iter().filter(|value| **value != 0_f64);
        expression.constant() == 0_f64
            && nonzero.next().is_some_and(|value| *value > 0_f64)
            && nonzero.next().is_none()
    })
}

fn is_zero(text: &str) -> bool {
    parse_allowing_constant::<f64>(text).is_ok_and(|expression| {
        expression.nr_variables() == 0 && expression.constant() == 0_f64
    })
}
