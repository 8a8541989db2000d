//! # Linear expressions
//!
//! Reading algebraic text such as `3x1 + 2x2 - x4` into a dense vector of coefficients. The
//! grammar, whitespace ignored:
//!
//! ```text
//! expression := term (sign term)*
//! term       := [sign] number ['*'] variable | [sign] variable | [sign] number
//! variable   := 'x' digits
//! ```
//!
//! A variable without a number has coefficient 1 (or -1 after a minus sign). Terms without a
//! variable add up to the constant of the expression.
use std::fmt;
use std::str::FromStr;

use num_traits::Num;

use crate::data::linear_program::standard_form::write_expression;
use crate::data::number_types::traits::OrderedField;
use crate::io::error::ParseError;
use crate::io::expression::token::{Sign, Token, TokenKind, tokenize};

mod token;

/// Largest variable subscript that is accepted.
///
/// Coefficient vectors are dense, so a stray `x999999999` would otherwise allocate gigabytes.
pub const MAXIMUM_SUBSCRIPT: usize = 10_000;

/// A linear expression over the variables `x1..xn`, plus a constant.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearExpression<F> {
    /// Coefficient of `x(j + 1)` at index `j`. The length is the highest subscript that was read.
    coefficients: Vec<F>,
    constant: F,
}

impl<F: OrderedField> LinearExpression<F> {
    /// Coefficient of `x(j + 1)` at index `j`.
    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    /// Sum of all terms without a variable.
    pub fn constant(&self) -> F {
        self.constant
    }

    /// The highest subscript that appeared.
    pub fn nr_variables(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether any variable has a coefficient different from zero.
    pub fn has_nonzero_coefficient(&self) -> bool {
        self.coefficients.iter().any(|coefficient| !coefficient.is_zero())
    }

    /// Take the coefficients, extended with zeros up to length `n`.
    pub fn into_padded_coefficients(mut self, n: usize) -> Vec<F> {
        debug_assert!(n >= self.coefficients.len());

        self.coefficients.resize(n, F::zero());
        self.coefficients
    }
}

impl<F: OrderedField> FromStr for LinearExpression<F> {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse(text)
    }
}

impl<F: OrderedField> fmt::Display for LinearExpression<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_expression(f, &self.coefficients)?;
        if self.constant < F::zero() {
            write!(f, " - {}", -self.constant)
        } else if self.constant > F::zero() {
            write!(f, " + {}", self.constant)
        } else {
            Ok(())
        }
    }
}

/// Parse a linear expression that should contain at least one variable term.
///
/// # Errors
///
/// When the text doesn't follow the grammar, or when it contains no variable term at all (such a
/// constant can't be represented as decision variable coefficients).
pub fn parse<F: OrderedField>(text: &str) -> Result<LinearExpression<F>, ParseError> {
    let expression = parse_allowing_constant(text)?;

    if expression.coefficients.is_empty() {
        Err(ParseError::NoVariable(text.to_string()))
    } else {
        Ok(expression)
    }
}

/// Parse a linear expression that may consist of constants only, like the right hand side `10` of
/// a constraint.
///
/// # Errors
///
/// When the text is empty or doesn't follow the grammar.
pub fn parse_allowing_constant<F: OrderedField>(text: &str) -> Result<LinearExpression<F>, ParseError> {
    let tokens = tokenize(text)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut coefficients = Vec::new();
    let mut constant = F::zero();

    let mut remaining = &tokens[..];
    let mut is_first = true;
    while !remaining.is_empty() {
        let (term, rest) = read_term(text, remaining, is_first)?;
        let value = term.value::<F>(text)?;
        match term.variable {
            Some(index) => {
                if coefficients.len() <= index {
                    coefficients.resize(index + 1, F::zero());
                }
                // Repeated variables add up, `x1 + x1` is `2x1`.
                coefficients[index] = coefficients[index] + value;
            },
            None => constant = constant + value,
        }

        remaining = rest;
        is_first = false;
    }

    Ok(LinearExpression { coefficients, constant })
}

/// A single term, still in textual form.
#[derive(Debug)]
struct Term<'a> {
    sign: Sign,
    number: Option<&'a str>,
    /// Zero based variable index.
    variable: Option<usize>,
}

impl Term<'_> {
    /// Evaluate the signed coefficient (or constant) of this term.
    fn value<F: OrderedField>(&self, text: &str) -> Result<F, ParseError> {
        let magnitude = match self.number {
            Some(literal) => <F as Num>::from_str_radix(literal, 10)
                .map_err(|_| ParseError::InvalidNumber {
                    literal: literal.to_string(),
                    text: text.to_string(),
                })?,
            None => F::one(),
        };

        Ok(match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        })
    }
}

/// Read one term from the front of the token stream.
///
/// # Arguments
///
/// * `text`: The complete text, for error messages.
/// * `tokens`: Remaining tokens, not empty.
/// * `is_first`: Only the first term may omit its sign.
///
/// # Return value
///
/// The term and the tokens following it.
fn read_term<'t, 'a>(
    text: &str,
    tokens: &'t [Token<'a>],
    is_first: bool,
) -> Result<(Term<'a>, &'t [Token<'a>]), ParseError> {
    let (sign, sign_position, tokens) = match tokens {
        [Token { kind: TokenKind::Sign(sign), position }, rest @ ..] => (*sign, Some(*position), rest),
        [Token { position, .. }, ..] if !is_first => return Err(ParseError::MissingSign {
            position: *position,
            text: text.to_string(),
        }),
        _ => (Sign::Positive, None, tokens),
    };

    let dangling = |position: usize| ParseError::DanglingSign { position, text: text.to_string() };
    let unexpected_times = |position: usize| ParseError::UnexpectedCharacter {
        character: '*',
        position,
        text: text.to_string(),
    };

    match tokens {
        [
            Token { kind: TokenKind::Number(literal), .. },
            Token { kind: TokenKind::Times, position },
            rest @ ..
        ] => match rest {
            [Token { kind: TokenKind::Variable(subscript), .. }, rest @ ..] => {
                let variable = Some(variable_index(text, subscript)?);
                Ok((Term { sign, number: Some(*literal), variable }, rest))
            },
            _ => Err(unexpected_times(*position)),
        },
        [
            Token { kind: TokenKind::Number(literal), .. },
            Token { kind: TokenKind::Variable(subscript), .. },
            rest @ ..
        ] => {
            let variable = Some(variable_index(text, subscript)?);
            Ok((Term { sign, number: Some(*literal), variable }, rest))
        },
        [Token { kind: TokenKind::Number(literal), .. }, rest @ ..] => {
            Ok((Term { sign, number: Some(*literal), variable: None }, rest))
        },
        [Token { kind: TokenKind::Variable(subscript), .. }, rest @ ..] => {
            let variable = Some(variable_index(text, subscript)?);
            Ok((Term { sign, number: None, variable }, rest))
        },
        [Token { kind: TokenKind::Times, position }, ..] => match sign_position {
            Some(sign_position) => Err(dangling(sign_position)),
            None => Err(unexpected_times(*position)),
        },
        [Token { kind: TokenKind::Sign(_), position }, ..] => Err(dangling(sign_position.unwrap_or(*position))),
        [] => Err(dangling(sign_position.unwrap_or(0))),
    }
}

/// Convert the digits after an `x` into a zero based index.
fn variable_index(text: &str, subscript: &str) -> Result<usize, ParseError> {
    subscript.parse::<usize>()
        .ok()
        .filter(|&number| (1..=MAXIMUM_SUBSCRIPT).contains(&number))
        .map(|number| number - 1)
        .ok_or_else(|| ParseError::InvalidSubscript {
            subscript: subscript.to_string(),
            maximum: MAXIMUM_SUBSCRIPT,
            text: text.to_string(),
        })
}
