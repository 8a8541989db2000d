//! # Error reporting for reading and solving of linear programs
//!
//! A collection of enums describing any problems encountered during reading, parsing and
//! formulating. Whether a well formed problem turns out to be unbounded is not an error, see
//! `SolveResult` for that.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A `ParseError` is created when a piece of text doesn't follow the grammar of linear expressions
/// and relations.
///
/// Positions are character (not byte) offsets into the text, counting from zero.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum ParseError {
    /// There is nothing to parse.
    #[error("the expression is empty")]
    Empty,
    /// The expression contains no term like `3x1`, so it can't be represented as a vector of
    /// decision variable coefficients.
    #[error("no variable term (like `3x1`) found in \"{0}\"")]
    NoVariable(String),
    /// A character that is not part of the grammar.
    #[error("unexpected character '{character}' at position {position} in \"{text}\"")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position: usize,
        /// The complete text.
        text: String,
    },
    /// A sign that isn't followed by a term.
    #[error("expected a term after the sign at position {position} in \"{text}\"")]
    DanglingSign {
        /// Position of the sign.
        position: usize,
        /// The complete text.
        text: String,
    },
    /// Two terms that aren't separated by a sign, like `3x1 2x2`.
    #[error("missing '+' or '-' before the term at position {position} in \"{text}\"")]
    MissingSign {
        /// Position where the second term starts.
        position: usize,
        /// The complete text.
        text: String,
    },
    /// A numeric literal that could not be converted.
    #[error("could not read \"{literal}\" as a number in \"{text}\"")]
    InvalidNumber {
        /// The literal as found in the text.
        literal: String,
        /// The complete text.
        text: String,
    },
    /// A variable subscript that is zero, missing or unreasonably large.
    #[error("variable subscripts should be between 1 and {maximum}, found \"x{subscript}\" in \"{text}\"")]
    InvalidSubscript {
        /// The subscript as found in the text.
        subscript: String,
        /// The largest subscript accepted.
        maximum: usize,
        /// The complete text.
        text: String,
    },
    /// A constraint without `<=`, `>=` or `=`.
    #[error("no relational operator (<=, >=, =) found in constraint \"{0}\"")]
    MissingRelation(String),
    /// An objective function text without a recognizable `Z = ...` part.
    #[error("could not find the objective function (`Z = ...`) in \"{0}\"")]
    MissingObjective(String),
}

impl ParseError {
    /// Attach the line that was being read.
    pub fn in_line(self, line: impl Into<String>) -> SolveError {
        SolveError::Parse { line: line.into(), error: self }
    }
}

/// Everything that can go wrong before the Simplex method is started.
///
/// Parser and normalizer failures all end up here, so that a caller only has a single error type
/// to handle at the solve boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// A line of the problem text could not be parsed.
    #[error("could not parse \"{line}\": {error}")]
    Parse {
        /// The line as it was given.
        line: String,
        /// What went wrong.
        #[source]
        error: ParseError,
    },
    /// Only maximization problems are supported.
    #[error("only maximization problems are supported, but the objective reads \"{0}\"")]
    UnsupportedDirection(String),
    /// The problem can be read, but doesn't describe a linear program that can be solved by
    /// starting from the slack basis.
    #[error("the problem is not well formulated: {0}")]
    Formulation(String),
}

/// An `ImportError` is created when a problem file can't be read.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file to read isn't found, or reading was interrupted.
    #[error("could not read problem file {path:?}")]
    IO {
        /// The file that was being read.
        path: PathBuf,
        /// Cause.
        #[source]
        error: io::Error,
    },
    /// The file contains no objective function line.
    #[error("problem file {0:?} does not contain an objective function")]
    NoObjective(PathBuf),
    /// The lines of the file don't describe a problem that can be solved.
    #[error("problem file {path:?} is invalid")]
    Problem {
        /// The file that was read.
        path: PathBuf,
        /// Cause.
        #[source]
        error: SolveError,
    },
}
