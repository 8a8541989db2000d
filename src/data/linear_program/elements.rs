//! # Building blocks to describe linear programs.
use std::fmt;

use enum_map::{Enum, EnumMap, enum_map};
use serde::{Deserialize, Serialize};

const EQUAL: &[&str] = &["==", "="];
const GREATER: &[&str] = &[">=", "=>", "≥", ">"];
const LESS: &[&str] = &["<=", "=<", "≤", "<"];

/// A `Constraint` is a type of (in)equality.
///
/// Only the `Less` type survives normalization; the others are rewritten or relaxed into it.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// All textual spellings of each relation.
    ///
    /// Strict inequalities are read as their non-strict counterparts, a linear program can't
    /// express anything else.
    pub fn spellings() -> EnumMap<ConstraintType, &'static [&'static str]> {
        enum_map! {
            ConstraintType::Equal => EQUAL,
            ConstraintType::Greater => GREATER,
            ConstraintType::Less => LESS,
        }
    }

    /// Find the first relation in a piece of text.
    ///
    /// When several spellings start at the same position, the longest one is taken, such that
    /// `<=` is not read as `<` followed by a stray `=`.
    ///
    /// # Return value
    ///
    /// The relation, the byte offset where it starts and the byte length of its spelling.
    pub fn find_first(text: &str) -> Option<(ConstraintType, usize, usize)> {
        let spellings = Self::spellings();

        text.char_indices()
            .map(|(index, _)| index)
            .find_map(|index| {
                let rest = &text[index..];
                spellings.iter()
                    .flat_map(|(relation, options)| options.iter().map(move |s| (relation, *s)))
                    .filter(|(_, spelling)| rest.starts_with(*spelling))
                    .max_by_key(|(_, spelling)| spelling.len())
                    .map(|(relation, spelling)| (relation, index, spelling.len()))
            })
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of optimization.
///
/// Problems that don't name a direction are maximized.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    #[default]
    Maximize,
    Minimize,
}
