//! # Tokens of linear expressions
//!
//! The lexer splits text like `3x1 - 2.5 * x2 + 4` into signs, numbers, multiplication signs and
//! subscripted variables. Whitespace is dropped. Positions are kept for error reporting.
use std::iter::{Enumerate, Peekable};
use std::str::CharIndices;

use crate::io::error::ParseError;

/// Characters accepted as a minus sign.
///
/// The unicode minus appears in typeset problem statements.
const MINUS: [char; 2] = ['-', '−'];

/// Characters accepted as a multiplication sign.
const TIMES: [char; 2] = ['*', '·'];

/// Sign of a term.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Sign {
    Positive,
    Negative,
}

/// The different kinds of tokens, borrowing from the text that was read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum TokenKind<'a> {
    Sign(Sign),
    /// Literal, not yet converted. May be malformed, like `1.2.3`.
    Number(&'a str),
    Times,
    /// The subscript digits of a variable, without the `x`. Can be empty.
    Variable(&'a str),
}

/// A token and the character position where it starts.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub position: usize,
}

/// (character position, (byte offset, character))
type Characters<'a> = Peekable<Enumerate<CharIndices<'a>>>;

/// Split a text into tokens.
///
/// # Errors
///
/// On the first character that can't start or continue a token.
pub(crate) fn tokenize(text: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let mut tokens = Vec::new();
    let mut characters = text.char_indices().enumerate().peekable();

    while let Some((position, (start, character))) = characters.next() {
        let kind = match character {
            c if c.is_whitespace() => continue,
            '+' => TokenKind::Sign(Sign::Positive),
            c if MINUS.contains(&c) => TokenKind::Sign(Sign::Negative),
            c if TIMES.contains(&c) => TokenKind::Times,
            'x' | 'X' => {
                let subscript_start = start + character.len_utf8();
                let end = consume_while(&mut characters, subscript_start, |c| c.is_ascii_digit());
                TokenKind::Variable(&text[subscript_start..end])
            },
            c if c.is_ascii_digit() || c == '.' => {
                let end = consume_while(&mut characters, start + c.len_utf8(), |c| c.is_ascii_digit() || c == '.');
                TokenKind::Number(&text[start..end])
            },
            character => return Err(ParseError::UnexpectedCharacter {
                character,
                position,
                text: text.to_string(),
            }),
        };

        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}

/// Advance over all characters satisfying the predicate.
///
/// # Return value
///
/// Byte offset just after the last character consumed, or `end` if nothing was consumed.
fn consume_while(characters: &mut Characters<'_>, mut end: usize, predicate: impl Fn(char) -> bool) -> usize {
    while let Some(&(_, (byte, character))) = characters.peek() {
        if !predicate(character) {
            break;
        }
        end = byte + character.len_utf8();
        characters.next();
    }

    end
}
