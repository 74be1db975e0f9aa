//! Error types for expression validation
//!
//! Every failed validation reports exactly one error, and every variant
//! carries the 1-based line/column of the offending token plus, where it
//! exists, the offending text. The core never renders user-facing prose;
//! `Display` here is developer-oriented English, and the Russian strings
//! live in the [`messages`](crate::expr::messages) adapter.

use serde::Serialize;
use std::fmt;

use crate::expr::lexer::tokens::{LexErrorCode, TokenKind};

/// What the recognizer was looking for when it stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Expected {
    /// A specific token kind, from a `consume` call.
    Kind(TokenKind),
    /// Anything that can start a primary expression: a number, string,
    /// identifier, TRUE, FALSE or a parenthesized expression.
    Operand,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Kind(kind) => write!(f, "{kind}"),
            Expected::Operand => f.write_str("an operand"),
        }
    }
}

/// The single error a failed validation reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParseError {
    /// An error token produced by the tokenizer; found by the recognizer's
    /// lexical gate before any grammar rule runs.
    Lexical {
        code: LexErrorCode,
        value: String,
        line: usize,
        column: usize,
    },
    /// The current token cannot appear at this point in the grammar.
    UnexpectedToken {
        expected: Expected,
        found: TokenKind,
        line: usize,
        column: usize,
    },
    /// Input ended where an operand was required.
    UnexpectedEndOfInput { line: usize, column: usize },
    /// A complete expression was recognized but tokens remain.
    TrailingInput {
        found: TokenKind,
        line: usize,
        column: usize,
    },
    /// No scanner rule matched at a position. Kept as a hard failure
    /// distinct from embedded error tokens; reachable only for a bare `.`
    /// not followed by digits.
    InternalLex {
        symbol: String,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Lexical { line, .. }
            | ParseError::UnexpectedToken { line, .. }
            | ParseError::UnexpectedEndOfInput { line, .. }
            | ParseError::TrailingInput { line, .. }
            | ParseError::InternalLex { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ParseError::Lexical { column, .. }
            | ParseError::UnexpectedToken { column, .. }
            | ParseError::UnexpectedEndOfInput { column, .. }
            | ParseError::TrailingInput { column, .. }
            | ParseError::InternalLex { column, .. } => *column,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lexical {
                code,
                value,
                line,
                column,
            } => {
                write!(f, "{code} '{value}' at {line}:{column}")
            }
            ParseError::UnexpectedToken {
                expected,
                found,
                line,
                column,
            } => {
                write!(f, "expected {expected}, found {found} at {line}:{column}")
            }
            ParseError::UnexpectedEndOfInput { line, column } => {
                write!(f, "unexpected end of input at {line}:{column}")
            }
            ParseError::TrailingInput {
                found,
                line,
                column,
            } => {
                write!(f, "expected end of input, found {found} at {line}:{column}")
            }
            ParseError::InternalLex {
                symbol,
                line,
                column,
            } => {
                write!(f, "no scanner rule matched '{symbol}' at {line}:{column}")
            }
        }
    }
}

impl std::error::Error for ParseError {}
