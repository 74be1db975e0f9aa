//! Tokenizer for the expression language
//!
//! Two cooperating pieces: the ordered recognition table in [`tokens`] and
//! the scanning loop in [`lexer_impl`] that drives it. The loop checks its
//! special cases (comments, strings, unknown symbols) ahead of the table,
//! so the table's STRING entry is normally shadowed.
//!
//! The output sequence covers the whole input in order: whitespace and
//! comments are consumed silently, unterminated constructs become embedded
//! error tokens, and exactly one EOF token closes the sequence at the
//! position just past the last consumed character.

pub mod lexer_impl;
pub mod tokens;

pub use lexer_impl::tokenize;
pub use tokens::{LexErrorCode, Token, TokenKind};
