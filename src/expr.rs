//! Expression validation pipeline
//!
//! Raw text goes through two stages:
//! 1. The [`lexer`] scans the input into a flat token sequence with 1-based
//!    line/column positions. Lexical problems (unterminated constructs,
//!    unknown symbols, malformed numbers) become error tokens embedded in
//!    the sequence rather than failures.
//! 2. The [`parser`] first rejects any sequence containing error tokens,
//!    then validates grammar structure in a single descent with one-token
//!    lookahead. The first error ends the pass.
//!
//! [`processor::validate`] wires the two stages together; [`messages`] is a
//! thin adapter that renders structured errors as the user-facing Russian
//! strings printed by the command-line driver.

pub mod error;
pub mod lexer;
pub mod messages;
pub mod parser;
pub mod processor;
