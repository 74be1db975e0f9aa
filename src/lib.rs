//! # exprcheck
//!
//! A validator for a small expression grammar: arithmetic, relational and
//! logical operators, function calls, indexing, and string/number/boolean
//! literals. The crate does not build a syntax tree and does not evaluate
//! anything; it answers the single question of whether an input conforms to
//! the grammar, and if not, where it first stops conforming.
//!
//! Validation runs as a two-stage pipeline: a hand-written tokenizer that
//! tracks line/column positions and embeds lexical problems as error tokens,
//! followed by a recursive-descent recognizer over the token stream.
//!
//! ## Example
//!
//! ```
//! use exprcheck::expr::processor::validate;
//!
//! assert!(validate("a[5] + b(3, d[2])").is_ok());
//! assert!(validate("a + ").is_err());
//! ```

pub mod expr;
