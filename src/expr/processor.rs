//! Validation entry point and token-dump formatting
//!
//! [`validate`] wires the tokenizer and the recognizer together and is the
//! one function most callers need. The rest of the module backs the
//! command-line driver's `tokens` subcommand: an output format parsed from
//! a format string, and a renderer producing either one `Token(...)` line
//! per token or a JSON dump.

use std::fmt;

use crate::expr::error::ParseError;
use crate::expr::lexer::tokenize;
use crate::expr::lexer::tokens::Token;
use crate::expr::parser::Parser;

/// Validate a complete expression: tokenize, then recognize.
///
/// ```
/// use exprcheck::expr::processor::validate;
///
/// assert!(validate("NOT a[7] OR 15 * (r - br MOD 5) AND TRUE").is_ok());
/// assert!(validate("a OR AND b").is_err());
/// ```
pub fn validate(input: &str) -> Result<(), ParseError> {
    let tokens = tokenize(input)?;
    Parser::new(&tokens).parse()
}

/// Output format for token dumps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
}

impl OutputFormat {
    /// Parse a format string as given on the command line.
    pub fn from_string(format: &str) -> Result<Self, ProcessingError> {
        match format {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            other => Err(ProcessingError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors from the processing layer itself, as opposed to validation
/// errors reported through [`ParseError`].
#[derive(Debug)]
pub enum ProcessingError {
    UnknownFormat(String),
    Serialize(serde_json::Error),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::UnknownFormat(format) => {
                write!(
                    f,
                    "unknown output format '{format}' (expected 'simple' or 'json')"
                )
            }
            ProcessingError::Serialize(err) => {
                write!(f, "failed to serialize tokens: {err}")
            }
        }
    }
}

impl std::error::Error for ProcessingError {}

/// Render a token sequence in the requested format.
pub fn render_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => {
            serde_json::to_string_pretty(tokens).map_err(ProcessingError::Serialize)
        }
    }
}
