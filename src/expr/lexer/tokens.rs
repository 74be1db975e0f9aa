//! Token definitions for the expression language
//!
//! This module defines the closed set of token kinds, the token record
//! produced by the scanner, and the ordered pattern table the scanner
//! drives. The table is a priority list: keywords and two-character
//! operators come before single-character operators, which come before
//! literals, so the first entry whose anchored pattern matches at the
//! current offset wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// All token kinds the scanner can produce.
///
/// Statement keywords (`return`, `if`, `let`, ...) are recognized lexically
/// even though the expression grammar never accepts them; they surface as
/// trailing-input or operand errors during recognition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    // Statement keywords
    Return,
    If,
    Else,
    Let,
    Const,
    Var,

    // Logical keywords
    And,
    Or,
    False,
    True,
    Mod,
    Not,

    // Operators
    Eq,
    Neq,
    Le,
    Ge,
    Lt,
    Gt,
    Plus,
    Minus,
    Mult,
    Div,
    Assign,

    // Brackets
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,

    // Punctuation
    Comma,
    Semicolon,

    // Literals
    Exponent,
    Float,
    Integer,
    String,
    Identifier,

    // Structural
    Whitespace,
    Eof,
    Error,
}

impl TokenKind {
    /// Canonical uppercase name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Return => "RETURN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Let => "LET",
            TokenKind::Const => "CONST",
            TokenKind::Var => "VAR",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::False => "FALSE",
            TokenKind::True => "TRUE",
            TokenKind::Mod => "MOD",
            TokenKind::Not => "NOT",
            TokenKind::Eq => "EQ",
            TokenKind::Neq => "NEQ",
            TokenKind::Le => "LE",
            TokenKind::Ge => "GE",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mult => "MULT",
            TokenKind::Div => "DIV",
            TokenKind::Assign => "ASSIGN",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::LBracket => "LBRACKET",
            TokenKind::RBracket => "RBRACKET",
            TokenKind::Comma => "COMMA",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Exponent => "EXPONENT",
            TokenKind::Float => "FLOAT",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Eof => "EOF",
            TokenKind::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a lexical problem carried by an error token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LexErrorCode {
    UnclosedString,
    UnclosedComment,
    UnknownSymbol,
    InvalidNumberFormat,
}

impl LexErrorCode {
    /// Short English description used in diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            LexErrorCode::UnclosedString => "unterminated string literal",
            LexErrorCode::UnclosedComment => "unterminated block comment",
            LexErrorCode::UnknownSymbol => "unknown symbol",
            LexErrorCode::InvalidNumberFormat => "malformed number literal",
        }
    }
}

impl fmt::Display for LexErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// One lexical unit: kind, matched text, and the 1-based position of its
/// first character. Tokens are created once by the scanner and never
/// mutated; the recognizer only reads them through a forward cursor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
    pub column: usize,
    /// Present only on [`TokenKind::Error`] tokens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<LexErrorCode>,
}

impl Token {
    pub fn new(kind: TokenKind, value: String, line: usize, column: usize) -> Self {
        Self {
            kind,
            value,
            line,
            column,
            error_code: None,
        }
    }

    /// An error token wrapping the offending text.
    pub fn error(value: String, line: usize, column: usize, code: LexErrorCode) -> Self {
        Self {
            kind: TokenKind::Error,
            value,
            line,
            column,
            error_code: Some(code),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_code {
            Some(code) => write!(
                f,
                "Token(kind: {}, value: {}, error: {}, line: {}, column: {})",
                self.kind, self.value, code, self.line, self.column
            ),
            None => write!(
                f,
                "Token(kind: {}, value: {}, line: {}, column: {})",
                self.kind, self.value, self.line, self.column
            ),
        }
    }
}

/// Ordered recognition table. Entries are tried top to bottom and each
/// pattern is compiled anchored (`\A`), so it either matches at the current
/// offset or not at all. Order is load-bearing: `==` must come before `=`,
/// `<=` before `<`, exponents before floats before integers, and every
/// word-like entry carries `\b` boundaries so keywords never swallow the
/// head of a longer identifier.
///
/// The STRING entry is a fallback; string literals are normally consumed by
/// the scanner's dedicated handler before the table runs.
pub static TOKEN_SPEC: Lazy<Vec<(TokenKind, Regex)>> = Lazy::new(|| {
    [
        (TokenKind::Return, r"\breturn\b"),
        (TokenKind::If, r"\bif\b"),
        (TokenKind::Else, r"\belse\b"),
        (TokenKind::Let, r"\blet\b"),
        (TokenKind::Const, r"\bconst\b"),
        (TokenKind::Var, r"\bvar\b"),
        (TokenKind::And, r"\bAND\b"),
        (TokenKind::Or, r"\bOR\b"),
        (TokenKind::False, r"\bFALSE\b"),
        (TokenKind::True, r"\bTRUE\b"),
        (TokenKind::Mod, r"\bMOD\b"),
        (TokenKind::Not, r"\bNOT\b"),
        (TokenKind::Eq, r"=="),
        (TokenKind::Neq, r"!="),
        (TokenKind::Le, r"<="),
        (TokenKind::Ge, r">="),
        (TokenKind::Lt, r"<"),
        (TokenKind::Gt, r">"),
        (TokenKind::Plus, r"\+"),
        (TokenKind::Minus, r"-"),
        (TokenKind::Mult, r"\*"),
        (TokenKind::Div, r"/"),
        (TokenKind::Assign, r"="),
        (TokenKind::LParen, r"\("),
        (TokenKind::RParen, r"\)"),
        (TokenKind::LBrace, r"\{"),
        (TokenKind::RBrace, r"\}"),
        (TokenKind::LBracket, r"\["),
        (TokenKind::RBracket, r"\]"),
        (TokenKind::Comma, r","),
        (
            TokenKind::Exponent,
            r"(?i:\d+(?:\.\d*)?e[+-]?\d+|\.\d+e[+-]?\d+|\d*\.e[+-]?\d+)",
        ),
        (TokenKind::Float, r"\d+\.\d*|\.\d+"),
        (TokenKind::Integer, r"\d+"),
        (TokenKind::String, r#""(?:\\.|[^"\\])*""#),
        (
            TokenKind::Identifier,
            r"[a-zA-Z_][a-zA-Z0-9_]*(?:\.[a-zA-Z_][a-zA-Z0-9_]*)*",
        ),
        (TokenKind::Semicolon, r";"),
        (TokenKind::Whitespace, r"[ \t\r\n\x0B\x0C]+"),
    ]
    .into_iter()
    .map(|(kind, pattern)| {
        let anchored = Regex::new(&format!(r"\A(?:{pattern})")).unwrap();
        (kind, anchored)
    })
    .collect()
});
