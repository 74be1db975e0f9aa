//! Recursive-descent recognizer for the expression grammar
//!
//! Validates token order against the grammar below without building any
//! tree. Precedence runs lowest to highest, one function per level:
//!
//! ```text
//! expression     := logical_or
//! logical_or     := logical_and (OR logical_and)*
//! logical_and    := equality (AND equality)*
//! equality       := relational ((EQ|NEQ) relational)*
//! relational     := additive ((LT|GT|LE|GE) additive)*
//! additive       := multiplicative ((PLUS|MINUS) multiplicative)*
//! multiplicative := unary ((MULT|DIV|MOD) unary)*
//! unary          := (MINUS|NOT) unary | primary
//! primary        := INTEGER | FLOAT | EXPONENT | STRING
//!                 | IDENTIFIER (call_suffix | index_suffix)?
//!                 | LPAREN expression RPAREN
//!                 | TRUE | FALSE
//! call_suffix    := LPAREN (expression (COMMA expression)*)? RPAREN
//! index_suffix   := LBRACKET expression RBRACKET index_suffix?
//! ```
//!
//! Binary levels loop on their own tier, so they are left-associative;
//! `unary` is right-recursive. Only a bare identifier takes a suffix, one
//! suffix kind per occurrence: index suffixes chain (`a[1][2]`), call
//! results take nothing further.

use crate::expr::error::{Expected, ParseError};
use crate::expr::lexer::tokens::{Token, TokenKind};

/// Grammar validator over a token sequence. A single forward cursor with
/// one-token lookahead and no recovery: the first error ends the pass.
/// Each instance is used for exactly one `parse` call.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    eof: Token,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            eof: Token::new(TokenKind::Eof, String::new(), 0, 0),
        }
    }

    /// Validate the whole sequence.
    ///
    /// Phase 1 scans for embedded error tokens; the first one found (in
    /// sequence order) wins over any grammar diagnosis. Phase 2 recognizes
    /// a single top-level expression and then requires end of input.
    pub fn parse(&mut self) -> Result<(), ParseError> {
        for token in self.tokens {
            if let (TokenKind::Error, Some(code)) = (token.kind, token.error_code) {
                return Err(ParseError::Lexical {
                    code,
                    value: token.value.clone(),
                    line: token.line,
                    column: token.column,
                });
            }
        }

        self.parse_expression()?;

        let current = self.current();
        if current.kind != TokenKind::Eof {
            return Err(ParseError::TrailingInput {
                found: current.kind,
                line: current.line,
                column: current.column,
            });
        }
        Ok(())
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.eof)
    }

    fn matches(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn consume(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        let current = self.current();
        if current.kind == expected {
            self.advance();
            Ok(())
        } else {
            Err(ParseError::UnexpectedToken {
                expected: Expected::Kind(expected),
                found: current.kind,
                line: current.line,
                column: current.column,
            })
        }
    }

    fn parse_expression(&mut self) -> Result<(), ParseError> {
        self.parse_logical_or()
    }

    fn parse_logical_or(&mut self) -> Result<(), ParseError> {
        self.parse_logical_and()?;
        while self.matches(TokenKind::Or) {
            self.advance();
            self.parse_logical_and()?;
        }
        Ok(())
    }

    fn parse_logical_and(&mut self) -> Result<(), ParseError> {
        self.parse_equality()?;
        while self.matches(TokenKind::And) {
            self.advance();
            self.parse_equality()?;
        }
        Ok(())
    }

    fn parse_equality(&mut self) -> Result<(), ParseError> {
        self.parse_relational()?;
        while self.matches(TokenKind::Eq) || self.matches(TokenKind::Neq) {
            self.advance();
            self.parse_relational()?;
        }
        Ok(())
    }

    fn parse_relational(&mut self) -> Result<(), ParseError> {
        self.parse_additive()?;
        while self.matches(TokenKind::Lt)
            || self.matches(TokenKind::Gt)
            || self.matches(TokenKind::Le)
            || self.matches(TokenKind::Ge)
        {
            self.advance();
            self.parse_additive()?;
        }
        Ok(())
    }

    fn parse_additive(&mut self) -> Result<(), ParseError> {
        self.parse_multiplicative()?;
        while self.matches(TokenKind::Plus) || self.matches(TokenKind::Minus) {
            self.advance();
            self.parse_multiplicative()?;
        }
        Ok(())
    }

    fn parse_multiplicative(&mut self) -> Result<(), ParseError> {
        self.parse_unary()?;
        while self.matches(TokenKind::Mult)
            || self.matches(TokenKind::Div)
            || self.matches(TokenKind::Mod)
        {
            self.advance();
            self.parse_unary()?;
        }
        Ok(())
    }

    fn parse_unary(&mut self) -> Result<(), ParseError> {
        if self.matches(TokenKind::Minus) || self.matches(TokenKind::Not) {
            self.advance();
            self.parse_unary()
        } else {
            self.parse_primary()
        }
    }

    fn parse_primary(&mut self) -> Result<(), ParseError> {
        match self.current().kind {
            TokenKind::Integer | TokenKind::Float | TokenKind::Exponent | TokenKind::String => {
                self.advance();
                Ok(())
            }
            TokenKind::Identifier => {
                self.advance();
                if self.matches(TokenKind::LParen) {
                    self.parse_call_suffix()
                } else if self.matches(TokenKind::LBracket) {
                    self.parse_index_suffix()
                } else {
                    Ok(())
                }
            }
            TokenKind::LParen => {
                self.consume(TokenKind::LParen)?;
                self.parse_expression()?;
                self.consume(TokenKind::RParen)
            }
            TokenKind::True | TokenKind::False => {
                self.advance();
                Ok(())
            }
            TokenKind::Eof => {
                let current = self.current();
                Err(ParseError::UnexpectedEndOfInput {
                    line: current.line,
                    column: current.column,
                })
            }
            found => {
                let current = self.current();
                Err(ParseError::UnexpectedToken {
                    expected: Expected::Operand,
                    found,
                    line: current.line,
                    column: current.column,
                })
            }
        }
    }

    /// `(expr, expr, ...)` directly after an identifier. The call result
    /// takes no further suffixes.
    fn parse_call_suffix(&mut self) -> Result<(), ParseError> {
        self.consume(TokenKind::LParen)?;
        if !self.matches(TokenKind::RParen) {
            self.parse_expression()?;
            while self.matches(TokenKind::Comma) {
                self.advance();
                self.parse_expression()?;
            }
        }
        self.consume(TokenKind::RParen)
    }

    /// `[expr]` directly after an identifier; bracket suffixes chain.
    fn parse_index_suffix(&mut self) -> Result<(), ParseError> {
        self.consume(TokenKind::LBracket)?;
        self.parse_expression()?;
        self.consume(TokenKind::RBracket)?;
        if self.matches(TokenKind::LBracket) {
            self.parse_index_suffix()
        } else {
            Ok(())
        }
    }
}
