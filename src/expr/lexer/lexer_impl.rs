//! Scanning loop for the expression tokenizer
//!
//! A single forward pass over the input. At every position the scanner
//! tries, in order: single-line comment, block comment, string literal,
//! unknown symbol, and finally the ordered pattern table from
//! [`tokens::TOKEN_SPEC`]. Comments and whitespace are consumed silently;
//! everything else either emits a token or an embedded error token.
//!
//! Unterminated strings and block comments absorb the rest of the input
//! into one error token, so the scan always terminates with exactly one
//! EOF token positioned immediately after the last consumed character.

use crate::expr::error::ParseError;
use crate::expr::lexer::tokens::{LexErrorCode, Token, TokenKind, TOKEN_SPEC};

/// Scan cursor: byte offset plus the 1-based line/column of that offset.
/// A small owned value threaded through the matching functions; `advance`
/// returns the successor state instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScanState {
    offset: usize,
    line: usize,
    column: usize,
}

impl ScanState {
    fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Advance past `text`, which must be the input slice starting at
    /// `self.offset`. A newline bumps the line counter and resets the
    /// column; every other character advances the column by one.
    fn advance(self, text: &str) -> Self {
        let mut line = self.line;
        let mut column = self.column;
        for ch in text.chars() {
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self {
            offset: self.offset + text.len(),
            line,
            column,
        }
    }
}

/// Tokenize a complete input string.
///
/// Lexical problems do not fail the call; they come back as error tokens
/// embedded in the sequence. The `Err` arm is reserved for the defensive
/// case where no scanner rule matches at a position (reachable only for a
/// bare `.` not followed by digits), and reports that symbol's position.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut state = ScanState::start();

    while state.offset < input.len() {
        let rest = &input[state.offset..];

        if let Some(next) = skip_line_comment(rest, state) {
            state = next;
            continue;
        }
        if let Some(next) = scan_block_comment(rest, state, &mut tokens) {
            state = next;
            continue;
        }
        if let Some(next) = scan_string(rest, state, &mut tokens) {
            state = next;
            continue;
        }
        if let Some(next) = scan_unknown_symbol(rest, state, &mut tokens) {
            state = next;
            continue;
        }

        match match_table(rest, state, &mut tokens) {
            Some(next) => state = next,
            None => {
                let symbol: String = rest.chars().take(1).collect();
                return Err(ParseError::InternalLex {
                    symbol,
                    line: state.line,
                    column: state.column,
                });
            }
        }
    }

    tokens.push(Token::new(
        TokenKind::Eof,
        String::new(),
        state.line,
        state.column,
    ));
    Ok(tokens)
}

/// `//` up to (not including) the next newline. The newline itself is left
/// for the next iteration, which consumes it as ordinary whitespace; the
/// line counter therefore does not move here.
fn skip_line_comment(rest: &str, state: ScanState) -> Option<ScanState> {
    if !rest.starts_with("//") {
        return None;
    }
    let comment = match rest.find('\n') {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(state.advance(comment))
}

/// `/* ... */`, newline-aware. An unterminated comment becomes one error
/// token holding everything from the opening `/*` to the end of input.
fn scan_block_comment(rest: &str, state: ScanState, tokens: &mut Vec<Token>) -> Option<ScanState> {
    if !rest.starts_with("/*") {
        return None;
    }
    match rest[2..].find("*/") {
        Some(idx) => Some(state.advance(&rest[..2 + idx + 2])),
        None => {
            tokens.push(Token::error(
                rest.to_string(),
                state.line,
                state.column,
                LexErrorCode::UnclosedComment,
            ));
            Some(state.advance(rest))
        }
    }
}

/// A double-quoted string literal. The closing quote must not be directly
/// preceded by a backslash. The emitted value includes both quotes; an
/// unterminated literal becomes one error token holding the rest of the
/// input.
fn scan_string(rest: &str, state: ScanState, tokens: &mut Vec<Token>) -> Option<ScanState> {
    if !rest.starts_with('"') {
        return None;
    }

    let mut prev = '"';
    for (idx, ch) in rest.char_indices().skip(1) {
        if ch == '"' && prev != '\\' {
            let literal = &rest[..idx + 1];
            tokens.push(Token::new(
                TokenKind::String,
                literal.to_string(),
                state.line,
                state.column,
            ));
            return Some(state.advance(literal));
        }
        prev = ch;
    }

    tokens.push(Token::error(
        rest.to_string(),
        state.line,
        state.column,
        LexErrorCode::UnclosedString,
    ));
    Some(state.advance(rest))
}

/// Characters the scanner understands. Anything else is reported as an
/// unknown-symbol error token of exactly one character, after which the
/// scan continues.
fn is_accepted(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch.is_ascii_whitespace()
        || matches!(
            ch,
            '_' | '.'
                | '/'
                | '*'
                | '-'
                | '+'
                | '='
                | '<'
                | '>'
                | '!'
                | '('
                | ')'
                | '{'
                | '}'
                | '['
                | ']'
                | ';'
                | ','
                | '"'
                | '\x0B'
        )
}

fn scan_unknown_symbol(rest: &str, state: ScanState, tokens: &mut Vec<Token>) -> Option<ScanState> {
    let ch = rest.chars().next()?;
    if is_accepted(ch) {
        return None;
    }
    let symbol = &rest[..ch.len_utf8()];
    tokens.push(Token::error(
        symbol.to_string(),
        state.line,
        state.column,
        LexErrorCode::UnknownSymbol,
    ));
    Some(state.advance(symbol))
}

/// Try the ordered pattern table at the current offset. Whitespace matches
/// are consumed without emitting a token; integer/float matches are
/// re-checked for a trailing second fractional part.
fn match_table(rest: &str, state: ScanState, tokens: &mut Vec<Token>) -> Option<ScanState> {
    for (kind, pattern) in TOKEN_SPEC.iter() {
        let matched = match pattern.find(rest) {
            Some(m) => m.as_str(),
            None => continue,
        };

        if matches!(kind, TokenKind::Integer | TokenKind::Float) {
            if let Some(next) = scan_malformed_number(rest, matched, state, tokens) {
                return Some(next);
            }
        }

        if *kind != TokenKind::Whitespace {
            tokens.push(Token::new(
                *kind,
                matched.to_string(),
                state.line,
                state.column,
            ));
        }
        return Some(state.advance(matched));
    }
    None
}

/// A `.` plus digits directly after an integer or float match turns the
/// whole run into a single malformed-number error token (`1.2.3`).
fn scan_malformed_number(
    rest: &str,
    matched: &str,
    state: ScanState,
    tokens: &mut Vec<Token>,
) -> Option<ScanState> {
    let after = rest[matched.len()..].strip_prefix('.')?;
    let digits = after.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let value = &rest[..matched.len() + 1 + digits];
    tokens.push(Token::error(
        value.to_string(),
        state.line,
        state.column,
        LexErrorCode::InvalidNumberFormat,
    ));
    Some(state.advance(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input)
            .expect("input should tokenize")
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    fn values(input: &str) -> Vec<String> {
        tokenize(input)
            .expect("input should tokenize")
            .iter()
            .map(|t| t.value.clone())
            .collect()
    }

    #[test]
    fn scans_a_simple_expression() {
        assert_eq!(
            kinds("1 + 2"),
            vec![
                TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::Integer,
                TokenKind::Eof
            ]
        );
        assert_eq!(values("1 + 2"), vec!["1", "+", "2", ""]);
    }

    #[test]
    fn empty_input_yields_only_eof() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
    }

    #[test]
    fn tracks_position_across_lines() {
        let tokens = tokenize("a\n  b").unwrap();
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!((tokens[1].line, tokens[1].column), (2, 3));
        // EOF sits immediately after the last consumed character
        assert_eq!((tokens[2].line, tokens[2].column), (2, 4));
    }

    #[test]
    fn line_comment_is_consumed_without_a_token() {
        assert_eq!(
            kinds("1 + 2 // trailing"),
            vec![
                TokenKind::Integer,
                TokenKind::Plus,
                TokenKind::Integer,
                TokenKind::Eof
            ]
        );
    }

    #[test]
    fn line_comment_leaves_the_newline_to_whitespace() {
        let tokens = tokenize("// c\n7").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!((tokens[0].line, tokens[0].column), (2, 1));
    }

    #[test]
    fn block_comment_advances_lines() {
        let tokens = tokenize("/* x\ny */ 5").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Integer);
        assert_eq!((tokens[0].line, tokens[0].column), (2, 6));
    }

    #[test]
    fn block_comment_at_end_of_input() {
        assert_eq!(kinds("/**/"), vec![TokenKind::Eof]);
        assert_eq!(kinds("1 /* c */"), vec![TokenKind::Integer, TokenKind::Eof]);
    }

    #[test]
    fn unterminated_block_comment_absorbs_the_rest() {
        let tokens = tokenize("1 /* c").unwrap();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].error_code, Some(LexErrorCode::UnclosedComment));
        assert_eq!(tokens[1].value, "/* c");
        assert_eq!((tokens[1].line, tokens[1].column), (1, 3));
        assert_eq!(tokens[2].kind, TokenKind::Eof);
        assert_eq!(tokens[2].column, 7);
    }

    #[test]
    fn slash_star_slash_is_unterminated() {
        let tokens = tokenize("/*/").unwrap();
        assert_eq!(tokens[0].error_code, Some(LexErrorCode::UnclosedComment));
        assert_eq!(tokens[0].value, "/*/");
    }

    #[test]
    fn string_literal_keeps_its_quotes() {
        let tokens = tokenize("\"hello\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].value, "\"hello\"");
    }

    #[test]
    fn string_literal_honors_escaped_quotes() {
        let tokens = tokenize("\"a\\\"b\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].value, "\"a\\\"b\"");
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn string_literal_spans_lines() {
        let tokens = tokenize("\"a\nb\" c").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!((tokens[1].line, tokens[1].column), (2, 4));
    }

    #[test]
    fn unterminated_string_absorbs_the_rest() {
        let tokens = tokenize("\"abc").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Error);
        assert_eq!(tokens[0].error_code, Some(LexErrorCode::UnclosedString));
        assert_eq!(tokens[0].value, "\"abc");
        assert_eq!((tokens[0].line, tokens[0].column), (1, 1));
        assert_eq!(tokens[1].kind, TokenKind::Eof);
    }

    #[test]
    fn unknown_symbol_is_recoverable() {
        let tokens = tokenize("a @ b").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Error);
        assert_eq!(tokens[1].error_code, Some(LexErrorCode::UnknownSymbol));
        assert_eq!(tokens[1].value, "@");
        assert_eq!(tokens[1].column, 3);
        // scanning continues past the bad character
        assert_eq!(tokens[2].kind, TokenKind::Identifier);
        assert_eq!(tokens[2].value, "b");
    }

    #[test]
    fn malformed_number_becomes_one_error_token() {
        let tokens = tokenize("1.2.3").unwrap();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].error_code, Some(LexErrorCode::InvalidNumberFormat));
        assert_eq!(tokens[0].value, "1.2.3");
    }

    #[test]
    fn malformed_number_consumes_only_the_first_extra_part() {
        let tokens = tokenize("1.2.3.4").unwrap();
        assert_eq!(tokens[0].error_code, Some(LexErrorCode::InvalidNumberFormat));
        assert_eq!(tokens[0].value, "1.2.3");
        assert_eq!(tokens[1].kind, TokenKind::Float);
        assert_eq!(tokens[1].value, ".4");
    }

    #[test]
    fn double_dot_number_is_malformed() {
        let tokens = tokenize("1..2").unwrap();
        assert_eq!(tokens[0].error_code, Some(LexErrorCode::InvalidNumberFormat));
        assert_eq!(tokens[0].value, "1..2");
    }

    #[test]
    fn exponent_is_not_subject_to_the_fractional_check() {
        assert_eq!(
            kinds("1e5.3"),
            vec![TokenKind::Exponent, TokenKind::Float, TokenKind::Eof]
        );
        assert_eq!(values("1e5.3"), vec!["1e5", ".3", ""]);
    }

    #[test]
    fn numeric_literal_forms() {
        assert_eq!(kinds("15"), vec![TokenKind::Integer, TokenKind::Eof]);
        assert_eq!(kinds("12.5"), vec![TokenKind::Float, TokenKind::Eof]);
        assert_eq!(kinds("5."), vec![TokenKind::Float, TokenKind::Eof]);
        assert_eq!(kinds(".5"), vec![TokenKind::Float, TokenKind::Eof]);
        assert_eq!(kinds("1.5e-3"), vec![TokenKind::Exponent, TokenKind::Eof]);
        assert_eq!(kinds("2E+10"), vec![TokenKind::Exponent, TokenKind::Eof]);
    }

    #[test]
    fn dotted_identifier_is_a_single_token() {
        assert_eq!(values("c.d"), vec!["c.d", ""]);
        assert_eq!(kinds("c.d"), vec![TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn keywords_need_word_boundaries() {
        assert_eq!(kinds("TRUEx"), vec![TokenKind::Identifier, TokenKind::Eof]);
        assert_eq!(
            kinds("NOT x"),
            vec![TokenKind::Not, TokenKind::Identifier, TokenKind::Eof]
        );
        assert_eq!(kinds("return"), vec![TokenKind::Return, TokenKind::Eof]);
    }

    #[test]
    fn bare_dot_is_a_hard_failure() {
        let err = tokenize(".").unwrap_err();
        assert_eq!(
            err,
            ParseError::InternalLex {
                symbol: ".".to_string(),
                line: 1,
                column: 1,
            }
        );
    }

    #[test]
    fn operators_and_brackets() {
        assert_eq!(
            kinds("a <= b != c"),
            vec![
                TokenKind::Identifier,
                TokenKind::Le,
                TokenKind::Identifier,
                TokenKind::Neq,
                TokenKind::Identifier,
                TokenKind::Eof
            ]
        );
        assert_eq!(
            kinds("{[(;,)]}"),
            vec![
                TokenKind::LBrace,
                TokenKind::LBracket,
                TokenKind::LParen,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::RParen,
                TokenKind::RBracket,
                TokenKind::RBrace,
                TokenKind::Eof
            ]
        );
    }
}
