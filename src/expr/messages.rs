//! Russian user-facing messages
//!
//! The validation core reports structured errors; this adapter renders them
//! into the Russian strings the command-line driver prints. Callers that
//! want different presentation work from [`ParseError`] directly and never
//! need this module.

use crate::expr::error::{Expected, ParseError};
use crate::expr::lexer::tokens::LexErrorCode;

/// Success line printed by the driver.
pub const VALID_MESSAGE: &str = "Код корректен!";

/// Render a validation error as its user-facing Russian message.
pub fn russian(error: &ParseError) -> String {
    match error {
        ParseError::Lexical {
            code,
            value,
            line,
            column,
        } => {
            let what = match code {
                LexErrorCode::UnclosedString => format!("Незакрытая строка: '{value}'."),
                LexErrorCode::UnclosedComment => format!("Незакрытый комментарий: '{value}'."),
                LexErrorCode::UnknownSymbol => format!("Неизвестный символ: '{value}'."),
                LexErrorCode::InvalidNumberFormat => {
                    format!("Некорректный формат числа: '{value}'.")
                }
            };
            format!("Ошибка на строке {line}, позиция {column}: {what}")
        }
        ParseError::UnexpectedToken {
            expected: Expected::Kind(kind),
            found,
            line,
            column,
        } => {
            format!(
                "Ожидался токен типа {kind}, но получен {found} на строке {line}, позиция {column}"
            )
        }
        ParseError::UnexpectedToken {
            expected: Expected::Operand,
            line,
            column,
            ..
        }
        | ParseError::UnexpectedEndOfInput { line, column } => {
            format!(
                "Ожидалось число, строка, идентификатор, TRUE, FALSE или выражение в скобках на строке {line}, позиция {column}"
            )
        }
        ParseError::TrailingInput {
            found,
            line,
            column,
        } => {
            format!(
                "Ожидался конец входных данных, но получен {found} на строке {line}, позиция {column}"
            )
        }
        ParseError::InternalLex {
            symbol,
            line,
            column,
        } => {
            format!("Неизвестный символ: '{symbol}' на строке {line}, позиция {column}")
        }
    }
}
