//! Error types for expression evaluation

use crate::token::Token;
use thiserror::Error;

/// Result type for expression operations
pub type ExprResult<T> = Result<T, ExprError>;

/// Errors raised while tokenizing or evaluating an expression
///
/// These are the only failure paths of the expression engine; kind
/// mismatches between operands are not errors and resolve to `Nil`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// A character the tokenizer cannot classify
    #[error("unexpected character '{ch}' at byte {position}")]
    UnexpectedChar { ch: char, position: usize },

    /// A string literal with no closing quote
    #[error("unterminated string literal")]
    UnterminatedString,

    /// The parser required one token kind and found another
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: Token },
}
