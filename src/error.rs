use std::fmt;

use crate::syntax::TokenKind;

/// What the parser was looking for when it gave up.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) enum Expected {
    Token(TokenKind),
    /// A number, a unary operator or an opening parenthesis.
    Factor,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Token(kind) => write!(f, "{kind}"),
            Self::Factor => write!(f, "a number, `+`, `-` or `(`"),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
pub(crate) enum ErrorKind {
    #[error("Unexpected character `{ch}` at offset {offset}")]
    LexError { ch: char, offset: usize },
    #[error("Expected {expected}, found {found} at offset {offset}")]
    SyntaxError {
        expected: Expected,
        found: TokenKind,
        offset: usize,
    },
    #[error("Division by zero")]
    DivisionByZero,
}

impl ErrorKind {
    /// Lex and syntax errors reject the input itself, everything else fails
    /// while evaluating an otherwise valid expression.
    pub fn is_syntax(&self) -> bool {
        matches!(self, Self::LexError { .. } | Self::SyntaxError { .. })
    }
}

pub(crate) type PResult<T> = Result<T, ErrorKind>;
