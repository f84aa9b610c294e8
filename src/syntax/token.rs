use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Number,
    Plus,
    Minus,
    Mul,
    Div,

    LParen,
    RParen,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Number => "number",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Mul => "`*`",
            Self::Div => "`/`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::Eof => "end of input",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Only set for [`TokenKind::Number`].
    pub value: Option<f64>,
    /// Byte offset of the first character in the source.
    pub offset: usize,
}

impl Token {
    pub fn new(kind: TokenKind, offset: usize) -> Self {
        Self {
            kind,
            value: None,
            offset,
        }
    }

    pub fn number(value: f64, offset: usize) -> Self {
        Self {
            kind: TokenKind::Number,
            value: Some(value),
            offset,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(v) => write!(f, "{:?}({v})@{}", self.kind, self.offset),
            None => write!(f, "{:?}@{}", self.kind, self.offset),
        }
    }
}
