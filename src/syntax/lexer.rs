use std::{iter::Peekable, str::CharIndices};

use crate::error::{ErrorKind, PResult};

use super::token::{Token, TokenKind};

pub(crate) struct Lexer<'src> {
    src: &'src str,
    chars: Peekable<CharIndices<'src>>,
    finished: bool,
}

impl<'src> Iterator for Lexer<'src> {
    type Item = PResult<Token>;

    /// Yields every token up to and including a single `Eof`, or up to the
    /// first error.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if !matches!(token, Ok(t) if t.kind != TokenKind::Eof) {
            self.finished = true;
        }
        Some(token)
    }
}

impl<'src> Lexer<'src> {
    pub fn new(src: &'src str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
            finished: false,
        }
    }

    /// Once the input is exhausted this keeps returning `Eof`.
    pub fn next_token(&mut self) -> PResult<Token> {
        while let Some((off, c)) = self.chars.next() {
            let kind = match c {
                '+' => TokenKind::Plus,
                '-' => TokenKind::Minus,
                '*' => TokenKind::Mul,
                '/' => TokenKind::Div,
                '(' => TokenKind::LParen,
                ')' => TokenKind::RParen,
                c if c.is_whitespace() => continue,
                c if c.is_ascii_digit() || c == '.' => return self.read_number(off, c),
                c => return Err(ErrorKind::LexError { ch: c, offset: off }),
            };
            log::trace!("{kind:?} at {off}");
            return Ok(Token::new(kind, off));
        }

        Ok(Token::new(TokenKind::Eof, self.src.len()))
    }

    #[inline]
    fn bump(&mut self) {
        let _ = self.chars.next();
    }

    fn slice_until<P>(&mut self, from_off: usize, mut predicate: P) -> &'src str
    where
        P: FnMut(char) -> bool,
    {
        while let Some(&(off, c)) = self.chars.peek() {
            if predicate(c) {
                return &self.src[from_off..off];
            }
            self.bump();
        }
        &self.src[from_off..self.src.len()]
    }

    fn read_number(&mut self, from_off: usize, first: char) -> PResult<Token> {
        let mut seen_dot = first == '.';
        let s = self.slice_until(from_off, |c| {
            if c == '.' && !seen_dot {
                seen_dot = true;
                return false;
            }
            !c.is_ascii_digit()
        });

        // only a bare `.` can fail here
        let value = s.parse::<f64>().map_err(|_| ErrorKind::LexError {
            ch: first,
            offset: from_off,
        })?;
        log::trace!("Number({value}) at {from_off}");
        Ok(Token::number(value, from_off))
    }
}

pub(crate) fn tokenize(src: &str) -> PResult<Vec<Token>> {
    Lexer::new(src).collect()
}
