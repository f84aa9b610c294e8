use crate::{
    error::{ErrorKind, Expected, PResult},
    syntax::{
        lexer::Lexer,
        token::{Token, TokenKind},
        ExprParser, Expression,
    },
};

pub(crate) struct Parser<'src> {
    lexer: Lexer<'src>,
    pub(super) current: Token,
}

impl<'src> Parser<'src> {
    pub fn new(src: &'src str) -> PResult<Self> {
        Self::from_lexer(Lexer::new(src))
    }

    pub fn from_lexer(mut lexer: Lexer<'src>) -> PResult<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parses a single expression. Tokens following a complete expression
    /// are left unconsumed, see [`Parser::parse_complete`].
    pub fn parse(&mut self) -> PResult<Box<Expression>> {
        self.parse_expr()
    }

    /// Like [`Parser::parse`], but the whole input has to be consumed.
    pub fn parse_complete(&mut self) -> PResult<Box<Expression>> {
        let expr = self.parse()?;
        self.consume(TokenKind::Eof)?;
        Ok(expr)
    }

    pub(super) fn consume(&mut self, expected: TokenKind) -> PResult<Token> {
        if self.current.kind != expected {
            return Err(ErrorKind::SyntaxError {
                expected: Expected::Token(expected),
                found: self.current.kind,
                offset: self.current.offset,
            });
        }

        let token = self.current;
        self.current = self.lexer.next_token()?;
        log::trace!("consumed {token}, next {}", self.current);
        Ok(token)
    }
}

pub(crate) fn parse(src: &str) -> PResult<Box<Expression>> {
    Parser::new(src)?.parse()
}

pub(crate) fn parse_complete(src: &str) -> PResult<Box<Expression>> {
    Parser::new(src)?.parse_complete()
}
