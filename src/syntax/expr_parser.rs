use crate::error::{ErrorKind, Expected, PResult};

use super::{
    expr::{BinaryOperator, UnaryOperator},
    token::TokenKind,
    ExprParser, Expression, Parser,
};

impl<'src> Parser<'src> {
    /// Left-associative fold of `operand (op operand)*` over `ops`.
    fn parse_left_assoc<F>(
        &mut self,
        ops: &[BinaryOperator],
        mut operand: F,
    ) -> PResult<Box<Expression>>
    where
        F: FnMut(&mut Self) -> PResult<Box<Expression>>,
    {
        let mut lhs = operand(self)?;

        while let Some(op) = BinaryOperator::from_token(self.current.kind) {
            if !ops.contains(&op) {
                break;
            }
            self.consume(self.current.kind)?;
            let rhs = operand(self)?;

            lhs = Box::new(Expression::Binary { lhs, op, rhs });
        }

        Ok(lhs)
    }
}

impl<'src> ExprParser for Parser<'src> {
    fn parse_expr(&mut self) -> PResult<Box<Expression>> {
        use BinaryOperator::{Add, Sub};
        self.parse_left_assoc(&[Add, Sub], Self::parse_term)
    }

    fn parse_term(&mut self) -> PResult<Box<Expression>> {
        use BinaryOperator::{Div, Mul};
        self.parse_left_assoc(&[Mul, Div], Self::parse_factor)
    }

    fn parse_factor(&mut self) -> PResult<Box<Expression>> {
        let token = self.current;

        if let Some(op) = UnaryOperator::from_token(token.kind) {
            self.consume(token.kind)?;
            return self.parse_unary_expr(op);
        }

        match (token.kind, token.value) {
            (TokenKind::Number, Some(value)) => {
                self.consume(TokenKind::Number)?;
                Ok(Box::new(Expression::Literal(value)))
            }
            (TokenKind::LParen, _) => {
                self.consume(TokenKind::LParen)?;
                self.parse_grouping_expr()
            }
            (other, _) => Err(ErrorKind::SyntaxError {
                expected: Expected::Factor,
                found: other,
                offset: token.offset,
            }),
        }
    }

    fn parse_grouping_expr(&mut self) -> PResult<Box<Expression>> {
        let expression = self.parse_expr()?;
        self.consume(TokenKind::RParen)?;
        Ok(expression)
    }

    fn parse_unary_expr(&mut self, op: UnaryOperator) -> PResult<Box<Expression>> {
        let operand = self.parse_factor()?;
        Ok(Box::new(Expression::Unary { op, operand }))
    }
}
