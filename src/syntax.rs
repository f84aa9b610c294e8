mod expr;
mod expr_parser;
mod lexer;
mod parser;
mod token;

pub(crate) use expr::{BinaryOperator, Expression, UnaryOperator};
pub(crate) use lexer::tokenize;
pub(crate) use parser::{parse, parse_complete, Parser};
pub(crate) use token::TokenKind;

use crate::error::PResult;

/// expr   := term ( (`+` | `-`) term )*
/// term   := factor ( (`*` | `/`) factor )*
/// factor := (`+` | `-`) factor | NUMBER | `(` expr `)`
pub(crate) trait ExprParser {
    fn parse_expr(&mut self) -> PResult<Box<Expression>>;
    fn parse_term(&mut self) -> PResult<Box<Expression>>;
    fn parse_factor(&mut self) -> PResult<Box<Expression>>;
    fn parse_grouping_expr(&mut self) -> PResult<Box<Expression>>;
    fn parse_unary_expr(&mut self, op: UnaryOperator) -> PResult<Box<Expression>>;
}
