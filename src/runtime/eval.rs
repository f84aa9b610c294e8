use crate::{
    error::{ErrorKind, PResult},
    syntax::{self, BinaryOperator, Expression, UnaryOperator},
};

impl Expression {
    pub fn evaluate(&self) -> PResult<f64> {
        match self {
            Expression::Literal(v) => Ok(*v),
            Expression::Unary { op, operand } => {
                let value = operand.evaluate()?;
                match op {
                    UnaryOperator::Negate => Ok(-value),
                    UnaryOperator::Identity => Ok(value),
                }
            }
            Expression::Binary { lhs, op, rhs } => {
                let lhs = lhs.evaluate()?;
                let rhs = rhs.evaluate()?;
                match op {
                    BinaryOperator::Add => Ok(lhs + rhs),
                    BinaryOperator::Sub => Ok(lhs - rhs),
                    BinaryOperator::Mul => Ok(lhs * rhs),
                    BinaryOperator::Div => {
                        if rhs == 0.0 {
                            return Err(ErrorKind::DivisionByZero);
                        }
                        Ok(lhs / rhs)
                    }
                }
            }
        }
    }
}

pub(crate) struct Interpreter {
    strict: bool,
}

impl Interpreter {
    /// Rejects input with tokens left over after a complete expression.
    pub fn new() -> Self {
        Self { strict: true }
    }

    /// Ignores tokens left over after a complete expression.
    pub fn lenient() -> Self {
        Self { strict: false }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn parse(&self, src: &str) -> PResult<Box<Expression>> {
        if self.strict {
            syntax::parse_complete(src)
        } else {
            syntax::parse(src)
        }
    }

    pub fn eval(&self, src: &str) -> PResult<f64> {
        let expr = self.parse(src)?;
        log::debug!("{src:?} => {expr}");
        expr.evaluate()
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod test {
    use super::Interpreter;
    use crate::{
        error::{ErrorKind, Expected},
        syntax::{parse, TokenKind},
    };

    fn eval(src: &str) -> f64 {
        Interpreter::new().eval(src).unwrap()
    }

    #[test]
    fn eval_1() {
        assert_eq!(eval("4 + 10 * -1"), -6.0);
    }

    #[test]
    fn eval_2() {
        assert_eq!(eval("(4 + 10) * -1"), -14.0);
    }

    #[test]
    fn eval_3() {
        assert_eq!(eval("-48 + 9"), -39.0);
    }

    #[test]
    fn eval_4() {
        assert_eq!(eval("-8 + 5 * (13 - 1) * -1"), -68.0);
    }

    #[test]
    fn eval_5() {
        assert_eq!(eval("(-8 + 5) * (13 - 1) * -1"), 36.0);
    }

    #[test]
    fn precedence() {
        assert_eq!(eval("2 + 3 * 4"), 14.0);
        assert_eq!(eval("(2 + 3) * 4"), 20.0);
    }

    #[test]
    fn left_associative() {
        assert_eq!(eval("10 - 2 - 3"), 5.0);
        assert_eq!(eval("48 / 4 / 2"), 6.0);
    }

    #[test]
    fn unary_operators() {
        assert_eq!(eval("-3 + 5"), 2.0);
        assert_eq!(eval("--3"), 3.0);
        assert_eq!(eval("+5"), 5.0);
        assert_eq!(eval("-(2 * +3)"), -6.0);
    }

    #[test]
    fn division_is_floating_point() {
        assert_eq!(eval("7 / 2"), 3.5);
        assert_eq!(eval("6 / 3"), 2.0);
        assert_eq!(eval("1.5 * .5"), 0.75);
    }

    #[test]
    fn division_by_zero() {
        let expr = parse("5 / 0").unwrap();
        assert_eq!(expr.evaluate(), Err(ErrorKind::DivisionByZero));

        assert_eq!(
            Interpreter::new().eval("1 / -0"),
            Err(ErrorKind::DivisionByZero)
        );
        assert_eq!(
            Interpreter::new().eval("1 / (2 - 2)"),
            Err(ErrorKind::DivisionByZero)
        );
    }

    #[test]
    fn division_by_zero_left_operand_first() {
        // the left operand fails before the right one is looked at
        assert_eq!(
            Interpreter::new().eval("(1 / 0) / (2 / 0)"),
            Err(ErrorKind::DivisionByZero)
        );
        assert_eq!(eval("0 / 5"), 0.0);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let expr = parse("(1 + 2) * 3 / 4").unwrap();
        let first = expr.evaluate().unwrap();
        let second = expr.evaluate().unwrap();

        assert_eq!(first, 2.25);
        assert_eq!(first, second);
    }

    #[test]
    fn strict_rejects_trailing_tokens() {
        assert_eq!(
            Interpreter::new().eval("2+2)))"),
            Err(ErrorKind::SyntaxError {
                expected: Expected::Token(TokenKind::Eof),
                found: TokenKind::RParen,
                offset: 3,
            })
        );
        assert_eq!(
            Interpreter::new().eval("1 2"),
            Err(ErrorKind::SyntaxError {
                expected: Expected::Token(TokenKind::Eof),
                found: TokenKind::Number,
                offset: 2,
            })
        );
    }

    #[test]
    fn lenient_ignores_trailing_tokens() {
        let interpreter = Interpreter::lenient();
        assert!(!interpreter.is_strict());
        assert_eq!(interpreter.eval("2+2)))"), Ok(4.0));
        assert_eq!(interpreter.eval("1 2"), Ok(1.0));
    }

    #[test]
    fn lenient_still_reports_lex_errors_in_lookahead() {
        // the lookahead token after `2` is lexed eagerly
        assert_eq!(
            Interpreter::lenient().eval("2 $"),
            Err(ErrorKind::LexError { ch: '$', offset: 2 })
        );
    }

    #[test]
    fn errors() {
        assert_eq!(
            Interpreter::new().eval("3 & 2"),
            Err(ErrorKind::LexError { ch: '&', offset: 2 })
        );
        assert!(matches!(
            Interpreter::new().eval("(2 + 3"),
            Err(ErrorKind::SyntaxError {
                expected: Expected::Token(TokenKind::RParen),
                ..
            })
        ));
    }
}
