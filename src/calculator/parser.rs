//! Recursive-descent evaluator over the token stream.
//!
//! Grammar:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := number | '(' expression ')'
//! ```
//!
//! Values are computed while parsing; no syntax tree is built.

use super::lexer::Token;
use crate::error::CalcError;

/// Nesting limit for parenthesised groups.
const MAX_DEPTH: usize = 128;

/// Evaluate a complete token stream.
///
/// Every token must be consumed, so `(2)(3)` or `1 2` are rejected.
pub fn parse(tokens: &[Token]) -> Result<f64, CalcError> {
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };

    let value = parser.expression()?;

    if let Some(token) = parser.peek() {
        return Err(CalcError::parse(format!("unexpected token {:?}", token)));
    }

    Ok(value)
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;

        while let Some(op @ (Token::Plus | Token::Minus)) = self.peek() {
            self.advance();
            let rhs = self.term()?;
            value = if op == Token::Plus {
                value + rhs
            } else {
                value - rhs
            };
        }

        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;

        while let Some(op @ (Token::Star | Token::Slash)) = self.peek() {
            self.advance();
            let rhs = self.factor()?;
            if op == Token::Star {
                value *= rhs;
            } else {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                value /= rhs;
            }
        }

        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, CalcError> {
        match self.peek() {
            Some(Token::Number(value)) => {
                self.advance();
                Ok(value)
            }
            Some(Token::LParen) => {
                if self.depth >= MAX_DEPTH {
                    return Err(CalcError::parse("parentheses nested too deeply"));
                }
                self.advance();
                self.depth += 1;
                let value = self.expression()?;
                self.depth -= 1;

                if self.peek() != Some(Token::RParen) {
                    return Err(CalcError::parse("missing closing parenthesis"));
                }
                self.advance();
                Ok(value)
            }
            Some(token) => Err(CalcError::parse(format!(
                "expected a number, found {:?}",
                token
            ))),
            None => Err(CalcError::parse("unexpected end of expression")),
        }
    }
}
