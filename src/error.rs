//! Failure kinds produced by the evaluator and the unit converter.
//!
//! The public `evaluate` and `convert` functions collapse every variant into
//! "no result". The tagged form is kept for logging and tests.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("unexpected character `{0}`")]
    Lex(char),

    #[error("malformed expression: {0}")]
    Parse(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("result is not a finite number")]
    NonFinite,

    #[error("input is not a unit conversion")]
    NoPatternMatch,

    #[error("no conversion from `{from}` to `{to}`")]
    UnknownUnitPair { from: String, to: String },
}

impl CalcError {
    pub(crate) fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
