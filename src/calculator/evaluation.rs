//! Arithmetic evaluation.
//!
//! Normalises raw input, handles percentage phrasing, then hands the
//! expression to the lexer and parser. Failures are tagged internally and
//! collapsed to `None` by [`evaluate`].

use super::format::{FormatStyle, format_result};
use super::lexer::tokenize;
use super::parser::parse;
use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Sample inputs offered by the calculator.
pub const CALCULATOR_EXAMPLES: &[&str] = &[
    "2 + 2",
    "15% of 80",
    "5 × 3",
    "100 ÷ 4",
    "25% of 200",
    "3 × (4 + 2)",
    "50 + 50",
    "8 × 7",
    "120 - 45",
    "10% of 150",
];

lazy_static! {
    /// `<number>%of<number>` on whitespace-stripped input.
    static ref PERCENT_OF: Regex = Regex::new(
        r"^(\d*\.?\d+)%of(\d*\.?\d+)$"
    ).unwrap();

    /// A number immediately followed by `%`.
    static ref INLINE_PERCENT: Regex = Regex::new(
        r"([0-9.]+)%"
    ).unwrap();
}

/// Lowercase, strip whitespace and translate display operators.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '×' | 'x' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}

/// Evaluate an arithmetic expression and format it for display.
///
/// Returns `None` for any invalid input.
pub fn evaluate(input: &str) -> Option<String> {
    match try_evaluate(input) {
        Ok(value) => Some(format_result(value, FormatStyle::Arithmetic)),
        Err(err) => {
            debug!(input, error = %err, "calculation failed");
            None
        }
    }
}

/// Evaluate an arithmetic expression, keeping the failure kind.
pub fn try_evaluate(input: &str) -> Result<f64, CalcError> {
    let cleaned = normalize(input);

    if let Some(value) = percentage_of(&cleaned) {
        return finite(value);
    }

    if let Some(ch) = cleaned.chars().find(|&c| !is_expression_char(c)) {
        return Err(CalcError::Lex(ch));
    }

    let rewritten = INLINE_PERCENT.replace_all(&cleaned, "(${1}/100)");
    let tokens = tokenize(&rewritten)?;
    finite(parse(&tokens)?)
}

/// `15%of80` => 12
fn percentage_of(cleaned: &str) -> Option<f64> {
    let caps = PERCENT_OF.captures(cleaned)?;
    let percentage: f64 = caps[1].parse().ok()?;
    let total: f64 = caps[2].parse().ok()?;
    Some((percentage / 100.0) * total)
}

fn is_expression_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%')
}

fn finite(value: f64) -> Result<f64, CalcError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFinite)
    }
}
