//! Input detection for the calculator feature.
//!
//! Determines whether input looks like a unit conversion request or an
//! arithmetic expression. These are fast pre-checks; the evaluator and
//! converter still decide whether a result exists.

use crate::converter::CONVERSION_PATTERN;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Any character or word that suggests arithmetic.
    static ref ARITHMETIC_HINT: Regex = Regex::new(
        r"(?i)[0-9+\-*×x÷/().%]|of"
    ).unwrap();
}

/// Check if input looks like `<value><unit> (to|in) <unit>`.
pub fn looks_like_conversion(input: &str) -> bool {
    CONVERSION_PATTERN.is_match(input)
}

/// Check if input contains anything that could start an arithmetic expression.
///
/// This is intentionally loose: a single digit or an `x` is enough.
pub fn looks_like_expression(input: &str) -> bool {
    ARITHMETIC_HINT.is_match(input)
}
