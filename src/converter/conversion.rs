//! Matching and applying `<value><unit> to <unit>` requests.

use super::table::{ConversionCategory, find_rule};
use crate::calculator::{FormatStyle, format_result};
use crate::error::CalcError;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

/// Sample inputs offered by the unit converter.
pub const CONVERTER_EXAMPLES: &[&str] = &[
    "5km to miles",
    "100f to c",
    "2.5kg to lbs",
    "30cm to inch",
    "60miles to km",
    "1000g to oz",
];

lazy_static! {
    /// `(value)(from unit) to|in (to unit)`, unanchored.
    pub(crate) static ref CONVERSION_PATTERN: Regex = Regex::new(
        r"(?i)(\d+\.?\d*)\s*([a-zA-Z]+)\s*(?:to|in)\s*([a-zA-Z]+)"
    ).unwrap();
}

/// A successfully applied conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub value: f64,
    /// Source unit as written.
    pub from: String,
    /// Destination unit as written.
    pub to: String,
    pub category: ConversionCategory,
    pub result: f64,
}

impl Conversion {
    /// Formatted result followed by the lowercased destination unit.
    pub fn display(&self) -> String {
        format!(
            "{} {}",
            format_result(self.result, FormatStyle::Conversion),
            self.to.to_lowercase()
        )
    }
}

/// Convert and format, e.g. `"5km to miles"` => `"3.107 miles"`.
///
/// Returns `None` when the input is not a conversion or no rule exists.
pub fn convert(input: &str) -> Option<String> {
    match try_convert(input) {
        Ok(conversion) => Some(conversion.display()),
        Err(err) => {
            debug!(input, error = %err, "conversion failed");
            None
        }
    }
}

/// Convert, keeping the failure kind.
pub fn try_convert(input: &str) -> Result<Conversion, CalcError> {
    let caps = CONVERSION_PATTERN
        .captures(input)
        .ok_or(CalcError::NoPatternMatch)?;

    let value_str = &caps[1];
    let from = &caps[2];
    let to = &caps[3];

    let value: f64 = value_str
        .parse()
        .map_err(|_| CalcError::parse(format!("invalid number `{}`", value_str)))?;

    let (category, rule) = find_rule(from, to).ok_or_else(|| CalcError::UnknownUnitPair {
        from: from.to_string(),
        to: to.to_string(),
    })?;

    let result = rule.apply(value);
    if !result.is_finite() {
        return Err(CalcError::NonFinite);
    }

    Ok(Conversion {
        value,
        from: from.to_string(),
        to: to.to_string(),
        category,
        result,
    })
}
