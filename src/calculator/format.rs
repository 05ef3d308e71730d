//! Display formatting shared by calculator and conversion results.

/// Magnitudes below this are shown in scientific notation.
const SMALL_LIMIT: f64 = 1e-6;

/// Magnitudes at or above this are shown in scientific notation.
const LARGE_LIMIT: f64 = 1e21;

/// Which kind of result is being formatted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatStyle {
    /// Arithmetic results, rounded to 2 decimals.
    Arithmetic,
    /// Unit conversion results, rounded to 3 decimals.
    Conversion,
}

impl FormatStyle {
    fn decimals(self) -> usize {
        match self {
            Self::Arithmetic => 2,
            Self::Conversion => 3,
        }
    }
}

/// Format a finite result for display.
///
/// - Magnitudes below `1e-6` (zero included) or from `1e21` up use
///   scientific notation with 2 fractional digits (`1.00e+21`, `5.00e-7`).
/// - Integral values have no fractional part.
/// - Everything else is rounded per `style` and trailing zeros are trimmed.
pub fn format_result(value: f64, style: FormatStyle) -> String {
    debug_assert!(value.is_finite(), "non-finite values must be filtered out");

    // -0.0 displays like 0.0
    let value = if value == 0.0 { 0.0 } else { value };

    let magnitude = value.abs();
    if !(SMALL_LIMIT..LARGE_LIMIT).contains(&magnitude) {
        return format_exponential(value);
    }

    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }

    let decimals = style.decimals();
    let fixed = format!("{:.*}", decimals, round_half_away(value, decimals));
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');

    // -0.001 rounds to "-0.00"
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Round to `decimals` places with ties going away from zero.
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Scientific notation with an explicit exponent sign.
fn format_exponential(value: f64) -> String {
    let formatted = format!("{:.2e}", value);

    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_have_no_fraction() {
        assert_eq!(format_result(4.0, FormatStyle::Arithmetic), "4");
        assert_eq!(format_result(-12.0, FormatStyle::Arithmetic), "-12");
        assert_eq!(format_result(32.0, FormatStyle::Conversion), "32");
    }

    #[test]
    fn test_zero_is_exponential() {
        assert_eq!(format_result(0.0, FormatStyle::Arithmetic), "0.00e+0");
        assert_eq!(format_result(-0.0, FormatStyle::Arithmetic), "0.00e+0");
        assert_eq!(format_result(0.0, FormatStyle::Conversion), "0.00e+0");
    }

    #[test]
    fn test_small_limit_is_inclusive() {
        assert_eq!(format_result(1e-6, FormatStyle::Arithmetic), "0");
        assert_eq!(format_result(1e-6, FormatStyle::Conversion), "0");
        assert_eq!(format_result(9.99e-7, FormatStyle::Arithmetic), "9.99e-7");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_result(0.125, FormatStyle::Arithmetic), "0.13");
        assert_eq!(format_result(0.625, FormatStyle::Arithmetic), "0.63");
        assert_eq!(format_result(-0.125, FormatStyle::Arithmetic), "-0.13");
        assert_eq!(format_result(0.0625, FormatStyle::Conversion), "0.063");
        assert_eq!(format_result(1.0625, FormatStyle::Conversion), "1.063");
    }

    #[test]
    fn test_large_integers_below_limit() {
        assert_eq!(
            format_result(1e20, FormatStyle::Arithmetic),
            "100000000000000000000"
        );
    }

    #[test]
    fn test_large_magnitudes_are_exponential() {
        assert_eq!(format_result(1e21, FormatStyle::Arithmetic), "1.00e+21");
        assert_eq!(format_result(-2.5e22, FormatStyle::Arithmetic), "-2.50e+22");
    }

    #[test]
    fn test_small_magnitudes_are_exponential() {
        assert_eq!(format_result(5e-7, FormatStyle::Arithmetic), "5.00e-7");
        assert_eq!(format_result(-1.234e-9, FormatStyle::Conversion), "-1.23e-9");
    }

    #[test]
    fn test_arithmetic_two_decimals() {
        assert_eq!(format_result(1.0 / 3.0, FormatStyle::Arithmetic), "0.33");
        assert_eq!(format_result(2.0 / 3.0, FormatStyle::Arithmetic), "0.67");
        assert_eq!(format_result(2.5, FormatStyle::Arithmetic), "2.5");
        assert_eq!(format_result(0.1 + 0.2, FormatStyle::Arithmetic), "0.3");
    }

    #[test]
    fn test_conversion_three_decimals() {
        assert_eq!(format_result(3.106855, FormatStyle::Conversion), "3.107");
        assert_eq!(format_result(96.5604, FormatStyle::Conversion), "96.56");
        assert_eq!(format_result(35.274, FormatStyle::Conversion), "35.274");
    }

    #[test]
    fn test_rounding_to_zero() {
        assert_eq!(format_result(0.001, FormatStyle::Arithmetic), "0");
        assert_eq!(format_result(-0.001, FormatStyle::Arithmetic), "0");
        assert_eq!(format_result(0.001, FormatStyle::Conversion), "0.001");
    }
}
