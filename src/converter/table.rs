//! The static conversion table.

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionCategory {
    Length,
    Weight,
    Temperature,
}

/// Categories in scan order.
pub const CATEGORIES: [ConversionCategory; 3] = [
    ConversionCategory::Length,
    ConversionCategory::Weight,
    ConversionCategory::Temperature,
];

impl ConversionCategory {
    pub fn name(self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::Weight => "weight",
            Self::Temperature => "temperature",
        }
    }

    /// Rules of this category in declared order.
    pub fn rules(self) -> &'static [ConversionRule] {
        match self {
            Self::Length => LENGTH_RULES,
            Self::Weight => WEIGHT_RULES,
            Self::Temperature => TEMPERATURE_RULES,
        }
    }
}

/// How a rule maps the source value.
#[derive(Clone, Copy, Debug)]
pub enum RuleKind {
    /// Linear multiplier.
    Factor(f64),
    /// Arbitrary mapping, with a human-readable label.
    Formula {
        apply: fn(f64) -> f64,
        label: &'static str,
    },
}

/// A directional conversion between two named units.
#[derive(Clone, Copy, Debug)]
pub struct ConversionRule {
    pub from: &'static str,
    pub to: &'static str,
    pub kind: RuleKind,
}

impl ConversionRule {
    const fn factor(from: &'static str, to: &'static str, factor: f64) -> Self {
        Self {
            from,
            to,
            kind: RuleKind::Factor(factor),
        }
    }

    const fn formula(
        from: &'static str,
        to: &'static str,
        apply: fn(f64) -> f64,
        label: &'static str,
    ) -> Self {
        Self {
            from,
            to,
            kind: RuleKind::Formula { apply, label },
        }
    }

    /// Check whether this rule converts `from` into `to`, ignoring case.
    pub fn matches(&self, from: &str, to: &str) -> bool {
        self.from.eq_ignore_ascii_case(from) && self.to.eq_ignore_ascii_case(to)
    }

    pub fn apply(&self, value: f64) -> f64 {
        match self.kind {
            RuleKind::Factor(factor) => value * factor,
            RuleKind::Formula { apply, .. } => apply(value),
        }
    }

    /// Short description of the mapping, e.g. `×0.621371`.
    pub fn describe(&self) -> String {
        match self.kind {
            RuleKind::Factor(factor) => format!("×{}", factor),
            RuleKind::Formula { label, .. } => label.to_string(),
        }
    }
}

const LENGTH_RULES: &[ConversionRule] = &[
    ConversionRule::factor("km", "miles", 0.621371),
    ConversionRule::factor("miles", "km", 1.60934),
    ConversionRule::factor("m", "ft", 3.28084),
    ConversionRule::factor("ft", "m", 0.3048),
    ConversionRule::factor("cm", "inch", 0.393701),
    ConversionRule::factor("inch", "cm", 2.54),
];

const WEIGHT_RULES: &[ConversionRule] = &[
    ConversionRule::factor("kg", "lbs", 2.20462),
    ConversionRule::factor("lbs", "kg", 0.453592),
    ConversionRule::factor("g", "oz", 0.035274),
    ConversionRule::factor("oz", "g", 28.3495),
];

const TEMPERATURE_RULES: &[ConversionRule] = &[
    ConversionRule::formula("c", "f", celsius_to_fahrenheit, "f = c×9/5+32"),
    ConversionRule::formula("f", "c", fahrenheit_to_celsius, "c = (f−32)×5/9"),
];

fn celsius_to_fahrenheit(c: f64) -> f64 {
    (c * 9.0 / 5.0) + 32.0
}

fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Find the first rule converting `from` into `to`.
///
/// Categories are scanned in [`CATEGORIES`] order and rules in declared
/// order; the first match wins.
pub fn find_rule(from: &str, to: &str) -> Option<(ConversionCategory, &'static ConversionRule)> {
    CATEGORIES.iter().find_map(|&category| {
        category
            .rules()
            .iter()
            .find(|rule| rule.matches(from, to))
            .map(|rule| (category, rule))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        let counts: Vec<usize> = CATEGORIES.iter().map(|c| c.rules().len()).collect();
        assert_eq!(counts, vec![6, 4, 2]);
    }

    #[test]
    fn test_find_rule_case_insensitive() {
        let (category, rule) = find_rule("KM", "Miles").unwrap();
        assert_eq!(category, ConversionCategory::Length);
        assert_eq!(rule.from, "km");
        assert_eq!(rule.to, "miles");
    }

    #[test]
    fn test_rules_are_directional() {
        let (_, forward) = find_rule("kg", "lbs").unwrap();
        let (_, backward) = find_rule("lbs", "kg").unwrap();
        assert!((forward.apply(1.0) - 2.20462).abs() < 1e-12);
        assert!((backward.apply(1.0) - 0.453592).abs() < 1e-12);
        assert!(find_rule("miles", "m").is_none());
        assert!(find_rule("f", "k").is_none());
    }

    #[test]
    fn test_temperature_formulas() {
        let (category, to_f) = find_rule("c", "f").unwrap();
        assert_eq!(category, ConversionCategory::Temperature);
        assert_eq!(to_f.apply(100.0), 212.0);
        assert_eq!(to_f.apply(-40.0), -40.0);

        let (_, to_c) = find_rule("f", "c").unwrap();
        assert_eq!(to_c.apply(32.0), 0.0);
    }

    #[test]
    fn test_describe() {
        let (_, rule) = find_rule("inch", "cm").unwrap();
        assert_eq!(rule.describe(), "×2.54");
        let (_, rule) = find_rule("c", "f").unwrap();
        assert_eq!(rule.describe(), "f = c×9/5+32");
    }
}
